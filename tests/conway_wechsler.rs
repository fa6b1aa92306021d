use zillion::{
    DecoderConfig, Numeral, ReadError, SpellError, name_period, number_to_text, read_period,
    text_to_number, text_to_number_with,
};

// =============================================================================
// Period names
// =============================================================================

#[test]
fn test_units_period_has_no_name() {
    assert_eq!(name_period(-1), "");
    assert_eq!(read_period("").unwrap(), -1);
}

#[test]
fn test_thousand() {
    assert_eq!(name_period(0), "thousand");
    assert_eq!(read_period("thousand").unwrap(), 0);
}

#[test]
fn test_quadrillion() {
    assert_eq!(name_period(4), "quadrillion");
}

#[test]
fn test_novemoctogintaseptingentillion() {
    // 789 = nove (9) + octoginta (80, marks M so nove -> novem) + septingenti (700)
    assert_eq!(name_period(789), "novemoctogintaseptingentillion");
    assert_eq!(read_period("novemoctogintaseptingentillion").unwrap(), 789);
}

#[test]
fn test_standard_names_from_the_literature() {
    let names = [
        (11, "undecillion"),
        (13, "tredecillion"),
        (16, "sedecillion"),
        (20, "vigintillion"),
        (23, "tresvigintillion"),
        (36, "sestrigintillion"),
        (99, "novenonagintillion"),
        (100, "centillion"),
        (101, "uncentillion"),
        (103, "trescentillion"),
        (106, "sexcentillion"),
        (200, "ducentillion"),
        (1000, "millinillion"),
        (1001, "millimillion"),
        (1_000_000, "millinillinillion"),
    ];
    for (z, name) in names {
        assert_eq!(name_period(z), name, "name of {z}");
        assert_eq!(read_period(name).unwrap(), z, "zillion of {name}");
    }
}

#[test]
fn test_read_period_error_carries_component_and_name() {
    assert_eq!(
        read_period("notarealprefixillion"),
        Err(ReadError::InvalidPeriodName {
            component: "notarealprefix".to_string(),
            name: "notarealprefixillion".to_string(),
        })
    );
}

// =============================================================================
// Spelling numbers
// =============================================================================

#[test]
fn test_spell_negative_integer() {
    assert_eq!(
        number_to_text(-123_456).unwrap(),
        "negative one hundred twenty-three thousand four hundred fifty-six"
    );
}

#[test]
fn test_spell_zero() {
    assert_eq!(number_to_text(0).unwrap(), "zero");
}

#[test]
fn test_spell_negative_exponent_uses_plural_ordinal() {
    let words = number_to_text("1.2e-9").unwrap();
    assert!(words.ends_with("ths"), "{words}");
    assert_eq!(words, "twelve ten-billionths");
}

#[test]
fn test_spell_accepts_all_input_kinds() {
    let expected = "one thousand two hundred thirty-four and five tenths";
    assert_eq!(number_to_text("1234.5").unwrap(), expected);
    assert_eq!(number_to_text(String::from("1234.5")).unwrap(), expected);
    assert_eq!(number_to_text(1234.5f64).unwrap(), expected);
    assert_eq!(number_to_text(1234.5f32).unwrap(), expected);
    assert_eq!(
        number_to_text(1234u16).unwrap(),
        "one thousand two hundred thirty-four"
    );
}

#[test]
fn test_spell_malformed_numeric_strings() {
    for input in ["12.34.56", "abc"] {
        assert_eq!(
            number_to_text(input),
            Err(SpellError::InvalidNumericString(input.to_string()))
        );
    }
}

#[test]
fn test_spell_astronomical_exponent() {
    // 10^(3 * (1_000_000 + 1)) is one millinillinillion; no zeros are written out
    assert_eq!(number_to_text("1e3000003").unwrap(), "one millinillinillion");
    assert_eq!(
        number_to_text("-2.5e3000004").unwrap(),
        "negative twenty-five millinillinillion"
    );
}

// =============================================================================
// Reading numbers
// =============================================================================

#[test]
fn test_read_integer() {
    let words = "negative one hundred twenty-three thousand four hundred fifty-six";
    assert_eq!(text_to_number(words).unwrap(), "-1.23456e5");
}

#[test]
fn test_read_spelled_integers_numerically_equal() {
    for n in [1i64, 7, 42, 1000, 1_000_001, 999_999_999, i64::MAX, i64::MIN] {
        let words = number_to_text(n).unwrap();
        let read: Numeral = text_to_number(&words).unwrap().parse().unwrap();
        assert_eq!(read, Numeral::from(n), "{words}");
    }
}

#[test]
fn test_read_typo_in_period_prefix() {
    assert!(matches!(
        text_to_number("three quadrilion quintxillion"),
        Err(ReadError::InvalidPeriodName { .. })
    ));
    assert_eq!(
        text_to_number("one hundred sextxillion"),
        Err(ReadError::InvalidPeriodName {
            component: "sextx".to_string(),
            name: "sextxillion".to_string(),
        })
    );
}

#[test]
fn test_read_pseudo_sum() {
    let far = name_period(5000);
    let text = format!("two {far} and three hundredths");
    assert_eq!(text_to_number(&text).unwrap(), "2e15003 + 3e-2");

    let config = DecoderConfig::default().with_pseudo_sum_gap(20_000);
    let merged = text_to_number_with(&text, &config).unwrap();
    assert!(merged.starts_with("2.000"), "{}", &merged[..10]);
    assert!(merged.ends_with("3e15003"));
    assert!(!merged.contains(' '));
}

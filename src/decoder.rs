//! Reading English number words back into scientific notation
//!
//! A numeral is `[negative|positive] [<whole>] [and] [<numerator> <denominator>th(s)]`.
//! Both the whole phrase and the numerator are tokenized into `(value, zillion)`
//! periods: value words followed by a period name ("thousand", "...illion"), with
//! trailing value words forming the units period. Every period becomes a value at
//! a decimal exponent; fractional periods are shifted down by the magnitude of the
//! denominator. Values are then summed into base-1000 slots with carrying, and the
//! slots are emitted as one numeral, or as several terms (a pseudo-sum) when two
//! nonzero slots are too far apart to write out the zeros between them.

use crate::config::DecoderConfig;
use crate::error::{ReadError, ReadResult};
use crate::lexicon::natural_value;
use crate::numeral::Numeral;
use crate::period::read_period;
use log::{debug, trace};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(negative|positive) )?([a-z]+(?:[ -][a-z]+)*)$")
        .expect("numeral grammar is a valid regex")
});

/// A period value placed at the decimal exponent of its last digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placed {
    value: u16,
    exponent: i128,
}

/// Read English number words into normalized scientific notation.
///
/// Uses [`DecoderConfig::default`]; see [`text_to_number_with`].
///
/// ```rust
/// use zillion::text_to_number;
///
/// assert_eq!(
///     text_to_number("one hundred twenty-three thousand four hundred fifty-six").unwrap(),
///     "1.23456e5"
/// );
/// assert_eq!(text_to_number("negative one and twelve hundredths").unwrap(), "-1.12");
/// assert_eq!(text_to_number("twelve ten-billionths").unwrap(), "1.2e-9");
/// ```
///
/// # Errors
///
/// See [`text_to_number_with`].
pub fn text_to_number(text: &str) -> ReadResult<String> {
    text_to_number_with(text, &DecoderConfig::default())
}

/// Read English number words into normalized scientific notation.
///
/// The result is a single term such as `"-1.2e-9"`, `"0"` for zero, or a pseudo-sum
/// such as `"1e12003 + 1e-1"` when two nonzero periods are more than
/// [`DecoderConfig::pseudo_sum_gap`] digits apart. Terms of a negative numeral are
/// joined with `" - "`.
///
/// # Errors
///
/// - [`ReadError::InvalidNumeralString`] if the text does not follow the numeral grammar
/// - [`ReadError::InvalidPeriodValue`] if a period's value words are not a number
///   from one to nine hundred ninety-nine, or a denominator is not a power of ten
/// - [`ReadError::InvalidPeriodName`] if a period name cannot be read
/// - [`ReadError::Overflow`] if the magnitude does not fit in an `i64` exponent
pub fn text_to_number_with(text: &str, config: &DecoderConfig) -> ReadResult<String> {
    let terms = text_to_numerals(text, config)?;

    let Some((first, rest)) = terms.split_first() else {
        return Ok("0".to_string());
    };

    let joiner = if first.is_negative() { " - " } else { " + " };
    let mut out = first.to_string();
    for term in rest {
        out.push_str(joiner);
        out.push_str(&term.abs().to_string());
    }
    Ok(out)
}

/// Read English number words into the terms of a (pseudo-)sum.
///
/// Returns one [`Numeral`] per term, most significant first, each carrying the sign
/// of the whole numeral. Zero reads as no terms at all.
///
/// # Errors
///
/// Same as [`text_to_number_with`].
pub fn text_to_numerals(text: &str, config: &DecoderConfig) -> ReadResult<Vec<Numeral>> {
    let invalid = || ReadError::InvalidNumeralString(text.to_string());
    let overflow = || ReadError::Overflow(text.to_string());

    let normalized = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let caps = NUMERAL.captures(&normalized).ok_or_else(invalid)?;

    let negative = caps.get(1).is_some_and(|m| m.as_str() == "negative");
    let body = caps.get(2).map_or("", |m| m.as_str());
    // Period names stand alone: "one-million" is not a numeral
    if body
        .split(' ')
        .any(|word| word.contains('-') && is_period_name(word))
    {
        return Err(invalid());
    }
    let (whole, fraction) = split_body(body).ok_or_else(invalid)?;

    let mut placed = Vec::new();
    if let Some(whole) = whole {
        for (value, zillion) in tokenize(whole)? {
            placed.push(Placed {
                value,
                exponent: period_exponent(zillion),
            });
        }
    }
    if let Some((numerator, denominator)) = fraction {
        let magnitude = denominator_magnitude(denominator)?;
        for (value, zillion) in tokenize(numerator)? {
            placed.push(Placed {
                value,
                exponent: period_exponent(zillion) - magnitude,
            });
        }
    }

    let slots = merge(&placed);
    emit_terms(&slots, negative, config).ok_or_else(overflow)
}

/// Split the numeral body into an optional whole phrase and an optional
/// `(numerator, denominator)` fraction.
#[allow(clippy::type_complexity)]
fn split_body(body: &str) -> Option<(Option<&str>, Option<(&str, &str)>)> {
    let mut parts = body.split(" and ");
    let first = parts.next()?;
    let second = parts.next();
    if parts.next().is_some() {
        return None;
    }

    match second {
        Some(fraction) => Some((Some(first), Some(split_fraction(fraction)?))),
        None if is_fraction(first) => Some((None, Some(split_fraction(first)?))),
        None => Some((Some(first), None)),
    }
}

fn is_fraction(phrase: &str) -> bool {
    let last = phrase.rsplit(' ').next().unwrap_or(phrase);
    last.ends_with("th") || last.ends_with("ths")
}

fn split_fraction(phrase: &str) -> Option<(&str, &str)> {
    if !is_fraction(phrase) {
        return None;
    }
    phrase.rsplit_once(' ')
}

fn is_period_name(word: &str) -> bool {
    word == "thousand" || word.ends_with("illion")
}

/// Tokenize a phrase into `(value, zillion)` periods, most significant first.
fn tokenize(phrase: &str) -> ReadResult<Vec<(u16, i64)>> {
    let mut periods = Vec::new();
    let mut value_words = Vec::new();

    for word in phrase.split(' ') {
        if is_period_name(word) {
            let zillion = read_period(word)?;
            periods.push((period_value(&value_words, word)?, zillion));
            value_words.clear();
        } else {
            value_words.push(word);
        }
    }
    if !value_words.is_empty() {
        periods.push((period_value(&value_words, "")?, -1));
    }

    trace!("tokenized {phrase:?} into {periods:?}");
    Ok(periods)
}

/// Look up the value words of one period; literal "zero" words are placeholders.
fn period_value(words: &[&str], period: &str) -> ReadResult<u16> {
    let invalid = || ReadError::InvalidPeriodValue {
        value: words.join(" "),
        period: period.to_string(),
    };

    if words.is_empty() {
        return Err(invalid());
    }

    let text = words
        .iter()
        .copied()
        .filter(|word| *word != "zero")
        .collect::<Vec<_>>()
        .join(" ");
    natural_value(&text).ok_or_else(invalid)
}

/// Number of decimal digits in a power-of-ten denominator such as "hundredths"
/// (2) or "ten-billionths" (10).
fn denominator_magnitude(word: &str) -> ReadResult<i128> {
    let stem = word
        .strip_suffix("ths")
        .or_else(|| word.strip_suffix("th"))
        .unwrap_or(word);

    let (value, period) = match stem.rsplit_once('-') {
        Some((value, last)) if is_period_name(last) => (value, last),
        None if is_period_name(stem) => ("", stem),
        _ => (stem, ""),
    };

    let zillion = read_period(period)?;
    let zeros = match value {
        "" if !period.is_empty() => 0,
        "one" => 0,
        "ten" => 1,
        "hundred" | "one-hundred" => 2,
        _ => {
            return Err(ReadError::InvalidPeriodValue {
                value: value.replace('-', " "),
                period: period.to_string(),
            });
        }
    };

    Ok(period_exponent(zillion) + zeros)
}

/// Decimal exponent of the last digit of a period
fn period_exponent(zillion: i64) -> i128 {
    3 * (i128::from(zillion) + 1)
}

/// Sum placed values into base-1000 slots keyed by power of 1000, with carrying.
fn merge(placed: &[Placed]) -> BTreeMap<i128, u64> {
    let mut slots: BTreeMap<i128, u64> = BTreeMap::new();
    for p in placed {
        let key = p.exponent.div_euclid(3);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scale = 10u64.pow(p.exponent.rem_euclid(3) as u32);
        *slots.entry(key).or_insert(0) += u64::from(p.value) * scale;
    }

    // Least significant first; a slot created by a carry is visited in turn
    let Some(mut cursor) = slots.keys().next().copied() else {
        return slots;
    };
    loop {
        let Some((key, value)) = slots.range(cursor..).next().map(|(&k, &v)| (k, v)) else {
            break;
        };
        if value >= 1000 {
            debug!("carrying {} from period {key} into {}", value / 1000, key + 1);
            *slots.entry(key + 1).or_insert(0) += value / 1000;
            slots.insert(key, value % 1000);
        }
        cursor = key + 1;
    }

    slots
}

/// Concatenate nonzero slots, most significant first, into one or more terms.
///
/// Returns `None` if a term's exponent does not fit in an `i64`.
fn emit_terms(
    slots: &BTreeMap<i128, u64>,
    negative: bool,
    config: &DecoderConfig,
) -> Option<Vec<Numeral>> {
    let gap = i128::from(config.pseudo_sum_gap);
    let mut terms = Vec::new();
    let mut digits = String::new();
    let mut previous: Option<i128> = None;

    for (&key, &value) in slots.iter().rev() {
        if value == 0 {
            continue;
        }

        match previous {
            Some(prev) if (prev - key) * 3 > gap => {
                debug!(
                    "starting a new term: periods {prev} and {key} are more than {gap} digits apart"
                );
                terms.push(finish_term(negative, &digits, prev)?);
                digits = value.to_string();
            }
            Some(prev) => {
                for _ in key + 1..prev {
                    digits.push_str("000");
                }
                digits.push_str(&format!("{value:03}"));
            }
            None => digits.push_str(&value.to_string()),
        }
        previous = Some(key);
    }

    if let Some(last) = previous {
        terms.push(finish_term(negative, &digits, last)?);
    }
    Some(terms)
}

/// Build one term; trailing zeros move into the exponent before it is narrowed.
fn finish_term(negative: bool, digits: &str, last_key: i128) -> Option<Numeral> {
    let significant = digits.trim_end_matches('0');
    let zeros = (digits.len() - significant.len()) as i128;
    let exponent = i64::try_from(last_key * 3 + zeros).ok()?;
    Numeral::from_digits(negative, significant, exponent)
}

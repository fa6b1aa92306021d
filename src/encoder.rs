//! Spelling numbers as English short-scale words
//!
//! The integer part is cut into 3-digit periods aligned on the decimal point;
//! each nonzero period is spelled with the natural-word table and followed by
//! its period name. A fractional part becomes `<numerator> <denominator>ths`,
//! where the denominator is the spelled power of ten turned into an ordinal
//! ("one hundred" → "hundredths", "ten billion" → "ten-billionths").

use crate::error::SpellResult;
use crate::lexicon::natural_word;
use crate::numeral::{IntoNumeral, Numeral};
use crate::period::name_period;
use log::trace;

/// Spell a number in English short-scale words.
///
/// Accepts any primitive integer, `f32`/`f64`, a numeric string (float-literal
/// syntax: `"-12"`, `".5"`, `"1.2e-9"`), or a [`Numeral`].
///
/// ```rust
/// use zillion::number_to_text;
///
/// assert_eq!(
///     number_to_text(-123456).unwrap(),
///     "negative one hundred twenty-three thousand four hundred fifty-six"
/// );
/// assert_eq!(number_to_text("1.12").unwrap(), "one and twelve hundredths");
/// assert_eq!(number_to_text(0).unwrap(), "zero");
/// ```
///
/// # Errors
///
/// Returns [`SpellError::InvalidNumericString`](crate::SpellError::InvalidNumericString)
/// if a string does not follow the numeric grammar or a float is not finite, and
/// [`SpellError::ExponentOverflow`](crate::SpellError::ExponentOverflow) if the
/// exponent does not fit in an `i64`.
pub fn number_to_text<N: IntoNumeral>(number: N) -> SpellResult<String> {
    let numeral = number.into_numeral()?;
    trace!(
        "spelling numeral: negative={}, digits={}, exponent={}",
        numeral.is_negative(),
        numeral.digits(),
        numeral.exponent()
    );
    Ok(spell_numeral(&numeral))
}

pub(crate) fn spell_numeral(numeral: &Numeral) -> String {
    if numeral.is_zero() {
        return "zero".to_string();
    }

    let digits = numeral.digits();
    let exponent = numeral.exponent();
    let mut parts = Vec::with_capacity(2);

    if exponent >= 0 {
        parts.push(spell_integer(digits, exponent.unsigned_abs()));
    } else {
        let fraction_len = exponent.unsigned_abs();
        let point = usize::try_from(fraction_len).map_or(0, |k| digits.len().saturating_sub(k));
        let (whole, fraction) = digits.split_at(point);

        if !whole.is_empty() {
            parts.push(spell_integer(whole, 0));
        }
        // The last digit of a normalized numeral is nonzero, so neither is the fraction
        parts.push(spell_fraction(fraction.trim_start_matches('0'), fraction_len));
    }

    let text = parts.join(" and ");
    if numeral.is_negative() {
        format!("negative {text}")
    } else {
        text
    }
}

/// Spell the integer `digits × 10^shift`.
///
/// Only the given digits plus at most two alignment zeros are materialized; the
/// remaining zeros of the shift are accounted for in the period numbering.
pub(crate) fn spell_integer(digits: &str, shift: u64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let pad_right = (shift % 3) as usize;
    // Period index of the last group (units = 0)
    let base_period = shift / 3;
    let pad_left = (3 - (digits.len() + pad_right) % 3) % 3;

    let mut padded = String::with_capacity(pad_left + digits.len() + pad_right);
    padded.extend(std::iter::repeat_n('0', pad_left));
    padded.push_str(digits);
    padded.extend(std::iter::repeat_n('0', pad_right));

    let groups = padded.len() / 3;
    let mut phrases = Vec::with_capacity(groups);

    for (i, chunk) in padded.as_bytes().chunks(3).enumerate() {
        let value = chunk
            .iter()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
        if value == 0 {
            continue;
        }

        let period = base_period + (groups - 1 - i) as u64;
        // A normalized numeral's periods stay below i64::MAX / 3
        #[allow(clippy::cast_possible_wrap)]
        let name = name_period(period as i64 - 1);

        let word = natural_word(value);
        if name.is_empty() {
            phrases.push(word.to_string());
        } else {
            phrases.push(format!("{word} {name}"));
        }
    }

    phrases.join(" ")
}

fn spell_fraction(numerator: &str, denominator_zeros: u64) -> String {
    let count = spell_integer(numerator, 0);
    let denominator = spell_integer("1", denominator_zeros);
    let ordinal = denominator
        .strip_prefix("one ")
        .unwrap_or(&denominator)
        .replace(' ', "-");
    let suffix = if numerator == "1" { "th" } else { "ths" };

    format!("{count} {ordinal}{suffix}")
}

use crate::error::{SpellError, SpellResult};
use regex::Regex;
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;
use std::sync::LazyLock;

/// Float-literal grammar: optional sign, digits with an optional `.` fraction
/// (either side may be empty but not both), optional `e`/`E` exponent
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])?([0-9]*)(?:\.([0-9]*))?(?:[eE]([+-]?[0-9]+))?$")
        .expect("numeric grammar is a valid regex")
});

/// An arbitrary-precision decimal number in normalized form
///
/// The value is `±digits × 10^exponent`, where `digits` carries no leading or
/// trailing zeros. Zero has empty digits and is never negative, so two numerals
/// are equal exactly when they denote the same number.
///
/// `Display` renders normalized scientific notation: `1.23456e5`, `1.2e-9`, `42`
/// is `4.2e1`, `7` is `7`.
///
/// ```rust
/// use zillion::Numeral;
///
/// let n: Numeral = "0.0012".parse().unwrap();
/// assert_eq!(n.digits(), "12");
/// assert_eq!(n.exponent(), -4);
/// assert_eq!(n.to_string(), "1.2e-3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Numeral {
    negative: bool,
    digits: String,
    exponent: i64,
}

impl Numeral {
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            negative: false,
            digits: String::new(),
            exponent: 0,
        }
    }

    /// Build a numeral from a raw digit run and the power of ten of its last digit.
    ///
    /// Leading and trailing zeros are normalized away. Returns `None` if the
    /// normalized exponent (or the scientific exponent of the first digit) does
    /// not fit in an `i64`, or if `digits` holds anything but ASCII digits.
    #[must_use]
    pub fn from_digits(negative: bool, digits: &str, exponent: i64) -> Option<Self> {
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let significant = digits.trim_start_matches('0');
        let trimmed = significant.trim_end_matches('0');
        if trimmed.is_empty() {
            return Some(Self::zero());
        }

        let shift = i64::try_from(significant.len() - trimmed.len()).ok()?;
        let exponent = exponent.checked_add(shift)?;
        let width = i64::try_from(trimmed.len()).ok()?;
        exponent.checked_add(width - 1)?;

        Some(Self {
            negative,
            digits: trimmed.to_string(),
            exponent,
        })
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// The same magnitude with a positive sign
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }

    /// Significant digits, without leading or trailing zeros (empty for zero)
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Power of ten of the last significant digit
    #[must_use]
    pub const fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Power of ten of the first significant digit (0 for zero)
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn scientific_exponent(&self) -> i64 {
        if self.is_zero() {
            return 0;
        }
        // Bounded at construction
        self.exponent + (self.digits.len() as i64 - 1)
    }

    fn parse(s: &str) -> SpellResult<Self> {
        let invalid = || SpellError::InvalidNumericString(s.to_string());
        let overflow = || SpellError::ExponentOverflow(s.to_string());

        let caps = NUMERIC.captures(s.trim()).ok_or_else(invalid)?;

        let whole = caps.get(2).map_or("", |m| m.as_str());
        let fraction = caps.get(3).map_or("", |m| m.as_str());
        // Rejects "", ".", "+", "-e5"
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let negative = caps.get(1).is_some_and(|m| m.as_str() == "-");
        let exponent: i64 = match caps.get(4) {
            Some(m) => m.as_str().parse().map_err(|_| overflow())?,
            None => 0,
        };

        // The exponent applies to the decimal point; shift it onto the last digit
        let fraction_len = i64::try_from(fraction.len()).map_err(|_| overflow())?;
        let exponent = exponent.checked_sub(fraction_len).ok_or_else(overflow)?;

        let mut digits = String::with_capacity(whole.len() + fraction.len());
        digits.push_str(whole);
        digits.push_str(fraction);

        Self::from_digits(negative, &digits, exponent).ok_or_else(overflow)
    }

    fn from_float<T: fmt::LowerExp>(value: T, finite: bool) -> SpellResult<Self> {
        let mut buf = StackBuf::new();
        // LowerExp gives the shortest roundtrip representation ("1.2e-9")
        if !finite || write!(buf, "{value:e}").is_err() {
            return Err(SpellError::InvalidNumericString(format!("{value:e}")));
        }
        Self::parse(buf.as_str())
    }
}

impl FromStr for Numeral {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.digits.split_at_checked(1) else {
            return f.write_str("0");
        };

        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(first)?;
        if !rest.is_empty() {
            write!(f, ".{rest}")?;
        }

        let exponent = self.scientific_exponent();
        if exponent != 0 {
            write!(f, "e{exponent}")?;
        }
        Ok(())
    }
}

/// Conversion into a [`Numeral`] for everything that can be spelled
///
/// Implemented for every primitive integer type (infallible), `f32`/`f64`
/// (finite values only), and numeric strings.
pub trait IntoNumeral {
    /// # Errors
    ///
    /// Returns [`SpellError::InvalidNumericString`] for strings outside the numeric
    /// grammar and for NaN or infinite floats, and [`SpellError::ExponentOverflow`]
    /// for exponents that do not fit in an `i64`.
    fn into_numeral(self) -> SpellResult<Numeral>;
}

impl IntoNumeral for Numeral {
    fn into_numeral(self) -> SpellResult<Numeral> {
        Ok(self)
    }
}

impl IntoNumeral for &Numeral {
    fn into_numeral(self) -> SpellResult<Numeral> {
        Ok(self.clone())
    }
}

impl IntoNumeral for &str {
    fn into_numeral(self) -> SpellResult<Numeral> {
        Numeral::parse(self)
    }
}

impl IntoNumeral for String {
    fn into_numeral(self) -> SpellResult<Numeral> {
        Numeral::parse(&self)
    }
}

impl IntoNumeral for &String {
    fn into_numeral(self) -> SpellResult<Numeral> {
        Numeral::parse(self)
    }
}

impl IntoNumeral for f64 {
    fn into_numeral(self) -> SpellResult<Numeral> {
        Numeral::from_float(self, self.is_finite())
    }
}

impl IntoNumeral for f32 {
    fn into_numeral(self) -> SpellResult<Numeral> {
        Numeral::from_float(self, self.is_finite())
    }
}

impl TryFrom<f64> for Numeral {
    type Error = SpellError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        value.into_numeral()
    }
}

impl TryFrom<f32> for Numeral {
    type Error = SpellError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        value.into_numeral()
    }
}

fn from_unsigned_with_sign(mut value: u128, negative: bool) -> Numeral {
    if value == 0 {
        return Numeral::zero();
    }

    let mut exponent = 0;
    while value % 10 == 0 {
        value /= 10;
        exponent += 1;
    }

    Numeral {
        negative,
        digits: value.to_string(),
        exponent,
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Numeral {
            #[allow(clippy::cast_lossless)]
            fn from(value: $t) -> Self {
                from_unsigned_with_sign(value as u128, false)
            }
        }

        impl IntoNumeral for $t {
            fn into_numeral(self) -> SpellResult<Numeral> {
                Ok(Numeral::from(self))
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Numeral {
            #[allow(clippy::cast_lossless)]
            fn from(value: $t) -> Self {
                from_unsigned_with_sign(value.unsigned_abs() as u128, value < 0)
            }
        }

        impl IntoNumeral for $t {
            fn into_numeral(self) -> SpellResult<Numeral> {
                Ok(Numeral::from(self))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

/// Fixed-capacity stack buffer that implements `fmt::Write`.
///
/// Used to format a float without heap allocation. 32 bytes covers any `f64` in
/// `{:e}` form (sign, 17 significant digits, point, `e`, signed 3-digit exponent).
struct StackBuf {
    buf: [u8; 32],
    len: usize,
}

impl StackBuf {
    const fn new() -> Self {
        Self {
            buf: [0; 32],
            len: 0,
        }
    }

    fn as_str(&self) -> &str {
        // Safety: only whole `&str` values are ever copied in by `write_str`
        unsafe { std::str::from_utf8_unchecked(&self.buf[..self.len]) }
    }
}

impl fmt::Write for StackBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let new_len = self.len + bytes.len();
        if new_len > self.buf.len() {
            return Err(fmt::Error);
        }
        self.buf[self.len..new_len].copy_from_slice(bytes);
        self.len = new_len;
        Ok(())
    }
}

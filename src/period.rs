//! Period names: zillion value ⇄ Conway-Wechsler name
//!
//! A zillion value `z` names the period worth `10^(3 * (z + 1))`: 0 is "thousand",
//! 1 is "million", 4 is "quadrillion". The units period (`z == -1`) has no name.
//! Beyond "thousand", a name is built from the base-1000 digits of `z`, each mapped
//! to a Latin prefix, joined with `illi` and closed with `illion`
//! (1000 → `m` `illi` `n` `illion` = "millinillion").

use crate::error::{ReadError, ReadResult};
use crate::lexicon::{period_prefix, prefix_value};

const THOUSAND: &str = "thousand";
const INFIX: &str = "illi";
const SUFFIX: &str = "illion";

/// Name the period with zillion value `zillion`.
///
/// Negative values (the units period) yield an empty name.
///
/// ```rust
/// use zillion::name_period;
///
/// assert_eq!(name_period(-1), "");
/// assert_eq!(name_period(0), "thousand");
/// assert_eq!(name_period(4), "quadrillion");
/// assert_eq!(name_period(1000), "millinillion");
/// ```
#[must_use]
pub fn name_period(zillion: i64) -> String {
    match zillion {
        i64::MIN..=-1 => String::new(),
        0 => THOUSAND.to_string(),
        _ => {
            let digits = zillion.to_string();
            let lead = match digits.len() % 3 {
                0 => 3,
                r => r,
            };

            let mut name = String::with_capacity(digits.len() * 8 + SUFFIX.len());
            let mut start = 0;
            let mut end = lead;
            while start < digits.len() {
                if start > 0 {
                    name.push_str(INFIX);
                }
                name.push_str(period_prefix(group_value(&digits[start..end])));
                start = end;
                end += 3;
            }
            name.push_str(SUFFIX);
            name
        }
    }
}

/// Read a period name back into its zillion value.
///
/// The empty name is the units period (`-1`).
///
/// # Errors
///
/// Returns [`ReadError::InvalidPeriodName`] when the name does not end in `illion`,
/// when one of its `illi`-separated components is not a known prefix, or when it
/// starts with the empty-group prefix `n`. Returns [`ReadError::Overflow`] when
/// the zillion value does not fit in an `i64`.
pub fn read_period(name: &str) -> ReadResult<i64> {
    match name {
        "" => return Ok(-1),
        THOUSAND => return Ok(0),
        _ => {}
    }

    let invalid = |component: &str| ReadError::InvalidPeriodName {
        component: component.to_string(),
        name: name.to_string(),
    };

    let stem = name.strip_suffix(SUFFIX).ok_or_else(|| invalid(name))?;

    let mut numeral = String::with_capacity(stem.len());
    for (i, component) in stem.split(INFIX).enumerate() {
        match prefix_value(component) {
            Some(0) if i == 0 => return Err(invalid(component)),
            Some(value) => numeral.push_str(&format!("{value:03}")),
            None => return Err(invalid(component)),
        }
    }

    numeral
        .parse()
        .map_err(|_| ReadError::Overflow(name.to_string()))
}

fn group_value(group: &str) -> u16 {
    group
        .bytes()
        .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
}

//! # zillion
//!
//! English short-scale names for numbers of any size, using the **Conway-Wechsler**
//! system for period names beyond the familiar "million", "billion", "trillion".
//!
//! The crate works in both directions:
//!
//! - **Naming periods**: a zillion value `z` names the period worth `10^(3(z+1))`
//!   ([`name_period`] / [`read_period`]): 0 is "thousand", 4 is "quadrillion",
//!   789 is "novemoctogintaseptingentillion", 1000 is "millinillion"
//! - **Spelling numbers**: integers, floats and numeric strings of arbitrary precision
//!   become words, with fractions as ordinal denominators ([`number_to_text`])
//! - **Reading numbers**: words become normalized scientific notation
//!   ([`text_to_number`]), or a pseudo-sum of terms when two parts of the number
//!   are too far apart in magnitude to write out the zeros between them
//!
//! ## Examples
//!
//! ```rust
//! use zillion::{name_period, number_to_text, read_period, text_to_number};
//!
//! assert_eq!(name_period(4), "quadrillion");
//! assert_eq!(read_period("quadrillion").unwrap(), 4);
//!
//! let words = number_to_text("-1234.5").unwrap();
//! assert_eq!(words, "negative one thousand two hundred thirty-four and five tenths");
//!
//! assert_eq!(text_to_number(&words).unwrap(), "-1.2345e3");
//! assert_eq!(number_to_text("1.2e-9").unwrap(), "twelve ten-billionths");
//! ```
//!
//! ## Number model
//!
//! Numbers are held as a [`Numeral`]: a sign, a run of significant digits and the power
//! of ten of the last digit. Nothing is ever widened to a machine float, and huge
//! exponents (`"1e3003"` is "one millinillion") are never expanded into their zeros.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: `trace!` for
//! parsed numerals and tokenized periods, `debug!` for carries and pseudo-sum splits.

pub(crate) mod config;
pub(crate) mod decoder;
pub(crate) mod encoder;
pub(crate) mod error;
pub(crate) mod lexicon;
pub(crate) mod numeral;
pub(crate) mod period;

// Re-export main types and functions
pub use config::{DEFAULT_PSEUDO_SUM_GAP, DecoderConfig};
pub use decoder::{text_to_number, text_to_number_with, text_to_numerals};
pub use encoder::number_to_text;
pub use error::{ReadError, ReadResult, SpellError, SpellResult};
pub use numeral::{IntoNumeral, Numeral};
pub use period::{name_period, read_period};

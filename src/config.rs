/// Digit gap above which [`text_to_number`](crate::text_to_number) stops merging
/// periods into one numeral and starts a new term of a pseudo-sum
pub const DEFAULT_PSEUDO_SUM_GAP: u64 = 10_000;

/// Settings for reading words back into numbers
///
/// ```rust
/// use zillion::{DecoderConfig, text_to_number_with};
///
/// let config = DecoderConfig::default().with_pseudo_sum_gap(6);
/// assert_eq!(
///     text_to_number_with("one billion and one tenth", &config).unwrap(),
///     "1e9 + 1e-1"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecoderConfig {
    /// Largest number of decimal digits allowed between two consecutive nonzero
    /// periods of the same term
    pub pseudo_sum_gap: u64,
}

impl DecoderConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pseudo_sum_gap: DEFAULT_PSEUDO_SUM_GAP,
        }
    }

    #[must_use]
    pub const fn with_pseudo_sum_gap(mut self, gap: u64) -> Self {
        self.pseudo_sum_gap = gap;
        self
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

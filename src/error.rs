use thiserror::Error;

/// Errors that can occur while spelling a number as words
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpellError {
    #[error("Invalid numeric string: {0:?}")]
    InvalidNumericString(String),

    #[error("Exponent out of range: {0:?}")]
    ExponentOverflow(String),
}

/// Errors that can occur while reading words (or a period name) back into a number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("Invalid numeral string: {0:?}")]
    InvalidNumeralString(String),

    #[error("Invalid period value {value:?} in period {period:?}")]
    InvalidPeriodValue { value: String, period: String },

    #[error("Invalid period name: unknown component {component:?} in {name:?}")]
    InvalidPeriodName { component: String, name: String },

    #[error("Magnitude out of range: {0:?}")]
    Overflow(String),
}

/// Result type for spelling operations
pub type SpellResult<T> = Result<T, SpellError>;

/// Result type for reading operations
pub type ReadResult<T> = Result<T, ReadError>;

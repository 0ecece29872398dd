#[derive(thiserror::Error, Debug)]
pub enum FfringError {
    /// Error when a literal cannot be parsed in the ring's radix convention.
    #[error("ParseError: {0}")]
    Parse(String),
    #[error("DivisionByZero: {0}")]
    DivisionByZero(String),
    /// Error when trying to find a multiplicative inverse that doesn't exist (gcd != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when constructing a ring with an invalid modulus (n <= 0, or zero polynomial).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("IndexOutOfBounds: index {index} out of bounds 0..{limit}")]
    IndexOutOfBounds { index: usize, limit: usize },
    #[error("InvalidDimension: {0}")]
    InvalidDimension(String),

    #[error("0**0 undefined")]
    ZeroToZero,
    #[error("NegativeExponent: {0}")]
    NegativeExponent(String),
    #[error("ExponentOutOfRange: {0}")]
    ExponentOutOfRange(String),
    #[error("ZeroDivisor: {0}")]
    ZeroDivisor(String),
    #[error("UnsupportedOperation: {0}")]
    UnsupportedOperation(String),
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),
    #[error("Internal error: Overflow during calculation")]
    CalculationOverflow,
}

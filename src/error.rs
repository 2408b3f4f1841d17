use thiserror::Error;

/// Everything that can go wrong while building or combining numbers
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The input was not an optionally negative run of decimal digits
    #[error("invalid number {input:?}: {reason}")]
    InvalidFormat {
        input: String,
        reason: &'static str
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("denominator is zero")]
    ZeroDenominator,
    /// Only fixed-width integers can overflow, BigInt never does
    #[error("integer overflow")]
    Overflow
}
impl Error {
    pub(crate) fn invalid(input: &str, reason: &'static str) -> Self {
        Error::InvalidFormat {
            input: input.to_owned(),
            reason
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

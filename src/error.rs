use thiserror::Error;

/// Error type for Shamir's Secret Sharing operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShamirError {
    /// Threshold is zero, exceeds the share count, or the share count does not
    /// fit in the field's nonzero elements
    #[error("Invalid parameters: threshold {threshold}, total shares {total_shares}")]
    InvalidParameters {
        threshold: usize,
        total_shares: usize,
    },

    /// Insufficient shares for reconstruction
    #[error("Need at least {needed} shares, got {got}")]
    InsufficientShares { needed: usize, got: usize },

    /// Two shares carry the same x-coordinate
    #[error("Duplicate share point x = {0}")]
    DuplicatePoint(u64),

    /// A share was evaluated at x = 0, which is the secret itself
    #[error("Share point x must be nonzero")]
    ZeroPoint,

    /// A share coordinate is not a reduced field element
    #[error("Value {value} is outside the field of modulus {modulus}")]
    OutOfField { value: u64, modulus: u64 },

    /// Zero has no multiplicative inverse
    #[error("Zero has no multiplicative inverse")]
    ZeroInverse,

    /// A polynomial needs at least the constant term
    #[error("Polynomial has no coefficients")]
    EmptyPolynomial,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Random source error: {0}")]
    RandomSource(String),
}

pub type Result<T> = std::result::Result<T, ShamirError>;

//! Shamir's Secret Sharing over a prime field
//!
//! A secret field element is hidden as the constant term of a random
//! polynomial of degree `threshold - 1`. Each share is one point on that
//! polynomial, and any `threshold` shares recover the secret by Lagrange
//! interpolation at zero. Fewer shares reveal nothing about it.
//!
//! The prime modulus is configuration, not a global: [`PRIME_64`] is the
//! default and [`PRIME_32`] or any other prime can be chosen per scheme.
//!
//! # Quick Start
//!
//! ```
//! use prime_shamir::ShamirShare;
//!
//! // Create a scheme with 5 shares and threshold 3
//! let mut scheme = ShamirShare::new(5, 3).unwrap();
//!
//! // Split a secret
//! let shares = scheme.split(0xC0FFEE).unwrap();
//!
//! // Reconstruct from any 3 shares
//! let secret = scheme.reconstruct(&shares[2..]).unwrap();
//! assert_eq!(secret, 0xC0FFEE);
//! ```

mod config;
mod error;
mod finite_field;
mod polynomial;
mod shamir;

pub use config::{Config, SplitMode};
pub use error::{Result, ShamirError};
pub use finite_field::{PRIME_32, PRIME_64, PrimeField, is_prime};
pub use polynomial::Polynomial;
pub use shamir::{ShamirShare, ShamirShareBuilder, Share, generate_shares, reconstruct};

// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        Config, PrimeField, Result, ShamirError, ShamirShare, Share, SplitMode, generate_shares,
        reconstruct,
    };
}

use crate::config::{Config, SplitMode};
use crate::error::{Result, ShamirError};
use crate::finite_field::PrimeField;
use crate::polynomial::Polynomial;
use rand::rngs::OsRng;
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// A share in Shamir's Secret Sharing scheme
///
/// A share is the point `(x, y)` with `y = P(x)` on the secret polynomial.
/// `x` is never zero since `P(0)` is the secret itself. Individual shares
/// reveal nothing about the secret until `threshold` of them are combined.
///
/// No storage or wire format is prescribed; `Share` derives serde traits so
/// callers can pick their own.
///
/// # Example
/// ```
/// use prime_shamir::ShamirShare;
///
/// let mut shamir = ShamirShare::builder(5, 3).build().unwrap();
/// let shares = shamir.split(42).unwrap();
///
/// assert_eq!(shares[0].x, 1);
/// assert_eq!(shares[4].x, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    /// Evaluation point
    pub x: u64,
    /// Polynomial value at `x`
    pub y: u64,
}

impl Share {
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Checks `1 <= threshold <= total_shares < p`
///
/// Points are `1..=total_shares`, so the share count must stay below the
/// modulus for them to remain distinct and nonzero.
fn check_parameters(field: &PrimeField, total_shares: usize, threshold: usize) -> Result<()> {
    let fits_field = u64::try_from(total_shares).is_ok_and(|n| n < field.modulus());
    if threshold == 0 || total_shares < threshold || !fits_field {
        return Err(ShamirError::InvalidParameters {
            threshold,
            total_shares,
        });
    }
    Ok(())
}

/// Evaluates the polynomial at `x = 1..=total_shares`
fn deal(polynomial: &Polynomial, total_shares: usize, mode: SplitMode) -> Vec<Share> {
    let points = 1..=total_shares as u64;
    match mode {
        SplitMode::Sequential => points
            .map(|x| Share::new(x, polynomial.evaluate(x)))
            .collect(),
        SplitMode::Parallel => points
            .into_par_iter()
            .map(|x| Share::new(x, polynomial.evaluate(x)))
            .collect(),
    }
}

/// Splits `secret` into `total_shares` shares, any `threshold` of which recover it
///
/// A random polynomial of degree `threshold - 1` with constant term
/// `secret mod p` is drawn from `rng` and evaluated at `x = 1..=total_shares`.
/// The polynomial is dropped (and wiped with the `zeroize` feature) before
/// this returns.
///
/// # Errors
/// Returns `ShamirError::InvalidParameters` if `threshold` is zero, exceeds
/// `total_shares`, or `total_shares` is not below the modulus.
///
/// # Example
/// ```
/// use prime_shamir::{generate_shares, reconstruct, PrimeField, PRIME_32};
/// use rand_chacha::ChaCha20Rng;
/// use rand_core::SeedableRng;
///
/// let field = PrimeField::new(PRIME_32).unwrap();
/// let mut rng = ChaCha20Rng::seed_from_u64(2024);
///
/// let shares = generate_shares(&field, 3, 2, 69, &mut rng).unwrap();
/// let secret = reconstruct(&field, &[shares[0], shares[2]], 2).unwrap();
/// assert_eq!(secret, 69);
/// ```
pub fn generate_shares<R: CryptoRng>(
    field: &PrimeField,
    total_shares: usize,
    threshold: usize,
    secret: u64,
    rng: &mut R,
) -> Result<Vec<Share>> {
    check_parameters(field, total_shares, threshold)?;
    debug!(
        total_shares,
        threshold,
        modulus = field.modulus(),
        "generating shares"
    );

    let polynomial = Polynomial::construct(*field, threshold - 1, secret, rng);
    Ok(deal(&polynomial, total_shares, SplitMode::Sequential))
}

/// Recovers the secret `P(0)` by Lagrange interpolation
///
/// Every share passed in takes part in the interpolation, so any subset of at
/// least `threshold` shares with distinct points works, not only the first
/// `threshold` of them.
///
/// # Errors
/// Returns `ShamirError` if:
/// - `threshold` is zero
/// - fewer than `threshold` shares are given
/// - a share has `x = 0` or a coordinate outside the field
/// - two shares have the same `x`
pub fn reconstruct(field: &PrimeField, shares: &[Share], threshold: usize) -> Result<u64> {
    if threshold == 0 {
        return Err(ShamirError::InvalidParameters {
            threshold,
            total_shares: shares.len(),
        });
    }
    if shares.len() < threshold {
        return Err(ShamirError::InsufficientShares {
            needed: threshold,
            got: shares.len(),
        });
    }

    for share in shares {
        for value in [share.x, share.y] {
            if !field.contains(value) {
                return Err(ShamirError::OutOfField {
                    value,
                    modulus: field.modulus(),
                });
            }
        }
        if share.x == 0 {
            return Err(ShamirError::ZeroPoint);
        }
    }

    // Check for duplicate points
    for i in 0..shares.len() {
        for j in (i + 1)..shares.len() {
            if shares[i].x == shares[j].x {
                return Err(ShamirError::DuplicatePoint(shares[i].x));
            }
        }
    }

    debug!(
        shares = shares.len(),
        threshold,
        modulus = field.modulus(),
        "reconstructing secret"
    );

    let coefficients = lagrange_coefficients_at_zero(field, shares)?;
    let secret = shares
        .iter()
        .zip(&coefficients)
        .fold(0, |acc, (share, &coeff)| {
            field.add(acc, field.mul(share.y, coeff))
        });

    Ok(secret)
}

/// Lagrange basis values at zero: `L_j(0) = Π_{m≠j} x_m / (x_m - x_j)`
fn lagrange_coefficients_at_zero(field: &PrimeField, shares: &[Share]) -> Result<Vec<u64>> {
    shares
        .iter()
        .enumerate()
        .map(|(j, share_j)| {
            let (numerator, denominator) = shares
                .iter()
                .enumerate()
                .filter(|&(m, _)| m != j)
                .fold((1, 1), |(num, den), (_, share_m)| {
                    (
                        field.mul(num, share_m.x),
                        field.mul(den, field.sub(share_m.x, share_j.x)),
                    )
                });
            field
                .div(numerator, denominator)
                .map_err(|_| ShamirError::DuplicatePoint(share_j.x))
        })
        .collect()
}

/// Main implementation of Shamir's Secret Sharing scheme
///
/// Holds the validated parameters, the prime field from its [`Config`] and a
/// ChaCha20 CSPRNG seeded from the OS (or from an explicit seed for
/// reproducible runs).
///
/// # Example
/// ```
/// use prime_shamir::ShamirShare;
///
/// // Create a scheme with 5 total shares and threshold of 3
/// let mut scheme = ShamirShare::builder(5, 3).build().unwrap();
///
/// let shares = scheme.split(123_456_789).unwrap();
///
/// // Any 3 shares will do
/// let secret = scheme.reconstruct(&[shares[4], shares[0], shares[2]]).unwrap();
/// assert_eq!(secret, 123_456_789);
/// ```
pub struct ShamirShare {
    /// Total number of shares to generate
    total_shares: usize,
    /// Minimum number of shares needed for reconstruction
    threshold: usize,
    /// Configuration options for the sharing scheme
    config: Config,
    /// Field described by `config`
    field: PrimeField,
    /// Cryptographically secure random number generator
    rng: ChaCha20Rng,
}

/// Builder for creating ShamirShare instances with custom configuration
///
/// # Example
/// ```
/// use prime_shamir::{Config, ShamirShare, SplitMode, PRIME_32};
///
/// let config = Config::new()
///     .with_modulus(PRIME_32)
///     .unwrap()
///     .with_mode(SplitMode::Parallel);
///
/// let shamir = ShamirShare::builder(5, 3)
///     .with_config(config)
///     .build()
///     .unwrap();
/// assert_eq!(shamir.field().modulus(), PRIME_32);
/// ```
#[derive(Debug)]
pub struct ShamirShareBuilder {
    total_shares: usize,
    threshold: usize,
    config: Config,
    seed: Option<u64>,
}

impl ShamirShareBuilder {
    /// Creates a new builder with the specified parameters and default configuration
    pub fn new(total_shares: usize, threshold: usize) -> Self {
        Self {
            total_shares,
            threshold,
            config: Config::default(),
            seed: None,
        }
    }

    /// Sets a custom configuration for the ShamirShare instance
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Seeds the generator deterministically instead of from the OS
    ///
    /// Only meant for tests and reproducible demos: anyone who knows the seed
    /// can recompute every coefficient.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the ShamirShare instance with validation
    ///
    /// # Errors
    /// Returns `ShamirError` if:
    /// - the configured modulus is not prime
    /// - `threshold` is 0 or greater than `total_shares`
    /// - `total_shares` is not below the modulus
    /// - the OS random source fails
    pub fn build(self) -> Result<ShamirShare> {
        let field = self.config.field()?;
        check_parameters(&field, self.total_shares, self.threshold)?;

        let rng = match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::try_from_rng(&mut OsRng)
                .map_err(|e| ShamirError::RandomSource(e.to_string()))?,
        };
        trace!(
            total_shares = self.total_shares,
            threshold = self.threshold,
            seeded = self.seed.is_some(),
            "built sharing scheme"
        );

        Ok(ShamirShare {
            total_shares: self.total_shares,
            threshold: self.threshold,
            config: self.config,
            field,
            rng,
        })
    }
}

impl ShamirShare {
    /// Creates a builder for configuring a ShamirShare instance
    pub fn builder(total_shares: usize, threshold: usize) -> ShamirShareBuilder {
        ShamirShareBuilder::new(total_shares, threshold)
    }

    /// Creates a scheme with the default configuration
    pub fn new(total_shares: usize, threshold: usize) -> Result<Self> {
        Self::builder(total_shares, threshold).build()
    }

    #[inline]
    pub fn total_shares(&self) -> usize {
        self.total_shares
    }

    #[inline]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    #[inline]
    pub fn field(&self) -> PrimeField {
        self.field
    }

    /// Splits a secret into `total_shares` shares
    ///
    /// Shares are evaluated on the rayon pool when the configuration selects
    /// [`SplitMode::Parallel`]; the result is identical either way.
    pub fn split(&mut self, secret: u64) -> Result<Vec<Share>> {
        debug!(
            total_shares = self.total_shares,
            threshold = self.threshold,
            modulus = self.field.modulus(),
            mode = ?self.config.mode,
            "generating shares"
        );

        let polynomial =
            Polynomial::construct(self.field, self.threshold - 1, secret, &mut self.rng);
        Ok(deal(&polynomial, self.total_shares, self.config.mode))
    }

    /// Reconstructs the secret from at least `threshold` shares
    pub fn reconstruct(&self, shares: &[Share]) -> Result<u64> {
        reconstruct(&self.field, shares, self.threshold)
    }
}

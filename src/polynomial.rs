use crate::error::{Result, ShamirError};
use crate::finite_field::PrimeField;
use rand::Rng;
use rand_core::CryptoRng;
use std::fmt;
#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A polynomial over a prime field
///
/// Coefficients are stored from the highest-degree term down to the constant
/// term, so the last slot always holds P(0). With the `zeroize` feature the
/// coefficients are wiped when the polynomial is dropped.
///
/// # Example
/// ```
/// use prime_shamir::{Polynomial, PrimeField};
///
/// // 2x^2 + 3x + 5 over GF(13)
/// let field = PrimeField::new(13).unwrap();
/// let p = Polynomial::from_coefficients(field, vec![2, 3, 5]).unwrap();
/// assert_eq!(p.evaluate(0), 5);
/// assert_eq!(p.evaluate(2), (8 + 6 + 5) % 13);
/// ```
#[cfg_attr(feature = "zeroize", derive(Zeroize, ZeroizeOnDrop))]
pub struct Polynomial {
    #[cfg_attr(feature = "zeroize", zeroize(skip))]
    field: PrimeField,
    coefficients: Vec<u64>,
}

// Coefficients are secret material and stay out of debug output
impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("modulus", &self.field.modulus())
            .field("degree", &self.degree())
            .finish_non_exhaustive()
    }
}

impl Polynomial {
    /// Builds a random polynomial of `degree` whose constant term is `secret mod p`
    ///
    /// The other `degree` coefficients are drawn uniformly from `[0, p - 1]`.
    /// A degree of zero yields the constant polynomial `secret`.
    pub fn construct<R: CryptoRng>(
        field: PrimeField,
        degree: usize,
        secret: u64,
        rng: &mut R,
    ) -> Self {
        let mut coefficients = Vec::with_capacity(degree + 1);
        for _ in 0..degree {
            coefficients.push(rng.random_range(0..field.modulus()));
        }
        coefficients.push(field.reduce(secret));

        Self {
            field,
            coefficients,
        }
    }

    /// Wraps explicit coefficients, highest degree first
    ///
    /// # Errors
    /// Returns `ShamirError::EmptyPolynomial` for an empty coefficient list.
    pub fn from_coefficients(field: PrimeField, mut coefficients: Vec<u64>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(ShamirError::EmptyPolynomial);
        }
        for c in coefficients.iter_mut() {
            *c = field.reduce(*c);
        }
        Ok(Self {
            field,
            coefficients,
        })
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    #[inline]
    pub fn field(&self) -> PrimeField {
        self.field
    }

    /// The constant term, i.e. P(0)
    #[inline]
    pub fn constant_term(&self) -> u64 {
        self.coefficients.last().copied().unwrap_or(0)
    }

    /// Evaluates P(x) with Horner's method
    #[inline]
    pub fn evaluate(&self, x: u64) -> u64 {
        let field = &self.field;
        self.coefficients
            .iter()
            .fold(0, |acc, &coeff| field.add(field.mul(acc, x), coeff))
    }
}

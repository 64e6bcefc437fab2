use crate::error::{Result, ShamirError};

/// Largest prime below 2^32 (2^32 - 5)
pub const PRIME_32: u64 = 4_294_967_291;

/// Largest prime below 2^64 (2^64 - 59)
pub const PRIME_64: u64 = 18_446_744_073_709_551_557;

// Witnesses making Miller-Rabin deterministic for every 64-bit integer
const MILLER_RABIN_BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

#[inline]
fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 * b as u128) % modulus as u128) as u64
}

#[inline]
fn pow_mod(base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut result = 1 % modulus;
    let mut base = base % modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    result
}

/// Deterministic primality test for 64-bit integers
///
/// # Example
/// ```
/// use prime_shamir::{is_prime, PRIME_32, PRIME_64};
///
/// assert!(is_prime(PRIME_32));
/// assert!(is_prime(PRIME_64));
/// assert!(!is_prime(PRIME_32 + 2));
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in &MILLER_RABIN_BASES {
        if n % p == 0 {
            return n == p;
        }
    }

    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    'witness: for &a in &MILLER_RABIN_BASES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Arithmetic in the prime field GF(p)
///
/// The modulus is fixed at construction time. Every operation reduces its
/// inputs first and widens products to 128 bits, so results always lie in
/// `[0, p - 1]` no matter how close `p` is to `u64::MAX`.
///
/// # Example
/// ```
/// use prime_shamir::{PrimeField, PRIME_32};
///
/// let field = PrimeField::new(PRIME_32).unwrap();
/// let a = field.sub(3, 5);
/// assert_eq!(a, PRIME_32 - 2);
/// assert_eq!(field.add(a, 2), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeField {
    modulus: u64,
}

impl Default for PrimeField {
    fn default() -> Self {
        Self { modulus: PRIME_64 }
    }
}

impl PrimeField {
    /// Creates a field over the given prime modulus
    ///
    /// # Errors
    /// Returns `ShamirError::InvalidConfig` if `modulus` is not prime.
    pub fn new(modulus: u64) -> Result<Self> {
        if !is_prime(modulus) {
            return Err(ShamirError::InvalidConfig(format!(
                "Modulus {modulus} is not prime"
            )));
        }
        Ok(Self { modulus })
    }

    /// The prime modulus p
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Maps any integer to its canonical representative in `[0, p - 1]`
    #[inline]
    pub fn reduce(&self, value: u64) -> u64 {
        value % self.modulus
    }

    /// Returns true if `value` is already a reduced element of the field
    #[inline]
    pub fn contains(&self, value: u64) -> bool {
        value < self.modulus
    }

    #[inline]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        let sum = self.reduce(a) as u128 + self.reduce(b) as u128;
        (sum % self.modulus as u128) as u64
    }

    /// Subtraction that wraps through p instead of going negative
    #[inline]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        let (a, b) = (self.reduce(a), self.reduce(b));
        if a >= b {
            a - b
        } else {
            self.modulus - (b - a)
        }
    }

    #[inline]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        mul_mod(a, b, self.modulus)
    }

    /// Square-and-multiply exponentiation
    ///
    /// # Example
    /// ```
    /// use prime_shamir::PrimeField;
    ///
    /// let field = PrimeField::new(13).unwrap();
    /// assert_eq!(field.pow(2, 10), 1024 % 13);
    /// assert_eq!(field.pow(7, 0), 1);
    /// ```
    #[inline]
    pub fn pow(&self, base: u64, exp: u64) -> u64 {
        pow_mod(base, exp, self.modulus)
    }

    /// Multiplicative inverse via Fermat's Little Theorem: a^(p-2)
    ///
    /// # Errors
    /// Returns `ShamirError::ZeroInverse` when `a ≡ 0 (mod p)`.
    ///
    /// # Example
    /// ```
    /// use prime_shamir::{PrimeField, ShamirError, PRIME_32};
    ///
    /// let field = PrimeField::new(PRIME_32).unwrap();
    /// let inv = field.inverse(69).unwrap();
    /// assert_eq!(field.mul(69, inv), 1);
    /// assert_eq!(field.inverse(0), Err(ShamirError::ZeroInverse));
    /// ```
    #[inline]
    pub fn inverse(&self, a: u64) -> Result<u64> {
        let a = self.reduce(a);
        if a == 0 {
            return Err(ShamirError::ZeroInverse);
        }
        Ok(self.pow(a, self.modulus - 2))
    }

    #[inline]
    pub fn div(&self, a: u64, b: u64) -> Result<u64> {
        Ok(self.mul(a, self.inverse(b)?))
    }
}

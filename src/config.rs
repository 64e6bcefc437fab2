use crate::error::Result;
use crate::finite_field::{PRIME_64, PrimeField};

/// Processing mode for share generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Evaluate shares one after another
    #[default]
    Sequential,
    /// Evaluate shares on the rayon thread pool
    Parallel,
}

/// Configuration options for splitting and reconstruction
#[derive(Debug, Clone)]
pub struct Config {
    /// Prime modulus of the field shares live in
    pub modulus: u64,
    /// Processing mode
    pub mode: SplitMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modulus: PRIME_64,
            mode: SplitMode::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field modulus
    ///
    /// # Errors
    /// Returns `ShamirError::InvalidConfig` if `modulus` is not prime.
    pub fn with_modulus(mut self, modulus: u64) -> Result<Self> {
        PrimeField::new(modulus)?;
        self.modulus = modulus;
        Ok(self)
    }

    /// Sets the processing mode
    pub fn with_mode(mut self, mode: SplitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        self.field().map(|_| ())
    }

    /// The field described by this configuration
    pub fn field(&self) -> Result<PrimeField> {
        PrimeField::new(self.modulus)
    }
}

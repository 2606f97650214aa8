/// Parameters for random test-value generation.
///
/// Defaults follow the classic sampler: polynomial lengths drawn from
/// `0..max_length` (so 0 through 4) and integers of up to 200 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplingConfig {
    /// Exclusive upper bound on the length of a sampled polynomial.
    /// Zero means sampled polynomials are always zero.
    pub max_length: usize,
    /// Upper bound on the bit length of a sampled integer.
    pub integer_bits: u64,
}

impl SamplingConfig {
    pub const DEFAULT_MAX_LENGTH: usize = 5;
    pub const DEFAULT_INTEGER_BITS: u64 = 200;

    pub const fn new() -> Self {
        Self {
            max_length: Self::DEFAULT_MAX_LENGTH,
            integer_bits: Self::DEFAULT_INTEGER_BITS,
        }
    }

    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub const fn with_integer_bits(mut self, integer_bits: u64) -> Self {
        self.integer_bits = integer_bits;
        self
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self::new()
    }
}

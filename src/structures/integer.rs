use num_bigint::{BigInt, RandBigInt, Sign};
use num_traits::Zero;
use rand::Rng;

use crate::algebra::error::Result;
use crate::algebra::ring::Ring;
use crate::config::SamplingConfig;

/// The ring of arbitrary-precision integers `ZZ`.
///
/// Elements are [`BigInt`] values; every operation delegates to num-bigint.
/// There is no process-wide instance: construct one and share it, usually
/// in an `Arc` so polynomial rings can be built on top.
///
/// # Example
///
/// ```
/// use gring::{Integers, Ring};
/// use num_bigint::BigInt;
///
/// let zz = Integers::new();
/// let mut r = zz.init();
/// zz.add(&mut r, &BigInt::from(2), &BigInt::from(5)).unwrap();
/// assert_eq!(r, BigInt::from(7));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Integers {
    config: SamplingConfig,
}

impl Integers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SamplingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }
}

impl Ring for Integers {
    type Element = BigInt;

    fn name(&self) -> String {
        "ZZ".to_string()
    }

    fn init(&self) -> BigInt {
        BigInt::zero()
    }

    fn set(&self, dst: &mut BigInt, src: &BigInt) -> Result<()> {
        dst.clone_from(src);
        Ok(())
    }

    fn negate(&self, dst: &mut BigInt, src: &BigInt) -> Result<()> {
        *dst = -src;
        Ok(())
    }

    fn is_zero(&self, element: &BigInt) -> bool {
        element.is_zero()
    }

    fn equal(&self, a: &BigInt, b: &BigInt) -> Result<bool> {
        Ok(a == b)
    }

    /// Random value with a uniformly chosen bit length in
    /// `0..=integer_bits` and a random sign, so small values and zero
    /// turn up often.
    fn sample_random<G: Rng + ?Sized>(&self, element: &mut BigInt, rng: &mut G) -> Result<()> {
        let bits = rng.gen_range(0..=self.config.integer_bits);
        let magnitude = rng.gen_biguint(bits);
        let sign = if rng.gen::<bool>() { Sign::Minus } else { Sign::Plus };
        *element = BigInt::from_biguint(sign, magnitude);
        Ok(())
    }

    fn add(&self, dst: &mut BigInt, a: &BigInt, b: &BigInt) -> Result<()> {
        *dst = a + b;
        Ok(())
    }

    fn sub(&self, dst: &mut BigInt, a: &BigInt, b: &BigInt) -> Result<()> {
        *dst = a - b;
        Ok(())
    }

    fn mul(&self, dst: &mut BigInt, a: &BigInt, b: &BigInt) -> Result<()> {
        *dst = a * b;
        Ok(())
    }

    fn add_assign(&self, dst: &mut BigInt, rhs: &BigInt) -> Result<()> {
        *dst += rhs;
        Ok(())
    }

    fn sub_assign(&self, dst: &mut BigInt, rhs: &BigInt) -> Result<()> {
        *dst -= rhs;
        Ok(())
    }

    fn mul_assign(&self, dst: &mut BigInt, rhs: &BigInt) -> Result<()> {
        *dst *= rhs;
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl crate::algebra::ring::DeserializeElement for Integers {
    fn deserialize_element<'de, D>(&self, deserializer: D) -> core::result::Result<BigInt, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde::Deserialize::deserialize(deserializer)
    }
}

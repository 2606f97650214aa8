use core::fmt;
use core::mem;
use std::sync::Arc;

use rand::Rng;

use crate::algebra::error::{Result, RingError};
use crate::algebra::ring::{ElementDisplay, Ring};
use crate::config::SamplingConfig;
use crate::structures::poly::Poly;

/// The ring `R[x]` of dense polynomials over a coefficient ring `R`.
///
/// `PolyRing` is itself a [`Ring`] whose elements are [`Poly<R>`], so it can
/// be fed back in: `PolyRing<PolyRing<Integers>>` is `ZZ[x][y]`.
///
/// Every call first checks that each operand was built over this ring's
/// coefficient descriptor (the same `Arc`), recursively through every
/// coefficient and every constructed slot. A mismatch anywhere in the tree is
/// rejected with [`RingError::CoefficientRingMismatch`] before anything is
/// written.
///
/// The ring's variable defaults to `x`; nested rings usually pick their own
/// with [`with_variable`](PolyRing::with_variable).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use gring::{make_polynomial_ring, Integers, Ring};
/// use num_bigint::BigInt;
///
/// let zz = Arc::new(Integers::new());
/// let zx = make_polynomial_ring(&zz);
///
/// // (2 + 3x) * 5 = 10 + 15x
/// let a = zx.from_coeffs(vec![BigInt::from(2), BigInt::from(3)]);
/// let b = zx.from_coeffs(vec![BigInt::from(5)]);
/// let mut r = zx.init();
/// zx.mul(&mut r, &a, &b).unwrap();
/// assert_eq!(r, zx.from_coeffs(vec![BigInt::from(10), BigInt::from(15)]));
/// ```
pub struct PolyRing<R: Ring> {
    base: Arc<R>,
    variable: String,
    config: SamplingConfig,
}

/// Build the polynomial ring over `base`.
///
/// Dropping the result never touches `base` or any polynomial already
/// built from it.
pub fn make_polynomial_ring<R: Ring>(base: &Arc<R>) -> PolyRing<R> {
    PolyRing::new(Arc::clone(base))
}

impl<R: Ring> PolyRing<R> {
    pub fn new(base: Arc<R>) -> Self {
        Self::with_config(base, SamplingConfig::default())
    }

    pub fn with_config(base: Arc<R>, config: SamplingConfig) -> Self {
        Self {
            base,
            variable: "x".to_owned(),
            config,
        }
    }

    /// Rename the ring's variable, e.g. `y` for the outer level of `ZZ[x][y]`.
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// The coefficient ring descriptor.
    pub fn parent(&self) -> &Arc<R> {
        &self.base
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Polynomial with the given coefficients, lowest degree first.
    pub fn from_coeffs(&self, coeffs: Vec<R::Element>) -> Poly<R> {
        Poly::from_coeffs(Arc::clone(&self.base), coeffs)
    }

    /// Format `element` using each level's variable name.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use gring::{make_polynomial_ring, Integers, PolyRing};
    /// use num_bigint::BigInt;
    ///
    /// let zx = Arc::new(make_polynomial_ring(&Arc::new(Integers::new())));
    /// let zxy = PolyRing::new(Arc::clone(&zx)).with_variable("y");
    /// let c = zx.from_coeffs(vec![BigInt::from(1), BigInt::from(1)]);
    /// let e = zxy.from_coeffs(vec![zx.from_coeffs(vec![]), c]);
    /// assert_eq!(zxy.display(&e).to_string(), "(1 + 1*x)*y");
    /// ```
    pub fn display<'a>(&'a self, element: &'a Poly<R>) -> ElementDisplay<'a, Self> {
        ElementDisplay(self, element)
    }

    fn check(&self, operation: &'static str, operands: &[&Poly<R>]) -> Result<()> {
        if operands.iter().all(|p| self.owns_element(p)) {
            return Ok(());
        }
        let err = RingError::CoefficientRingMismatch { operation };
        tracing::debug!(ring = %self.name(), error = %err, "rejected ring operation");
        Err(err)
    }
}

impl<R: Ring> Clone for PolyRing<R> {
    fn clone(&self) -> Self {
        Self {
            base: Arc::clone(&self.base),
            variable: self.variable.clone(),
            config: self.config,
        }
    }
}

impl<R: Ring + fmt::Debug> fmt::Debug for PolyRing<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolyRing")
            .field("base", &self.base)
            .field("variable", &self.variable)
            .field("config", &self.config)
            .finish()
    }
}

impl<R: Ring> Ring for PolyRing<R> {
    type Element = Poly<R>;

    fn name(&self) -> String {
        format!("{}[{}]", self.base.name(), self.variable)
    }

    fn init(&self) -> Poly<R> {
        Poly::new(Arc::clone(&self.base))
    }

    fn set(&self, dst: &mut Poly<R>, src: &Poly<R>) -> Result<()> {
        self.check("set", &[&*dst, src])?;
        let len = src.len();
        dst.fit_length(len);
        let slots = dst.slots_mut();
        for (slot, c) in slots.iter_mut().zip(src.coefficients()) {
            self.base.set(slot, c)?;
        }
        dst.set_len(len);
        Ok(())
    }

    fn negate(&self, dst: &mut Poly<R>, src: &Poly<R>) -> Result<()> {
        self.check("negate", &[&*dst, src])?;
        let len = src.len();
        dst.fit_length(len);
        let slots = dst.slots_mut();
        for (slot, c) in slots.iter_mut().zip(src.coefficients()) {
            self.base.negate(slot, c)?;
        }
        dst.set_len(len);
        Ok(())
    }

    /// Relies on canonical form; coefficients are never inspected.
    fn is_zero(&self, element: &Poly<R>) -> bool {
        element.is_empty()
    }

    fn equal(&self, a: &Poly<R>, b: &Poly<R>) -> Result<bool> {
        self.check("equal", &[a, b])?;
        if a.len() != b.len() {
            return Ok(false);
        }
        for (x, y) in a.coefficients().iter().zip(b.coefficients()) {
            if !self.base.equal(x, y)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Length drawn from `0..max_length`, each coefficient sampled from the
    /// coefficient ring, then normalised.
    fn sample_random<G: Rng + ?Sized>(&self, element: &mut Poly<R>, rng: &mut G) -> Result<()> {
        self.check("sample_random", &[&*element])?;
        let len = if self.config.max_length == 0 {
            0
        } else {
            rng.gen_range(0..self.config.max_length)
        };
        element.fit_length(len);
        for slot in &mut element.slots_mut()[..len] {
            self.base.sample_random(slot, rng)?;
        }
        element.set_len(len);
        element.normalise();
        Ok(())
    }

    fn add(&self, dst: &mut Poly<R>, a: &Poly<R>, b: &Poly<R>) -> Result<()> {
        self.check("add", &[&*dst, a, b])?;
        let (ac, bc) = (a.coefficients(), b.coefficients());
        let lo = ac.len().min(bc.len());
        let hi = ac.len().max(bc.len());

        dst.fit_length(hi);
        let slots = dst.slots_mut();
        for i in 0..lo {
            self.base.add(&mut slots[i], &ac[i], &bc[i])?;
        }
        for i in lo..ac.len() {
            self.base.set(&mut slots[i], &ac[i])?;
        }
        for i in lo..bc.len() {
            self.base.set(&mut slots[i], &bc[i])?;
        }

        dst.set_len(hi);
        dst.normalise();
        Ok(())
    }

    fn sub(&self, dst: &mut Poly<R>, a: &Poly<R>, b: &Poly<R>) -> Result<()> {
        self.check("sub", &[&*dst, a, b])?;
        let (ac, bc) = (a.coefficients(), b.coefficients());
        let lo = ac.len().min(bc.len());
        let hi = ac.len().max(bc.len());

        dst.fit_length(hi);
        let slots = dst.slots_mut();
        for i in 0..lo {
            self.base.sub(&mut slots[i], &ac[i], &bc[i])?;
        }
        for i in lo..ac.len() {
            self.base.set(&mut slots[i], &ac[i])?;
        }
        for i in lo..bc.len() {
            self.base.negate(&mut slots[i], &bc[i])?;
        }

        dst.set_len(hi);
        dst.normalise();
        Ok(())
    }

    /// Schoolbook convolution.
    ///
    /// No normalisation: the top coefficient is the product of two non-zero
    /// leading terms, which cannot vanish when `R` has no zero divisors.
    fn mul(&self, dst: &mut Poly<R>, a: &Poly<R>, b: &Poly<R>) -> Result<()> {
        self.check("mul", &[&*dst, a, b])?;
        let (ac, bc) = (a.coefficients(), b.coefficients());
        let (len_a, len_b) = (ac.len(), bc.len());

        if len_a == 0 || len_b == 0 {
            // buffer kept for reuse
            dst.set_len(0);
            return Ok(());
        }

        let len_r = len_a + len_b - 1;
        dst.fit_length(len_r);
        let slots = dst.slots_mut();

        // first row and last column cover every output index exactly once
        for i in 0..len_a {
            self.base.mul(&mut slots[i], &ac[i], &bc[0])?;
        }
        for j in 1..len_b {
            self.base.mul(&mut slots[j + len_a - 1], &ac[len_a - 1], &bc[j])?;
        }

        let mut temp = self.base.init();
        for i in 0..len_a - 1 {
            for j in 1..len_b {
                self.base.mul(&mut temp, &ac[i], &bc[j])?;
                self.base.add_assign(&mut slots[i + j], &temp)?;
            }
        }
        self.base.clear(temp);

        dst.set_len(len_r);
        Ok(())
    }

    /// In-place addition; `dst`'s own tail is already in position.
    fn add_assign(&self, dst: &mut Poly<R>, rhs: &Poly<R>) -> Result<()> {
        self.check("add_assign", &[&*dst, rhs])?;
        let rc = rhs.coefficients();
        let lo = dst.len().min(rc.len());
        let hi = dst.len().max(rc.len());

        dst.fit_length(hi);
        let slots = dst.slots_mut();
        for i in 0..lo {
            self.base.add_assign(&mut slots[i], &rc[i])?;
        }
        for i in lo..rc.len() {
            self.base.set(&mut slots[i], &rc[i])?;
        }

        dst.set_len(hi);
        dst.normalise();
        Ok(())
    }

    fn sub_assign(&self, dst: &mut Poly<R>, rhs: &Poly<R>) -> Result<()> {
        self.check("sub_assign", &[&*dst, rhs])?;
        let rc = rhs.coefficients();
        let lo = dst.len().min(rc.len());
        let hi = dst.len().max(rc.len());

        dst.fit_length(hi);
        let slots = dst.slots_mut();
        for i in 0..lo {
            self.base.sub_assign(&mut slots[i], &rc[i])?;
        }
        for i in lo..rc.len() {
            self.base.negate(&mut slots[i], &rc[i])?;
        }

        dst.set_len(hi);
        dst.normalise();
        Ok(())
    }

    /// Products read every input coefficient more than once, so the result
    /// is built in a scratch polynomial and swapped in.
    fn mul_assign(&self, dst: &mut Poly<R>, rhs: &Poly<R>) -> Result<()> {
        let mut out = self.init();
        self.mul(&mut out, dst, rhs)?;
        mem::swap(dst, &mut out);
        Ok(())
    }

    fn fit_length(&self, element: &mut Poly<R>, len: usize) -> Result<()> {
        self.check("fit_length", &[&*element])?;
        element.fit_length(len);
        Ok(())
    }

    /// Slack slots are checked as well; any of them may be written next.
    fn owns_element(&self, element: &Poly<R>) -> bool {
        Arc::ptr_eq(element.coefficient_ring(), &self.base)
            && element.slots().iter().all(|c| self.base.owns_element(c))
    }

    fn fmt_element(&self, element: &Poly<R>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        element.fmt_with(f, &self.variable, |c| {
            ElementDisplay(&*self.base, c).to_string()
        })
    }
}

#[cfg(feature = "serde")]
impl<R: crate::algebra::ring::DeserializeElement> crate::algebra::ring::DeserializeElement
    for PolyRing<R>
{
    /// Reads a sequence of coefficients, lowest degree first, and
    /// normalises the result.
    fn deserialize_element<'de, D>(&self, deserializer: D) -> core::result::Result<Poly<R>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use crate::algebra::ring::{DeserializeElement, ElementSeed};

        struct CoeffsVisitor<'a, R>(&'a R);

        impl<'de, 'a, R: DeserializeElement> serde::de::Visitor<'de> for CoeffsVisitor<'a, R> {
            type Value = Vec<R::Element>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of {} coefficients", self.0.name())
            }

            fn visit_seq<A>(self, mut seq: A) -> core::result::Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut coeffs = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(c) = seq.next_element_seed(ElementSeed(self.0))? {
                    coeffs.push(c);
                }
                Ok(coeffs)
            }
        }

        let coeffs = deserializer.deserialize_seq(CoeffsVisitor(&*self.base))?;
        Ok(self.from_coeffs(coeffs))
    }
}

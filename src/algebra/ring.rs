use core::fmt;
use core::mem;

use rand::Rng;

use super::error::{Result, RingError};

/// A ring descriptor: the table of operations for one algebraic structure.
///
/// The implementing value *is* the descriptor. Elements are plain values of
/// [`Ring::Element`] owned by the caller; the descriptor never keeps
/// references to them. Descriptors are immutable once built and can be
/// shared (typically behind an `Arc`) by any number of elements.
///
/// This trait assumes:
/// - (R, +) is an abelian group whose identity is the value produced by `init`
/// - multiplication distributes over addition
/// - `is_zero` and `equal` agree with `add`/`sub`, i.e. `a - a` is zero.
///
/// Binary operations write into `dst`. Aliasing `dst` with an operand is
/// expressed with the `*_assign` variants.
pub trait Ring {
    type Element: fmt::Debug;

    /// Short human-readable name, e.g. `ZZ` or `ZZ[x]`.
    fn name(&self) -> String;

    /// Size in bytes of one element value.
    fn element_size(&self) -> usize {
        mem::size_of::<Self::Element>()
    }

    /// Construct a fresh element holding the additive identity.
    fn init(&self) -> Self::Element;

    /// Destroy an element. Any owned buffers are released recursively.
    fn clear(&self, element: Self::Element) {
        drop(element);
    }

    /// `dst = src`.
    fn set(&self, dst: &mut Self::Element, src: &Self::Element) -> Result<()>;

    /// `dst = -src`.
    fn negate(&self, dst: &mut Self::Element, src: &Self::Element) -> Result<()>;

    fn is_zero(&self, element: &Self::Element) -> bool;

    fn equal(&self, a: &Self::Element, b: &Self::Element) -> Result<bool>;

    /// Overwrite `element` with a random test value.
    fn sample_random<G: Rng + ?Sized>(&self, element: &mut Self::Element, rng: &mut G)
        -> Result<()>;

    /// `dst = a + b`.
    fn add(&self, dst: &mut Self::Element, a: &Self::Element, b: &Self::Element) -> Result<()>;

    /// `dst = a - b`.
    fn sub(&self, dst: &mut Self::Element, a: &Self::Element, b: &Self::Element) -> Result<()>;

    /// `dst = a * b`.
    fn mul(&self, dst: &mut Self::Element, a: &Self::Element, b: &Self::Element) -> Result<()>;

    /// `dst = dst + rhs`.
    fn add_assign(&self, dst: &mut Self::Element, rhs: &Self::Element) -> Result<()> {
        let lhs = self.duplicate(dst)?;
        self.add(dst, &lhs, rhs)
    }

    /// `dst = dst - rhs`.
    fn sub_assign(&self, dst: &mut Self::Element, rhs: &Self::Element) -> Result<()> {
        let lhs = self.duplicate(dst)?;
        self.sub(dst, &lhs, rhs)
    }

    /// `dst = dst * rhs`.
    fn mul_assign(&self, dst: &mut Self::Element, rhs: &Self::Element) -> Result<()> {
        let lhs = self.duplicate(dst)?;
        self.mul(dst, &lhs, rhs)
    }

    /// Ensure a container element can hold `len` entries without
    /// reallocating. Only composite rings provide this.
    fn fit_length(&self, element: &mut Self::Element, len: usize) -> Result<()> {
        let _ = (element, len);
        let err = RingError::MissingCapability {
            ring: self.name(),
            capability: "fit_length",
        };
        tracing::debug!(error = %err, "rejected ring operation");
        Err(err)
    }

    /// A new element equal to `src`.
    fn duplicate(&self, src: &Self::Element) -> Result<Self::Element> {
        let mut out = self.init();
        self.set(&mut out, src)?;
        Ok(out)
    }

    /// Whether `element`, and everything nested inside it, was built over
    /// this descriptor. Base rings own every value of their element type.
    fn owns_element(&self, element: &Self::Element) -> bool {
        let _ = element;
        true
    }

    /// Write `element` in this ring's notation.
    fn fmt_element(&self, element: &Self::Element, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(element, f)
    }
}

/// [`fmt::Display`] adapter that formats an element through its ring.
pub struct ElementDisplay<'a, R: Ring>(pub &'a R, pub &'a R::Element);

impl<R: Ring> fmt::Display for ElementDisplay<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_element(self.1, f)
    }
}

/// Allocate heap storage for one element of `ring` and construct it.
///
/// The returned element holds the additive identity.
pub fn allocate_element<R: Ring>(ring: &R) -> Box<R::Element> {
    Box::new(ring.init())
}

/// Destroy an element obtained from [`allocate_element`] and free its storage.
pub fn destroy_element<R: Ring>(ring: &R, element: Box<R::Element>) {
    ring.clear(*element);
}

/// Rings whose elements can be read back from a serialized form.
///
/// Polynomial elements carry a handle to their coefficient ring, which is
/// runtime data, so they are deserialized through the ring rather than
/// through a plain `Deserialize` impl.
#[cfg(feature = "serde")]
pub trait DeserializeElement: Ring {
    fn deserialize_element<'de, D>(
        &self,
        deserializer: D,
    ) -> core::result::Result<Self::Element, D::Error>
    where
        D: serde::Deserializer<'de>;
}

/// [`serde::de::DeserializeSeed`] adapter over [`DeserializeElement`].
#[cfg(feature = "serde")]
pub struct ElementSeed<'a, R>(pub &'a R);

#[cfg(feature = "serde")]
impl<'de, 'a, R: DeserializeElement> serde::de::DeserializeSeed<'de> for ElementSeed<'a, R> {
    type Value = R::Element;

    fn deserialize<D>(self, deserializer: D) -> core::result::Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        self.0.deserialize_element(deserializer)
    }
}

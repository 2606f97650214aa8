use core::fmt;
use core::mem;
use std::sync::Arc;

use crate::algebra::ring::Ring;

/// Dense polynomial whose coefficients live in the ring `R`.
///
/// Coefficients are stored in ascending order of degree: slot `i` holds the
/// coefficient of `x^i`. Only the first [`len`](Poly::len) slots are
/// significant; the buffer behind them holds [`alloc`](Poly::alloc) slots
/// and every one of them is a constructed element of `R`, so arithmetic
/// can reuse the tail without constructing anything.
///
/// The zero polynomial has length 0. Operations that can leave trailing
/// zeros normalise, so the top significant coefficient is never zero.
///
/// A `Poly` shares its coefficient ring with every other polynomial built
/// over the same `Arc<R>`; the ring outlives all of them.
pub struct Poly<R: Ring> {
    ring: Arc<R>,
    /// All `alloc` slots, each constructed via `R::init`.
    coeffs: Vec<R::Element>,
    length: usize,
}

impl<R: Ring> Poly<R> {
    /// The empty polynomial: no buffer, length 0.
    pub fn new(ring: Arc<R>) -> Self {
        Self {
            ring,
            coeffs: Vec::new(),
            length: 0,
        }
    }

    /// Build a polynomial from coefficients in ascending order.
    ///
    /// Trailing zeros are removed. Coefficients are not checked against
    /// `ring` here; ring operations reject a mismatched element before
    /// writing anything.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use gring::{Integers, Poly};
    /// use num_bigint::BigInt;
    ///
    /// let zz = Arc::new(Integers::new());
    /// let p = Poly::from_coeffs(zz, vec![BigInt::from(2), BigInt::from(3), BigInt::from(0)]);
    /// assert_eq!(p.len(), 2);
    /// assert_eq!(p.degree(), Some(1));
    /// ```
    pub fn from_coeffs(ring: Arc<R>, coeffs: Vec<R::Element>) -> Self {
        let length = coeffs.len();
        let mut poly = Self {
            ring,
            coeffs,
            length,
        };
        poly.normalise();
        poly
    }

    /// The ring every coefficient belongs to.
    pub fn coefficient_ring(&self) -> &Arc<R> {
        &self.ring
    }

    /// Number of significant coefficients.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Number of constructed slots in the backing buffer.
    pub fn alloc(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.length.checked_sub(1)
    }

    /// Coefficient of `x^i`, or `None` beyond the significant length.
    pub fn coeff(&self, i: usize) -> Option<&R::Element> {
        self.coefficients().get(i)
    }

    /// The significant coefficients, lowest degree first.
    pub fn coefficients(&self) -> &[R::Element] {
        &self.coeffs[..self.length]
    }

    /// Ensure at least `len` slots are constructed.
    ///
    /// Growth is amortised: the new capacity is `max(len, 2 * alloc)`, so a
    /// first growth from empty allocates exactly `len` slots.
    pub fn fit_length(&mut self, len: usize) {
        if len > self.alloc() {
            let target = len.max(2 * self.alloc());
            self.realloc(target);
        }
    }

    /// Change the capacity to exactly `alloc` slots.
    ///
    /// Zero releases the buffer and resets to the empty polynomial.
    /// Shrinking truncates first; growing constructs each new slot.
    pub fn realloc(&mut self, alloc: usize) {
        let old_alloc = self.alloc();
        if alloc == 0 {
            self.reset();
        } else if alloc < old_alloc {
            self.truncate(alloc);
            for c in self.coeffs.drain(alloc..) {
                self.ring.clear(c);
            }
            self.coeffs.shrink_to_fit();
        } else if alloc > old_alloc {
            let ring = &self.ring;
            self.coeffs.reserve_exact(alloc - old_alloc);
            self.coeffs.extend((old_alloc..alloc).map(|_| ring.init()));
        }
        tracing::trace!(
            ring = %self.ring.name(),
            old_alloc,
            new_alloc = alloc,
            "resized coefficient buffer"
        );
    }

    /// Drop every coefficient beyond `new_len`, then normalise.
    ///
    /// Discarded slots are replaced with fresh identity elements, keeping
    /// the whole buffer constructed. Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.length {
            for i in new_len..self.length {
                let old = mem::replace(&mut self.coeffs[i], self.ring.init());
                self.ring.clear(old);
            }
            self.length = new_len;
            self.normalise();
        }
    }

    /// Strip trailing zero coefficients. Never touches memory.
    pub fn normalise(&mut self) {
        while self.length > 0 && self.ring.is_zero(&self.coeffs[self.length - 1]) {
            self.length -= 1;
        }
    }

    /// Set the coefficient of `x^i`, growing as needed.
    ///
    /// Slots between the old length and `i` become zero.
    pub fn set_coeff(&mut self, i: usize, value: R::Element) {
        self.fit_length(i + 1);
        for j in self.length..i {
            let old = mem::replace(&mut self.coeffs[j], self.ring.init());
            self.ring.clear(old);
        }
        let old = mem::replace(&mut self.coeffs[i], value);
        self.ring.clear(old);
        if i >= self.length {
            self.length = i + 1;
        }
        self.normalise();
    }

    /// Release the buffer and return to the empty state.
    pub fn reset(&mut self) {
        for c in self.coeffs.drain(..) {
            self.ring.clear(c);
        }
        self.coeffs = Vec::new();
        self.length = 0;
    }

    /// Every constructed slot, significant or not.
    pub(crate) fn slots(&self) -> &[R::Element] {
        &self.coeffs
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [R::Element] {
        &mut self.coeffs
    }

    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.alloc());
        self.length = len;
    }
}

impl<R: Ring> Drop for Poly<R> {
    fn drop(&mut self) {
        for c in self.coeffs.drain(..) {
            self.ring.clear(c);
        }
    }
}

impl<R: Ring> Clone for Poly<R>
where
    R::Element: Clone,
{
    /// Copies the significant coefficients only.
    fn clone(&self) -> Self {
        Self {
            ring: Arc::clone(&self.ring),
            coeffs: self.coefficients().to_vec(),
            length: self.length,
        }
    }
}

/// Polynomials over different coefficient rings never compare equal, at any
/// nesting depth: a coefficient-level mismatch reported by `equal` counts as
/// "not equal".
impl<R: Ring> PartialEq for Poly<R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ring, &other.ring)
            && self.length == other.length
            && self
                .coefficients()
                .iter()
                .zip(other.coefficients())
                .all(|(a, b)| matches!(self.ring.equal(a, b), Ok(true)))
    }
}

impl<R: Ring> Poly<R> {
    /// Write `self` in `var`, rendering each coefficient with `coeff`.
    pub(crate) fn fmt_with(
        &self,
        f: &mut fmt::Formatter<'_>,
        var: &str,
        coeff: impl Fn(&R::Element) -> String,
    ) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, c) in self.coefficients().iter().enumerate() {
            if self.ring.is_zero(c) {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            let text = coeff(c);
            // nested polynomials and negative scalars
            let text = if text.contains(' ') || (i > 0 && text.starts_with('-')) {
                format!("({})", text)
            } else {
                text
            };

            match i {
                0 => write!(f, "{}", text)?,
                1 => write!(f, "{}*{}", text, var)?,
                _ => write!(f, "{}*{}^{}", text, var, i)?,
            }
        }

        Ok(())
    }
}

/// Prints in `x` at every level; [`PolyRing::display`](crate::PolyRing::display)
/// uses the ring's own variable names.
impl<R: Ring> fmt::Debug for Poly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, "x", |c| format!("{:?}", c))
    }
}

impl<R: Ring> fmt::Display for Poly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
impl<R: Ring> serde::Serialize for Poly<R>
where
    R::Element: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // significant coefficients only; capacity is not data
        serializer.collect_seq(self.coefficients())
    }
}

//! Generic ring descriptors and dense polynomial rings that compose.
//!
//! A [`Ring`] value describes one algebraic structure. [`PolyRing`] turns
//! any ring `R` into `R[x]`, and since `PolyRing` is itself a `Ring` the
//! construction nests: `ZZ`, `ZZ[x]`, `ZZ[x][y]`, ...
//!
//! ```
//! use std::sync::Arc;
//! use gring::{make_polynomial_ring, Integers, Ring};
//!
//! let zz = Arc::new(Integers::new());
//! let zx = Arc::new(make_polynomial_ring(&zz));
//! let zxy = make_polynomial_ring(&zx).with_variable("y");
//! assert_eq!(zxy.name(), "ZZ[x][y]");
//! ```

pub mod algebra;
pub mod config;
pub mod structures;

pub use algebra::error::{Result, RingError};
pub use algebra::ring::{allocate_element, destroy_element, ElementDisplay, Ring};
#[cfg(feature = "serde")]
pub use algebra::ring::{DeserializeElement, ElementSeed};

pub use config::SamplingConfig;
pub use structures::integer::Integers;
pub use structures::poly::Poly;
pub use structures::poly_ring::{make_polynomial_ring, PolyRing};

use thiserror::Error;

/// Errors surfaced by ring operations.
///
/// Every variant is a contract violation: the call was rejected before any
/// operand was mutated. Allocation failure is not represented here; it
/// aborts the process like any other Rust allocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RingError {
    /// An operand was built over a different coefficient ring than the
    /// descriptor performing the operation.
    #[error("{operation}: operand belongs to a different coefficient ring")]
    CoefficientRingMismatch { operation: &'static str },

    /// An optional capability was invoked on a descriptor that lacks it.
    #[error("ring {ring} does not provide `{capability}`")]
    MissingCapability {
        ring: String,
        capability: &'static str,
    },
}

impl RingError {
    /// Whether this error stems from caller misuse rather than the data.
    ///
    /// All current variants are contract violations; the method exists so
    /// callers can match on the kind without enumerating variants.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            RingError::CoefficientRingMismatch { .. } | RingError::MissingCapability { .. }
        )
    }
}

/// Result alias used by every fallible ring capability.
pub type Result<T> = core::result::Result<T, RingError>;

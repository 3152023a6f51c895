//! Core error type definitions

use std::fmt;

/// Result type alias for operations that can be misused by the caller
pub type Result<T> = std::result::Result<T, UsageError>;

/// Which side of an [`Outcome`](crate::Outcome) a caller asked for or found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Success,
    Failure,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Success => f.write_str("success"),
            Variant::Failure => f.write_str("failure"),
        }
    }
}

/// Programming errors raised when the API is used against its contract.
///
/// These never travel as the failure payload of an `Outcome`; domain
/// failures are always the caller's own error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// A payload was read through the variant the outcome does not hold
    #[error("attempted to read the {requested} payload of an outcome holding {actual}")]
    WrongVariant { requested: Variant, actual: Variant },

    /// `Maybe::value` was read while the value is absent
    #[error("accessed the value of an empty Maybe; use get_value_or_default instead")]
    AbsentValue,

    /// A present `Maybe` was constructed from an absent payload
    #[error("cannot construct Maybe::Some from an absent payload")]
    AbsentPayload,
}

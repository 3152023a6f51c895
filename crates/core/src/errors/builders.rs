//! Builder methods for creating usage errors

use super::types::{UsageError, Variant};

impl UsageError {
    /// Create the error for reading the success payload of a failure
    #[must_use]
    pub fn success_of_failure() -> Self {
        UsageError::WrongVariant {
            requested: Variant::Success,
            actual: Variant::Failure,
        }
    }

    /// Create the error for reading the failure payload of a success
    #[must_use]
    pub fn failure_of_success() -> Self {
        UsageError::WrongVariant {
            requested: Variant::Failure,
            actual: Variant::Success,
        }
    }

    /// Log the error and abort the caller.
    ///
    /// Contract violations are never turned into default values, so the
    /// only exits are the `try_*` accessors or this panic.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        tracing::error!(error = %self, "contract violation");
        panic!("{self}")
    }
}

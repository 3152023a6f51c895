//! The two-variant success/failure container

use crate::errors::{Result, UsageError};
use std::fmt::{self, Display};
use std::future::{self, IntoFuture};

/// Either a success value of type `S` or a failure value of type `F`.
///
/// An `Outcome` is immutable once built. Operators consume it and hand back
/// a new one, short-circuiting on `Failure` so downstream steps never run
/// against a value that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[must_use = "an Outcome may hold a failure that should be handled"]
pub enum Outcome<S, F> {
    Success(S),
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// Create a successful outcome
    pub const fn succeeded(value: S) -> Self {
        Outcome::Success(value)
    }

    /// Create a failed outcome
    pub const fn failed(error: F) -> Self {
        Outcome::Failure(error)
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Borrow the success payload.
    ///
    /// # Panics
    ///
    /// Panics with [`UsageError::WrongVariant`] if this is a `Failure`.
    #[track_caller]
    pub fn success(&self) -> &S {
        match self.try_success() {
            Ok(value) => value,
            Err(e) => e.raise(),
        }
    }

    /// Borrow the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with [`UsageError::WrongVariant`] if this is a `Success`.
    #[track_caller]
    pub fn failure(&self) -> &F {
        match self.try_failure() {
            Ok(error) => error,
            Err(e) => e.raise(),
        }
    }

    /// Take the success payload.
    ///
    /// # Panics
    ///
    /// Panics with [`UsageError::WrongVariant`] if this is a `Failure`.
    #[track_caller]
    pub fn into_success(self) -> S {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => UsageError::success_of_failure().raise(),
        }
    }

    /// Take the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with [`UsageError::WrongVariant`] if this is a `Success`.
    #[track_caller]
    pub fn into_failure(self) -> F {
        match self {
            Outcome::Failure(error) => error,
            Outcome::Success(_) => UsageError::failure_of_success().raise(),
        }
    }

    /// Borrow the success payload, reporting misuse as an error instead of panicking
    pub fn try_success(&self) -> Result<&S> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(_) => Err(UsageError::success_of_failure()),
        }
    }

    /// Borrow the failure payload, reporting misuse as an error instead of panicking
    pub fn try_failure(&self) -> Result<&F> {
        match self {
            Outcome::Failure(error) => Ok(error),
            Outcome::Success(_) => Err(UsageError::failure_of_success()),
        }
    }

    /// The success payload, if any
    pub fn ok(self) -> Option<S> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure payload, if any
    pub fn err(self) -> Option<F> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    pub const fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Convert into the standard library's `Result`
    pub fn into_result(self) -> std::result::Result<S, F> {
        self.into()
    }
}

impl<S, F> From<std::result::Result<S, F>> for Outcome<S, F> {
    fn from(result: std::result::Result<S, F>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for std::result::Result<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<S: Display, F: Display> Display for Outcome<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success({value})"),
            Outcome::Failure(error) => write!(f, "Failure({error})"),
        }
    }
}

/// A resolved outcome can stand wherever a pending one is awaited.
impl<S, F> IntoFuture for Outcome<S, F> {
    type Output = Self;
    type IntoFuture = future::Ready<Self>;

    fn into_future(self) -> Self::IntoFuture {
        future::ready(self)
    }
}

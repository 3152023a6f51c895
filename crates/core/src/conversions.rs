//! Lifting bare values into outcomes
//!
//! The free functions suit call sites that already name both type
//! parameters; the [`IntoOutcome`] extension reads better at the end of an
//! expression.

use crate::Outcome;

/// Lift a value into a successful outcome
#[inline]
pub fn to_success<S, F>(value: S) -> Outcome<S, F> {
    Outcome::succeeded(value)
}

/// Lift an error into a failed outcome
#[inline]
pub fn to_failure<S, F>(error: F) -> Outcome<S, F> {
    Outcome::failed(error)
}

/// Extension for lifting any value into an [`Outcome`]
pub trait IntoOutcome: Sized {
    /// Wrap `self` as the success payload
    #[inline]
    fn to_success<F>(self) -> Outcome<Self, F> {
        to_success(self)
    }

    /// Wrap `self` as the failure payload
    #[inline]
    fn to_failure<S>(self) -> Outcome<S, Self> {
        to_failure(self)
    }
}

impl<T> IntoOutcome for T {}

/// Feed a value into a function in expression position
pub trait Pipe: Sized {
    #[inline]
    fn pipe<R, P>(self, f: P) -> R
    where
        P: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}

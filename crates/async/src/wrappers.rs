//! Already-resolved tasks for signatures that must hand back a future

use futures::future::{self, Ready};
use outcome_core::{to_failure, to_success, Outcome, Pipe};

/// A future that immediately yields a successful outcome
#[inline]
pub fn to_success_task<S, F>(value: S) -> Ready<Outcome<S, F>> {
    to_success(value).pipe(future::ready)
}

/// A future that immediately yields a failed outcome
#[inline]
pub fn to_failure_task<S, F>(error: F) -> Ready<Outcome<S, F>> {
    to_failure(error).pipe(future::ready)
}

//! Asynchronous composition over [`Outcome`]
//!
//! Every operator takes anything that resolves to an `Outcome`: a pending
//! future or an `Outcome` that is already in hand. Continuations passed to
//! [`OutcomeFutureExt::bind_async`] may likewise be synchronous or not, so
//! one method covers each combination of sync and async inputs.
//!
//! ```
//! use outcome_async::prelude::*;
//!
//! # futures::executor::block_on(async {
//! let fetched = to_success_task::<u32, String>(20);
//! let total = fetched
//!     .map_async(|n| n + 1)
//!     .bind_async(|n| async move { Outcome::succeeded(n * 2) })
//!     .extract_async(|n| n, |_| 0)
//!     .await;
//! assert_eq!(total, 42);
//! # });
//! ```

pub mod combine;
pub mod future;
pub mod wrappers;

pub use outcome_core::Outcome;

pub use self::{
    combine::{combine3_async, combine4_async, combine_async},
    future::OutcomeFutureExt,
    wrappers::{to_failure_task, to_success_task},
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::combine::*;
    pub use super::future::OutcomeFutureExt;
    pub use super::wrappers::*;
    pub use outcome_core::{IntoOutcome, Maybe, Outcome};
}

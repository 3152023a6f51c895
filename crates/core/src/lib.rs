//! Value-based success/failure and present/absent containers.
//!
//! Fallible steps return an [`Outcome`] instead of panicking or bubbling an
//! error type through `?`, and get strung together with the operators in
//! [`ops`]. [`Maybe`] covers values that may simply not be there.
//!
//! ## Key Components
//!
//! - **`outcome`**: the `Outcome<S, F>` container and its accessors.
//! - **`maybe`**: the `Maybe<T>` container with null-collapsing lifts.
//! - **`ops`**: map, bind, tee, either/extract and combine.
//! - **`conversions`**: lifting bare values into outcomes.
//! - **`errors`**: `UsageError`, raised when the API itself is misused.
//!
//! Asynchronous variants of the operators live in the `outcome-async` crate.

pub mod conversions;
pub mod errors;
pub mod maybe;
pub mod ops;
pub mod outcome;

#[cfg(test)]
mod testing;

pub use self::{
    conversions::{to_failure, to_success, IntoOutcome, Pipe},
    errors::{UsageError, Variant},
    maybe::{IntoMaybe, Maybe},
    ops::{combine, combine3, combine4},
    outcome::Outcome,
};

//! Usage errors for misusing `Outcome` and `Maybe`

mod builders;
mod types;

pub use types::{Result, UsageError, Variant};

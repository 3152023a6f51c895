//! Composition operators over [`Outcome`](crate::Outcome)
//!
//! Each operator family lives in its own file as an inherent `impl` block,
//! so pipelines read left to right:
//!
//! ```
//! use outcome_core::Outcome;
//!
//! let total = Outcome::<u32, String>::succeeded(20)
//!     .map(|n| n + 1)
//!     .bind(|n| if n % 2 == 1 { Outcome::succeeded(n * 2) } else { Outcome::failed("even".into()) })
//!     .extract(|n| n.to_string(), |e| e);
//! assert_eq!(total, "42");
//! ```

mod bind;
mod either;
mod join;
mod map;
mod tee;

pub use join::{combine, combine3, combine4};

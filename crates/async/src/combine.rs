//! Concurrent combination of pending outcomes
//!
//! All inputs are polled together with `futures::join!`, so the combined
//! future takes as long as the slowest input rather than the sum of them.
//! Once everything has resolved the synchronous `combine` rules apply: the
//! leftmost failure wins.

use futures::join;
use outcome_core::{combine, combine3, combine4, Outcome};
use std::future::IntoFuture;

/// Await two outcomes concurrently and pair their successes
#[tracing::instrument(level = "trace", skip_all)]
pub async fn combine_async<T1, T2, F, A, B>(t1: A, t2: B) -> Outcome<(T1, T2), F>
where
    A: IntoFuture<Output = Outcome<T1, F>>,
    B: IntoFuture<Output = Outcome<T2, F>>,
{
    let (r1, r2) = join!(t1.into_future(), t2.into_future());
    tracing::trace!("all inputs resolved");
    combine(r1, r2)
}

/// Await three outcomes concurrently and collect their successes
#[tracing::instrument(level = "trace", skip_all)]
pub async fn combine3_async<T1, T2, T3, F, A, B, C>(
    t1: A,
    t2: B,
    t3: C,
) -> Outcome<(T1, T2, T3), F>
where
    A: IntoFuture<Output = Outcome<T1, F>>,
    B: IntoFuture<Output = Outcome<T2, F>>,
    C: IntoFuture<Output = Outcome<T3, F>>,
{
    let (r1, r2, r3) = join!(t1.into_future(), t2.into_future(), t3.into_future());
    tracing::trace!("all inputs resolved");
    combine3(r1, r2, r3)
}

/// Await four outcomes concurrently and collect their successes
#[tracing::instrument(level = "trace", skip_all)]
pub async fn combine4_async<T1, T2, T3, T4, F, A, B, C, D>(
    t1: A,
    t2: B,
    t3: C,
    t4: D,
) -> Outcome<(T1, T2, T3, T4), F>
where
    A: IntoFuture<Output = Outcome<T1, F>>,
    B: IntoFuture<Output = Outcome<T2, F>>,
    C: IntoFuture<Output = Outcome<T3, F>>,
    D: IntoFuture<Output = Outcome<T4, F>>,
{
    let (r1, r2, r3, r4) = join!(
        t1.into_future(),
        t2.into_future(),
        t3.into_future(),
        t4.into_future()
    );
    tracing::trace!("all inputs resolved");
    combine4(r1, r2, r3, r4)
}

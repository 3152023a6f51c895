//! Extension trait lifting the outcome operators over futures

use outcome_core::Outcome;
use std::future::{Future, IntoFuture};

/// Operators over anything that resolves to an [`Outcome`].
///
/// Each method awaits the source first and then applies the matching
/// synchronous operator, so a failure short-circuits exactly as it does
/// without futures. Nothing is spawned; the returned future does all of its
/// work when polled, and dropping it drops the source.
pub trait OutcomeFutureExt<S, F>: IntoFuture<Output = Outcome<S, F>> + Sized {
    /// Transform the success payload once the source resolves
    fn map_async<S2, M>(self, f: M) -> impl Future<Output = Outcome<S2, F>>
    where
        M: FnOnce(S) -> S2,
    {
        let source = self.into_future();
        async move { source.await.map(f) }
    }

    /// Transform the failure payload once the source resolves
    fn map_failure_async<F2, M>(self, f: M) -> impl Future<Output = Outcome<S, F2>>
    where
        M: FnOnce(F) -> F2,
    {
        let source = self.into_future();
        async move { source.await.map_failure(f) }
    }

    /// Sequence a dependent step after the source resolves.
    ///
    /// The continuation may return an `Outcome` directly or a future of one.
    /// It is only invoked once the source is known to be a success; on
    /// failure the error is returned without touching anything else.
    fn bind_async<S2, B, C>(self, f: B) -> impl Future<Output = Outcome<S2, F>>
    where
        B: FnOnce(S) -> C,
        C: IntoFuture<Output = Outcome<S2, F>>,
    {
        let source = self.into_future();
        async move {
            match source.await {
                Outcome::Success(value) => f(value).await,
                Outcome::Failure(error) => {
                    tracing::trace!("bind_async short-circuited on failure");
                    Outcome::Failure(error)
                }
            }
        }
    }

    /// Observe the success payload with a synchronous side effect
    fn tee_async<T>(self, f: T) -> impl Future<Output = Outcome<S, F>>
    where
        T: FnOnce(&S),
    {
        let source = self.into_future();
        async move { source.await.tee(f) }
    }

    /// Observe the success payload with an asynchronous side effect.
    ///
    /// The effect is awaited before the unchanged outcome is returned. It
    /// receives a borrow, so anything it keeps past its first poll must be
    /// copied out first.
    fn tee_then<T, E>(self, f: T) -> impl Future<Output = Outcome<S, F>>
    where
        T: FnOnce(&S) -> E,
        E: IntoFuture<Output = ()>,
    {
        let source = self.into_future();
        async move {
            let outcome = source.await;
            if let Outcome::Success(ref value) = outcome {
                f(value).await;
            }
            outcome
        }
    }

    /// Run exactly one callback once the source resolves, passing the
    /// outcome through
    fn either_async<A, B>(self, on_success: A, on_failure: B) -> impl Future<Output = Outcome<S, F>>
    where
        A: FnOnce(&S),
        B: FnOnce(&F),
    {
        let source = self.into_future();
        async move { source.await.either(on_success, on_failure) }
    }

    /// Resolve the source and collapse it into a plain value
    fn extract_async<R, A, B>(self, on_success: A, on_failure: B) -> impl Future<Output = R>
    where
        A: FnOnce(S) -> R,
        B: FnOnce(F) -> R,
    {
        let source = self.into_future();
        async move { source.await.extract(on_success, on_failure) }
    }
}

impl<T, S, F> OutcomeFutureExt<S, F> for T where T: IntoFuture<Output = Outcome<S, F>> {}

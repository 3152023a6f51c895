use crate::Outcome;

impl<S, F> Outcome<S, F> {
    /// Sequence a dependent fallible step.
    ///
    /// On success the whole outcome is replaced by `f(value)`, so `f`
    /// decides success or failure itself. On failure `f` is skipped and the
    /// same error is carried forward.
    pub fn bind<S2, B>(self, f: B) -> Outcome<S2, F>
    where
        B: FnOnce(S) -> Outcome<S2, F>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => {
                tracing::trace!("bind short-circuited on failure");
                Outcome::Failure(error)
            }
        }
    }
}

use crate::Outcome;

impl<S, F> Outcome<S, F> {
    /// Transform the success payload; a failure passes through untouched
    /// and `f` is never called.
    pub fn map<S2, M>(self, f: M) -> Outcome<S2, F>
    where
        M: FnOnce(S) -> S2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the failure payload; a success passes through untouched.
    pub fn map_failure<F2, M>(self, f: M) -> Outcome<S, F2>
    where
        M: FnOnce(F) -> F2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }
}

use crate::Outcome;

impl<S, F> Outcome<S, F> {
    /// Run exactly one of the two callbacks for its side effect and return
    /// `self` unchanged.
    pub fn either<A, B>(self, on_success: A, on_failure: B) -> Self
    where
        A: FnOnce(&S),
        B: FnOnce(&F),
    {
        match &self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
        self
    }

    /// Leave the pipeline: turn the outcome into a plain value by running
    /// exactly one of the two callbacks.
    pub fn extract<R, A, B>(self, on_success: A, on_failure: B) -> R
    where
        A: FnOnce(S) -> R,
        B: FnOnce(F) -> R,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }
}

use crate::Outcome;

impl<S, F> Outcome<S, F> {
    /// Observe the success payload for a side effect, returning `self`
    /// unchanged. Nothing runs on failure.
    pub fn tee<T>(self, f: T) -> Self
    where
        T: FnOnce(&S),
    {
        if let Outcome::Success(ref value) = self {
            f(value);
        }
        self
    }
}

//! A value that is either present or absent
//!
//! `Maybe` stands in for nullable values. An absent source (`Option::None`)
//! always lifts to [`Maybe::None`], never to a present value wrapping nothing.

use crate::errors::{Result, UsageError};
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

/// Hash written for every empty `Maybe`
const NONE_HASH: u64 = 0;
/// Seed mixed in before a present payload's own hash
const SOME_HASH_SEED: u64 = 41;

/// A present value of type `T`, or nothing.
///
/// Ordering follows `Option`: an absent value sorts before any present one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Maybe<T> {
    None,
    Some(T),
}

impl<T> Maybe<T> {
    /// Wrap a value known to be present.
    ///
    /// The payload is taken as-is, so `Maybe::some(None::<i32>)` is a
    /// present `Maybe<Option<i32>>`. Lift nullable sources with
    /// [`from_nullable`](Self::from_nullable) or [`try_some`](Self::try_some).
    pub const fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// The canonical empty value
    pub const fn none() -> Self {
        Maybe::None
    }

    /// Lift a nullable value, collapsing `None` to [`Maybe::None`]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }

    /// Build a present value, rejecting an absent payload
    pub fn try_some(value: Option<T>) -> Result<Self> {
        value.map(Maybe::Some).ok_or(UsageError::AbsentPayload)
    }

    /// Build a present value from a payload the caller guarantees exists.
    ///
    /// # Panics
    ///
    /// Panics with [`UsageError::AbsentPayload`] if `value` is `None`.
    #[track_caller]
    pub fn some_checked(value: Option<T>) -> Self {
        match Self::try_some(value) {
            Ok(maybe) => maybe,
            Err(e) => e.raise(),
        }
    }

    pub const fn has_value(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Maybe::None)
    }

    /// Borrow the value.
    ///
    /// # Panics
    ///
    /// Panics with [`UsageError::AbsentValue`] if the value is absent.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(e) => e.raise(),
        }
    }

    pub fn try_value(&self) -> Result<&T> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(UsageError::AbsentValue),
        }
    }

    /// The value, or `T::default()` when absent
    pub fn get_value_or_default(self) -> T
    where
        T: Default,
    {
        self.get_value_or_else(T::default)
    }

    /// The value, or `default` when absent
    pub fn get_value_or(self, default: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => default,
        }
    }

    /// The value, or the result of `default` when absent.
    ///
    /// `default` only runs for an empty `Maybe`, so expensive fallbacks are
    /// never built needlessly.
    pub fn get_value_or_else<D>(self, default: D) -> T
    where
        D: FnOnce() -> T,
    {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => default(),
        }
    }

    /// Run `action` against the value if present and hand `self` back
    pub fn apply<A>(self, action: A) -> Self
    where
        A: FnOnce(&T),
    {
        if let Maybe::Some(ref value) = self {
            action(value);
        }
        self
    }

    /// Map the value through `selector`; an empty `Maybe` stays empty and
    /// `selector` is not called.
    pub fn select<U, M>(self, selector: M) -> Maybe<U>
    where
        M: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(selector(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Like [`select`](Self::select), but the selector may itself produce
    /// nothing, in which case the result is empty.
    pub fn select_nullable<U, M>(self, selector: M) -> Maybe<U>
    where
        M: FnOnce(T) -> Option<U>,
    {
        match self {
            Maybe::Some(value) => Maybe::from_nullable(selector(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Lower to the bare value, falling back to `T::default()`
    pub fn into_value(self) -> T
    where
        T: Default,
    {
        self.get_value_or_default()
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Maybe::Some(value) => {
                state.write_u64(SOME_HASH_SEED);
                value.hash(state);
            }
            Maybe::None => state.write_u64(NONE_HASH),
        }
    }
}

impl<T: Display> Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Some(value) => write!(f, "Some<{value}>"),
            Maybe::None => f.write_str("None"),
        }
    }
}

/// Lifts nullable values into [`Maybe`], collapsing absence to `Maybe::None`
pub trait IntoMaybe<T> {
    fn to_maybe(self) -> Maybe<T>;
}

impl<T> IntoMaybe<T> for Option<T> {
    fn to_maybe(self) -> Maybe<T> {
        Maybe::from_nullable(self)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Maybe;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T: Serialize> Serialize for Maybe<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Maybe::Some(value) => serializer.serialize_some(value),
                Maybe::None => serializer.serialize_none(),
            }
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Option::<T>::deserialize(deserializer).map(Maybe::from)
        }
    }
}

//! Property-based tests for the laws the operators must obey
//!
//! Generators produce arbitrary outcomes and maybes over small integer and
//! string payloads; the properties below check them against the algebraic
//! identities callers rely on when refactoring pipelines.

use crate::{combine, combine3, Maybe, Outcome};
use proptest::prelude::*;

/// Property-based test generators
pub mod generators {
    use super::*;
    use proptest::option;

    /// Generate outcomes with integer payloads and short string errors
    pub fn arb_outcome() -> impl Strategy<Value = Outcome<i32, String>> {
        prop_oneof![
            (-1000i32..1000).prop_map(Outcome::<i32, String>::succeeded),
            "[a-z]{1,8}".prop_map(Outcome::<i32, String>::failed),
        ]
    }

    /// Generate present and absent values
    pub fn arb_maybe() -> impl Strategy<Value = Maybe<i32>> {
        option::of(-1000i32..1000).prop_map(Maybe::from)
    }
}

/// A fallible step used as a bind continuation
fn halve(n: i32) -> Outcome<i32, String> {
    if n % 2 == 0 {
        Outcome::succeeded(n / 2)
    } else {
        Outcome::failed(format!("odd:{n}"))
    }
}

/// A second continuation with a different failure condition
fn bounded(n: i32) -> Outcome<i32, String> {
    if n.abs() < 250 {
        Outcome::succeeded(n + 1)
    } else {
        Outcome::failed(format!("big:{n}"))
    }
}

mod property_tests {
    use super::generators::*;
    use super::*;
    use crate::errors::Variant;
    use proptest::proptest;
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        /// `succeeded` and `failed` hold exactly the payload they were given
        #[test]
        fn factories_hold_their_payload(v in any::<i32>(), e in ".*") {
            let ok: Outcome<i32, String> = Outcome::succeeded(v);
            prop_assert!(ok.is_success() && !ok.is_failure());
            prop_assert_eq!(*ok.success(), v);

            let bad: Outcome<i32, String> = Outcome::failed(e.clone());
            prop_assert!(bad.is_failure() && !bad.is_success());
            prop_assert_eq!(bad.failure(), &e);
        }

        /// Mapping a success is the same as succeeding with the mapped value
        #[test]
        fn map_matches_direct_application(v in -1000i32..1000) {
            let f = |n: i32| n * 3 - 1;
            prop_assert_eq!(
                Outcome::<i32, String>::succeeded(v).map(f),
                Outcome::succeeded(f(v))
            );
        }

        /// Mapping with the identity changes nothing
        #[test]
        fn map_identity(outcome in arb_outcome()) {
            prop_assert_eq!(outcome.clone().map(|v| v), outcome);
        }

        /// Left identity: binding a fresh success is just calling the step
        #[test]
        fn bind_left_identity(v in -1000i32..1000) {
            prop_assert_eq!(Outcome::succeeded(v).bind(halve), halve(v));
        }

        /// Right identity: binding `succeeded` changes nothing
        #[test]
        fn bind_right_identity(outcome in arb_outcome()) {
            prop_assert_eq!(outcome.clone().bind(Outcome::succeeded), outcome);
        }

        /// Associativity of bind
        #[test]
        fn bind_is_associative(outcome in arb_outcome()) {
            let nested = outcome.clone().bind(halve).bind(bounded);
            let flat = outcome.bind(|x| halve(x).bind(bounded));
            prop_assert_eq!(nested, flat);
        }

        /// A failure never reaches the continuation
        #[test]
        fn bind_never_runs_on_failure(e in "[a-z]{1,8}") {
            let calls = Cell::new(0);
            let out = Outcome::<i32, String>::failed(e.clone()).bind(|n| {
                calls.set(calls.get() + 1);
                halve(n)
            });
            prop_assert_eq!(out, Outcome::failed(e));
            prop_assert_eq!(calls.get(), 0);
        }

        /// Tee hands back the outcome it was given
        #[test]
        fn tee_is_transparent(outcome in arb_outcome()) {
            let seen = Cell::new(0);
            let out = outcome.clone().tee(|_| seen.set(seen.get() + 1));
            prop_assert_eq!(seen.get(), usize::from(outcome.is_success()));
            prop_assert_eq!(out, outcome);
        }

        /// Extract fires exactly one side
        #[test]
        fn extract_fires_one_side(outcome in arb_outcome()) {
            let side = outcome.clone().extract(|_| Variant::Success, |_| Variant::Failure);
            prop_assert_eq!(side == Variant::Success, outcome.is_success());
        }

        /// Combine keeps the leftmost failure
        #[test]
        fn combine_prefers_leftmost_failure(a in arb_outcome(), b in arb_outcome(), c in arb_outcome()) {
            let expected = match (&a, &b, &c) {
                (Outcome::Failure(e), _, _) | (_, Outcome::Failure(e), _) | (_, _, Outcome::Failure(e)) => {
                    Outcome::Failure(e.clone())
                }
                (Outcome::Success(x), Outcome::Success(y), Outcome::Success(z)) => Outcome::Success((*x, *y, *z)),
            };
            prop_assert_eq!(combine3(a.clone(), b.clone(), c), expected);
            prop_assert_eq!(
                combine(a.clone(), b.clone()).is_success(),
                a.is_success() && b.is_success()
            );
        }

        /// Equality of maybes matches equality of the underlying options
        #[test]
        fn maybe_equality_matches_option(x in arb_maybe(), y in arb_maybe()) {
            prop_assert_eq!(x == y, x.into_option() == y.into_option());
        }

        /// Equal maybes hash equally
        #[test]
        fn maybe_hash_agrees_with_equality(x in arb_maybe(), y in arb_maybe()) {
            if x == y {
                prop_assert_eq!(hash_of(&x), hash_of(&y));
            }
        }

        /// A present value never hashes like the empty one
        #[test]
        fn present_maybe_never_hashes_as_none(v in any::<i64>()) {
            prop_assert_ne!(hash_of(&Maybe::Some(v)), hash_of(&Maybe::<i64>::None));
        }

        /// Select over an absent value stays absent
        #[test]
        fn select_preserves_presence(x in arb_maybe()) {
            prop_assert_eq!(x.select(|v| v.wrapping_mul(2)).has_value(), x.has_value());
        }
    }
}

#![cfg(feature = "fallible")]
//! Property-based tests for the Try functor and monad laws.
//!
//! `Try` does not implement `PartialEq` (its error is type-erased), so these
//! tests compare the `Success` value, or the error message of a `Failure`.
//!
//! - **Identity Law**: `t.map(|x| x) == t`
//! - **Composition Law**: `t.map(f).map(g) == t.map(|x| g(f(x)))`
//! - **Left Identity**: `Try::of_successful(v).flat_map(f) == f(v)`
//! - **Right Identity**: `t.flat_map(Try::of_successful) == t`
//! - **Associativity**: `t.flat_map(f).flat_map(g) == t.flat_map(|x| f(x).flat_map(g))`
//! - **Short-circuit**: no transform runs on a `Failure`

use monads::fallible::Try;
use proptest::prelude::*;
use std::cell::Cell;

fn observe<T>(outcome: Try<T>) -> Result<T, String> {
    outcome.get().map_err(|error| error.to_string())
}

fn try_strategy() -> impl Strategy<Value = Result<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), "[a-z]{1,12}")
}

fn into_try(seed: Result<i32, String>) -> Try<i32> {
    seed.into()
}

fn halve_even(number: i32) -> Try<i32> {
    if number % 2 == 0 {
        Try::of_successful(number / 2)
    } else {
        Try::of_failed(format!("{number} is odd"))
    }
}

fn checked_increment(number: i32) -> Try<i32> {
    number
        .checked_add(1)
        .map_or_else(|| Try::of_failed("overflow"), Try::of_successful)
}

proptest! {
    #[test]
    fn prop_successful_then_get_returns_value(value in any::<String>()) {
        prop_assert_eq!(Try::of_successful(value.clone()).get().unwrap(), value);
    }

    #[test]
    fn prop_identity_law(seed in try_strategy()) {
        let left = observe(into_try(seed.clone()).map(|x| x));
        let right = observe(into_try(seed));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_composition_law(seed in try_strategy()) {
        let function1 = |n: i32| n.wrapping_sub(7);
        let function2 = |n: i32| format!("<{n}>");

        let left = observe(into_try(seed.clone()).map(function1).map(function2));
        let right = observe(into_try(seed).map(|x| function2(function1(x))));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_left_identity(value in any::<i32>()) {
        let left = observe(Try::of_successful(value).flat_map(halve_even));
        let right = observe(halve_even(value));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_right_identity(seed in try_strategy()) {
        let left = observe(into_try(seed.clone()).flat_map(Try::of_successful));
        let right = observe(into_try(seed));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_associativity(seed in try_strategy()) {
        let left = observe(into_try(seed.clone()).flat_map(halve_even).flat_map(checked_increment));
        let right = observe(into_try(seed).flat_map(|x| halve_even(x).flat_map(checked_increment)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_failure_short_circuits(message in "[a-z]{1,12}") {
        let calls = Cell::new(0);

        let outcome = Try::<i32>::of_failed(message.clone())
            .map(|x| {
                calls.set(calls.get() + 1);
                x
            })
            .flat_map(|x| {
                calls.set(calls.get() + 1);
                Try::of_successful(x)
            });

        prop_assert_eq!(observe(outcome), Err(message));
        prop_assert_eq!(calls.get(), 0);
    }
}

//! The `Try` type - a computation that either produced a value or failed.
//!
//! A [`Try<T>`] is always exactly one of:
//!
//! - [`Try::Success`]: holds the value of type `T`
//! - [`Try::Failure`]: holds the error that ended the computation
//!
//! `map`, `try_map` and `flat_map` on a `Success` run the given closure and
//! capture anything it raises, whether a returned error or a panic, into a
//! new `Failure`. On a `Failure` they return the same error without ever
//! invoking the closure. A chain of transformations therefore needs no
//! explicit branching: the first failure travels unchanged to the end, where
//! [`Try::get`] hands it back.
//!
//! # Panics and `panic = "abort"`
//!
//! Panic capture relies on [`std::panic::catch_unwind`]. In binaries built
//! with `panic = "abort"` a panicking closure aborts the process instead of
//! producing a `Failure`.
//!
//! `catch_unwind` does not bypass the panic hook. A captured panic still
//! prints the usual message to stderr, with a backtrace under
//! `RUST_BACKTRACE`, before it becomes a `Failure`. Install a quieter hook
//! with [`std::panic::set_hook`] if that output is unwanted.
//!
//! A panic raised with [`std::panic::panic_any`] whose payload is a
//! [`BoxError`] is captured as that error, so `get` returns it with its
//! concrete type. Any other payload is wrapped in a [`PanicError`].
//!
//! # Examples
//!
//! ```rust
//! use monads::fallible::Try;
//!
//! let port = Try::of_failable(|| "8080".parse::<u16>())
//!     .map(|port| port + 1)
//!     .get()
//!     .unwrap();
//! assert_eq!(port, 8081);
//!
//! let invalid = Try::of_failable(|| "eighty".parse::<u16>())
//!     .map(|port| port + 1)
//!     .get();
//! assert!(invalid.is_err());
//! ```

use std::error::Error;
use std::panic::{self, AssertUnwindSafe};

use super::error::PanicError;
use crate::throwing::{BoxError, ThrowingConsumer, ThrowingFunction, ThrowingSupplier};

/// A computation that either succeeded with a value or failed with an error.
///
/// The variant of a `Try` is fixed at construction. Every operation consumes
/// the receiver and returns a new `Try`.
///
/// The `T` of a `Failure` is carried only at the type level; a failed `Try`
/// holds no `T`.
#[derive(Debug)]
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with the contained error.
    Failure(BoxError),
}

impl<T> Try<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a known value in a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::fallible::Try;
    ///
    /// assert_eq!(Try::of_successful(42).get().unwrap(), 42);
    /// ```
    #[inline]
    pub const fn of_successful(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a known error in a `Failure`.
    ///
    /// The error is boxed as-is; `downcast_ref` on the stored error recovers
    /// the original type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::fallible::Try;
    ///
    /// let failed: Try<i32> = Try::of_failed("x");
    /// assert_eq!(failed.get().unwrap_err().to_string(), "x");
    /// ```
    #[inline]
    pub fn of_failed<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Failure(error.into())
    }

    /// Runs `supplier` once, right away, and captures its outcome.
    ///
    /// A returned value becomes a `Success`. A returned error becomes a
    /// `Failure` holding that same error. A panic becomes a `Failure`
    /// holding a [`PanicError`] with the original payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::fallible::Try;
    ///
    /// let parsed = Try::of_failable(|| "12".parse::<i32>());
    /// assert!(parsed.is_success());
    ///
    /// let failed = Try::of_failable(|| "twelve".parse::<i32>());
    /// assert!(failed.is_failure());
    /// ```
    pub fn of_failable<S>(supplier: S) -> Self
    where
        S: ThrowingSupplier<T>,
    {
        capture("of_failable", || supplier.get())
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns a reference to the captured error, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::fallible::Try;
    ///
    /// let failed: Try<i32> = Try::of_failed("bad input");
    /// assert_eq!(failed.error().unwrap().to_string(), "bad input");
    /// assert!(Try::of_successful(1).error().is_none());
    /// ```
    #[inline]
    pub fn error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error.as_ref()),
        }
    }

    /// Converts into `Some(value)` for a `Success`, discarding any error.
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into `Some(error)` for a `Failure`, discarding any value.
    #[inline]
    pub fn failure(self) -> Option<BoxError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value of a `Success`, or the error of a `Failure`.
    ///
    /// The error is the very one that was captured, with its concrete type
    /// intact.
    ///
    /// # Errors
    ///
    /// Returns the captured error if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::fallible::Try;
    /// use std::num::ParseIntError;
    ///
    /// let error = Try::of_failable(|| "x".parse::<i32>()).get().unwrap_err();
    /// assert!(error.downcast_ref::<ParseIntError>().is_some());
    /// ```
    #[inline]
    pub fn get(self) -> Result<T, BoxError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Returns the value of a `Success`, re-raising the failure otherwise.
    ///
    /// # Panics
    ///
    /// On a `Failure` that captured a panic, resumes that panic with its
    /// original payload. On any other `Failure`, panics with the error's
    /// message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::fallible::Try;
    ///
    /// assert_eq!(Try::of_successful("ok").unwrap(), "ok");
    /// ```
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => match error.downcast::<PanicError>() {
                Ok(panic_error) => panic::resume_unwind((*panic_error).into_payload()),
                Err(error) => panic!("called `Try::unwrap()` on a `Failure` value: {error}"),
            },
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Applies `function` to the value of a `Success`.
    ///
    /// `map :: (a -> b) -> Try a -> Try b`
    ///
    /// If `function` panics, the panic is captured into a `Failure`. On a
    /// `Failure`, `function` is never invoked and the error is passed on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::fallible::Try;
    ///
    /// let shouted = Try::of_successful("My test string value")
    ///     .map(|text| &text[..5])
    ///     .map(str::to_uppercase);
    /// assert_eq!(shouted.get().unwrap(), "MY TE");
    /// ```
    pub fn map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => capture("map", || Ok(function(value))),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Applies a [`ThrowingFunction`] to the value of a `Success`.
    ///
    /// Like [`map`](Self::map), but `function` may also fail by returning an
    /// error, which is captured into a `Failure` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::fallible::Try;
    ///
    /// let parsed = Try::of_successful("42").try_map(|text: &str| text.parse::<i32>());
    /// assert_eq!(parsed.get().unwrap(), 42);
    ///
    /// let failed = Try::of_successful("x").try_map(|text: &str| text.parse::<i32>());
    /// assert!(failed.is_failure());
    /// ```
    pub fn try_map<U, F>(self, function: F) -> Try<U>
    where
        F: ThrowingFunction<T, U>,
    {
        match self {
            Self::Success(value) => capture("try_map", || function.apply(value)),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Applies `function` to the value of a `Success` and returns the `Try`
    /// it produces, without wrapping it again.
    ///
    /// `flat_map :: (a -> Try b) -> Try a -> Try b`
    ///
    /// If `function` panics, the panic is captured into a `Failure`. On a
    /// `Failure`, `function` is never invoked and the error is passed on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::fallible::Try;
    ///
    /// fn parse(text: &str) -> Try<i32> {
    ///     Try::of_failable(|| text.parse::<i32>())
    /// }
    ///
    /// let sum = Try::of_successful("20")
    ///     .flat_map(parse)
    ///     .flat_map(|number| Try::of_successful(number + 22));
    /// assert_eq!(sum.get().unwrap(), 42);
    /// ```
    pub fn flat_map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Success(value) => capture("flat_map", || Ok(function(value))).flatten(),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Feeds the value of a `Success` to a [`ThrowingConsumer`].
    ///
    /// Yields `Success(())` when the consumer completes, or a `Failure`
    /// holding whatever it raised. On a `Failure`, `consumer` is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::fallible::Try;
    ///
    /// let mut written = Vec::new();
    /// let outcome = Try::of_successful(3).accept(|value: i32| -> Result<(), std::io::Error> {
    ///     written.push(value);
    ///     Ok(())
    /// });
    ///
    /// assert!(outcome.is_success());
    /// assert_eq!(written, vec![3]);
    /// ```
    pub fn accept<C>(self, consumer: C) -> Try<()>
    where
        C: ThrowingConsumer<T>,
    {
        match self {
            Self::Success(value) => capture("accept", || consumer.accept(value)),
            Self::Failure(error) => Try::Failure(error),
        }
    }
}

impl<T> Try<Try<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::fallible::Try;
    ///
    /// let nested = Try::of_successful(Try::of_successful(1));
    /// assert_eq!(nested.flatten().get().unwrap(), 1);
    /// ```
    #[inline]
    pub fn flatten(self) -> Try<T> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Try::Failure(error),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T, E> From<Result<T, E>> for Try<T>
where
    E: Into<BoxError>,
{
    /// `Ok(v)` becomes `Success(v)` and `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

impl<T> From<Try<T>> for Result<T, BoxError> {
    /// Same as [`Try::get`].
    #[inline]
    fn from(outcome: Try<T>) -> Self {
        outcome.get()
    }
}

// =============================================================================
// Capture
// =============================================================================

/// Runs `computation`, turning a returned error or a panic into a `Failure`.
///
/// A panic whose payload is already a [`BoxError`] is stored as that error.
/// Every other payload is wrapped in a [`PanicError`].
fn capture<T, F>(operation: &'static str, computation: F) -> Try<T>
where
    F: FnOnce() -> Result<T, BoxError>,
{
    let result = panic::catch_unwind(AssertUnwindSafe(computation)).unwrap_or_else(|payload| {
        Err(payload
            .downcast::<BoxError>()
            .map_or_else(|payload| Box::new(PanicError::new(payload)) as BoxError, |error| *error))
    });

    match result {
        Ok(value) => Try::Success(value),
        Err(error) => {
            record_capture(operation, &error);
            Try::Failure(error)
        }
    }
}

#[inline]
fn record_capture(operation: &'static str, error: &BoxError) {
    #[cfg(feature = "tracing")]
    tracing::debug!(operation, error = %error, "captured failure");
    #[cfg(not(feature = "tracing"))]
    let _ = (operation, error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;
    use std::cell::Cell;
    use std::fmt;

    assert_impl_all!(Try<i32>: Send, Sync);
    assert_impl_all!(Try<String>: Send, Sync, fmt::Debug);

    #[derive(Debug)]
    struct RuntimeError(&'static str);

    impl fmt::Display for RuntimeError {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str(self.0)
        }
    }

    impl Error for RuntimeError {}

    const VALUE: &str = "My test string value";

    // =========================================================================
    // Construction
    // =========================================================================

    #[rstest]
    fn of_successful_wraps_a_string() {
        assert_eq!(Try::of_successful(VALUE).get().unwrap(), VALUE);
    }

    #[rstest]
    fn of_failed_keeps_error_type() {
        let failed: Try<i32> = Try::of_failed(RuntimeError("x"));
        let error = failed.get().unwrap_err();
        assert_eq!(error.downcast_ref::<RuntimeError>().unwrap().0, "x");
    }

    #[rstest]
    fn of_failable_invokes_supplier_exactly_once() {
        let calls = Cell::new(0);
        let outcome = Try::of_failable(|| {
            calls.set(calls.get() + 1);
            Ok::<_, RuntimeError>(5)
        });

        assert_eq!(calls.get(), 1);
        assert_eq!(outcome.get().unwrap(), 5);
    }

    #[rstest]
    fn of_failable_captures_returned_error() {
        let outcome: Try<i32> = Try::of_failable(|| Err(RuntimeError("supplier failed")));
        assert_eq!(outcome.get().unwrap_err().to_string(), "supplier failed");
    }

    #[rstest]
    fn of_failable_captures_panic() {
        let outcome: Try<i32> = Try::of_failable(|| -> Result<i32, RuntimeError> {
            panic!("supplier panicked")
        });

        let error = outcome.failure().unwrap();
        let panic_error = error.downcast_ref::<PanicError>().unwrap();
        assert_eq!(panic_error.message(), "supplier panicked");
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    #[rstest]
    fn variant_predicates() {
        let success = Try::of_successful(1);
        let failure: Try<i32> = Try::of_failed("no");

        assert!(success.is_success());
        assert!(!success.is_failure());
        assert!(failure.is_failure());
        assert!(!failure.is_success());
    }

    #[rstest]
    fn success_and_failure_projections() {
        assert_eq!(Try::of_successful(1).success(), Some(1));
        assert!(Try::of_successful(1).failure().is_none());

        let failure: Try<i32> = Try::of_failed("no");
        assert!(failure.success().is_none());
    }

    // =========================================================================
    // map
    // =========================================================================

    #[rstest]
    fn map_transforms_success() {
        let mapped = Try::of_successful(VALUE).map(str::to_uppercase);
        assert_eq!(mapped.get().unwrap(), VALUE.to_uppercase());
    }

    #[rstest]
    fn mappers_chain() {
        let mapped = Try::of_successful(VALUE)
            .map(|text| &text[..5])
            .map(str::to_uppercase);
        assert_eq!(mapped.get().unwrap(), "MY TE");
    }

    #[rstest]
    fn map_captures_panic_as_failure() {
        let mapped: Try<i32> = Try::of_successful(1).map(|_| panic!("map panicked"));
        let error = mapped.failure().unwrap();
        assert_eq!(error.to_string(), "computation panicked: map panicked");
    }

    #[rstest]
    fn map_keeps_error_raised_as_panic_payload() {
        let mapped: Try<i32> = Try::of_successful(1).map(|_| -> i32 {
            std::panic::panic_any(Box::new(RuntimeError("raised")) as BoxError)
        });

        let error = mapped.get().unwrap_err();
        assert_eq!(error.downcast_ref::<RuntimeError>().unwrap().0, "raised");
        assert_eq!(error.to_string(), "raised");
    }

    #[rstest]
    fn of_failable_keeps_error_raised_as_panic_payload() {
        let outcome: Try<i32> = Try::of_failable(|| -> Result<i32, RuntimeError> {
            std::panic::panic_any(Box::new(RuntimeError("supplier raised")) as BoxError)
        });

        let error = outcome.failure().unwrap();
        assert!(!error.is::<PanicError>());
        assert!(error.is::<RuntimeError>());
    }

    #[rstest]
    fn map_on_failure_never_invokes_function() {
        let calls = Cell::new(0);
        let failed: Try<i32> = Try::of_failed(RuntimeError("x"));

        let mapped = failed.map(|number| {
            calls.set(calls.get() + 1);
            number + 1
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(mapped.get().unwrap_err().to_string(), "x");
    }

    // =========================================================================
    // try_map
    // =========================================================================

    #[rstest]
    #[case("17", Some(17))]
    #[case("-3", Some(-3))]
    #[case("seventeen", None)]
    fn try_map_parses(#[case] input: &str, #[case] expected: Option<i32>) {
        let parsed = Try::of_successful(input).try_map(|text: &str| text.parse::<i32>());
        assert_eq!(parsed.success(), expected);
    }

    #[rstest]
    fn try_map_accepts_composed_function() {
        let parse = |text: &str| text.parse::<i32>();
        let double = |number: i32| Ok::<_, RuntimeError>(number * 2);

        let doubled = Try::of_successful("21").try_map(parse.and_then(double));
        assert_eq!(doubled.get().unwrap(), 42);
    }

    // =========================================================================
    // flat_map
    // =========================================================================

    #[rstest]
    fn flat_map_returns_inner_try() {
        let flattened =
            Try::of_successful(VALUE).flat_map(|text| Try::of_successful(text.to_uppercase()));
        assert_eq!(flattened.get().unwrap(), VALUE.to_uppercase());
    }

    #[rstest]
    fn flat_mappers_chain() {
        let take_left_five = |text: &'static str| Try::of_successful(&text[..5]);
        let to_upper_case = |text: &str| Try::of_successful(text.to_uppercase());

        let result = Try::of_successful(VALUE)
            .flat_map(take_left_five)
            .flat_map(to_upper_case);
        assert_eq!(result.get().unwrap(), "MY TE");
    }

    #[rstest]
    fn flat_map_passes_on_returned_failure() {
        let result: Try<i32> =
            Try::of_successful(1).flat_map(|_| Try::of_failed(RuntimeError("inner")));
        assert_eq!(result.get().unwrap_err().to_string(), "inner");
    }

    #[rstest]
    fn flat_map_captures_panic() {
        let result: Try<i32> = Try::of_successful(1).flat_map(|_| panic!("flat_map panicked"));
        assert!(result.error().unwrap().is::<PanicError>());
    }

    #[rstest]
    fn flat_map_on_failure_never_invokes_function() {
        let calls = Cell::new(0);
        let failed: Try<i32> = Try::of_failed(RuntimeError("x"));

        let result = failed.flat_map(|number| {
            calls.set(calls.get() + 1);
            Try::of_successful(number)
        });

        assert_eq!(calls.get(), 0);
        assert!(result.is_failure());
    }

    // =========================================================================
    // accept
    // =========================================================================

    #[rstest]
    fn accept_captures_consumer_error() {
        let outcome = Try::of_successful(2).accept(|_: i32| Err::<(), _>(RuntimeError("refused")));
        assert_eq!(outcome.get().unwrap_err().to_string(), "refused");
    }

    #[rstest]
    fn accept_on_failure_never_invokes_consumer() {
        let calls = Cell::new(0);
        let failed: Try<i32> = Try::of_failed("x");

        let outcome = failed.accept(|_: i32| {
            calls.set(calls.get() + 1);
            Ok::<(), RuntimeError>(())
        });

        assert_eq!(calls.get(), 0);
        assert!(outcome.is_failure());
    }

    // =========================================================================
    // unwrap
    // =========================================================================

    #[rstest]
    #[should_panic(expected = "called `Try::unwrap()` on a `Failure` value: x")]
    fn unwrap_on_failure_panics_with_message() {
        let failed: Try<i32> = Try::of_failed(RuntimeError("x"));
        failed.unwrap();
    }

    #[rstest]
    fn unwrap_resumes_original_panic_payload() {
        let failed: Try<i32> = Try::of_successful(1).map(|_| std::panic::panic_any(99_u32));

        let payload = panic::catch_unwind(AssertUnwindSafe(|| failed.unwrap())).unwrap_err();
        assert_eq!(payload.downcast_ref::<u32>(), Some(&99));
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    #[rstest]
    fn from_result_ok_and_err() {
        let success: Try<i32> = Ok::<_, RuntimeError>(3).into();
        let failure: Try<i32> = Err::<i32, _>(RuntimeError("e")).into();

        assert_eq!(success.get().unwrap(), 3);
        assert_eq!(failure.get().unwrap_err().to_string(), "e");
    }

    #[rstest]
    fn into_result() {
        let result: Result<i32, BoxError> = Try::of_successful(3).into();
        assert_eq!(result.unwrap(), 3);
    }
}

//! Error types produced when a `Try` captures a panic.

use std::any::Any;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// A panic raised inside a computation and captured into a
/// [`Try::Failure`](super::Try::Failure).
///
/// The original panic payload is kept untouched, so it can be handed back to
/// [`std::panic::resume_unwind`] to re-raise the panic exactly as it was
/// thrown. [`Try::unwrap`](super::Try::unwrap) does this automatically.
///
/// # Examples
///
/// ```rust
/// use monads::fallible::{PanicError, Try};
///
/// let failed: Try<i32> = Try::of_successful(1).map(|_| panic!("boom"));
/// let error = failed.failure().unwrap();
/// let panic_error = error.downcast_ref::<PanicError>().unwrap();
/// assert_eq!(panic_error.message(), "boom");
/// ```
pub struct PanicError {
    message: String,
    payload: Mutex<Box<dyn Any + Send>>,
}

impl PanicError {
    /// Wraps the payload returned by [`std::panic::catch_unwind`].
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|text| (*text).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| String::from("panic with a non-string payload"));

        Self {
            message,
            payload: Mutex::new(payload),
        }
    }

    /// Returns the panic message, or a placeholder when the payload was not a
    /// string.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the original panic payload.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for PanicError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PanicError")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for PanicError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "computation panicked: {}", self.message)
    }
}

impl std::error::Error for PanicError {}

//! Functional contracts whose invocation may fail with any error.
//!
//! These traits are the fallible counterparts of the standard closure traits:
//!
//! - [`ThrowingFunction`]: `In -> Out`, may fail
//! - [`ThrowingConsumer`]: `T -> ()`, may fail
//! - [`ThrowingSupplier`]: `() -> T`, may fail
//!
//! Each is implemented for every closure returning `Result<_, E>` where
//! `E: Into<BoxError>`. Errors are boxed into a [`BoxError`] without any
//! wrapping, so the original error type is recoverable through
//! `downcast_ref`.
//!
//! # Examples
//!
//! ```rust
//! use monads::throwing::{BoxError, ThrowingFunction};
//!
//! let parse = |text: &str| text.parse::<i32>();
//! let error: BoxError = parse.apply("x").unwrap_err();
//! assert!(error.downcast_ref::<std::num::ParseIntError>().is_some());
//! ```

mod consumer;
mod function;
mod supplier;

pub use consumer::{AndThenConsumer, ThrowingConsumer};
pub use function::{AndThen, ThrowingFunction};
pub use supplier::ThrowingSupplier;

/// Any error a throwing contract can raise.
///
/// This is the type-erased error carried through the crate. It is `Send` and
/// `Sync`, and `downcast` recovers the concrete error type that was raised.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

//! # monads
//!
//! Small functional-composition building blocks: an infallible [`Identity`]
//! wrapper and a fallible [`Try`] wrapper, both with `map` and `flat_map`.
//!
//! ## Overview
//!
//! - **Throwing contracts**: [`ThrowingFunction`], [`ThrowingConsumer`] and
//!   [`ThrowingSupplier`], closures that may fail with any error
//! - **Identity**: wraps a value; transforms never fail
//! - **Try**: a `Success` or a `Failure`; errors and panics raised by
//!   transforms are captured into a `Failure` and every later step is skipped
//!
//! ## Feature Flags
//!
//! - `throwing`: throwing functional contracts
//! - `identity`: the [`Identity`] wrapper
//! - `fallible`: the [`Try`] wrapper (enables `throwing`)
//! - `serde`: `Serialize`/`Deserialize` for [`Identity`]
//! - `tracing`: emit a `tracing` debug event whenever a failure is captured
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use monads::prelude::*;
//!
//! let value = "My test string value";
//!
//! let identity = Identity::of(value).map(|text| &text[..5]).map(str::to_uppercase);
//! let attempt = Try::of_successful(value).map(|text| &text[..5]).map(str::to_uppercase);
//!
//! assert_eq!(identity.get(), "MY TE");
//! assert_eq!(attempt.get().unwrap(), "MY TE");
//! ```
//!
//! [`Identity`]: crate::value::Identity
//! [`Try`]: crate::fallible::Try
//! [`ThrowingFunction`]: crate::throwing::ThrowingFunction
//! [`ThrowingConsumer`]: crate::throwing::ThrowingConsumer
//! [`ThrowingSupplier`]: crate::throwing::ThrowingSupplier

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monads::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "throwing")]
    pub use crate::throwing::*;

    #[cfg(feature = "identity")]
    pub use crate::value::*;

    #[cfg(feature = "fallible")]
    pub use crate::fallible::*;
}

#[cfg(feature = "throwing")]
pub mod throwing;

#[cfg(feature = "identity")]
pub mod value;

#[cfg(feature = "fallible")]
pub mod fallible;

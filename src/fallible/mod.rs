//! Fallible computations that capture their failure as data.
//!
//! - [`Try`]: either a `Success` holding a value or a `Failure` holding the
//!   error that ended the computation
//! - [`PanicError`]: the error stored when a panic is captured
//!
//! # Short-circuiting
//!
//! Once a chain reaches a `Failure`, no later closure runs:
//!
//! ```rust
//! use monads::fallible::Try;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let outcome: Try<String> = Try::of_failed("x")
//!     .map(|text: String| {
//!         calls.set(calls.get() + 1);
//!         text.to_uppercase()
//!     })
//!     .flat_map(|text| {
//!         calls.set(calls.get() + 1);
//!         Try::of_successful(text)
//!     });
//!
//! assert_eq!(outcome.get().unwrap_err().to_string(), "x");
//! assert_eq!(calls.get(), 0);
//! ```
//!
//! # Laws
//!
//! On values whose transforms do not fail, `Try` obeys the functor and monad
//! laws:
//!
//! ```text
//! Try::of_successful(v).map(|x| x)     == Try::of_successful(v)
//! t.map(f).map(g)                      == t.map(|x| g(f(x)))
//! Try::of_successful(v).flat_map(f)    == f(v)
//! t.flat_map(Try::of_successful)       == t
//! t.flat_map(f).flat_map(g)            == t.flat_map(|x| f(x).flat_map(g))
//! ```

mod error;
mod try_monad;

pub use crate::throwing::BoxError;
pub use error::PanicError;
pub use try_monad::Try;

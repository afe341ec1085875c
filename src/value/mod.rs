//! Infallible value wrappers.
//!
//! - [`Identity`]: holds exactly one value and supports `map` / `flat_map`
//!
//! # Laws
//!
//! `Identity` satisfies the functor and monad laws:
//!
//! ```text
//! Identity::of(v).map(|x| x)           == Identity::of(v)
//! Identity::of(v).map(f).map(g)        == Identity::of(v).map(|x| g(f(x)))
//! Identity::of(v).flat_map(f)          == f(v)
//! m.flat_map(Identity::of)             == m
//! m.flat_map(f).flat_map(g)            == m.flat_map(|x| f(x).flat_map(g))
//! ```

mod identity;

pub use identity::Identity;

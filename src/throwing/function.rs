//! Unary transforms that may fail.
//!
//! This module provides the [`ThrowingFunction`] trait, the fallible
//! counterpart of `FnOnce(In) -> Out`, together with the [`AndThen`] adapter
//! produced by [`ThrowingFunction::and_then`] and [`ThrowingFunction::compose`].
//!
//! # Laws
//!
//! Composition of throwing functions behaves like ordinary function
//! composition on the success path:
//!
//! ```text
//! f.and_then(g).apply(x) == f.apply(x).and_then(|y| g.apply(y))
//! f.compose(g).apply(x)  == g.apply(x).and_then(|y| f.apply(y))
//! ```
//!
//! The first error encountered ends the pipeline; later stages are not invoked.

use std::marker::PhantomData;

use super::BoxError;

/// A transform from `In` to `Out` that may fail with any error.
///
/// Every closure `FnOnce(In) -> Result<Out, E>` with `E: Into<BoxError>` is a
/// `ThrowingFunction`, so plain closures and functions can be passed wherever
/// one is expected.
///
/// # Examples
///
/// ```rust
/// use monads::throwing::ThrowingFunction;
///
/// let parse = |text: &str| text.parse::<i32>();
/// assert_eq!(parse.apply("42").unwrap(), 42);
///
/// let parse = |text: &str| text.parse::<i32>();
/// assert!(parse.apply("forty-two").is_err());
/// ```
pub trait ThrowingFunction<In, Out> {
    /// Applies the function to `input`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the underlying computation raised, boxed but
    /// otherwise unchanged.
    fn apply(self, input: In) -> Result<Out, BoxError>;

    /// Returns a function that applies `self` and then `after` to its result.
    ///
    /// If `self` fails, `after` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::throwing::ThrowingFunction;
    ///
    /// let parse = |text: &str| text.parse::<i32>();
    /// let double = |number: i32| Ok::<_, std::convert::Infallible>(number * 2);
    ///
    /// let parse_and_double = parse.and_then(double);
    /// assert_eq!(parse_and_double.apply("21").unwrap(), 42);
    /// ```
    #[inline]
    fn and_then<Next, G>(self, after: G) -> AndThen<Self, G, Out>
    where
        Self: Sized,
        G: ThrowingFunction<Out, Next>,
    {
        AndThen::new(self, after)
    }

    /// Returns a function that applies `before` and then `self` to its result.
    ///
    /// This is the mirror image of [`and_then`](Self::and_then):
    /// `f.compose(g)` behaves as `g.and_then(f)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::throwing::ThrowingFunction;
    ///
    /// let to_upper = |text: String| Ok::<_, std::convert::Infallible>(text.to_uppercase());
    /// let take_left_five = |text: String| {
    ///     Ok::<_, std::convert::Infallible>(text.chars().take(5).collect::<String>())
    /// };
    ///
    /// let mapper = to_upper.compose(take_left_five);
    /// assert_eq!(mapper.apply("My test string value".to_string()).unwrap(), "MY TE");
    /// ```
    #[inline]
    fn compose<Before, G>(self, before: G) -> AndThen<G, Self, In>
    where
        Self: Sized,
        G: ThrowingFunction<Before, In>,
    {
        AndThen::new(before, self)
    }
}

impl<F, In, Out, E> ThrowingFunction<In, Out> for F
where
    F: FnOnce(In) -> Result<Out, E>,
    E: Into<BoxError>,
{
    #[inline]
    fn apply(self, input: In) -> Result<Out, BoxError> {
        self(input).map_err(Into::into)
    }
}

/// Sequential composition of two throwing functions.
///
/// Created by [`ThrowingFunction::and_then`] and [`ThrowingFunction::compose`].
/// `Middle` is the type flowing from the first stage into the second.
pub struct AndThen<F, G, Middle> {
    first: F,
    second: G,
    middle: PhantomData<fn(Middle)>,
}

impl<F, G, Middle> AndThen<F, G, Middle> {
    #[inline]
    const fn new(first: F, second: G) -> Self {
        Self {
            first,
            second,
            middle: PhantomData,
        }
    }
}

impl<F, G, In, Middle, Out> ThrowingFunction<In, Out> for AndThen<F, G, Middle>
where
    F: ThrowingFunction<In, Middle>,
    G: ThrowingFunction<Middle, Out>,
{
    #[inline]
    fn apply(self, input: In) -> Result<Out, BoxError> {
        let middle = self.first.apply(input)?;
        self.second.apply(middle)
    }
}

impl<F, G, Middle> std::fmt::Debug for AndThen<F, G, Middle> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AndThen")
            .field("middle", &std::any::type_name::<Middle>())
            .finish_non_exhaustive()
    }
}

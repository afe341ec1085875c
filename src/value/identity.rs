//! Identity wrapper type - the identity functor and monad.
//!
//! This module provides the `Identity` type, the simplest possible wrapper
//! around a value. It supports `map` and `flat_map` but has no failure
//! channel: a panic raised by a transform propagates straight to the caller.
//! Use [`Try`](crate::fallible::Try) when failures must be captured.

/// The identity functor - wraps a value without adding any behavior.
///
/// An `Identity` always holds exactly one value. It is immutable: the only
/// way to change the wrapped value is to produce a new `Identity` with
/// [`map`](Self::map) or [`flat_map`](Self::flat_map).
///
/// # Examples
///
/// ```rust
/// use monads::value::Identity;
///
/// let shouted = Identity::of("My test string value")
///     .map(|text| &text[..5])
///     .map(str::to_uppercase)
///     .get();
/// assert_eq!(shouted, "MY TE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity<T>(T);

impl<T> Identity<T> {
    /// Lifts a value into an `Identity`.
    ///
    /// `pure :: a -> Identity a`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::value::Identity;
    ///
    /// assert_eq!(Identity::pure(42).get(), 42);
    /// ```
    #[inline]
    pub const fn pure(value: T) -> Self {
        Self(value)
    }

    /// Lifts a value into an `Identity`. Same as [`pure`](Self::pure).
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::pure(value)
    }

    /// Builds an `Identity` from the value returned by `supplier`.
    ///
    /// The supplier is invoked exactly once, before this function returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::value::Identity;
    ///
    /// let identity = Identity::of_getter(|| vec![1, 2, 3]);
    /// assert_eq!(identity.get(), vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn of_getter<F>(supplier: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self(supplier())
    }

    /// Applies `function` to the wrapped value and wraps the result.
    ///
    /// `map :: (a -> b) -> Identity a -> Identity b`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::value::Identity;
    ///
    /// let length = Identity::of(String::from("hello")).map(|text| text.len());
    /// assert_eq!(length.get(), 5);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Identity<U>
    where
        F: FnOnce(T) -> U,
    {
        Identity(function(self.0))
    }

    /// Applies `function` to the wrapped value and returns its `Identity`
    /// as-is, without wrapping it again.
    ///
    /// `flat_map :: (a -> Identity b) -> Identity a -> Identity b`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::value::Identity;
    ///
    /// let doubled = Identity::of(21).flat_map(|number| Identity::of(number * 2));
    /// assert_eq!(doubled, Identity::of(42));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Identity<U>
    where
        F: FnOnce(T) -> Identity<U>,
    {
        function(self.0)
    }

    /// Consumes the `Identity` and returns the wrapped value.
    #[inline]
    pub fn get(self) -> T {
        self.0
    }

    /// Returns a reference to the wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::value::Identity;
    ///
    /// let identity = Identity::of(String::from("hello"));
    /// assert_eq!(identity.as_inner(), "hello");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Identity<T> {
    fn from(value: T) -> Self {
        Self::of(value)
    }
}

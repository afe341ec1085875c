//! Producers of a value that may fail.

use super::BoxError;

/// Produces a value of type `T`, or fails with any error.
///
/// Every closure `FnOnce() -> Result<T, E>` with `E: Into<BoxError>` is a
/// `ThrowingSupplier`. This is the argument type of
/// [`Try::of_failable`](crate::fallible::Try::of_failable).
///
/// # Examples
///
/// ```rust
/// use monads::throwing::ThrowingSupplier;
///
/// let read = || "12".parse::<u8>();
/// assert_eq!(read.get().unwrap(), 12);
/// ```
pub trait ThrowingSupplier<T> {
    /// Produces the value.
    ///
    /// # Errors
    ///
    /// Returns whatever error the supplier raised, boxed but otherwise unchanged.
    fn get(self) -> Result<T, BoxError>;
}

impl<F, T, E> ThrowingSupplier<T> for F
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    #[inline]
    fn get(self) -> Result<T, BoxError> {
        self().map_err(Into::into)
    }
}

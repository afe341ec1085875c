//! Side-effecting consumers that may fail.

use super::BoxError;

/// Consumes a value of type `T`, producing no result, and may fail.
///
/// Every closure `FnOnce(T) -> Result<(), E>` with `E: Into<BoxError>` is a
/// `ThrowingConsumer`.
///
/// # Examples
///
/// ```rust
/// use monads::throwing::ThrowingConsumer;
///
/// let mut seen = Vec::new();
/// let record = |value: i32| -> Result<(), std::io::Error> {
///     seen.push(value);
///     Ok(())
/// };
///
/// record.accept(7).unwrap();
/// assert_eq!(seen, vec![7]);
/// ```
pub trait ThrowingConsumer<T> {
    /// Consumes `value`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the consumer raised, boxed but otherwise unchanged.
    fn accept(self, value: T) -> Result<(), BoxError>;

    /// Returns a consumer that feeds the same value to `self` and then to `after`.
    ///
    /// If `self` fails, `after` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::throwing::ThrowingConsumer;
    /// use std::cell::RefCell;
    ///
    /// let log = RefCell::new(Vec::new());
    /// let first = |value: i32| -> Result<(), std::io::Error> {
    ///     log.borrow_mut().push(format!("first {value}"));
    ///     Ok(())
    /// };
    /// let second = |value: i32| -> Result<(), std::io::Error> {
    ///     log.borrow_mut().push(format!("second {value}"));
    ///     Ok(())
    /// };
    ///
    /// first.and_then_accept(second).accept(3).unwrap();
    /// assert_eq!(*log.borrow(), vec!["first 3", "second 3"]);
    /// ```
    #[inline]
    fn and_then_accept<G>(self, after: G) -> AndThenConsumer<Self, G>
    where
        Self: Sized,
        G: ThrowingConsumer<T>,
        T: Clone,
    {
        AndThenConsumer {
            first: self,
            second: after,
        }
    }
}

impl<F, T, E> ThrowingConsumer<T> for F
where
    F: FnOnce(T) -> Result<(), E>,
    E: Into<BoxError>,
{
    #[inline]
    fn accept(self, value: T) -> Result<(), BoxError> {
        self(value).map_err(Into::into)
    }
}

/// Two consumers run one after the other on clones of the same value.
///
/// Created by [`ThrowingConsumer::and_then_accept`].
#[derive(Debug)]
pub struct AndThenConsumer<F, G> {
    first: F,
    second: G,
}

impl<F, G, T> ThrowingConsumer<T> for AndThenConsumer<F, G>
where
    F: ThrowingConsumer<T>,
    G: ThrowingConsumer<T>,
    T: Clone,
{
    #[inline]
    fn accept(self, value: T) -> Result<(), BoxError> {
        self.first.accept(value.clone())?;
        self.second.accept(value)
    }
}

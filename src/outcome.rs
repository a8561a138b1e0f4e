use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::panic_any;

use crate::errors::UnwrapError;

/// The two variants of an [Outcome]
///
/// This enum is deliberately private. Keeping it out of the public API means
/// the only way to build an `Outcome` is through [`Outcome::of`],
/// [`Outcome::from_error`] and the free function shortcuts, so a value with an
/// inconsistent tag/payload pairing cannot exist.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
enum Inner<T, E> {
    Ok(T),
    Err(E),
}

/// A container holding either a success value or a failure value
///
/// `Outcome<T, E>` makes fallible operations explicit in their return type.
/// Exactly one variant is active, fixed at construction together with its
/// payload, and the container never mutates what it holds. Failures are data:
/// they travel through the combinator chain ([`map_err`](Outcome::map_err),
/// [`and_then`](Outcome::and_then), [`or_else`](Outcome::or_else)) until a
/// caller decides to unwrap, default or transform them.
///
/// ```rust
/// use outcome::{ok, err, Outcome};
///
/// fn halve(x: i32) -> Outcome<i32, String> {
///     if x % 2 == 0 {
///         ok(x / 2)
///     } else {
///         err(format!("{x} is odd"))
///     }
/// }
///
/// let res = halve(12).and_then(halve).map(|x| x + 1);
/// assert_eq!(res, ok(4));
///
/// let res = halve(7).map(|x| x + 1);
/// assert_eq!(res.err(), Some("7 is odd".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outcome<T, E> {
    inner: Inner<T, E>,
}

impl<T, E> Outcome<T, E> {
    /// Create a success `Outcome` holding the given value
    pub fn of(value: T) -> Self {
        Outcome {
            inner: Inner::Ok(value),
        }
    }

    /// Create a failure `Outcome` holding the given error
    pub fn from_error(error: E) -> Self {
        Outcome {
            inner: Inner::Err(error),
        }
    }

    /// Check whether this is a success
    pub fn is_ok(&self) -> bool {
        matches!(self.inner, Inner::Ok(_))
    }

    /// Check whether this is a failure
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Return the success value, or `None` if this is a failure
    pub fn ok(self) -> Option<T> {
        match self.inner {
            Inner::Ok(value) => Some(value),
            Inner::Err(_) => None,
        }
    }

    /// Return the error value, or `None` if this is a success
    pub fn err(self) -> Option<E> {
        match self.inner {
            Inner::Ok(_) => None,
            Inner::Err(error) => Some(error),
        }
    }

    /// Return the success value, panicking with [UnwrapError] otherwise
    ///
    /// The panic payload is an [UnwrapError] carrying the given message, so a
    /// `catch_unwind` boundary can single out container misuse by downcasting.
    pub fn expect(self, msg: &str) -> T {
        match self.inner {
            Inner::Ok(value) => value,
            Inner::Err(_) => panic_any(UnwrapError::new(msg)),
        }
    }

    /// Return the success value, panicking with [UnwrapError] otherwise
    pub fn unwrap(self) -> T {
        self.expect("called `unwrap()` on an `Err` value")
    }

    /// Return the success value, or `default` if this is a failure
    pub fn unwrap_or(self, default: T) -> T {
        match self.inner {
            Inner::Ok(value) => value,
            Inner::Err(_) => default,
        }
    }

    /// Return the success value, or the error mapped through `op`
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, op: F) -> T {
        match self.inner {
            Inner::Ok(value) => value,
            Inner::Err(error) => op(error),
        }
    }

    /// Return the error value, panicking with [UnwrapError] otherwise
    pub fn expect_err(self, msg: &str) -> E {
        match self.inner {
            Inner::Ok(_) => panic_any(UnwrapError::new(msg)),
            Inner::Err(error) => error,
        }
    }

    /// Return the error value, panicking with [UnwrapError] otherwise
    pub fn unwrap_err(self) -> E {
        self.expect_err("called `unwrap_err()` on an `Ok` value")
    }

    /// Transform the success value using a pure function
    ///
    /// A failure passes through unchanged and `op` is never invoked.
    pub fn map<U, F: FnOnce(T) -> U>(self, op: F) -> Outcome<U, E> {
        match self.inner {
            Inner::Ok(value) => Outcome::of(op(value)),
            Inner::Err(error) => Outcome::from_error(error),
        }
    }

    /// Transform the error value using a pure function
    ///
    /// A success passes through unchanged and `op` is never invoked.
    pub fn map_err<E1, F: FnOnce(E) -> E1>(self, op: F) -> Outcome<T, E1> {
        match self.inner {
            Inner::Ok(value) => Outcome::of(value),
            Inner::Err(error) => Outcome::from_error(op(error)),
        }
    }

    /// Reconcile both variants into a single success value
    ///
    /// A success value is mapped through `op`, an error through `default_op`.
    /// Either way the result is a success: this collapses the two branches
    /// into one type rather than transforming while preserving the variant.
    pub fn map_or_else<U, D: FnOnce(E) -> U, F: FnOnce(T) -> U>(
        self,
        default_op: D,
        op: F,
    ) -> Outcome<U, E> {
        match self.inner {
            Inner::Ok(value) => Outcome::of(op(value)),
            Inner::Err(error) => Outcome::of(default_op(error)),
        }
    }

    /// Chain a fallible operation on the success value
    ///
    /// On success, returns `op(value)` directly. A failure passes through
    /// unchanged without invoking `op`, short-circuiting the chain.
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, op: F) -> Outcome<U, E> {
        match self.inner {
            Inner::Ok(value) => op(value),
            Inner::Err(error) => Outcome::from_error(error),
        }
    }

    /// Chain a recovery operation on the error value
    ///
    /// On failure, returns `op(error)` directly. A success passes through
    /// unchanged without invoking `op`.
    pub fn or_else<E1, F: FnOnce(E) -> Outcome<T, E1>>(self, op: F) -> Outcome<T, E1> {
        match self.inner {
            Inner::Ok(value) => Outcome::of(value),
            Inner::Err(error) => op(error),
        }
    }

    /// Convert into the standard library result type
    ///
    /// Allows bridging an `Outcome` chain into `?` propagation.
    pub fn into_result(self) -> Result<T, E> {
        match self.inner {
            Inner::Ok(value) => Ok(value),
            Inner::Err(error) => Err(error),
        }
    }
}

impl<E> Outcome<bool, E> {
    /// Shortcut for a success that carries no meaningful value
    ///
    /// The payload is `true`, standing in for "the operation succeeded".
    pub fn done() -> Self {
        Outcome::of(true)
    }
}

impl<T> Outcome<T, T> {
    /// Return the payload no matter the variant
    ///
    /// Only available when both variants share a payload type. The caller is
    /// expected to have checked the variant already if the distinction
    /// matters.
    pub fn value(self) -> T {
        match self.inner {
            Inner::Ok(value) => value,
            Inner::Err(error) => error,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Ok(value) => Outcome::of(value),
            Err(error) => Outcome::from_error(error),
        }
    }
}

// The `From` direction is rejected by the orphan rules (`T` and `E` appear
// uncovered in the foreign `Result` before the local type), so `Into` is
// implemented directly.
#[allow(clippy::from_over_into)]
impl<T, E> Into<Result<T, E>> for Outcome<T, E> {
    fn into(self) -> Result<T, E> {
        self.into_result()
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Ok(value) => f.debug_tuple("Ok").field(value).finish(),
            Inner::Err(error) => f.debug_tuple("Err").field(error).finish(),
        }
    }
}

/// Shortcut function to create a success `Outcome`
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::of(value)
}

/// Shortcut function to create a failure `Outcome`
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::from_error(error)
}

/// Shortcut function for a success with no meaningful value
///
/// Equivalent to `ok(true)`.
pub fn done<E>() -> Outcome<bool, E> {
    Outcome::done()
}

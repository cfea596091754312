//! Error types for the curry engine.
//!
//! The engine itself only fails while it is being *constructed*: either the
//! arity of a callable cannot be determined, or the requested arity can never
//! be satisfied. Once a curried callable exists, every call succeeds and any
//! failure comes from the wrapped function's own return type, untouched.

use thiserror::Error;

/// The arity of a callable could not be determined by introspection.
///
/// Raised for opaque callables such as [`Variadic::new`](crate::compose::Variadic::new).
/// Callers handle it by supplying the arity explicitly through
/// [`curry_n`](crate::compose::curry_n) or
/// [`Variadic::with_arity`](crate::compose::Variadic::with_arity).
///
/// # Examples
///
/// ```rust
/// use funkit::compose::{Variadic, curry};
/// use funkit::error::CurryError;
///
/// let opaque = Variadic::new(|values: Vec<i32>| values.len());
/// assert!(matches!(curry(opaque), Err(CurryError::UnresolvableArity(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot resolve the arity of `{callable}`; supply it explicitly")]
pub struct UnresolvableArityError {
    /// Type name of the callable whose arity is unknown.
    pub callable: &'static str,
}

impl UnresolvableArityError {
    /// Creates an error naming the callable type `C`.
    pub fn of<C: ?Sized>() -> Self {
        Self {
            callable: std::any::type_name::<C>(),
        }
    }
}

/// A curry engine was requested with an arity it can never satisfy.
///
/// `minimum` is 1 for a bare zero arity, or the callable's declared arity when
/// an explicit override asks for fewer slots than the callable needs.
///
/// # Examples
///
/// ```rust
/// use funkit::compose::curry_n;
/// use funkit::error::InvalidArityError;
///
/// let error = curry_n(|value: i32| value, 0).unwrap_err();
/// assert_eq!(error, InvalidArityError { requested: 0, minimum: 1 });
/// assert_eq!(
///     error.to_string(),
///     "invalid arity 0: a curried callable needs at least 1 parameter(s)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid arity {requested}: a curried callable needs at least {minimum} parameter(s)")]
pub struct InvalidArityError {
    /// The arity that was asked for.
    pub requested: usize,
    /// The smallest arity that would have been accepted.
    pub minimum: usize,
}

/// Represents errors that can occur while building or driving a curried callable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurryError {
    /// The callable's arity could not be determined.
    #[error(transparent)]
    UnresolvableArity(#[from] UnresolvableArityError),
    /// The arity is zero or below what the callable declares.
    #[error(transparent)]
    InvalidArity(#[from] InvalidArityError),
    /// More arguments were supplied to an application that already produced its result.
    #[error("the application is already complete and takes no further arguments")]
    AlreadyComplete,
}

//! Error type for the combinator library.

use thiserror::Error;

use crate::error::CurryError;

/// Represents errors raised while a combinator runs.
///
/// These travel through the curry engine untouched: a combinator's closure
/// returns `Result<Value, CombinatorError>` and the engine hands that result
/// back to the caller as is.
///
/// # Examples
///
/// ```rust
/// use funkit::args;
/// use funkit::combinator::{CombinatorError, Value, prop};
///
/// let record = Value::map([("name", Value::from("Ada"))]);
/// let error = prop().call(args![Value::from("age"), record]).unwrap_err();
/// assert_eq!(error, CombinatorError::MissingProperty { key: "age".to_string() });
/// assert_eq!(error.to_string(), "missing property `age`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinatorError {
    /// A property-access combinator indexed a key the object does not have.
    #[error("missing property `{key}`")]
    MissingProperty {
        /// The requested key, rendered as text.
        key: String,
    },
    /// A combinator received a value of the wrong type.
    #[error("{operation}: expected {expected}, found {found}")]
    TypeMismatch {
        /// The combinator that rejected the value.
        operation: &'static str,
        /// What it accepts.
        expected: &'static str,
        /// The type it was given.
        found: &'static str,
    },
    /// A value that is not a function was called.
    #[error("{operation}: a value of type {found} is not callable")]
    NotCallable {
        /// The combinator that tried the call.
        operation: &'static str,
        /// The type that was called.
        found: &'static str,
    },
    /// A placeholder was passed to a native, non-curried function.
    #[error("placeholders can only be passed to curried functions")]
    UnexpectedPlaceholder,
    /// A combinator entry point could not be built.
    #[error(transparent)]
    Curry(#[from] CurryError),
    /// A user-supplied function failed.
    #[error("{0}")]
    Failed(String),
}

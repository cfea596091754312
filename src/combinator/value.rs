//! The dynamic value model combinators operate on.
//!
//! Combinators work on heterogeneous data (a predicate next to a list, a key
//! next to a record), so their arguments share one type: [`Value`]. Lists
//! are indexed by integers, maps by strings, and maps keep insertion order.

use std::fmt;

use indexmap::IndexMap;

use super::error::CombinatorError;
use crate::compose::{Application, Argument, Curried};
use crate::shared::{ReferenceCounter, ThreadSafety};

/// An insertion-ordered map of string keys to values.
pub type Map = IndexMap<String, Value>;

/// The result of calling a function value.
pub type Outcome = Result<Value, CombinatorError>;

/// A dynamically typed value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// A list, indexed from zero.
    List(Vec<Value>),
    /// A map with string keys, in insertion order.
    Map(Map),
    /// A callable value.
    Function(Function),
}

impl Value {
    /// Builds a function value from a native closure.
    ///
    /// The closure receives every argument of the call and may ignore the
    /// ones it does not need; combinators call predicates with the value, its
    /// key and the whole collection.
    pub fn function<F>(function: F) -> Self
    where
        F: Fn(&[Self]) -> Outcome + ThreadSafety + 'static,
    {
        Self::Function(Function::native(function))
    }

    /// Builds a list value.
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Builds a map value, keeping the order of `entries`.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Returns the name of this value's type, for error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Function(_) => "function",
        }
    }

    /// Truthiness: null, `false`, zero, the empty string, `"0"` and empty
    /// collections are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            Self::Str(value) => !value.is_empty() && value != "0",
            Self::List(values) => !values.is_empty(),
            Self::Map(entries) => !entries.is_empty(),
            Self::Function(_) => true,
        }
    }

    /// Equality that treats an integer and a float of the same magnitude as
    /// equal, recursively.
    #[allow(clippy::cast_precision_loss)]
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(left), Self::Float(right)) | (Self::Float(right), Self::Int(left)) => {
                (*left as f64) == *right
            }
            (Self::List(left), Self::List(right)) => {
                left.len() == right.len()
                    && left.iter().zip(right).all(|(left, right)| left.loose_eq(right))
            }
            (Self::Map(left), Self::Map(right)) => {
                left.len() == right.len()
                    && left.iter().all(|(key, value)| {
                        right.get(key).is_some_and(|other| value.loose_eq(other))
                    })
            }
            _ => self == other,
        }
    }

    /// Returns `true` for [`Value::Bool(true)`](Value::Bool) and nothing else.
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    /// Returns `true` for [`Value::Bool(false)`](Value::Bool) and nothing else.
    pub const fn is_false(&self) -> bool {
        matches!(self, Self::Bool(false))
    }

    /// Returns the function inside, or [`CombinatorError::NotCallable`].
    ///
    /// # Errors
    ///
    /// Fails when the value is not a function.
    pub const fn as_function(&self, operation: &'static str) -> Result<&Function, CombinatorError> {
        match self {
            Self::Function(function) => Ok(function),
            other => Err(CombinatorError::NotCallable {
                operation,
                found: other.type_name(),
            }),
        }
    }

    /// Calls this value as a function.
    ///
    /// # Errors
    ///
    /// Fails when the value is not a function, or with whatever the function
    /// itself returns.
    pub fn call<I>(&self, arguments: I) -> Outcome
    where
        I: IntoIterator<Item = Argument<Self>>,
    {
        self.as_function("call")?.call(arguments)
    }

    /// Renders a key the way property-access errors report it.
    pub(crate) fn key_text(&self) -> String {
        match self {
            Self::Str(key) => key.clone(),
            Self::Int(index) => index.to_string(),
            other => format!("<{}>", other.type_name()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::List(left), Self::List(right)) => left == right,
            (Self::Map(left), Self::Map(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(values: Vec<Self>) -> Self {
        Self::List(values)
    }
}

impl From<Map> for Value {
    fn from(entries: Map) -> Self {
        Self::Map(entries)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// =============================================================================
// Function values
// =============================================================================

#[cfg(feature = "arc")]
type SharedNative = ReferenceCounter<dyn Fn(&[Value]) -> Outcome + Send + Sync>;

#[cfg(not(feature = "arc"))]
type SharedNative = ReferenceCounter<dyn Fn(&[Value]) -> Outcome>;

#[derive(Clone)]
enum Callee {
    Native(SharedNative),
    Curried(Curried<Value, Outcome>),
}

/// A callable [`Value`].
///
/// Either a native closure, which receives plain values, or a curried
/// callable, which accepts placeholders and returns its next stage as a new
/// function value until every slot is filled.
#[derive(Clone)]
pub struct Function(Callee);

impl Function {
    /// Wraps a native closure.
    pub fn native<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Outcome + ThreadSafety + 'static,
    {
        Self(Callee::Native(ReferenceCounter::new(function)))
    }

    /// Calls the function.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatorError::UnexpectedPlaceholder`] when a native
    /// function receives a placeholder, or whatever the function returns.
    pub fn call<I>(&self, arguments: I) -> Outcome
    where
        I: IntoIterator<Item = Argument<Value>>,
    {
        match &self.0 {
            Callee::Native(function) => {
                let values = arguments
                    .into_iter()
                    .map(|argument| {
                        argument
                            .into_value()
                            .ok_or(CombinatorError::UnexpectedPlaceholder)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                function(&values)
            }
            Callee::Curried(curried) => match curried.call(arguments) {
                Application::Complete(outcome) => outcome,
                Application::Partial(next) => Ok(Value::Function(Self::from(next))),
            },
        }
    }

    /// Calls the function with plain values.
    ///
    /// # Errors
    ///
    /// Returns whatever the function returns.
    pub fn invoke<I>(&self, values: I) -> Outcome
    where
        I: IntoIterator<Item = Value>,
    {
        self.call(values.into_iter().map(Argument::Value))
    }

    /// Returns the curried callable behind this function, if any.
    pub const fn as_curried(&self) -> Option<&Curried<Value, Outcome>> {
        match &self.0 {
            Callee::Curried(curried) => Some(curried),
            Callee::Native(_) => None,
        }
    }

    /// Returns `true` when both values are the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Callee::Native(left), Callee::Native(right)) => ReferenceCounter::ptr_eq(left, right),
            (Callee::Curried(left), Callee::Curried(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl From<Curried<Value, Outcome>> for Function {
    fn from(curried: Curried<Value, Outcome>) -> Self {
        Self(Callee::Curried(curried))
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Callee::Native(_) => formatter.write_str("Function(native)"),
            Callee::Curried(curried) => write!(
                formatter,
                "Function(curried, arity {}, {} remaining)",
                curried.arity(),
                curried.remaining()
            ),
        }
    }
}

// =============================================================================
// Serialization
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::{Error, SerializeMap, SerializeSeq};

        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Str(value) => serializer.serialize_str(value),
            Self::List(values) => {
                let mut sequence = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    sequence.serialize_element(value)?;
                }
                sequence.end()
            }
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Function(_) => Err(S::Error::custom("function values cannot be serialized")),
        }
    }
}

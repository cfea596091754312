//! The placeholder sentinel and the argument type that carries it.
//!
//! A curried call receives a sequence of [`Argument`]s. Each one is either a
//! real value or the placeholder, which means "leave this position open and
//! bind it on a later call". Because the placeholder is an enum case and not a
//! magic value, no legitimate argument (not even `None` or `Value::Null`) can
//! be mistaken for it.

/// A single positional argument passed to a curried callable.
///
/// # Examples
///
/// ```
/// use funkit::compose::{Argument, is_placeholder};
///
/// let open: Argument<Option<i32>> = Argument::PLACEHOLDER;
/// let none = Argument::Value(None::<i32>);
///
/// assert!(is_placeholder(&open));
/// assert!(!is_placeholder(&none));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Argument<T> {
    /// Skip this position; a later call binds it.
    Placeholder,
    /// A concrete argument.
    Value(T),
}

impl<T> Argument<T> {
    /// The placeholder sentinel.
    pub const PLACEHOLDER: Self = Self::Placeholder;

    /// Returns `true` only for the placeholder sentinel.
    #[inline]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Returns the concrete value, or `None` for the placeholder.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Placeholder => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Maps the concrete value, leaving the placeholder untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Argument<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Placeholder => Argument::Placeholder,
            Self::Value(value) => Argument::Value(function(value)),
        }
    }
}

impl<T> From<T> for Argument<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// Returns `true` only when `argument` is the placeholder sentinel.
///
/// Equal-looking values never qualify: the check is on the variant, not on
/// the payload.
#[inline]
pub const fn is_placeholder<T>(argument: &Argument<T>) -> bool {
    argument.is_placeholder()
}

/// Builds a `Vec<Argument<_>>` for a curried call.
///
/// Use `__` (double underscore) for a placeholder; any other expression is
/// wrapped in [`Argument::Value`].
///
/// **Important**: `__` is matched as a literal token by the macro, there is
/// nothing to import for it.
///
/// # Syntax
///
/// - `args![]` creates an empty argument list
/// - `args![a, b]` creates `[Value(a), Value(b)]`
/// - `args![__, b]` creates `[Placeholder, Value(b)]`
///
/// # Examples
///
/// ```
/// use funkit::args;
/// use funkit::compose::Argument;
///
/// let arguments: Vec<Argument<i32>> = args![1, __, 3];
/// assert_eq!(
///     arguments,
///     vec![Argument::Value(1), Argument::Placeholder, Argument::Value(3)]
/// );
/// ```
#[macro_export]
macro_rules! args {
    (@collect [$($done:expr),*]) => {
        ::std::vec![$($done),*]
    };

    (@collect [$($done:expr),*] __ $(, $($rest:tt)*)?) => {
        $crate::args!(@collect [$($done,)* $crate::compose::Argument::Placeholder] $($($rest)*)?)
    };

    (@collect [$($done:expr),*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::args!(@collect [$($done,)* $crate::compose::Argument::Value($value)] $($($rest)*)?)
    };

    () => {
        ::std::vec::Vec::new()
    };

    ($($arguments:tt)+) => {
        $crate::args!(@collect [] $($arguments)+)
    };
}

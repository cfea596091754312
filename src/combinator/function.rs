//! Combinators that build or transform functions.

use tracing::trace;

use super::entry_point;
use super::error::CombinatorError;
use super::value::{Function, Outcome, Value};

fn functions_of<I>(functions: I, operation: &'static str) -> Result<Vec<Function>, CombinatorError>
where
    I: IntoIterator<Item = Value>,
{
    functions
        .into_iter()
        .map(|function| function.as_function(operation).cloned())
        .collect()
}

/// Composes functions left to right, like a unix pipe.
///
/// The returned function passes its first argument through every function
/// in turn; with no functions it returns its argument unchanged.
///
/// `((a -> b), (b -> c), ..., (y -> z)) -> (a -> z)`
///
/// # Errors
///
/// Returns [`CombinatorError::NotCallable`] if any element is not a function.
///
/// # Examples
///
/// ```
/// use funkit::args;
/// use funkit::combinator::{Value, pipe};
///
/// let increment = Value::function(|arguments| match arguments.first() {
///     Some(Value::Int(value)) => Ok(Value::from(value + 1)),
///     _ => Ok(Value::Null),
/// });
/// let double = Value::function(|arguments| match arguments.first() {
///     Some(Value::Int(value)) => Ok(Value::from(value * 2)),
///     _ => Ok(Value::Null),
/// });
///
/// let pipeline = pipe([double, increment]).unwrap();
/// assert_eq!(pipeline.call(args![Value::from(5)]), Ok(Value::from(11)));
/// ```
pub fn pipe<I>(functions: I) -> Result<Value, CombinatorError>
where
    I: IntoIterator<Item = Value>,
{
    let functions = functions_of(functions, "pipe")?;
    trace!(combinator = "pipe", stages = functions.len());
    Ok(Value::function(move |arguments| {
        let input = arguments.first().cloned().unwrap_or_default();
        functions
            .iter()
            .try_fold(input, |value, function| function.invoke([value]))
    }))
}

/// Composes functions right to left: `compose([f, g])(x) == f(g(x))`.
///
/// `((y -> z), (x -> y), ..., (a -> b)) -> (a -> z)`
///
/// # Errors
///
/// Returns [`CombinatorError::NotCallable`] if any element is not a function.
pub fn compose<I>(functions: I) -> Result<Value, CombinatorError>
where
    I: IntoIterator<Item = Value>,
{
    let mut functions: Vec<Value> = functions.into_iter().collect();
    functions.reverse();
    pipe(functions)
}

/// Fixes the leading arguments of a function.
///
/// The result is a function that calls `function(params..., rest...)`.
///
/// `((a, b, ..., n) -> x) -> [a, b, ...] -> ((d, e, ..., n) -> x)`
///
/// # Examples
///
/// ```
/// use funkit::args;
/// use funkit::combinator::{Value, partial};
///
/// let greet = Value::function(|arguments| match arguments {
///     [Value::Str(greeting), Value::Str(name), ..] => {
///         Ok(Value::from(format!("{greeting}, {name}")))
///     }
///     _ => Ok(Value::Null),
/// });
///
/// let hello = partial().call(args![greet, Value::list(["Hello"])]).unwrap();
/// assert_eq!(hello.call(args![Value::from("Alice")]), Ok(Value::from("Hello, Alice")));
/// ```
pub fn partial() -> Function {
    entry_point("partial", |function: Value, params: Value| -> Outcome {
        let function = function.as_function("partial")?.clone();
        let Value::List(params) = params else {
            return Err(CombinatorError::TypeMismatch {
                operation: "partial",
                expected: "list of arguments",
                found: params.type_name(),
            });
        };
        Ok(Value::function(move |rest| {
            function.invoke(params.iter().chain(rest).cloned())
        }))
    })
}

/// Logical negation of the value's truthiness.
///
/// `* -> Bool`
pub fn not() -> Function {
    entry_point("not", |value: Value| -> Outcome {
        Ok(Value::Bool(!value.is_truthy()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    fn append(suffix: &'static str) -> Value {
        Value::function(move |arguments| match arguments.first() {
            Some(Value::Str(text)) => Ok(Value::from(format!("{text}{suffix}"))),
            _ => Ok(Value::Null),
        })
    }

    #[test]
    fn test_pipe_and_compose_order() {
        let piped = pipe([append("a"), append("b")]).unwrap();
        let composed = compose([append("a"), append("b")]).unwrap();
        assert_eq!(piped.call(args![Value::from("")]), Ok(Value::from("ab")));
        assert_eq!(composed.call(args![Value::from("")]), Ok(Value::from("ba")));
    }

    #[test]
    fn test_empty_pipe_is_identity() {
        let identity = pipe(Vec::new()).unwrap();
        assert_eq!(identity.call(args![Value::from(7)]), Ok(Value::from(7)));
    }

    #[test]
    fn test_pipe_rejects_non_functions() {
        assert_eq!(
            pipe([append("a"), Value::from(1)]).unwrap_err(),
            CombinatorError::NotCallable {
                operation: "pipe",
                found: "int"
            }
        );
    }

    #[test]
    fn test_not() {
        assert_eq!(not().call(args![Value::from(0)]), Ok(Value::from(true)));
        assert_eq!(not().call(args![Value::from("x")]), Ok(Value::from(false)));
    }
}

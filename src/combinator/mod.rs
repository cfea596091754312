//! Curried combinators over dynamic values.
//!
//! Every combinator is an ordinary fixed-arity function over [`Value`]s,
//! handed to [`curry`](crate::compose::curry) and exported as a [`Function`].
//! Calling it with fewer arguments than it needs returns the next stage as a
//! `Value::Function`; placeholders leave positions open.
//!
//! # Overview
//!
//! | combinator | signature |
//! |---|---|
//! | [`filter`] | `((a, i, [a]) -> Bool) -> [a] -> [a]` |
//! | [`each`] | `(a -> _) -> [a] -> [a]` |
//! | [`map`] | `((a, i, [a]) -> b) -> [a] -> [b]` |
//! | [`flat_map`] | `((a, i, [a]) -> [b]) -> [a] -> [b]` |
//! | [`find`] / [`find_index`] | `((a, i, [a]) -> Bool) -> [a] -> a \| i` |
//! | [`some`] / [`every`] | `((a, i, [a]) -> Bool) -> [a] -> Bool` |
//! | [`sort`] | `((a, a) -> Int) -> [a] -> [a]` |
//! | [`reverse`] / [`uniq`] | `[a] -> [a]` |
//! | [`reduce`] | `((a, b) -> a) -> a -> [b] -> a` |
//! | [`includes`] | `a -> [a] -> Bool` |
//! | [`prop`] / [`prop_or`] | `k -> {k: v} -> v` / `k -> d -> {k: v} -> v \| d` |
//! | [`pick`] | `[k] -> {k: v} -> {k: v}` |
//! | [`merge`] | `{k: v} -> ({k: v}, ...) -> {k: v}` |
//! | [`prop_eq`] | `k -> v -> {k: v} -> Bool` |
//! | [`prop_satisfies`] | `(v -> Bool) -> k -> {k: v} -> Bool` |
//! | [`pipe`] / [`compose`] | `(fns...) -> (a -> z)` |
//! | [`partial`] | `((a, ..., n) -> x) -> [a, ...] -> (... -> x)` |
//! | [`not`] | `* -> Bool` |
//!
//! # Examples
//!
//! ```
//! use funkit::args;
//! use funkit::combinator::{Value, filter, prop_eq};
//!
//! let users = Value::list([
//!     Value::map([("name", Value::from("Ada")), ("admin", Value::from(true))]),
//!     Value::map([("name", Value::from("Bob")), ("admin", Value::from(false))]),
//! ]);
//!
//! let is_admin = prop_eq().call(args![Value::from("admin"), Value::from(true)]).unwrap();
//! let admins = filter().call(args![is_admin, users]).unwrap();
//!
//! assert_eq!(
//!     admins,
//!     Value::list([Value::map([("name", Value::from("Ada")), ("admin", Value::from(true))])])
//! );
//! ```

mod error;
mod function;
mod list;
mod object;
mod value;

pub use error::CombinatorError;
pub use function::{compose, not, partial, pipe};
pub use list::{
    each, every, filter, find, find_index, flat_map, includes, map, reduce, reverse, some, sort,
    uniq,
};
pub use object::{merge, pick, prop, prop_eq, prop_or, prop_satisfies};
pub use value::{Function, Map, Outcome, Value};

use crate::compose::{IntoCallable, curry};

/// Curries a combinator's closure into its public entry point.
///
/// A closure with a typed parameter list always has a valid arity; should
/// the engine still refuse it, the entry point reports the error when called.
fn entry_point<M, F>(name: &'static str, function: F) -> Function
where
    F: IntoCallable<Value, Outcome, M>,
{
    match curry(function) {
        Ok(curried) => Function::from(curried),
        Err(error) => {
            tracing::error!(combinator = name, %error, "cannot build combinator entry point");
            let error = CombinatorError::from(error);
            Function::native(move |_| Err(error.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[test]
    fn test_entry_points_are_curried() {
        for combinator in [filter(), map(), prop(), reduce(), merge()] {
            let curried = combinator.as_curried().expect("combinators are curried");
            assert!(curried.arity().get() >= 1);
        }
        assert_eq!(reduce().as_curried().map(|curried| curried.arity().get()), Some(3));
    }

    #[test]
    fn test_placeholder_reorders_combinator_arguments() {
        let list = Value::list([3, 1, 2]);
        let find_in_list = find().call(args![__, list]).unwrap();
        let greater_than_one = Value::function(|arguments| match arguments.first() {
            Some(Value::Int(value)) => Ok(Value::from(*value > 1)),
            _ => Ok(Value::from(false)),
        });
        assert_eq!(find_in_list.call(args![greater_than_one]), Ok(Value::from(3)));
    }
}

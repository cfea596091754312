//! Property-access combinators over maps (and lists, by index).

use super::entry_point;
use super::error::CombinatorError;
use super::value::{Function, Map, Outcome, Value};
use crate::compose::Variadic;

/// Looks `key` up in `object`.
///
/// Maps are indexed by string keys (an integer key is matched against its
/// decimal text), lists by non-negative integer indexes.
fn lookup<'a>(
    object: &'a Value,
    key: &Value,
    operation: &'static str,
) -> Result<Option<&'a Value>, CombinatorError> {
    match (object, key) {
        (Value::Map(entries), Value::Str(name)) => Ok(entries.get(name)),
        (Value::Map(entries), Value::Int(index)) => Ok(entries.get(&index.to_string())),
        (Value::List(values), Value::Int(index)) => {
            Ok(usize::try_from(*index).ok().and_then(|index| values.get(index)))
        }
        (Value::List(values), Value::Str(name)) => {
            Ok(name.parse::<usize>().ok().and_then(|index| values.get(index)))
        }
        (Value::Map(_) | Value::List(_), other) => Err(CombinatorError::TypeMismatch {
            operation,
            expected: "string or int key",
            found: other.type_name(),
        }),
        (other, _) => Err(CombinatorError::TypeMismatch {
            operation,
            expected: "map or list",
            found: other.type_name(),
        }),
    }
}

fn require<'a>(
    object: &'a Value,
    key: &Value,
    operation: &'static str,
) -> Result<&'a Value, CombinatorError> {
    lookup(object, key, operation)?.ok_or_else(|| CombinatorError::MissingProperty {
        key: key.key_text(),
    })
}

/// Returns `object[key]`.
///
/// `k -> {k: v} -> v`
///
/// # Errors
///
/// Calling the completed combinator fails with
/// [`CombinatorError::MissingProperty`] when the key is absent.
///
/// # Examples
///
/// ```
/// use funkit::args;
/// use funkit::combinator::{Value, map, prop};
///
/// let people = Value::list([
///     Value::map([("name", Value::from("Ada"))]),
///     Value::map([("name", Value::from("Grace"))]),
/// ]);
///
/// let names = map().call(args![prop().call(args![Value::from("name")]).unwrap(), people]);
/// assert_eq!(names, Ok(Value::list(["Ada", "Grace"])));
/// ```
pub fn prop() -> Function {
    entry_point("prop", |key: Value, object: Value| -> Outcome {
        require(&object, &key, "prop").cloned()
    })
}

/// Returns `object[key]` when the key exists, `default` otherwise.
///
/// A key that exists with a `Null` value yields `Null`, not the default.
///
/// `k -> d -> {k: v} -> v | d`
pub fn prop_or() -> Function {
    entry_point(
        "prop_or",
        |key: Value, default: Value, object: Value| -> Outcome {
            Ok(lookup(&object, &key, "prop_or")?.cloned().unwrap_or(default))
        },
    )
}

/// Returns a map holding only the listed keys.
///
/// `[k] -> {k: v} -> {k: v}`
pub fn pick() -> Function {
    entry_point("pick", |keys: Value, object: Value| -> Outcome {
        let Value::List(keys) = keys else {
            return Err(CombinatorError::TypeMismatch {
                operation: "pick",
                expected: "list of keys",
                found: keys.type_name(),
            });
        };
        let picked = keys
            .iter()
            .map(|key| Ok((key.key_text(), require(&object, key, "pick")?.clone())))
            .collect::<Result<Map, CombinatorError>>()?;
        Ok(Value::Map(picked))
    })
}

fn merge_all(objects: Vec<Value>) -> Outcome {
    let mut objects = objects.into_iter();
    let Some(first) = objects.next() else {
        return Ok(Value::Map(Map::new()));
    };
    objects.try_fold(first, |merged, object| match (merged, object) {
        (Value::Map(mut merged), Value::Map(object)) => {
            merged.extend(object);
            Ok(Value::Map(merged))
        }
        (Value::List(mut merged), Value::List(object)) => {
            merged.extend(object);
            Ok(Value::List(merged))
        }
        (Value::Map(_) | Value::List(_), other) | (other, _) => Err(CombinatorError::TypeMismatch {
            operation: "merge",
            expected: "maps (or lists) of one kind",
            found: other.type_name(),
        }),
    })
}

/// Merges two or more maps left to right; later keys win.
///
/// Lists are concatenated instead. Curried over two slots: arguments beyond
/// the second are merged as well.
///
/// `{k: v} -> ({k: v}, ..., {k: v}) -> {k: v}`
///
/// # Examples
///
/// ```
/// use funkit::args;
/// use funkit::combinator::{Value, merge};
///
/// let base = Value::map([("a", Value::from(1)), ("b", Value::from(2))]);
/// let patch = Value::map([("b", Value::from(3))]);
/// let extra = Value::map([("c", Value::from(4))]);
///
/// assert_eq!(
///     merge().call(args![base, patch, extra]),
///     Ok(Value::map([
///         ("a", Value::from(1)),
///         ("b", Value::from(3)),
///         ("c", Value::from(4)),
///     ]))
/// );
/// ```
pub fn merge() -> Function {
    entry_point("merge", Variadic::with_arity(merge_all, 2))
}

/// Returns `true` when `object[key]` strictly equals `value`.
///
/// `k -> v -> {k: v} -> Bool`
pub fn prop_eq() -> Function {
    entry_point("prop_eq", |key: Value, value: Value, object: Value| -> Outcome {
        Ok(Value::Bool(*require(&object, &key, "prop_eq")? == value))
    })
}

/// Returns `true` when `predicate(object[key])` returns exactly `true`.
///
/// `(v -> Bool) -> k -> {k: v} -> Bool`
pub fn prop_satisfies() -> Function {
    entry_point(
        "prop_satisfies",
        |predicate: Value, key: Value, object: Value| -> Outcome {
            let predicate = predicate.as_function("prop_satisfies")?;
            let value = require(&object, &key, "prop_satisfies")?.clone();
            Ok(Value::Bool(predicate.invoke([value])?.is_true()))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    fn record() -> Value {
        Value::map([
            ("name", Value::from("Ada")),
            ("born", Value::from(1815)),
            ("title", Value::Null),
        ])
    }

    #[test]
    fn test_prop_or_keeps_present_null() {
        assert_eq!(
            prop_or().call(args![Value::from("title"), Value::from("none"), record()]),
            Ok(Value::Null)
        );
        assert_eq!(
            prop_or().call(args![Value::from("died"), Value::from(1852), record()]),
            Ok(Value::from(1852))
        );
    }

    #[test]
    fn test_prop_on_list_index() {
        assert_eq!(
            prop().call(args![Value::from(1), Value::list(["a", "b"])]),
            Ok(Value::from("b"))
        );
    }

    #[test]
    fn test_pick_missing_key() {
        assert_eq!(
            pick().call(args![Value::list(["name", "age"]), record()]),
            Err(CombinatorError::MissingProperty {
                key: "age".to_string()
            })
        );
    }

    #[test]
    fn test_merge_waits_for_second_object() {
        let partial = merge().call(args![record()]).unwrap();
        assert!(matches!(partial, Value::Function(_)));
        let merged = partial.call(args![Value::map([("name", Value::from("Lovelace"))])]);
        assert_eq!(
            merged.and_then(|merged| prop().call(args![Value::from("name"), merged])),
            Ok(Value::from("Lovelace"))
        );
    }

    #[test]
    fn test_merge_rejects_mixed_kinds() {
        assert!(matches!(
            merge().call(args![record(), Value::list([1])]),
            Err(CombinatorError::TypeMismatch { operation: "merge", .. })
        ));
    }

    #[test]
    fn test_prop_eq_is_strict() {
        assert_eq!(
            prop_eq().call(args![Value::from("born"), Value::from(1815.0), record()]),
            Ok(Value::from(false))
        );
    }
}

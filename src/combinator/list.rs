//! Combinators over lists and maps.
//!
//! Predicates and mapping functions are called with the entry's value, its
//! key (an `Int` index for lists, a `Str` key for maps) and the whole
//! collection; functions that need fewer arguments simply ignore the rest.

use std::cmp::Ordering;

use tracing::trace;

use super::error::CombinatorError;
use super::value::{Function, Map, Outcome, Value};
use super::entry_point;

/// Splits a list or map into `(key, value)` pairs.
pub(crate) fn entries(
    collection: &Value,
    operation: &'static str,
) -> Result<Vec<(Value, Value)>, CombinatorError> {
    match collection {
        Value::List(values) => Ok(values
            .iter()
            .enumerate()
            .map(|(index, value)| (Value::Int(index_to_int(index)), value.clone()))
            .collect()),
        Value::Map(entries) => Ok(entries
            .iter()
            .map(|(key, value)| (Value::Str(key.clone()), value.clone()))
            .collect()),
        other => Err(CombinatorError::TypeMismatch {
            operation,
            expected: "list or map",
            found: other.type_name(),
        }),
    }
}

/// Rebuilds a collection of the same shape as `template` from pairs.
///
/// Lists are re-indexed; maps keep the keys of the pairs.
fn rebuild_like(template: &Value, pairs: Vec<(Value, Value)>) -> Value {
    match template {
        Value::Map(_) => Value::Map(
            pairs
                .into_iter()
                .map(|(key, value)| (key.key_text(), value))
                .collect::<Map>(),
        ),
        _ => Value::List(pairs.into_iter().map(|(_, value)| value).collect()),
    }
}

fn values_of(collection: &Value, operation: &'static str) -> Result<Vec<Value>, CombinatorError> {
    Ok(entries(collection, operation)?
        .into_iter()
        .map(|(_, value)| value)
        .collect())
}

fn index_to_int(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

fn call_entry(function: &Function, value: &Value, key: &Value, collection: &Value) -> Outcome {
    function.invoke([value.clone(), key.clone(), collection.clone()])
}

/// Keeps the entries for which `predicate(value, key, collection)` is truthy.
///
/// `((a, i, [a]) -> Bool) -> [a] -> [a]`
///
/// # Examples
///
/// ```
/// use funkit::args;
/// use funkit::combinator::{Value, filter};
///
/// let is_even = Value::function(|arguments| match arguments.first() {
///     Some(Value::Int(value)) => Ok(Value::from(value % 2 == 0)),
///     _ => Ok(Value::from(false)),
/// });
///
/// let evens = filter().call(args![is_even, Value::list([1, 2, 3, 4])]);
/// assert_eq!(evens, Ok(Value::list([2, 4])));
/// ```
pub fn filter() -> Function {
    entry_point("filter", |predicate: Value, collection: Value| -> Outcome {
        let predicate = predicate.as_function("filter")?;
        let mut kept = Vec::new();
        for (key, value) in entries(&collection, "filter")? {
            if call_entry(predicate, &value, &key, &collection)?.is_truthy() {
                kept.push((key, value));
            }
        }
        trace!(combinator = "filter", kept = kept.len());
        Ok(rebuild_like(&collection, kept))
    })
}

/// Calls `function(value)` for every entry and returns the collection itself.
///
/// `(a -> _) -> [a] -> [a]`
pub fn each() -> Function {
    entry_point("each", |function: Value, collection: Value| -> Outcome {
        let function = function.as_function("each")?;
        for value in values_of(&collection, "each")? {
            function.invoke([value])?;
        }
        Ok(collection)
    })
}

/// Replaces every entry with `function(value, key, collection)`.
///
/// `((a, i, [a]) -> b) -> [a] -> [b]`
///
/// # Examples
///
/// ```
/// use funkit::args;
/// use funkit::combinator::{Value, map};
///
/// let double = Value::function(|arguments| match arguments.first() {
///     Some(Value::Int(value)) => Ok(Value::from(value * 2)),
///     _ => Ok(Value::Null),
/// });
///
/// // Partially applied, the combinator is itself a function value.
/// let double_all = map().call(args![double]).unwrap();
/// assert_eq!(double_all.call(args![Value::list([1, 2, 3])]), Ok(Value::list([2, 4, 6])));
/// ```
pub fn map() -> Function {
    entry_point("map", |function: Value, collection: Value| -> Outcome {
        let function = function.as_function("map")?;
        let mapped = entries(&collection, "map")?
            .into_iter()
            .map(|(key, value)| {
                let mapped = call_entry(function, &value, &key, &collection)?;
                Ok((key, mapped))
            })
            .collect::<Result<Vec<_>, CombinatorError>>()?;
        Ok(rebuild_like(&collection, mapped))
    })
}

/// Maps every entry to a list and concatenates the lists.
///
/// `((a, i, [a]) -> [b]) -> [a] -> [b]`
pub fn flat_map() -> Function {
    entry_point("flat_map", |function: Value, collection: Value| -> Outcome {
        let function = function.as_function("flat_map")?;
        let mut flattened = Vec::new();
        for (key, value) in entries(&collection, "flat_map")? {
            match call_entry(function, &value, &key, &collection)? {
                Value::List(values) => flattened.extend(values),
                other => {
                    return Err(CombinatorError::TypeMismatch {
                        operation: "flat_map",
                        expected: "list",
                        found: other.type_name(),
                    });
                }
            }
        }
        Ok(Value::List(flattened))
    })
}

fn first_match(
    predicate: &Value,
    collection: &Value,
    operation: &'static str,
) -> Result<Option<(Value, Value)>, CombinatorError> {
    let predicate = predicate.as_function(operation)?;
    for (key, value) in entries(collection, operation)? {
        if call_entry(predicate, &value, &key, collection)?.is_true() {
            return Ok(Some((key, value)));
        }
    }
    Ok(None)
}

/// Returns the first value for which the predicate returns exactly `true`,
/// or `Null`.
///
/// `((a, i, [a]) -> Bool) -> [a] -> a`
pub fn find() -> Function {
    entry_point("find", |predicate: Value, collection: Value| -> Outcome {
        Ok(first_match(&predicate, &collection, "find")?.map_or(Value::Null, |(_, value)| value))
    })
}

/// Returns the key of the first value for which the predicate returns
/// exactly `true`, or `Null`.
///
/// `((a, i, [a]) -> Bool) -> [a] -> i`
pub fn find_index() -> Function {
    entry_point("find_index", |predicate: Value, collection: Value| -> Outcome {
        Ok(first_match(&predicate, &collection, "find_index")?.map_or(Value::Null, |(key, _)| key))
    })
}

/// Returns `true` when the predicate returns exactly `true` for some entry.
///
/// `((a, i, [a]) -> Bool) -> [a] -> Bool`
pub fn some() -> Function {
    entry_point("some", |predicate: Value, collection: Value| -> Outcome {
        Ok(Value::Bool(first_match(&predicate, &collection, "some")?.is_some()))
    })
}

/// Returns `false` as soon as the predicate returns exactly `false`, `true`
/// otherwise.
///
/// `((a, i, [a]) -> Bool) -> [a] -> Bool`
pub fn every() -> Function {
    entry_point("every", |predicate: Value, collection: Value| -> Outcome {
        let predicate = predicate.as_function("every")?;
        for (key, value) in entries(&collection, "every")? {
            if call_entry(predicate, &value, &key, &collection)?.is_false() {
                return Ok(Value::Bool(false));
            }
        }
        Ok(Value::Bool(true))
    })
}

fn ordering_of(comparison: &Value) -> Result<Ordering, CombinatorError> {
    match comparison {
        Value::Int(value) => Ok(value.cmp(&0)),
        Value::Float(value) => Ok(value.partial_cmp(&0.0).unwrap_or(Ordering::Equal)),
        Value::Bool(true) => Ok(Ordering::Greater),
        Value::Bool(false) => Ok(Ordering::Equal),
        other => Err(CombinatorError::TypeMismatch {
            operation: "sort",
            expected: "int, float or bool comparison result",
            found: other.type_name(),
        }),
    }
}

/// Orders two values with a user comparator.
///
/// A `false` result cannot tell "less" from "equal", so the comparator is
/// asked again with the operands swapped.
fn compare(
    comparator: &Function,
    left: &Value,
    right: &Value,
) -> Result<Ordering, CombinatorError> {
    match comparator.invoke([left.clone(), right.clone()])? {
        Value::Bool(false) => match comparator.invoke([right.clone(), left.clone()])? {
            Value::Bool(true) => Ok(Ordering::Less),
            _ => Ok(Ordering::Equal),
        },
        comparison => ordering_of(&comparison),
    }
}

/// Stable merge sort that returns the first comparator failure.
///
/// An element from the right half is taken only when it orders strictly
/// before the left one, so equal elements keep their input order.
fn merge_sort<F>(mut values: Vec<Value>, order: &mut F) -> Result<Vec<Value>, CombinatorError>
where
    F: FnMut(&Value, &Value) -> Result<Ordering, CombinatorError>,
{
    if values.len() <= 1 {
        return Ok(values);
    }

    let right = values.split_off(values.len() / 2);
    let left = merge_sort(values, order)?;
    let right = merge_sort(right, order)?;

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(first), Some(second)) => order(first, second)? == Ordering::Greater,
            _ => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}

/// Returns a sorted copy of the values, ordered by `comparator(a, b)`.
///
/// The comparator returns a negative, zero or positive number, or a bool
/// meaning "`a` sorts after `b`". The sort is stable and map keys are
/// discarded. The first comparator error stops the sort and is returned.
///
/// `((a, a) -> Int) -> [a] -> [a]`
pub fn sort() -> Function {
    entry_point("sort", |comparator: Value, collection: Value| -> Outcome {
        let comparator = comparator.as_function("sort")?;
        let values = values_of(&collection, "sort")?;
        let sorted = merge_sort(values, &mut |left: &Value, right: &Value| {
            compare(comparator, left, right)
        })?;
        Ok(Value::List(sorted))
    })
}

/// Returns a reversed copy; maps keep their keys.
///
/// `[a] -> [a]`
pub fn reverse() -> Function {
    entry_point("reverse", |collection: Value| -> Outcome {
        let mut pairs = entries(&collection, "reverse")?;
        pairs.reverse();
        Ok(rebuild_like(&collection, pairs))
    })
}

/// Left fold: `function(accumulator, value)` over every value, starting from
/// `initial`.
///
/// `((a, b) -> a) -> a -> [b] -> a`
///
/// # Examples
///
/// ```
/// use funkit::args;
/// use funkit::combinator::{Value, reduce};
///
/// let add = Value::function(|arguments| match arguments {
///     [Value::Int(left), Value::Int(right), ..] => Ok(Value::from(left + right)),
///     _ => Ok(Value::Null),
/// });
///
/// let sum = reduce().call(args![add, Value::from(0)]).unwrap();
/// assert_eq!(sum.call(args![Value::list([1, 2, 3])]), Ok(Value::from(6)));
/// ```
pub fn reduce() -> Function {
    entry_point(
        "reduce",
        |function: Value, initial: Value, collection: Value| -> Outcome {
            let function = function.as_function("reduce")?;
            values_of(&collection, "reduce")?
                .into_iter()
                .try_fold(initial, |accumulator, value| function.invoke([accumulator, value]))
        },
    )
}

/// Returns `true` when the collection holds a value loosely equal to `needle`.
///
/// `a -> [a] -> Bool`
pub fn includes() -> Function {
    entry_point("includes", |needle: Value, collection: Value| -> Outcome {
        let values = values_of(&collection, "includes")?;
        Ok(Value::Bool(values.iter().any(|value| value.loose_eq(&needle))))
    })
}

/// Keeps the first occurrence of every value, re-indexed as a list.
///
/// `[a] -> [a]`
pub fn uniq() -> Function {
    entry_point("uniq", |collection: Value| -> Outcome {
        let mut unique: Vec<Value> = Vec::new();
        for value in values_of(&collection, "uniq")? {
            if !unique.iter().any(|seen| seen.loose_eq(&value)) {
                unique.push(value);
            }
        }
        Ok(Value::List(unique))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    fn int_arguments(arguments: &[Value]) -> Vec<i64> {
        arguments
            .iter()
            .filter_map(|value| match value {
                Value::Int(value) => Some(*value),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_filter_keeps_map_keys() {
        let positive = Value::function(|arguments| {
            Ok(Value::from(int_arguments(arguments).first().is_some_and(|value| *value > 0)))
        });
        let record = Value::map([("a", Value::from(1)), ("b", Value::from(-1))]);
        assert_eq!(
            filter().call(args![positive, record]),
            Ok(Value::map([("a", Value::from(1))]))
        );
    }

    #[test]
    fn test_map_passes_index() {
        let index = Value::function(|arguments| Ok(arguments.get(1).cloned().unwrap_or_default()));
        assert_eq!(
            map().call(args![index, Value::list(["x", "y"])]),
            Ok(Value::list([0, 1]))
        );
    }

    #[test]
    fn test_sort_with_comparator() {
        let ascending = Value::function(|arguments| match int_arguments(arguments).as_slice() {
            [left, right] => Ok(Value::from(left - right)),
            _ => Ok(Value::from(0)),
        });
        assert_eq!(
            sort().call(args![ascending, Value::list([3, 1, 2])]),
            Ok(Value::list([1, 2, 3]))
        );
    }

    #[test]
    fn test_sort_reports_bad_comparison() {
        let broken = Value::function(|_| Ok(Value::from("nope")));
        assert!(matches!(
            sort().call(args![broken, Value::list([2, 1])]),
            Err(CombinatorError::TypeMismatch { operation: "sort", .. })
        ));
    }

    #[test]
    fn test_sort_stops_at_first_failure() {
        let calls = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = std::sync::Arc::clone(&calls);
        let failing = Value::function(move |_| {
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Err(CombinatorError::Failed("comparator".to_string()))
        });

        assert_eq!(
            sort().call(args![failing, Value::list([4, 3, 2, 1])]),
            Err(CombinatorError::Failed("comparator".to_string()))
        );
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sort_retries_false_with_swapped_operands() {
        let after = Value::function(|arguments| match int_arguments(arguments).as_slice() {
            [left, right] => Ok(Value::from(left > right)),
            _ => Ok(Value::from(false)),
        });
        assert_eq!(
            sort().call(args![after, Value::list([3, 1, 2])]),
            Ok(Value::list([1, 2, 3]))
        );
    }

    #[test]
    fn test_flat_map_on_empty_list() {
        let wrap = Value::function(|arguments| Ok(Value::List(arguments[..1].to_vec())));
        assert_eq!(
            flat_map().call(args![wrap, Value::list(Vec::<Value>::new())]),
            Ok(Value::list(Vec::<Value>::new()))
        );
    }

    #[test]
    fn test_type_mismatch_on_scalar_collection() {
        let identity = Value::function(|arguments| Ok(arguments[0].clone()));
        assert_eq!(
            map().call(args![identity, Value::from(5)]),
            Err(CombinatorError::TypeMismatch {
                operation: "map",
                expected: "list or map",
                found: "int"
            })
        );
    }
}

//! Property-based tests for the curry engine laws.
//!
//! This module verifies that curried callables satisfy:
//!
//! - **Full Application**: one call with every argument equals a direct call
//! - **Partition**: any split of the arguments into sequential calls gives the same result
//! - **Placeholder Transparency**: deferring positions with placeholders gives the same result
//! - **Non-interference**: completing a partial stage twice gives independent results

use funkit::compose::{Argument, Curried, curry};
use proptest::prelude::*;

fn weighted(a: i64, b: i64, c: i64, d: i64) -> i64 {
    a.wrapping_mul(1)
        .wrapping_add(b.wrapping_mul(3))
        .wrapping_add(c.wrapping_mul(7))
        .wrapping_sub(d)
}

fn drive(curried: &Curried<i64, i64>, chunks: &[Vec<Argument<i64>>]) -> Option<i64> {
    let mut stage = curried.clone();
    for chunk in chunks {
        match stage.call(chunk.iter().copied()) {
            funkit::compose::Application::Complete(result) => return Some(result),
            funkit::compose::Application::Partial(next) => stage = next,
        }
    }
    None
}

fn split(values: &[i64], sizes: &[usize]) -> Vec<Vec<Argument<i64>>> {
    let mut chunks = Vec::new();
    let mut rest = values;
    for size in sizes {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at((*size).min(rest.len()));
        chunks.push(head.iter().copied().map(Argument::Value).collect());
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(rest.iter().copied().map(Argument::Value).collect());
    }
    chunks
}

// =============================================================================
// Full Application
// =============================================================================

proptest! {
    /// Full application: curry(f)(a, b) == f(a, b)
    #[test]
    fn prop_full_application_arity2(a in any::<i32>(), b in any::<i32>()) {
        let function = |a: i64, b: i64| a.wrapping_sub(b);
        let curried = curry(function).unwrap();
        prop_assert_eq!(
            curried.apply([i64::from(a), i64::from(b)]).complete(),
            Some(function(i64::from(a), i64::from(b)))
        );
    }

    /// Full application: curry(f)(a, b, c, d) == f(a, b, c, d)
    #[test]
    fn prop_full_application_arity4(values in proptest::array::uniform4(any::<i64>())) {
        let curried = curry(weighted).unwrap();
        let [a, b, c, d] = values;
        prop_assert_eq!(curried.apply(values).complete(), Some(weighted(a, b, c, d)));
    }

    /// Full application: six parameters
    #[test]
    fn prop_full_application_arity6(values in proptest::array::uniform6(any::<i32>())) {
        let sum = |a: i64, b: i64, c: i64, d: i64, e: i64, f: i64| a + b + c + d + e + f;
        let values = values.map(i64::from);
        let curried = curry(sum).unwrap();
        prop_assert_eq!(curried.apply(values).complete(), Some(values.iter().sum::<i64>()));
    }
}

// =============================================================================
// Partition
// =============================================================================

proptest! {
    /// Partition: splitting the arguments into sequential calls does not change the result
    #[test]
    fn prop_partition_is_associative(
        values in proptest::array::uniform4(any::<i64>()),
        sizes in proptest::collection::vec(1usize..=4, 1..=4),
    ) {
        let curried = curry(weighted).unwrap();
        let [a, b, c, d] = values;
        prop_assert_eq!(drive(&curried, &split(&values, &sizes)), Some(weighted(a, b, c, d)));
    }
}

// =============================================================================
// Placeholder Transparency
// =============================================================================

proptest! {
    /// Placeholder transparency: deferred positions are bound in order on the next call
    #[test]
    fn prop_placeholder_transparency(
        values in proptest::array::uniform4(any::<i64>()),
        deferred in proptest::array::uniform4(any::<bool>()),
    ) {
        let curried = curry(weighted).unwrap();
        let [a, b, c, d] = values;

        let first: Vec<Argument<i64>> = values
            .iter()
            .zip(deferred)
            .map(|(value, defer)| {
                if defer {
                    Argument::Placeholder
                } else {
                    Argument::Value(*value)
                }
            })
            .collect();
        let second: Vec<Argument<i64>> = values
            .iter()
            .zip(deferred)
            .filter(|(_, defer)| *defer)
            .map(|(value, _)| Argument::Value(*value))
            .collect();

        prop_assert_eq!(drive(&curried, &[first, second]), Some(weighted(a, b, c, d)));
    }
}

// =============================================================================
// Non-interference
// =============================================================================

proptest! {
    /// Non-interference: two completions of one stage are independent
    #[test]
    fn prop_partial_stage_non_interference(
        prefix in proptest::array::uniform2(any::<i64>()),
        first in proptest::array::uniform2(any::<i64>()),
        second in proptest::array::uniform2(any::<i64>()),
    ) {
        let curried = curry(weighted).unwrap();
        let stage = curried.apply(prefix).partial().unwrap();

        let first_result = stage.apply(first).complete();
        let second_result = stage.apply(second).complete();

        prop_assert_eq!(first_result, Some(weighted(prefix[0], prefix[1], first[0], first[1])));
        prop_assert_eq!(second_result, Some(weighted(prefix[0], prefix[1], second[0], second[1])));
        prop_assert_eq!(stage.remaining(), 2);
    }
}

//! Integration tests for placeholder-driven application.
//!
//! Note: The `__` placeholder is a literal token in the `args!` pattern.
//! There is nothing to import for it.

use funkit::compose::{Argument, is_placeholder, placeholder};

// =============================================================================
// 2-argument function tests
// =============================================================================

mod two_argument_functions {
    use funkit::args;
    use funkit::compose::curry;

    fn divide(numerator: f64, denominator: f64) -> f64 {
        numerator / denominator
    }

    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    #[test]
    fn test_placeholder_first_argument() {
        let half = curry(divide).unwrap().call(args![__, 2.0]).partial().unwrap();
        let ten = half.apply([10.0]).complete().unwrap();
        let seven = half.apply([7.0]).complete().unwrap();
        assert!((ten - 5.0).abs() < f64::EPSILON);
        assert!((seven - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_placeholder_equals_direct_call() {
        let subtract_five = curry(subtract).unwrap().call(args![__, 5]).partial().unwrap();
        assert_eq!(subtract_five.apply([10]).complete(), Some(subtract(10, 5)));
        assert_eq!(subtract_five.apply([3]).complete(), Some(-2));
    }

    #[test]
    fn test_both_placeholders_then_values() {
        let curried = curry(subtract).unwrap();
        let open = curried.call(args![__, __]).partial().unwrap();

        assert_eq!(open.remaining(), 2);
        assert_eq!(open.apply([10, 4]).complete(), Some(6));
    }

    #[test]
    fn test_placeholder_can_be_completed_many_times() {
        let subtract_from = curry(subtract).unwrap().call(args![__, 1]).partial().unwrap();
        for index in 0..100 {
            assert_eq!(subtract_from.apply([index]).complete(), Some(index - 1));
        }
    }
}

// =============================================================================
// 3-argument function tests
// =============================================================================

mod three_argument_functions {
    use funkit::args;
    use funkit::compose::{Slot, curry};

    fn affine(x: i32, y: i32, z: i32) -> i32 {
        x + y * z
    }

    fn format_greeting(
        greeting: &'static str,
        name: &'static str,
        punctuation: &'static str,
    ) -> String {
        format!("{greeting}, {name}{punctuation}")
    }

    #[test]
    fn test_placeholder_first() {
        let curried = curry(affine).unwrap();
        let awaiting_x = curried.call(args![__, 3, 4]).partial().unwrap();
        assert_eq!(awaiting_x.call(args![2]).complete(), Some(14));
    }

    #[test]
    fn test_placeholder_middle() {
        let greet = curry(format_greeting).unwrap();
        let hello_exclaim = greet.call(args!["Hello", __, "!"]).partial().unwrap();

        assert_eq!(hello_exclaim.apply(["Alice"]).complete().as_deref(), Some("Hello, Alice!"));
        assert_eq!(hello_exclaim.apply(["Bob"]).complete().as_deref(), Some("Hello, Bob!"));
    }

    #[test]
    fn test_placeholder_last_two() {
        let curried = curry(affine).unwrap();
        let stage = curried.call(args![1, __, __]).partial().unwrap();

        assert_eq!(
            stage.state().slots(),
            &[Slot::Filled(1), Slot::Placeholder, Slot::Placeholder]
        );
        assert_eq!(stage.apply([2, 3]).complete(), Some(7));
    }

    #[test]
    fn test_placeholder_repeated_across_calls() {
        let curried = curry(affine).unwrap();
        let first = curried.call(args![__, __, 4]).partial().unwrap();
        let second = first.call(args![__, 3]).partial().unwrap();

        assert_eq!(second.remaining(), 1);
        assert_eq!(second.apply([2]).complete(), Some(14));
        // The earlier stage is untouched.
        assert_eq!(first.apply([0, 1]).complete(), Some(4));
    }

    #[test]
    fn test_trailing_placeholder_is_not_overflow() {
        let curried = curry(affine).unwrap();
        let stage = curried.call(args![1, 2, 3, __]).complete();
        assert_eq!(stage, Some(7));
    }
}

// =============================================================================
// Sentinel identity
// =============================================================================

mod sentinel {
    use super::*;

    #[test]
    fn test_placeholder_is_distinct_from_none() {
        let none: Argument<Option<i32>> = Argument::Value(None);
        assert!(!is_placeholder(&none));
        assert!(is_placeholder(&placeholder::<Option<i32>>()));
        assert_ne!(none, Argument::PLACEHOLDER);
    }

    #[test]
    fn test_value_that_looks_like_a_sentinel() {
        let lookalike = Argument::Value("__");
        assert!(!lookalike.is_placeholder());
    }
}

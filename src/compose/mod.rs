//! Placeholder-aware currying.
//!
//! This module turns any function of a known arity into a callable that
//! accepts its arguments a few at a time, in any order, and runs the
//! function once every parameter has a value.
//!
//! # Overview
//!
//! - [`resolve_arity`]: reports how many parameters a callable declares
//! - [`Argument::PLACEHOLDER`] / [`is_placeholder`]: the "fill later" sentinel
//! - [`args!`](crate::args): builds argument lists, with `__` as the placeholder
//! - [`curry`] / [`curry_n`]: build a [`Curried`] callable
//!
//! # Examples
//!
//! ## Incremental application
//!
//! ```
//! use funkit::compose::curry;
//!
//! fn affine(x: i32, y: i32, z: i32) -> i32 { x + y * z }
//!
//! let curried = curry(affine).unwrap();
//! assert_eq!(curried.apply([2, 3, 4]).complete(), Some(14));
//!
//! let result = curried.apply([2]).apply([3]).and_then(|stage| stage.apply([4]));
//! assert_eq!(result.ok().and_then(|stage| stage.complete()), Some(14));
//! ```
//!
//! ## Placeholders
//!
//! ```
//! use funkit::args;
//! use funkit::compose::curry;
//!
//! fn divide(numerator: f64, denominator: f64) -> f64 { numerator / denominator }
//!
//! // Use __ as a placeholder for arguments that should be bound later.
//! // Note: Do NOT import __ - it is matched as a literal token by the macro.
//! let halve = curry(divide).unwrap().call(args![__, 2.0]).partial().unwrap();
//! assert_eq!(halve.apply([10.0]).complete(), Some(5.0));
//! ```
//!
//! # Laws
//!
//! For a function `f` of arity N and arguments `a1..aN`:
//!
//! - **Full application**: `curry(f)(a1, ..., aN) == f(a1, ..., aN)`
//! - **Partition**: `curry(f)(a1, ..., ak)(ak+1, ..., aN) == f(a1, ..., aN)` for every `k`
//! - **Placeholder**: `curry(f)(__, a2)(a1) == f(a1, a2)`
//! - **Non-interference**: completing one partial stage never affects another

mod arity;
mod curry;
mod placeholder;

pub use arity::{
    Arity, Bound, BoundMethod, Callable, Direct, Fixed, IntoCallable, MethodSignature, Variadic,
    bind, resolve_arity,
};
pub use curry::{Application, Curried, INLINE_SLOTS, PartialApplication, Slot, curry, curry_n};
pub use placeholder::{Argument, is_placeholder};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::args;

/// The placeholder sentinel for `Argument<T>`.
///
/// Equivalent to [`Argument::PLACEHOLDER`]; usable wherever the element type
/// can be inferred.
pub const fn placeholder<T>() -> Argument<T> {
    Argument::Placeholder
}

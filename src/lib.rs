//! # funkit
//!
//! Placeholder-aware currying, and a toolkit of curried functional
//! combinators built on it.
//!
//! ## Overview
//!
//! - **Arity Resolution**: parameter counts read from function signatures,
//!   bound methods, or supplied explicitly for opaque callables
//! - **Placeholders**: `Argument::Placeholder` and the `args!` macro, where
//!   `__` leaves a position open
//! - **Curry Engine**: `curry` / `curry_n` turn a function of arity N into a
//!   callable that accepts its arguments a few at a time, in any order
//! - **Combinators**: `map`, `filter`, `reduce`, `prop`, `merge`, `pipe`, ...
//!   over a dynamic `Value` model
//!
//! ## Feature Flags
//!
//! - `combinator`: the combinator library and its `Value` model (default)
//! - `arc`: share curried state through `Arc` so curried values are `Send + Sync`
//! - `serde`: `Serialize` for `Value`
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use funkit::prelude::*;
//!
//! fn affine(x: i32, y: i32, z: i32) -> i32 { x + y * z }
//!
//! let curried = curry(affine).unwrap();
//! let awaiting_x = curried.call(args![__, 3, 4]).partial().unwrap();
//! assert_eq!(awaiting_x.apply([2]).complete(), Some(14));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and macros.
///
/// # Usage
///
/// ```rust
/// use funkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::args;
    pub use crate::compose::{
        Application, Argument, Arity, Curried, Variadic, bind, curry, curry_n, is_placeholder,
        resolve_arity,
    };
    pub use crate::error::{CurryError, InvalidArityError, UnresolvableArityError};

    #[cfg(feature = "combinator")]
    pub use crate::combinator::{CombinatorError, Function, Value};
}

pub mod compose;
pub mod error;
mod shared;

pub use shared::ThreadSafety;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(compose::Curried<String, String>: Send, Sync, Clone);

#[cfg(all(feature = "arc", feature = "combinator"))]
static_assertions::assert_impl_all!(combinator::Value: Send, Sync);

static_assertions::assert_impl_all!(compose::Argument<u8>: Copy, Send, Sync);
static_assertions::assert_not_impl_any!(compose::Argument<String>: Copy);

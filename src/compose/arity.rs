//! Arity resolution for callables.
//!
//! Rust functions carry their parameter count in their type, so the resolver
//! reads it from the `Fn(A, B, ...) -> R` signature instead of inspecting a
//! value at runtime. Opaque callables that take their arguments as a `Vec`
//! declare no arity and must be given one explicitly.
//!
//! # Overview
//!
//! - [`Callable`]: a callable that reports its arity; sealed, and invoked
//!   only by the curry engine
//! - [`IntoCallable`]: conversion from plain functions, closures and bound
//!   methods into a [`Callable`]
//! - [`Fixed`]: a function of 1 to 6 typed parameters
//! - [`Variadic`]: a function over `Vec<T>`, arity optional
//! - [`bind`] / [`BoundMethod`]: a method paired with its receiver; the
//!   receiver does not count towards the arity
//! - [`resolve_arity`]: the resolver entry point

use std::fmt;
use std::marker::PhantomData;

use crate::error::UnresolvableArityError;
use crate::shared::ThreadSafety;

/// Number of positional parameters a callable declares.
///
/// # Examples
///
/// ```
/// use funkit::compose::{Arity, resolve_arity};
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 { width * height * depth }
///
/// assert_eq!(resolve_arity(volume), Ok(Arity::new(3)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Arity(usize);

impl Arity {
    /// An arity of one.
    pub const ONE: Self = Self(1);

    /// Creates an arity from a parameter count.
    #[inline]
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    /// Returns the parameter count.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<usize> for Arity {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

mod sealed {
    /// Invocation with a complete argument list.
    ///
    /// Only the curry engine calls this, after every slot is filled; the trait
    /// cannot be named outside the crate.
    pub trait Invoke<T, R> {
        fn invoke(&self, arguments: Vec<T>) -> R;
    }
}

pub(crate) use sealed::Invoke;

/// A callable the curry engine can drive.
///
/// The engine invokes it with the resolved slot values in positional order
/// followed by any overflow arguments. Implementations with a fixed parameter
/// list ignore the overflow.
///
/// The trait is sealed: it is implemented for [`Fixed`], [`BoundMethod`] and
/// [`Variadic`], and a callable can only be invoked through [`curry`] or
/// [`curry_n`], which never run it with missing arguments.
///
/// ```compile_fail
/// use funkit::compose::{Callable, IntoCallable};
///
/// let add = IntoCallable::<i32, i32, _>::into_callable(|a: i32, b: i32| a + b);
/// add.invoke(vec![1]);
/// ```
///
/// [`curry`]: super::curry
/// [`curry_n`]: super::curry_n
pub trait Callable<T, R>: Invoke<T, R> {
    /// Reports the declared arity, or fails when it cannot be known.
    ///
    /// # Errors
    ///
    /// Returns [`UnresolvableArityError`] for callables that do not declare a
    /// parameter count.
    fn arity(&self) -> Result<Arity, UnresolvableArityError>;
}

/// Conversion into a [`Callable`].
///
/// The `Marker` parameter distinguishes the implementations for the different
/// function signatures so that one function type resolves to exactly one of
/// them. Callers never name it.
pub trait IntoCallable<T, R, Marker> {
    /// The callable produced by the conversion.
    type Output: Callable<T, R> + ThreadSafety + 'static;

    /// Performs the conversion.
    fn into_callable(self) -> Self::Output;
}

/// Marker for [`Callable`] types, which convert to themselves.
#[derive(Debug)]
pub enum Direct {}

impl<T, R, C> IntoCallable<T, R, Direct> for C
where
    C: Callable<T, R> + ThreadSafety + 'static,
{
    type Output = Self;

    #[inline]
    fn into_callable(self) -> Self::Output {
        self
    }
}

/// Resolves the arity of a function, closure, bound method or [`Callable`].
///
/// # Errors
///
/// Returns [`UnresolvableArityError`] when the callable declares no arity.
///
/// # Examples
///
/// ```
/// use funkit::compose::{Arity, Variadic, bind, resolve_arity};
///
/// struct Scale(i32);
///
/// assert_eq!(resolve_arity(|value: i32| value + 1), Ok(Arity::new(1)));
/// assert_eq!(
///     resolve_arity(bind(Scale(3), |scale: &Scale, value: i32| scale.0 * value)),
///     Ok(Arity::new(1))
/// );
/// assert!(resolve_arity(Variadic::new(|values: Vec<i32>| values.len())).is_err());
/// ```
pub fn resolve_arity<T, R, M, F>(function: F) -> Result<Arity, UnresolvableArityError>
where
    F: IntoCallable<T, R, M>,
{
    function.into_callable().arity()
}

// =============================================================================
// Fixed-arity functions
// =============================================================================

/// A function with a fixed list of typed parameters.
///
/// Produced by [`IntoCallable`] for any `Fn(T, ..., T) -> R` of 1 to 6
/// parameters. Arguments beyond the declared parameters are dropped.
pub struct Fixed<F, Signature> {
    function: F,
    signature: PhantomData<fn() -> Signature>,
}

impl<F, Signature> Fixed<F, Signature> {
    const fn new(function: F) -> Self {
        Self {
            function,
            signature: PhantomData,
        }
    }
}

impl<F, Signature> fmt::Debug for Fixed<F, Signature> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Fixed")
            .field("signature", &std::any::type_name::<Signature>())
            .finish_non_exhaustive()
    }
}

macro_rules! replace_with {
    ($_ignored:ident, $with:ty) => {
        $with
    };
}

macro_rules! next_argument {
    ($_ignored:ident, $arguments:ident) => {
        $arguments.next()
    };
}

macro_rules! impl_fixed_arity {
    ($arity:literal; $($argument:ident),+) => {
        impl<T, R, F> IntoCallable<T, R, fn($(replace_with!($argument, T)),+) -> R> for F
        where
            F: Fn($(replace_with!($argument, T)),+) -> R + ThreadSafety + 'static,
            T: 'static,
            R: 'static,
        {
            type Output = Fixed<F, fn($(replace_with!($argument, T)),+) -> R>;

            #[inline]
            fn into_callable(self) -> Self::Output {
                Fixed::new(self)
            }
        }

        impl<T, R, F> Callable<T, R> for Fixed<F, fn($(replace_with!($argument, T)),+) -> R>
        where
            F: Fn($(replace_with!($argument, T)),+) -> R,
        {
            #[inline]
            fn arity(&self) -> Result<Arity, UnresolvableArityError> {
                Ok(Arity::new($arity))
            }
        }

        impl<T, R, F> Invoke<T, R> for Fixed<F, fn($(replace_with!($argument, T)),+) -> R>
        where
            F: Fn($(replace_with!($argument, T)),+) -> R,
        {
            fn invoke(&self, arguments: Vec<T>) -> R {
                let mut arguments = arguments.into_iter();
                match ($(next_argument!($argument, arguments),)+) {
                    ($(Some($argument),)+) => (self.function)($($argument),+),
                    _ => unreachable!("a complete application supplies every declared argument"),
                }
            }
        }

        impl<S, M, T, R>
            IntoCallable<T, R, MethodSignature<fn($(replace_with!($argument, T)),+) -> R>>
            for Bound<S, M>
        where
            M: Fn(&S, $(replace_with!($argument, T)),+) -> R + ThreadSafety + 'static,
            S: ThreadSafety + 'static,
            T: 'static,
            R: 'static,
        {
            type Output = BoundMethod<S, M, fn($(replace_with!($argument, T)),+) -> R>;

            #[inline]
            fn into_callable(self) -> Self::Output {
                BoundMethod {
                    receiver: self.receiver,
                    method: self.method,
                    signature: PhantomData,
                }
            }
        }

        impl<S, M, T, R> Callable<T, R>
            for BoundMethod<S, M, fn($(replace_with!($argument, T)),+) -> R>
        where
            M: Fn(&S, $(replace_with!($argument, T)),+) -> R,
        {
            #[inline]
            fn arity(&self) -> Result<Arity, UnresolvableArityError> {
                Ok(Arity::new($arity))
            }
        }

        impl<S, M, T, R> Invoke<T, R>
            for BoundMethod<S, M, fn($(replace_with!($argument, T)),+) -> R>
        where
            M: Fn(&S, $(replace_with!($argument, T)),+) -> R,
        {
            fn invoke(&self, arguments: Vec<T>) -> R {
                let mut arguments = arguments.into_iter();
                match ($(next_argument!($argument, arguments),)+) {
                    ($(Some($argument),)+) => (self.method)(&self.receiver, $($argument),+),
                    _ => unreachable!("a complete application supplies every declared argument"),
                }
            }
        }
    };
}

impl_fixed_arity!(1; first);
impl_fixed_arity!(2; first, second);
impl_fixed_arity!(3; first, second, third);
impl_fixed_arity!(4; first, second, third, fourth);
impl_fixed_arity!(5; first, second, third, fourth, fifth);
impl_fixed_arity!(6; first, second, third, fourth, fifth, sixth);

// =============================================================================
// Bound methods
// =============================================================================

/// A method paired with the receiver it is called on.
///
/// Built with [`bind`]; converted into a [`BoundMethod`] by [`IntoCallable`].
#[derive(Clone, Debug)]
pub struct Bound<S, M> {
    receiver: S,
    method: M,
}

/// Pairs a receiver with a method taking it as `&S`.
///
/// The resulting callable's arity is that of the method minus the receiver.
///
/// # Examples
///
/// ```
/// use funkit::compose::{bind, curry};
///
/// struct Greeter { greeting: &'static str }
///
/// impl Greeter {
///     fn greet(&self, name: String, punctuation: String) -> String {
///         format!("{}, {name}{punctuation}", self.greeting)
///     }
/// }
///
/// let greet = curry(bind(Greeter { greeting: "Hello" }, Greeter::greet)).unwrap();
/// let result = greet.apply(["Alice".to_string(), "!".to_string()]).complete();
/// assert_eq!(result.as_deref(), Some("Hello, Alice!"));
/// ```
pub const fn bind<S, M>(receiver: S, method: M) -> Bound<S, M> {
    Bound { receiver, method }
}

/// Marker for [`Bound`] conversions, keyed by the method's signature without
/// the receiver.
pub struct MethodSignature<Signature>(PhantomData<fn() -> Signature>);

/// A bound method ready to be curried.
pub struct BoundMethod<S, M, Signature> {
    receiver: S,
    method: M,
    signature: PhantomData<fn() -> Signature>,
}

impl<S: fmt::Debug, M, Signature> fmt::Debug for BoundMethod<S, M, Signature> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BoundMethod")
            .field("receiver", &self.receiver)
            .field("signature", &std::any::type_name::<Signature>())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Variadic functions
// =============================================================================

/// A function that takes its arguments as one vector.
///
/// Its parameter count is invisible to the resolver, so [`Variadic::new`]
/// produces an opaque callable; [`Variadic::with_arity`] declares the number
/// of curried slots. Overflow arguments are forwarded after the slot values.
///
/// # Examples
///
/// ```
/// use funkit::compose::{Variadic, curry};
///
/// let sum_all = Variadic::with_arity(|values: Vec<i32>| values.iter().sum::<i32>(), 2);
/// let curried = curry(sum_all).unwrap();
///
/// // Two slots, plus one overflow argument passed straight through.
/// assert_eq!(curried.apply([1, 2, 3]).complete(), Some(6));
/// ```
#[derive(Clone)]
pub struct Variadic<F> {
    function: F,
    arity: Option<Arity>,
}

impl<F> Variadic<F> {
    /// Wraps a function whose arity is unknown.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            arity: None,
        }
    }

    /// Wraps a function and declares its arity.
    pub const fn with_arity(function: F, arity: usize) -> Self {
        Self {
            function,
            arity: Some(Arity::new(arity)),
        }
    }
}

impl<F> fmt::Debug for Variadic<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Variadic")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl<T, R, F> Callable<T, R> for Variadic<F>
where
    F: Fn(Vec<T>) -> R,
{
    fn arity(&self) -> Result<Arity, UnresolvableArityError> {
        self.arity.ok_or_else(UnresolvableArityError::of::<F>)
    }
}

impl<T, R, F> Invoke<T, R> for Variadic<F>
where
    F: Fn(Vec<T>) -> R,
{
    #[inline]
    fn invoke(&self, arguments: Vec<T>) -> R {
        (self.function)(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    fn sum_six(a: i32, b: i32, c: i32, d: i32, e: i32, f: i32) -> i32 {
        a + b + c + d + e + f
    }

    #[test]
    fn test_fixed_arity_from_signature() {
        assert_eq!(resolve_arity(add), Ok(Arity::new(2)));
        assert_eq!(resolve_arity(sum_six), Ok(Arity::new(6)));
        assert_eq!(resolve_arity(|text: String| text.len()), Ok(Arity::ONE));
    }

    #[test]
    fn test_fixed_invoke_drops_overflow() {
        let callable = IntoCallable::<i32, i32, _>::into_callable(add);
        assert_eq!(callable.invoke(vec![1, 2, 100]), 3);
    }

    #[test]
    fn test_variadic_arity() {
        let opaque = Variadic::new(|values: Vec<i32>| values.len());
        let error = Callable::<i32, usize>::arity(&opaque).unwrap_err();
        assert!(error.callable.contains("closure"));

        let declared = Variadic::with_arity(|values: Vec<i32>| values.len(), 2);
        assert_eq!(Callable::<i32, usize>::arity(&declared), Ok(Arity::new(2)));
        assert_eq!(declared.invoke(vec![1, 2, 3]), 3);
    }

    #[test]
    fn test_bound_method_excludes_receiver() {
        struct Offset(i32);

        let bound = bind(Offset(10), |offset: &Offset, first: i32, second: i32| {
            offset.0 + first + second
        });
        let callable = IntoCallable::<i32, i32, _>::into_callable(bound);
        assert_eq!(callable.arity(), Ok(Arity::new(2)));
        assert_eq!(callable.invoke(vec![1, 2]), 13);
    }

    #[test]
    fn test_arity_display() {
        assert_eq!(Arity::new(4).to_string(), "4");
        assert_eq!(Arity::from(2).get(), 2);
    }
}

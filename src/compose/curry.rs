//! The curry engine.
//!
//! [`curry`] wraps a callable of arity N into a [`Curried`] value. Calling it
//! with some arguments either completes the application and returns the
//! callable's result, or returns a new [`Curried`] holding the updated
//! partial application state.
//!
//! # Design Decisions
//!
//! Every state snapshot sits behind a shared pointer and is never mutated.
//! A call builds a fresh copy of the slots (copy-on-fill), so a partially
//! applied callable can be completed any number of times with different
//! arguments:
//!
//! ```
//! use funkit::compose::curry;
//!
//! fn multiply(first: i32, second: i32) -> i32 { first * second }
//!
//! let curried = curry(multiply).unwrap();
//! let double = curried.apply([2]).partial().unwrap();
//! let triple = curried.apply([3]).partial().unwrap();
//!
//! assert_eq!(double.apply([5]).complete(), Some(10));
//! assert_eq!(triple.apply([5]).complete(), Some(15));
//! assert_eq!(double.apply([7]).complete(), Some(14));
//! ```

use std::fmt;

use smallvec::SmallVec;
use tracing::trace;

use super::arity::{Arity, Callable, IntoCallable, Invoke};
use super::placeholder::Argument;
use crate::error::{CurryError, InvalidArityError};
use crate::shared::{ReferenceCounter, ThreadSafety};

/// Number of slots stored inline before the state spills to the heap.
pub const INLINE_SLOTS: usize = 4;

#[cfg(feature = "arc")]
type SharedCallable<T, R> = ReferenceCounter<dyn Callable<T, R> + Send + Sync>;

#[cfg(not(feature = "arc"))]
type SharedCallable<T, R> = ReferenceCounter<dyn Callable<T, R>>;

// =============================================================================
// Slots and partial application state
// =============================================================================

/// The state of one positional argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot<T> {
    /// Nothing supplied yet.
    Empty,
    /// Explicitly skipped with the placeholder; still open.
    Placeholder,
    /// Bound to a value.
    Filled(T),
}

impl<T> Slot<T> {
    /// Returns `true` when the slot holds a value.
    #[inline]
    pub const fn is_filled(&self) -> bool {
        matches!(self, Self::Filled(_))
    }

    #[inline]
    fn into_value(self) -> Option<T> {
        match self {
            Self::Filled(value) => Some(value),
            Self::Empty | Self::Placeholder => None,
        }
    }
}

/// The slots of a partial application, plus the overflow arguments received
/// beyond the curried arity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartialApplication<T> {
    slots: SmallVec<[Slot<T>; INLINE_SLOTS]>,
    overflow: Vec<T>,
}

impl<T> PartialApplication<T> {
    /// Creates a state with `arity` empty slots.
    pub fn empty(arity: Arity) -> Self {
        Self {
            slots: (0..arity.get()).map(|_| Slot::Empty).collect(),
            overflow: Vec::new(),
        }
    }

    /// Returns the slots in positional order.
    pub fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    /// Returns the overflow arguments in call order.
    pub fn overflow(&self) -> &[T] {
        &self.overflow
    }

    /// Returns the number of filled slots.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_filled()).count()
    }

    /// Returns the number of slots that still need a value.
    pub fn remaining(&self) -> usize {
        self.slots.len() - self.filled()
    }

    /// Returns `true` when every slot is filled.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Slot::is_filled)
    }

    /// Returns a new state with `arguments` assigned to the open slots.
    ///
    /// Open slots (empty or placeholder) are visited in positional order and
    /// take the incoming arguments in order; a placeholder argument leaves its
    /// slot open. Arguments left over once every open slot has been visited
    /// are appended to the overflow, except placeholders, which have no
    /// position to hold and are dropped. `self` is left untouched.
    pub fn fill<I>(&self, arguments: I) -> Self
    where
        I: IntoIterator<Item = Argument<T>>,
        T: Clone,
    {
        let mut next = self.clone();
        let mut arguments = arguments.into_iter();

        for slot in next.slots.iter_mut().filter(|slot| !slot.is_filled()) {
            match arguments.next() {
                Some(Argument::Value(value)) => *slot = Slot::Filled(value),
                Some(Argument::Placeholder) => *slot = Slot::Placeholder,
                None => break,
            }
        }

        next.overflow.extend(arguments.filter_map(Argument::into_value));
        next
    }

    /// Consumes a complete state into the final argument list.
    fn into_arguments(self) -> Vec<T> {
        self.slots
            .into_iter()
            .filter_map(Slot::into_value)
            .chain(self.overflow)
            .collect()
    }
}

// =============================================================================
// Curried callables
// =============================================================================

/// A callable that accepts its arguments incrementally.
///
/// Created by [`curry`] or [`curry_n`]. Cloning is cheap: the callable and
/// the state snapshot are shared.
pub struct Curried<T, R> {
    callable: SharedCallable<T, R>,
    arity: Arity,
    state: ReferenceCounter<PartialApplication<T>>,
}

impl<T, R> Clone for Curried<T, R> {
    fn clone(&self) -> Self {
        Self {
            callable: ReferenceCounter::clone(&self.callable),
            arity: self.arity,
            state: ReferenceCounter::clone(&self.state),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Curried<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<T, R> Curried<T, R> {
    /// Returns the number of curried slots.
    #[inline]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Returns the current partial application state.
    #[inline]
    pub fn state(&self) -> &PartialApplication<T> {
        &self.state
    }

    /// Returns the number of slots that still need a value.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.state.remaining()
    }

    /// Returns `true` when both values share the same callable and the same
    /// state snapshot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.callable, &other.callable)
            && ReferenceCounter::ptr_eq(&self.state, &other.state)
    }

    /// Supplies arguments, which may include placeholders.
    ///
    /// Returns [`Application::Complete`] with the callable's result once every
    /// slot is filled, [`Application::Partial`] otherwise. Calling with no
    /// arguments returns this callable unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use funkit::args;
    /// use funkit::compose::curry;
    ///
    /// fn affine(x: i32, y: i32, z: i32) -> i32 { x + y * z }
    ///
    /// let curried = curry(affine).unwrap();
    /// let awaiting_x = curried.call(args![__, 3, 4]).partial().unwrap();
    /// assert_eq!(awaiting_x.remaining(), 1);
    /// assert_eq!(awaiting_x.call(args![2]).complete(), Some(14));
    /// ```
    pub fn call<I>(&self, arguments: I) -> Application<T, R>
    where
        I: IntoIterator<Item = Argument<T>>,
        T: Clone,
    {
        let mut arguments = arguments.into_iter().peekable();
        if arguments.peek().is_none() {
            return Application::Partial(self.clone());
        }

        let state = self.state.fill(arguments);
        if state.is_complete() {
            trace!(
                arity = self.arity.get(),
                overflow = state.overflow().len(),
                "curried call complete"
            );
            Application::Complete(self.callable.invoke(state.into_arguments()))
        } else {
            trace!(
                arity = self.arity.get(),
                filled = state.filled(),
                "curried call partially applied"
            );
            Application::Partial(Self {
                callable: ReferenceCounter::clone(&self.callable),
                arity: self.arity,
                state: ReferenceCounter::new(state),
            })
        }
    }

    /// Supplies concrete values; shorthand for [`call`](Self::call) without
    /// placeholders.
    pub fn apply<I>(&self, values: I) -> Application<T, R>
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        self.call(values.into_iter().map(Argument::Value))
    }
}

/// The outcome of a curried call.
pub enum Application<T, R> {
    /// Some slot is still open; the next stage of the curried callable.
    Partial(Curried<T, R>),
    /// Every slot was filled; the callable's result.
    Complete(R),
}

impl<T: fmt::Debug, R: fmt::Debug> fmt::Debug for Application<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Partial(curried) => formatter.debug_tuple("Partial").field(curried).finish(),
            Self::Complete(result) => formatter.debug_tuple("Complete").field(result).finish(),
        }
    }
}

impl<T, R> Application<T, R> {
    /// Returns `true` for [`Application::Complete`].
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns the result if the application completed.
    #[inline]
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Returns the next stage if the application is still partial.
    #[inline]
    pub fn partial(self) -> Option<Curried<T, R>> {
        match self {
            Self::Partial(curried) => Some(curried),
            Self::Complete(_) => None,
        }
    }

    /// Forwards more arguments to a partial application.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::AlreadyComplete`] if the application already
    /// produced its result.
    ///
    /// # Examples
    ///
    /// ```
    /// use funkit::args;
    /// use funkit::compose::curry;
    ///
    /// fn affine(x: i32, y: i32, z: i32) -> i32 { x + y * z }
    ///
    /// let result = curry(affine)?
    ///     .call(args![2])
    ///     .call(args![3])?
    ///     .call(args![4])?
    ///     .complete();
    /// assert_eq!(result, Some(14));
    /// # Ok::<(), funkit::error::CurryError>(())
    /// ```
    pub fn call<I>(self, arguments: I) -> Result<Self, CurryError>
    where
        I: IntoIterator<Item = Argument<T>>,
        T: Clone,
    {
        match self {
            Self::Partial(curried) => Ok(curried.call(arguments)),
            Self::Complete(_) => Err(CurryError::AlreadyComplete),
        }
    }

    /// Forwards more concrete values to a partial application.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::AlreadyComplete`] if the application already
    /// produced its result.
    pub fn apply<I>(self, values: I) -> Result<Self, CurryError>
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        self.call(values.into_iter().map(Argument::Value))
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Curries a callable, resolving its arity from its signature.
///
/// # Errors
///
/// - [`CurryError::UnresolvableArity`] for callables that declare no arity
/// - [`CurryError::InvalidArity`] for callables declaring zero parameters
///
/// # Examples
///
/// ```
/// use funkit::args;
/// use funkit::compose::curry;
///
/// fn concat(first: String, second: String) -> String { first + &second }
///
/// let curried = curry(concat).unwrap();
/// let world_last = curried.call(args![__, "world".to_string()]).partial().unwrap();
/// assert_eq!(
///     world_last.apply(["hello ".to_string()]).complete().as_deref(),
///     Some("hello world")
/// );
/// ```
pub fn curry<T, R, M, F>(function: F) -> Result<Curried<T, R>, CurryError>
where
    F: IntoCallable<T, R, M>,
{
    let callable = function.into_callable();
    let arity = callable.arity()?;
    Ok(build(callable, arity)?)
}

/// Curries a callable with an explicit arity, bypassing introspection.
///
/// Use it for opaque callables or to curry a variadic function over a chosen
/// number of slots. Arguments beyond `arity` are passed through to the final
/// invocation.
///
/// # Errors
///
/// Returns [`InvalidArityError`] when `arity` is zero, or lower than the
/// arity the callable declares.
///
/// # Examples
///
/// ```
/// use funkit::compose::{Variadic, curry_n};
///
/// let join = Variadic::new(|parts: Vec<&'static str>| parts.concat());
/// let curried = curry_n(join, 2).unwrap();
///
/// let with_prefix = curried.apply(["a"]).partial().unwrap();
/// assert_eq!(with_prefix.apply(["b", "c"]).complete().as_deref(), Some("abc"));
/// ```
pub fn curry_n<T, R, M, F>(function: F, arity: usize) -> Result<Curried<T, R>, InvalidArityError>
where
    F: IntoCallable<T, R, M>,
{
    let callable = function.into_callable();
    if let Ok(declared) = callable.arity()
        && arity < declared.get()
    {
        return Err(InvalidArityError {
            requested: arity,
            minimum: declared.get(),
        });
    }
    build(callable, Arity::new(arity))
}

fn build<T, R, C>(callable: C, arity: Arity) -> Result<Curried<T, R>, InvalidArityError>
where
    C: Callable<T, R> + ThreadSafety + 'static,
{
    if arity.get() == 0 {
        return Err(InvalidArityError {
            requested: 0,
            minimum: 1,
        });
    }

    let callable: SharedCallable<T, R> = ReferenceCounter::new(callable);
    Ok(Curried {
        callable,
        arity,
        state: ReferenceCounter::new(PartialApplication::empty(arity)),
    })
}

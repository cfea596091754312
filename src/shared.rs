//! Shared-ownership plumbing used by curried callables and function values.

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which lets curried callables be moved between threads.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Auto-trait requirements placed on everything a curried callable shares.
///
/// With the `arc` feature this is `Send + Sync`; otherwise it is implemented
/// for every type and imposes nothing.
#[cfg(feature = "arc")]
pub trait ThreadSafety: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + ?Sized> ThreadSafety for T {}

/// Auto-trait requirements placed on everything a curried callable shares.
///
/// With the `arc` feature this is `Send + Sync`; otherwise it is implemented
/// for every type and imposes nothing.
#[cfg(not(feature = "arc"))]
pub trait ThreadSafety {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> ThreadSafety for T {}

//! Core predicate trait and logical combinators
//!
//! This module provides the foundational [`Predicate`] trait, the
//! [`negation`] combinator, and the `And`/`Or`/`Not` function objects used
//! to compose predicates.

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use predica::prelude::*;
///
/// let small_even = (|x: &i32| x % 2 == 0).and(|x: &i32| *x < 10);
/// assert!(small_even.check(&4));
/// assert!(!small_even.check(&12));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures and fn items
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All methods return concrete types, so nothing is boxed.
///
/// # Example
///
/// ```rust
/// use predica::prelude::*;
///
/// let outside = (|x: &i32| *x > 0).and(|x: &i32| *x < 100).not();
/// assert!(outside.check(&-5));
/// assert!(!outside.check(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// The second predicate is only evaluated when the first holds.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// The second predicate is only evaluated when the first fails.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate. Same as [`negation`].
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - logical complement of the wrapped predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

// Send + Sync are auto-derived when the wrapped predicates are Send + Sync

/// Create the negation of a predicate.
///
/// The returned predicate evaluates `predicate` exactly once per call and
/// yields the opposite result.
///
/// # Example
///
/// ```rust
/// use predica::prelude::*;
///
/// let odd = negation(|x: &i32| x % 2 == 0);
/// assert!(odd.check(&3));
/// assert!(!odd.check(&4));
/// ```
pub fn negation<P>(predicate: P) -> Not<P> {
    Not(predicate)
}

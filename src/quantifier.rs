//! Quantifiers over sequences
//!
//! [`all_match`] and [`any_match`] lift a predicate over elements to a
//! predicate over sequences. Both stop at the first element that decides the
//! result, so they also work on infinite iterators as long as such an
//! element exists.

use std::borrow::Borrow;

use super::combinators::Predicate;

/// Predicate that checks if all elements satisfy a predicate.
///
/// Vacuously true for an empty sequence.
#[derive(Clone, Copy, Debug)]
pub struct AllMatch<P>(pub P);

impl<P> AllMatch<P> {
    /// Check every element of an iterable, stopping at the first failure.
    ///
    /// Items may be owned values or references to the predicate's input type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use predica::all_match;
    ///
    /// let small = all_match(|x: &u32| *x < 10);
    /// assert!(small.check_iter([1_u32, 2, 3]));
    /// assert!(small.check_iter(&vec![4_u32, 5]));
    /// assert!(!small.check_iter(0_u32..)); // stops at 10
    /// ```
    pub fn check_iter<T, I>(&self, iterable: I) -> bool
    where
        T: ?Sized,
        I: IntoIterator,
        I::Item: Borrow<T>,
        P: Predicate<T>,
    {
        iterable
            .into_iter()
            .all(|item| self.0.check(item.borrow()))
    }
}

impl<T, P: Predicate<T>> Predicate<[T]> for AllMatch<P> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.iter().all(|item| self.0.check(item))
    }
}

impl<T, P: Predicate<T>> Predicate<Vec<T>> for AllMatch<P> {
    #[inline]
    fn check(&self, value: &Vec<T>) -> bool {
        value.iter().all(|item| self.0.check(item))
    }
}

/// Create a predicate that checks if all elements satisfy a condition.
///
/// # Example
///
/// ```rust
/// use predica::prelude::*;
///
/// let is_even = |x: &i32| x % 2 == 0;
/// assert!(all_match(is_even).check(&vec![2, 4, 6]));
/// assert!(!all_match(is_even).check(&vec![2, 3, 6]));
/// assert!(all_match(is_even).check(&Vec::<i32>::new()));
/// ```
pub fn all_match<P>(predicate: P) -> AllMatch<P> {
    AllMatch(predicate)
}

/// Predicate that checks if any element satisfies a predicate.
///
/// Vacuously false for an empty sequence.
#[derive(Clone, Copy, Debug)]
pub struct AnyMatch<P>(pub P);

impl<P> AnyMatch<P> {
    /// Check elements of an iterable, stopping at the first success.
    ///
    /// # Example
    ///
    /// ```rust
    /// use predica::any_match;
    ///
    /// let big = any_match(|x: &u64| *x > 1_000);
    /// assert!(big.check_iter(1_u64..)); // terminates at 1001
    /// assert!(!big.check_iter([1_u64, 2, 3]));
    /// ```
    pub fn check_iter<T, I>(&self, iterable: I) -> bool
    where
        T: ?Sized,
        I: IntoIterator,
        I::Item: Borrow<T>,
        P: Predicate<T>,
    {
        iterable
            .into_iter()
            .any(|item| self.0.check(item.borrow()))
    }
}

impl<T, P: Predicate<T>> Predicate<[T]> for AnyMatch<P> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.iter().any(|item| self.0.check(item))
    }
}

impl<T, P: Predicate<T>> Predicate<Vec<T>> for AnyMatch<P> {
    #[inline]
    fn check(&self, value: &Vec<T>) -> bool {
        value.iter().any(|item| self.0.check(item))
    }
}

/// Create a predicate that checks if any element satisfies a condition.
///
/// # Example
///
/// ```rust
/// use predica::prelude::*;
///
/// let is_even = |x: &i32| x % 2 == 0;
/// assert!(any_match(is_even).check(&vec![1, 3, 4]));
/// assert!(!any_match(is_even).check(&vec![1, 3, 5]));
/// assert!(!any_match(is_even).check(&Vec::<i32>::new()));
/// ```
pub fn any_match<P>(predicate: P) -> AnyMatch<P> {
    AnyMatch(predicate)
}

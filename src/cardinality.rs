//! Cardinality predicates
//!
//! [`is_empty`] and [`is_singleton`] accept anything implementing
//! [`Cardinality`], so values without a defined size are rejected at
//! compile time. Iterators only know their size at run time; the `try_`
//! variants read it from [`Iterator::size_hint`] without consuming anything
//! and fail when the bounds disagree.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashSet;
//! use predica::prelude::*;
//!
//! assert!(is_empty(""));
//! assert!(is_singleton(&HashSet::from([7])));
//! assert!(!is_singleton(&vec![1, 2]));
//!
//! assert_eq!(try_is_singleton(std::iter::once('x')), Ok(true));
//! assert!(try_is_empty(0..).is_err());
//! ```

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::combinators::Predicate;
use crate::error::{PredicateError, Result};

/// Values with a defined, finite number of elements.
pub trait Cardinality {
    /// Number of elements.
    fn cardinality(&self) -> usize;
}

macro_rules! impl_cardinality_by_len {
    ($($ty:ty => [$($generics:tt)*]),* $(,)?) => {
        $(
            impl<$($generics)*> Cardinality for $ty {
                #[inline]
                fn cardinality(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

impl_cardinality_by_len! {
    [T] => [T],
    Vec<T> => [T],
    VecDeque<T> => [T],
    LinkedList<T> => [T],
    BinaryHeap<T> => [T],
    BTreeSet<T> => [T],
    BTreeMap<K, V> => [K, V],
    HashSet<T, S> => [T, S],
    HashMap<K, V, S> => [K, V, S],
}

impl<T, const N: usize> Cardinality for [T; N] {
    #[inline]
    fn cardinality(&self) -> usize {
        N
    }
}

// Strings count Unicode scalar values, not bytes
impl Cardinality for str {
    #[inline]
    fn cardinality(&self) -> usize {
        self.chars().count()
    }
}

impl Cardinality for String {
    #[inline]
    fn cardinality(&self) -> usize {
        self.as_str().cardinality()
    }
}

impl<S: Cardinality + ?Sized> Cardinality for &S {
    #[inline]
    fn cardinality(&self) -> usize {
        (**self).cardinality()
    }
}

impl<S: Cardinality + ?Sized> Cardinality for Box<S> {
    #[inline]
    fn cardinality(&self) -> usize {
        (**self).cardinality()
    }
}

impl<S: Cardinality + ?Sized> Cardinality for Rc<S> {
    #[inline]
    fn cardinality(&self) -> usize {
        (**self).cardinality()
    }
}

impl<S: Cardinality + ?Sized> Cardinality for Arc<S> {
    #[inline]
    fn cardinality(&self) -> usize {
        (**self).cardinality()
    }
}

/// True iff `sized` has no elements.
///
/// # Example
///
/// ```rust
/// use predica::is_empty;
///
/// assert!(is_empty(&Vec::<i32>::new()));
/// assert!(!is_empty(&[1]));
/// ```
#[inline]
pub fn is_empty<S: Cardinality + ?Sized>(sized: &S) -> bool {
    sized.cardinality() == 0
}

/// True iff `sized` has exactly one element.
///
/// # Example
///
/// ```rust
/// use predica::is_singleton;
///
/// assert!(is_singleton(&[1]));
/// assert!(!is_singleton(&[1, 2]));
/// assert!(is_singleton("é"));
/// ```
#[inline]
pub fn is_singleton<S: Cardinality + ?Sized>(sized: &S) -> bool {
    sized.cardinality() == 1
}

/// Predicate form of [`is_empty`].
#[derive(Clone, Copy, Default, Debug)]
pub struct IsEmpty;

impl<S: Cardinality + ?Sized> Predicate<S> for IsEmpty {
    #[inline]
    fn check(&self, value: &S) -> bool {
        is_empty(value)
    }
}

/// Predicate form of [`is_singleton`].
#[derive(Clone, Copy, Default, Debug)]
pub struct IsSingleton;

impl<S: Cardinality + ?Sized> Predicate<S> for IsSingleton {
    #[inline]
    fn check(&self, value: &S) -> bool {
        is_singleton(value)
    }
}

fn size_hint_cardinality<I>(operation: &'static str, iter: &I) -> Result<usize>
where
    I: Iterator + ?Sized,
{
    match iter.size_hint() {
        (lower, Some(upper)) if lower == upper => Ok(lower),
        (lower, upper) => Err(PredicateError::invalid_argument(
            operation,
            match upper {
                Some(upper) => format!(
                    "iterator has no defined cardinality (between {} and {} elements)",
                    lower, upper
                ),
                None => format!(
                    "iterator has no defined cardinality (at least {} elements, no upper bound)",
                    lower
                ),
            },
        )),
    }
}

/// Exact number of remaining elements of an iterator, read from its size hint.
///
/// The iterator is not advanced. Fails with
/// [`PredicateError::InvalidArgument`] unless both bounds of the hint agree.
///
/// # Example
///
/// ```rust
/// use predica::exact_cardinality;
///
/// let letters = ['a', 'b', 'c'].into_iter();
/// assert_eq!(exact_cardinality(&letters), Ok(3));
/// assert!(exact_cardinality(&letters.filter(|c| *c != 'b')).is_err());
/// ```
pub fn exact_cardinality<I: Iterator + ?Sized>(iter: &I) -> Result<usize> {
    size_hint_cardinality("exact_cardinality", iter)
}

/// Runtime-checked [`is_empty`] for iterables.
pub fn try_is_empty<I: IntoIterator>(iterable: I) -> Result<bool> {
    let iter = iterable.into_iter();
    size_hint_cardinality("try_is_empty", &iter).map(|n| n == 0)
}

/// Runtime-checked [`is_singleton`] for iterables.
pub fn try_is_singleton<I: IntoIterator>(iterable: I) -> Result<bool> {
    let iter = iterable.into_iter();
    size_hint_cardinality("try_is_singleton", &iter).map(|n| n == 1)
}

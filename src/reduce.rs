//! Reductions of sequences to a single boolean
//!
//! All reductions here consume their input left to right and return as soon
//! as the answer is known.

use std::borrow::Borrow;

/// Conjunction of a sequence of booleans.
///
/// True for an empty sequence. Stops at the first `false`.
///
/// # Example
///
/// ```rust
/// use predica::conjunction;
///
/// assert!(conjunction([true, true, true]));
/// assert!(!conjunction(&[true, false]));
/// assert!(conjunction(Vec::<bool>::new()));
/// ```
pub fn conjunction<I>(booleans: I) -> bool
where
    I: IntoIterator,
    I::Item: Borrow<bool>,
{
    booleans.into_iter().all(|b| *b.borrow())
}

/// Disjunction of a sequence of booleans.
///
/// False for an empty sequence. Stops at the first `true`.
///
/// # Example
///
/// ```rust
/// use predica::disjunction;
///
/// assert!(!disjunction([false, false]));
/// assert!(disjunction(vec![false, true]));
/// assert!(!disjunction(Vec::<bool>::new()));
/// ```
pub fn disjunction<I>(booleans: I) -> bool
where
    I: IntoIterator,
    I::Item: Borrow<bool>,
{
    booleans.into_iter().any(|b| *b.borrow())
}

/// Whether every element equals its immediate predecessor.
///
/// True for empty and single-element sequences. Stops at the first element
/// that differs.
///
/// # Example
///
/// ```rust
/// use predica::all_equal;
///
/// assert!(all_equal([5, 5, 5]));
/// assert!(!all_equal([5, 5, 6]));
/// assert!(all_equal(["only"]));
/// assert!(all_equal(Vec::<u8>::new()));
/// ```
pub fn all_equal<I>(sequence: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut iter = sequence.into_iter();
    let Some(mut previous) = iter.next() else {
        return true;
    };
    for item in iter {
        if item != previous {
            return false;
        }
        previous = item;
    }
    true
}

/// Whether every element has the same key as its immediate predecessor.
///
/// # Example
///
/// ```rust
/// use predica::all_equal_by_key;
/// use std::mem::discriminant;
///
/// enum Reading {
///     Celsius(f64),
///     Fahrenheit(f64),
/// }
///
/// let readings = [Reading::Celsius(21.0), Reading::Celsius(19.5)];
/// assert!(all_equal_by_key(&readings, |r| discriminant(*r)));
///
/// let mixed = [Reading::Celsius(21.0), Reading::Fahrenheit(70.0)];
/// assert!(!all_equal_by_key(&mixed, |r| discriminant(*r)));
/// ```
pub fn all_equal_by_key<I, K, F>(sequence: I, mut key: F) -> bool
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    all_equal(sequence.into_iter().map(|item| key(&item)))
}

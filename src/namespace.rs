//! Namespace grouping of every combinator
//!
//! [`Predicates`] (alias [`P`]) bundles the free functions of this crate as
//! associated functions, for call sites that prefer a qualified vocabulary
//! such as `P::all_match(..)` over glob imports.
//!
//! # Example
//!
//! ```rust
//! use predica::{Predicate, P};
//!
//! let has_vowel = P::any_match(|c: &char| "aeiou".contains(*c));
//! assert!(has_vowel.check_iter("rust".chars()));
//! assert!(P::negation(P::any_match(|c: &char| *c == 'x')).check(&vec!['a', 'b']));
//! assert!(P::is_singleton("x"));
//! ```

use std::any::Any;
use std::borrow::Borrow;

use crate::cardinality::{self, Cardinality};
use crate::combinators::{self, Not};
use crate::error::Result;
use crate::instance::{self, InstanceOf, TypeDescriptor};
use crate::quantifier::{self, AllMatch, AnyMatch};
use crate::reduce;

/// Collection of predicates for use in higher-order functions.
#[derive(Clone, Copy, Default, Debug)]
pub struct Predicates;

/// Short alias for [`Predicates`].
pub type P = Predicates;

impl Predicates {
    /// See [`combinators::negation`].
    pub fn negation<Pr>(predicate: Pr) -> Not<Pr> {
        combinators::negation(predicate)
    }

    /// See [`instance::instance_of`].
    pub fn instance_of<T: Any>() -> InstanceOf {
        instance::instance_of::<T>()
    }

    /// See [`instance::not_instance_of`].
    pub fn not_instance_of<T: Any>() -> Not<InstanceOf> {
        instance::not_instance_of::<T>()
    }

    /// See [`instance::try_instance_of`].
    pub fn try_instance_of(descriptor: TypeDescriptor) -> Result<InstanceOf> {
        instance::try_instance_of(descriptor)
    }

    /// See [`instance::try_not_instance_of`].
    pub fn try_not_instance_of(descriptor: TypeDescriptor) -> Result<Not<InstanceOf>> {
        instance::try_not_instance_of(descriptor)
    }

    /// See [`cardinality::is_empty`].
    pub fn is_empty<S: Cardinality + ?Sized>(sized: &S) -> bool {
        cardinality::is_empty(sized)
    }

    /// See [`cardinality::is_singleton`].
    pub fn is_singleton<S: Cardinality + ?Sized>(sized: &S) -> bool {
        cardinality::is_singleton(sized)
    }

    /// See [`cardinality::try_is_empty`].
    pub fn try_is_empty<I: IntoIterator>(iterable: I) -> Result<bool> {
        cardinality::try_is_empty(iterable)
    }

    /// See [`cardinality::try_is_singleton`].
    pub fn try_is_singleton<I: IntoIterator>(iterable: I) -> Result<bool> {
        cardinality::try_is_singleton(iterable)
    }

    /// See [`quantifier::all_match`].
    pub fn all_match<Pr>(predicate: Pr) -> AllMatch<Pr> {
        quantifier::all_match(predicate)
    }

    /// See [`quantifier::any_match`].
    pub fn any_match<Pr>(predicate: Pr) -> AnyMatch<Pr> {
        quantifier::any_match(predicate)
    }

    /// See [`reduce::conjunction`].
    pub fn conjunction<I>(booleans: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<bool>,
    {
        reduce::conjunction(booleans)
    }

    /// See [`reduce::disjunction`].
    pub fn disjunction<I>(booleans: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<bool>,
    {
        reduce::disjunction(booleans)
    }

    /// See [`reduce::all_equal`].
    pub fn all_equal<I>(sequence: I) -> bool
    where
        I: IntoIterator,
        I::Item: PartialEq,
    {
        reduce::all_equal(sequence)
    }

    /// See [`reduce::all_equal_by_key`].
    pub fn all_equal_by_key<I, K, F>(sequence: I, key: F) -> bool
    where
        I: IntoIterator,
        F: FnMut(&I::Item) -> K,
        K: PartialEq,
    {
        reduce::all_equal_by_key(sequence, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::Predicate;

    #[test]
    fn test_namespace_matches_free_functions() {
        let is_even = |x: &i32| x % 2 == 0;
        let v = vec![2, 4, 5];
        assert_eq!(
            P::all_match(is_even).check(&v),
            quantifier::all_match(is_even).check(&v)
        );
        assert_eq!(
            P::any_match(is_even).check(&v),
            quantifier::any_match(is_even).check(&v)
        );
        assert!(P::negation(is_even).check(&5));
    }

    #[test]
    fn test_namespace_cardinality() {
        assert!(P::is_empty(&[] as &[u8]));
        assert!(P::is_singleton(&[1]));
        assert_eq!(P::try_is_empty(None::<u8>), Ok(true));
        assert!(P::try_is_singleton(1..).is_err());
    }

    #[test]
    fn test_namespace_reductions() {
        assert!(P::conjunction([true, true]));
        assert!(!P::disjunction([false]));
        assert!(P::all_equal([1, 1]));
        assert!(P::all_equal_by_key([2, 4, 8], |n| n % 2));
    }

    #[test]
    fn test_namespace_instance_checks() {
        let x: &dyn Any = &1_u8;
        assert!(P::instance_of::<u8>().check(x));
        assert!(P::not_instance_of::<i8>().check(x));
        assert!(P::try_instance_of(TypeDescriptor::named("none")).is_err());
        assert!(P::try_not_instance_of(TypeDescriptor::of::<i8>())
            .unwrap()
            .check(x));
    }
}

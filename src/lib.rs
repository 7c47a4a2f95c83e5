//! # Predica
//!
//! A small vocabulary of predicate combinators: functions that build or
//! compose boolean-valued functions over values and sequences.
//!
//! Every operation is pure. Combinators that return predicates return small
//! function-object types implementing [`Predicate`], and any
//! `Fn(&T) -> bool` closure is a predicate too, so the pieces snap together.
//!
//! ## Quick Example
//!
//! ```rust
//! use predica::prelude::*;
//!
//! let is_even = |x: &i32| x % 2 == 0;
//!
//! assert!(all_match(is_even).check_iter([2, 4, 6]));
//! assert!(!any_match(is_even).check_iter([1, 3, 5]));
//! assert!(negation(is_even).check(&3));
//!
//! assert!(is_empty(&Vec::<i32>::new()));
//! assert!(is_singleton(&[1]));
//!
//! assert!(conjunction([true, true]));
//! assert!(disjunction([false, true]));
//! assert!(all_equal([5, 5, 5]));
//! ```
//!
//! ## Namespace
//!
//! The same operations are available as associated functions on
//! [`Predicates`], aliased [`P`]:
//!
//! ```rust
//! use predica::{Predicate, P};
//!
//! let not_string = P::not_instance_of::<String>();
//! assert!(not_string.check(&42_i32 as &dyn std::any::Any));
//! assert!(P::all_equal(["a", "a"]));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod cardinality;
pub mod combinators;
pub mod error;
pub mod instance;
pub mod namespace;
pub mod quantifier;
pub mod reduce;
pub mod testing;

// Re-exports
pub use cardinality::{
    exact_cardinality, is_empty, is_singleton, try_is_empty, try_is_singleton, Cardinality,
    IsEmpty, IsSingleton,
};
pub use combinators::{negation, And, Not, Or, Predicate, PredicateExt};
pub use error::{PredicateError, Result};
pub use instance::{
    instance_of, not_instance_of, try_instance_of, try_not_instance_of, InstanceOf,
    TypeDescriptor,
};
pub use namespace::{Predicates, P};
pub use quantifier::{all_match, any_match, AllMatch, AnyMatch};
pub use reduce::{all_equal, all_equal_by_key, conjunction, disjunction};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cardinality::{
        is_empty, is_singleton, try_is_empty, try_is_singleton, Cardinality, IsEmpty, IsSingleton,
    };
    pub use crate::combinators::{negation, Predicate, PredicateExt};
    pub use crate::error::PredicateError;
    pub use crate::instance::{instance_of, not_instance_of, TypeDescriptor};
    pub use crate::quantifier::{all_match, any_match};
    pub use crate::reduce::{all_equal, all_equal_by_key, conjunction, disjunction};
}

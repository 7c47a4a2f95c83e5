//! Testing utilities for predicate-heavy code
//!
//! Assertion macros that report the offending value when a predicate does
//! not give the expected answer.
//!
//! # Examples
//!
//! ```rust
//! use predica::{assert_holds, assert_rejects};
//! use predica::prelude::*;
//!
//! let is_even = |x: &i32| x % 2 == 0;
//! assert_holds!(is_even, &4);
//! assert_rejects!(is_even, &3);
//! assert_holds!(all_match(is_even), &vec![2, 4]);
//! ```

/// Assert that a predicate holds for a value.
///
/// The value is passed by reference and must implement `Debug`.
///
/// # Example
///
/// ```rust
/// use predica::assert_holds;
/// use predica::IsEmpty;
///
/// assert_holds!(IsEmpty, &Vec::<u8>::new());
/// ```
#[macro_export]
macro_rules! assert_holds {
    ($predicate:expr, $value:expr) => {
        match $value {
            value => {
                if !$crate::Predicate::check(&$predicate, value) {
                    panic!("Expected predicate to hold for {:?}", value);
                }
            }
        }
    };
}

/// Assert that a predicate does not hold for a value.
///
/// # Example
///
/// ```rust
/// use predica::assert_rejects;
/// use predica::IsSingleton;
///
/// assert_rejects!(IsSingleton, &[1, 2]);
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($predicate:expr, $value:expr) => {
        match $value {
            value => {
                if $crate::Predicate::check(&$predicate, value) {
                    panic!("Expected predicate to reject {:?}", value);
                }
            }
        }
    };
}

//! Property-based tests for the predicate combinators

use proptest::prelude::*;
use std::any::Any;

use predica::prelude::*;
use predica::P;

fn is_even(x: &i64) -> bool {
    x % 2 == 0
}

proptest! {
    #[test]
    fn prop_negation_is_complement(x in any::<i64>(), threshold in any::<i64>()) {
        let above = move |v: &i64| *v > threshold;
        prop_assert_eq!(negation(above).check(&x), !above.check(&x));
        prop_assert_eq!(negation(is_even).check(&x), !is_even(&x));
    }

    #[test]
    fn prop_double_negation_is_identity(x in any::<i64>()) {
        prop_assert_eq!(negation(negation(is_even)).check(&x), is_even(&x));
    }

    #[test]
    fn prop_instance_and_not_instance_disagree(choice in 0u8..4, n in any::<i32>()) {
        let value: Box<dyn Any> = match choice {
            0 => Box::new(n),
            1 => Box::new(n as i64),
            2 => Box::new(n.to_string()),
            _ => Box::new(vec![n]),
        };
        let is_i32 = instance_of::<i32>();
        let not_i32 = not_instance_of::<i32>();
        prop_assert_ne!(is_i32.check(&value), not_i32.check(&value));
        prop_assert_eq!(is_i32.check(&value), choice == 0);
    }

    #[test]
    fn prop_all_match_agrees_with_iterator_all(values in prop::collection::vec(any::<i64>(), 0..50)) {
        let expected = values.iter().all(is_even);
        prop_assert_eq!(all_match(is_even).check(&values), expected);
        prop_assert_eq!(all_match(is_even).check_iter(&values), expected);
    }

    #[test]
    fn prop_any_match_agrees_with_iterator_any(values in prop::collection::vec(any::<i64>(), 0..50)) {
        let expected = values.iter().any(is_even);
        prop_assert_eq!(any_match(is_even).check(&values), expected);
        prop_assert_eq!(any_match(is_even).check_iter(values.iter()), expected);
    }

    #[test]
    fn prop_de_morgan_on_quantifiers(values in prop::collection::vec(any::<i64>(), 0..50)) {
        // not (any p) == all (not p)
        prop_assert_eq!(
            negation(any_match(is_even)).check(&values),
            all_match(negation(is_even)).check(&values)
        );
    }

    #[test]
    fn prop_conjunction_and_disjunction(flags in prop::collection::vec(any::<bool>(), 0..50)) {
        prop_assert_eq!(conjunction(&flags), !flags.contains(&false));
        prop_assert_eq!(disjunction(&flags), flags.contains(&true));
        prop_assert_eq!(P::conjunction(flags.iter()), conjunction(flags.iter().copied()));
    }

    #[test]
    fn prop_all_equal_matches_definition(values in prop::collection::vec(0u8..3, 0..20)) {
        let expected = values.windows(2).all(|pair| pair[0] == pair[1]);
        prop_assert_eq!(all_equal(&values), expected);
        prop_assert_eq!(all_equal_by_key(&values, |v| **v), expected);
    }

    #[test]
    fn prop_repeated_value_is_all_equal(value in any::<i32>(), len in 0usize..30) {
        prop_assert!(all_equal(std::iter::repeat(value).take(len)));
    }

    #[test]
    fn prop_cardinality_tests(values in prop::collection::vec(any::<u8>(), 0..5)) {
        prop_assert_eq!(is_empty(&values), values.is_empty());
        prop_assert_eq!(is_singleton(&values), values.len() == 1);
        prop_assert_eq!(try_is_empty(&values), Ok(values.is_empty()));
        prop_assert_eq!(try_is_singleton(values.iter()), Ok(values.len() == 1));
    }
}

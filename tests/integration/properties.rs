//! Property tests for `sum` over generated operands

use adder_core::{AdderError, sum};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sum_matches_checked_addition(a in any::<i32>(), b in any::<i32>()) {
        let result = sum(Some(&a.to_string()), Some(&b.to_string()));
        match a.checked_add(b) {
            Some(expected) => prop_assert_eq!(result, Ok(expected)),
            None => prop_assert_eq!(result, Err(AdderError::Overflow { a, b })),
        }
    }

    #[test]
    fn sum_is_commutative(a in "[-+]?[0-9]{1,11}|[a-z]{1,3}", b in "[-+]?[0-9]{1,11}|[a-z]{1,3}") {
        let forward = sum(Some(&a), Some(&b)).map_err(|e| e.kind());
        let backward = sum(Some(&b), Some(&a)).map_err(|e| e.kind());
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn absent_operand_always_missing(text in ".*") {
        prop_assert_eq!(sum(None, Some(&text)), Err(AdderError::MissingInput));
        prop_assert_eq!(sum(Some(&text), None), Err(AdderError::MissingInput));
    }

    #[test]
    fn non_digit_operand_rejected(
        bad in "[0-9]{0,4}[a-zA-Z .,_][0-9]{0,4}",
        good in any::<i16>(),
    ) {
        let good = good.to_string();
        prop_assert_eq!(sum(Some(&bad), Some(&good)), Err(AdderError::NotAnInteger));
        prop_assert_eq!(sum(Some(&good), Some(&bad)), Err(AdderError::NotAnInteger));
    }
}

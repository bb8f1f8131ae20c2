//! Property-based tests for stringcheck.

use proptest::prelude::*;
use stringcheck::prelude::*;

// ============================================================================
// IDEMPOTENCY: check() == check()
// ============================================================================

proptest! {
    #[test]
    fn check_is_idempotent(s in ".*") {
        let mut v = Validator::new(s).non_empty().min_length(3).max_length(10);
        let r1 = v.check();
        let r2 = v.check();
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn rule_validate_is_idempotent(s in ".*") {
        let rule = min_length(3);
        prop_assert_eq!(rule.validate(&s), rule.validate(&s));
    }
}

// ============================================================================
// CHAIN LAW: the chain fails iff some rule fails
// ============================================================================

proptest! {
    #[test]
    fn chain_fails_iff_any_rule_fails(s in ".{0,30}") {
        let a_ok = non_empty().validate(&s);
        let b_ok = min_length(3).validate(&s);
        let c_ok = max_length(10).validate(&s);

        let chain_ok = Validator::new(s).non_empty().min_length(3).max_length(10).check();
        prop_assert_eq!(chain_ok, a_ok && b_ok && c_ok);
    }

    #[test]
    fn reported_error_is_the_first_failing_rule(s in ".{0,30}") {
        let mut v = Validator::new(s.clone()).non_empty().min_length(3).max_length(10);
        if !v.check() {
            let expected = if !non_empty().validate(&s) {
                "non_empty"
            } else if !min_length(3).validate(&s) {
                "min_length"
            } else {
                "max_length"
            };
            prop_assert_eq!(v.error().map(|e| e.code.to_string()), Some(expected.to_string()));
        }
    }
}

// ============================================================================
// NUMERIC RULES AGREE WITH INTEGER COMPARISON
// ============================================================================

proptest! {
    #[test]
    fn greater_than_agrees_with_integer_ordering(n in any::<i64>()) {
        let ok = Validator::new(n.to_string()).greater_than(10_i64).check();
        prop_assert_eq!(ok, n > 10);
    }

    #[test]
    fn less_than_or_equal_is_inclusive(n in any::<i64>()) {
        let ok = Validator::new(n.to_string()).less_than_or_equal(10_i64).check();
        prop_assert_eq!(ok, n <= 10);
    }

    #[test]
    fn non_numeric_never_satisfies_comparisons(s in "[a-zA-Z]{1,10}") {
        prop_assert!(!Validator::new(s.clone()).greater_than(0_i64).check());
        prop_assert!(!Validator::new(s).less_than(0_i64).check());
    }
}

// ============================================================================
// CREDIT CARD SHAPES
// ============================================================================

proptest! {
    #[test]
    fn dashed_card_shape_always_passes(
        a in 0u16..10000, b in 0u16..10000, c in 0u16..10000, d in 0u16..10000
    ) {
        let card = format!("{a:04}-{b:04}-{c:04}-{d:04}");
        prop_assert!(Validator::new(card).credit_card_number_with_dashes().check());
    }

    #[test]
    fn wrong_length_card_always_fails(s in r"\d{0,15}") {
        prop_assert!(!Validator::new(s).credit_card_number().check());
    }
}

// ============================================================================
// LENGTH RULES COUNT CHARS
// ============================================================================

proptest! {
    #[test]
    fn min_length_matches_char_count(s in ".{0,20}", min in 0usize..25) {
        let ok = min_length(min).validate(&s);
        prop_assert_eq!(ok, s.chars().count() >= min);
    }
}

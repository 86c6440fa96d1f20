// ============================================================================
// Property Tests
// Calculator results against an exact decimal oracle
// ============================================================================

use super::Calculator;
use crate::interfaces::NoOpBoundaryHandler;
use crate::numeric::{digit_length, Operand};
use proptest::prelude::*;
use quickcheck::QuickCheck;
use rust_decimal::Decimal;
use std::sync::Arc;

fn calc() -> Calculator {
    Calculator::with_handler(Arc::new(NoOpBoundaryHandler))
}

/// Nearest f64 to an exact decimal
fn to_f64(d: Decimal) -> f64 {
    d.normalize().to_string().parse().unwrap()
}

/// Decimals with at most 7 significant digits and 5 fractional digits, so
/// every digit-scaled intermediate stays an exact f64.
fn small_decimal() -> impl Strategy<Value = Decimal> {
    (-9_999_999_i64..=9_999_999, 0_u32..=5)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

proptest! {
    #[test]
    fn add_matches_exact_decimal(a in small_decimal(), b in small_decimal()) {
        prop_assert_eq!(calc().add(to_f64(a), to_f64(b)), to_f64(a + b));
    }

    #[test]
    fn sub_matches_exact_decimal(a in small_decimal(), b in small_decimal()) {
        prop_assert_eq!(calc().sub(to_f64(a), to_f64(b)), to_f64(a - b));
    }

    #[test]
    fn mul_matches_exact_decimal(a in small_decimal(), b in small_decimal()) {
        prop_assert_eq!(calc().mul(to_f64(a), to_f64(b)), to_f64(a * b));
    }

    #[test]
    fn mul_is_commutative(a in small_decimal(), b in small_decimal()) {
        let calc = calc();
        let (a, b) = (to_f64(a), to_f64(b));
        prop_assert_eq!(calc.mul(a, b), calc.mul(b, a));
    }

    #[test]
    fn sub_inverts_add(a in small_decimal(), b in small_decimal()) {
        let calc = calc();
        let (a, b) = (to_f64(a), to_f64(b));
        prop_assert_eq!(calc.add(calc.sub(a, b), b), a);
    }

    #[test]
    fn div_inverts_mul(
        a in (-99_999_i64..=99_999, 0_u32..=4),
        b in (1_i64..=99_999, 0_u32..=4),
    ) {
        let calc = calc();
        let a = to_f64(Decimal::new(a.0, a.1));
        let b = to_f64(Decimal::new(b.0, b.1));
        prop_assert_eq!(calc.div(calc.mul(a, b), b), a);
    }

    #[test]
    fn integers_have_no_fractional_digits(n in -9_007_199_254_740_991_i64..=9_007_199_254_740_991) {
        prop_assert_eq!(digit_length(&Operand::from(n)), 0);
    }

    #[test]
    fn round_keeps_at_most_ratio_digits(value in small_decimal(), ratio in 0_u32..=4) {
        let rounded = calc().round(to_f64(value), ratio);
        prop_assert!(digit_length(&Operand::from(rounded)) <= ratio);
    }

    #[test]
    fn round_matches_half_away_from_zero(value in small_decimal(), ratio in 0_u32..=4) {
        let expected = value.round_dp_with_strategy(
            ratio,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        );
        prop_assert_eq!(calc().round(to_f64(value), ratio), to_f64(expected));
    }
}

#[test]
fn quickcheck_add_is_commutative() {
    fn prop(a: i32, b: i16) -> bool {
        let calc = calc();
        let a = f64::from(a) / 1000.0;
        let b = f64::from(b) / 100.0;
        calc.add(a, b) == calc.add(b, a)
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(i32, i16) -> bool);
}

// Property-based tests for the currency conversion primitive.
//
// Laws under test:
// - identity: convert(x, C, C) == x for any table and mode
// - round-trip: convert(convert(x, A, B), B, A) ≈ x when both codes exist
// - pivot routing: A -> B equals A -> CNY -> B
// - lenient default: unknown codes behave as rate-1 pivot aliases

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use commission_engine::{CurrencyRate, RateMode, RateTable};

fn rate_from_parts(units: i64) -> Decimal {
    // strictly positive rates between 0.0001 and 1000.0000
    Decimal::new(units, 4)
}

fn table_with(codes: &[(&str, Decimal)]) -> RateTable {
    let mut table = RateTable::new();
    table.insert("CNY", CurrencyRate::new(Decimal::ONE, Decimal::ONE));
    for (code, rate) in codes {
        table.insert(*code, CurrencyRate::new(*rate, *rate));
    }
    table
}

proptest! {
    #[test]
    fn test_identity_law(
        cents in -1_000_000_000_000i64..1_000_000_000_000i64,
        rate_units in 1i64..10_000_000i64,
    ) {
        let amount = Decimal::new(cents, 2);
        let table = table_with(&[("TWD", rate_from_parts(rate_units))]);

        prop_assert_eq!(table.convert(amount, "TWD", "TWD", RateMode::Fixed), amount);
        prop_assert_eq!(table.convert(amount, "CNY", "CNY", RateMode::Floating), amount);
        // identity must hold even for codes the table has never seen
        prop_assert_eq!(table.convert(amount, "XXX", "XXX", RateMode::Fixed), amount);
    }

    #[test]
    fn test_round_trip_law(
        cents in -100_000_000_000i64..100_000_000_000i64,
        rate_a in 1i64..10_000_000i64,
        rate_b in 1i64..10_000_000i64,
    ) {
        let amount = Decimal::new(cents, 2);
        let table = table_with(&[
            ("TWD", rate_from_parts(rate_a)),
            ("USD", rate_from_parts(rate_b)),
        ]);

        let there = table.convert(amount, "TWD", "USD", RateMode::Fixed);
        let back = table.convert(there, "USD", "TWD", RateMode::Fixed);

        let tolerance = dec!(0.01);
        prop_assert!(
            (back - amount).abs() <= tolerance,
            "round trip drifted: {} -> {} -> {}", amount, there, back
        );
    }

    #[test]
    fn test_conversion_routes_through_pivot(
        cents in -100_000_000_000i64..100_000_000_000i64,
        rate_a in 1i64..10_000_000i64,
        rate_b in 1i64..10_000_000i64,
    ) {
        let amount = Decimal::new(cents, 2);
        let table = table_with(&[
            ("TWD", rate_from_parts(rate_a)),
            ("USD", rate_from_parts(rate_b)),
        ]);

        let direct = table.convert(amount, "TWD", "USD", RateMode::Fixed);
        let via_pivot = table.convert(
            table.convert(amount, "TWD", "CNY", RateMode::Fixed),
            "CNY",
            "USD",
            RateMode::Fixed,
        );

        prop_assert!(
            (direct - via_pivot).abs() <= dec!(0.000001),
            "pivot routing mismatch: direct {} vs {}", direct, via_pivot
        );
    }

    #[test]
    fn test_conversion_is_linear_in_amount(
        cents in 1i64..1_000_000_000i64,
        rate_units in 1i64..10_000_000i64,
    ) {
        let amount = Decimal::new(cents, 2);
        let table = table_with(&[("TWD", rate_from_parts(rate_units))]);

        let single = table.convert(amount, "TWD", "CNY", RateMode::Fixed);
        let doubled = table.convert(amount * dec!(2), "TWD", "CNY", RateMode::Fixed);

        prop_assert!(
            (doubled - single * dec!(2)).abs() <= dec!(0.000001),
            "conversion not linear: {} vs {}", doubled, single * dec!(2)
        );
    }
}

#[test]
fn test_unknown_currency_defaults_to_rate_one() {
    let table = table_with(&[("TWD", dec!(0.23))]);
    // unknown source is treated as already being in pivot currency
    assert_eq!(
        table.convert(dec!(100), "JPY", "CNY", RateMode::Fixed),
        dec!(100)
    );
    // unknown target likewise converts at rate 1
    assert_eq!(
        table.convert(dec!(230), "TWD", "JPY", RateMode::Fixed),
        dec!(1000)
    );
}

#[test]
fn test_zero_rate_row_converts_at_rate_one() {
    // a mis-entered rate of 0 must not divide by zero; it falls back to the
    // same rate-1 default as a missing code
    let table = table_with(&[("BAD", dec!(0)), ("TWD", dec!(0.23))]);
    assert_eq!(
        table.convert(dec!(100), "BAD", "CNY", RateMode::Fixed),
        dec!(100)
    );
    assert_eq!(
        table.convert(dec!(230), "TWD", "BAD", RateMode::Fixed),
        dec!(1000)
    );
}

#[test]
fn test_mode_selects_independent_rates() {
    let mut table = RateTable::new();
    table.insert("CNY", CurrencyRate::new(dec!(1), dec!(1)));
    table.insert("TWD", CurrencyRate::new(dec!(0.25), dec!(0.20)));

    assert_eq!(
        table.convert(dec!(100), "TWD", "CNY", RateMode::Fixed),
        dec!(400)
    );
    assert_eq!(
        table.convert(dec!(100), "TWD", "CNY", RateMode::Floating),
        dec!(500)
    );
}

#[test]
fn test_no_rounding_inside_primitive() {
    let table = table_with(&[("TWD", dec!(0.23))]);
    let converted = table.convert(dec!(10000), "TWD", "CNY", RateMode::Fixed);
    // full quotient survives; 2dp rounding is a presentation concern
    assert_ne!(converted, converted.round_dp(2));
    assert_eq!(converted.round_dp(2), dec!(43478.26));
}

// Salary merge tests: per-component currency independence, the two grand
// totals, and fixed-component default injection when the month has no
// salary row.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use commission_engine::modules::commission::services::SalaryMergeStage;
use commission_engine::{
    CommissionRuleSet, ComponentConfig, CurrencyRate, Month, RateMode, RateTable, RuleKind,
    SalaryComponent, SalaryComponentConfig, SalaryMonthly,
};

fn rates() -> RateTable {
    let mut table = RateTable::new();
    table.insert("CNY", CurrencyRate::new(dec!(1), dec!(1)));
    table.insert("TWD", CurrencyRate::new(dec!(0.25), dec!(0.25)));
    table.insert("USD", CurrencyRate::new(dec!(0.125), dec!(0.125)));
    table
}

fn rule_with_components() -> CommissionRuleSet {
    let mut components = SalaryComponentConfig::new();
    components.set(
        SalaryComponent::BaseSalary,
        ComponentConfig::fixed("TWD", dec!(40000)),
    );
    components.set(
        SalaryComponent::Attendance,
        ComponentConfig::fixed("CNY", dec!(300)),
    );
    components.set(SalaryComponent::Incentive, ComponentConfig::variable("USD"));
    components.set(SalaryComponent::Adjustment, ComponentConfig::variable("CNY"));
    components.set(SalaryComponent::Deduction, ComponentConfig::variable("CNY"));
    CommissionRuleSet {
        id: 1,
        name: "Sales".into(),
        kind: RuleKind::Fixed,
        fixed_rate: dec!(0.05),
        currency: "CNY".into(),
        components,
        tiers: vec![],
        is_active: true,
    }
}

fn month() -> Month {
    "2026-01".parse().unwrap()
}

fn salary_row() -> SalaryMonthly {
    SalaryMonthly {
        user_id: 7,
        month: month(),
        base_salary: dec!(48000), // TWD
        attendance: dec!(500),    // CNY
        incentive: dec!(100),     // USD
        adjustment: dec!(-80),    // CNY
        deduction: dec!(120),     // CNY
    }
}

#[test]
fn test_each_component_converts_from_its_configured_currency() {
    let breakdown = SalaryMergeStage::merge(
        dec!(2000),
        Decimal::ZERO,
        Some(&salary_row()),
        &rule_with_components(),
        &rates(),
        RateMode::Fixed,
        "CNY",
    );

    // 48000 TWD / 0.25 = 192000 CNY
    assert_eq!(breakdown.base_salary.amount_rule, dec!(192000));
    assert_eq!(breakdown.base_salary.currency, "TWD");
    // 100 USD / 0.125 = 800 CNY
    assert_eq!(breakdown.incentive.amount_rule, dec!(800));
    assert_eq!(breakdown.attendance.amount_rule, dec!(500));
}

#[test]
fn test_rule_currency_total() {
    let breakdown = SalaryMergeStage::merge(
        dec!(2000),
        dec!(150),
        Some(&salary_row()),
        &rule_with_components(),
        &rates(),
        RateMode::Fixed,
        "CNY",
    );
    // 2000 + 150 + 192000 + 500 + 800 + (-80) - 120
    assert_eq!(breakdown.total_rule, dec!(195250));
}

#[test]
fn test_display_total_is_not_a_lump_sum_conversion() {
    let breakdown = SalaryMergeStage::merge(
        dec!(2000),
        dec!(150),
        Some(&salary_row()),
        &rule_with_components(),
        &rates(),
        RateMode::Fixed,
        "USD",
    );

    // each component converts on its own; the TWD base salary never passes
    // through CNY on its way to USD
    assert_eq!(breakdown.base_salary.amount_display, dec!(24000));

    let expected = dec!(2000) * dec!(0.125)   // commission CNY -> USD
        + dec!(150) * dec!(0.125)             // manual adjustment
        + dec!(24000)                         // base salary TWD -> USD
        + dec!(500) * dec!(0.125)             // attendance
        + dec!(100)                           // incentive already USD
        + dec!(-80) * dec!(0.125)             // adjustment
        - dec!(120) * dec!(0.125); // deduction
    assert_eq!(breakdown.total_display, expected);
}

#[test]
fn test_missing_salary_row_uses_fixed_defaults() {
    let breakdown = SalaryMergeStage::merge(
        dec!(1000),
        Decimal::ZERO,
        None,
        &rule_with_components(),
        &rates(),
        RateMode::Fixed,
        "CNY",
    );

    // fixed components fall back to their configured defaults
    assert_eq!(breakdown.base_salary.amount, dec!(40000));
    assert_eq!(breakdown.attendance.amount, dec!(300));
    // variable components stay at zero
    assert_eq!(breakdown.incentive.amount, Decimal::ZERO);
    assert_eq!(breakdown.adjustment.amount, Decimal::ZERO);
    assert_eq!(breakdown.deduction.amount, Decimal::ZERO);

    // 1000 + 40000/0.25 + 300
    assert_eq!(breakdown.total_rule, dec!(161300));
}

#[test]
fn test_deduction_subtracts_in_both_currencies() {
    let mut row = salary_row();
    row.base_salary = Decimal::ZERO;
    row.attendance = Decimal::ZERO;
    row.incentive = Decimal::ZERO;
    row.adjustment = Decimal::ZERO;
    row.deduction = dec!(400);

    let breakdown = SalaryMergeStage::merge(
        dec!(1000),
        Decimal::ZERO,
        Some(&row),
        &rule_with_components(),
        &rates(),
        RateMode::Fixed,
        "USD",
    );
    assert_eq!(breakdown.total_rule, dec!(600));
    assert_eq!(breakdown.total_display, dec!(75)); // 600 CNY worth of USD
}

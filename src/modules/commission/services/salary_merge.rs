use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{RateMode, RateTable};
use crate::modules::commission::models::ComponentFigure;
use crate::modules::ledger::models::SalaryMonthly;
use crate::modules::rules::models::{CommissionRuleSet, SalaryComponent};

/// Salary components merged with the commission figure, plus the grand totals.
///
/// Totals stay unrounded here; the pipeline rounds when it populates the
/// statement's output fields.
#[derive(Debug)]
pub struct SalaryBreakdown {
    pub base_salary: ComponentFigure,
    pub attendance: ComponentFigure,
    pub incentive: ComponentFigure,
    pub adjustment: ComponentFigure,
    pub deduction: ComponentFigure,
    /// commission + manual adjustment + components, rule currency
    pub total_rule: Decimal,
    /// Same sum but from each component's own display conversion
    pub total_display: Decimal,
}

/// SalaryMergeStage adds manual adjustments and the fixed salary components
/// to a commission figure and renders everything in both currencies.
pub struct SalaryMergeStage;

impl SalaryMergeStage {
    /// Merge one salesperson's salary row into their commission total.
    ///
    /// `commission_total` and `manual_adjustment` arrive in rule currency,
    /// unrounded. A missing salary row falls back to the rule set's
    /// configured fixed-component defaults; that is the only place defaults
    /// are injected. Each component converts independently from its own
    /// configured source currency into both target currencies, and the
    /// display total is the sum of those per-component conversions, never a
    /// lump-sum conversion of the rule total.
    pub fn merge(
        commission_total: Decimal,
        manual_adjustment: Decimal,
        salary: Option<&SalaryMonthly>,
        rule: &CommissionRuleSet,
        rates: &RateTable,
        mode: RateMode,
        display_currency: &str,
    ) -> SalaryBreakdown {
        if salary.is_none() {
            debug!("no salary row for the month, using configured component defaults");
        }

        let figure = |component: SalaryComponent| -> ComponentFigure {
            let amount = match salary {
                Some(row) => row.component(component),
                None => rule.components.default_of(component),
            };
            let currency = rule.components.currency_of(component);
            ComponentFigure {
                amount,
                currency: currency.to_string(),
                amount_rule: rates.convert(amount, currency, &rule.currency, mode),
                amount_display: rates.convert(amount, currency, display_currency, mode),
            }
        };

        let base_salary = figure(SalaryComponent::BaseSalary);
        let attendance = figure(SalaryComponent::Attendance);
        let incentive = figure(SalaryComponent::Incentive);
        let adjustment = figure(SalaryComponent::Adjustment);
        let deduction = figure(SalaryComponent::Deduction);

        let total_rule = commission_total
            + manual_adjustment
            + base_salary.amount_rule
            + attendance.amount_rule
            + incentive.amount_rule
            + adjustment.amount_rule
            - deduction.amount_rule;

        let commission_display =
            rates.convert(commission_total, &rule.currency, display_currency, mode);
        let manual_display =
            rates.convert(manual_adjustment, &rule.currency, display_currency, mode);
        let total_display = commission_display
            + manual_display
            + base_salary.amount_display
            + attendance.amount_display
            + incentive.amount_display
            + adjustment.amount_display
            - deduction.amount_display;

        SalaryBreakdown {
            base_salary,
            attendance,
            incentive,
            adjustment,
            deduction,
            total_rule,
            total_display,
        }
    }
}

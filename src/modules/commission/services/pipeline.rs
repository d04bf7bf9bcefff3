use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::{EngineError, Month, RateMode, RateTable, Result};
use crate::modules::commission::models::{
    CalculationRequest, CommissionStatement, ComponentFigure, InstallmentBreakdown,
    ReceiptBreakdown, StatementDetails,
};
use crate::modules::commission::services::aggregator::PeriodAggregator;
use crate::modules::commission::services::historical::HistoricalTierLookup;
use crate::modules::commission::services::salary_merge::SalaryMergeStage;
use crate::modules::ledger::models::Salesperson;
use crate::modules::ledger::services::{Ledger, ReceiptFacts};
use crate::modules::rules::models::CommissionRuleSet;
use crate::modules::rules::services::TierResolver;

/// CommissionEngine prices one calendar month for a list of salespeople.
///
/// The whole run is a pure batch computation over the rows the caller loaded:
/// no I/O, no shared mutable state between salespeople, output in the input
/// list's order. A salesperson with no facts still yields an all-zero
/// statement; only a broken precondition (rule mismatch, disabled rule)
/// aborts the run.
pub struct CommissionEngine;

impl CommissionEngine {
    pub fn calculate(
        request: &CalculationRequest,
        rule: &CommissionRuleSet,
        rates: &RateTable,
        ledger: &Ledger,
        salespeople: &[Salesperson],
    ) -> Result<Vec<CommissionStatement>> {
        if rule.id != request.rule_id {
            return Err(EngineError::RuleNotFound(request.rule_id));
        }
        rule.ensure_active()?;

        let evaluated: Vec<&Salesperson> = salespeople
            .iter()
            .filter(|person| request.user_id.map_or(true, |id| person.id == id))
            .filter(|person| {
                request
                    .department_id
                    .map_or(true, |id| person.department_id == Some(id))
            })
            .collect();

        info!(
            month = %request.month,
            rule_id = rule.id,
            display_currency = %request.display_currency,
            rate_mode = %request.rate_mode,
            salespeople = evaluated.len(),
            "starting commission calculation run"
        );

        let statements = evaluated
            .into_iter()
            .map(|person| Self::statement_for(request, rule, rates, ledger, person))
            .collect();

        Ok(statements)
    }

    fn statement_for(
        request: &CalculationRequest,
        rule: &CommissionRuleSet,
        rates: &RateTable,
        ledger: &Ledger,
        person: &Salesperson,
    ) -> CommissionStatement {
        let month = request.month;
        let mode = request.rate_mode;
        let display = request.display_currency.as_str();

        let aggregate = PeriodAggregator::aggregate(ledger, rates, rule, mode, person.id, month);
        let tier_rate = TierResolver::rate_for_base(rule, aggregate.tier_base);

        // New orders: cash against contracts signed this month, priced at the
        // current month's tier rate.
        let mut new_order_commission = Decimal::ZERO;
        let mut new_orders = Vec::with_capacity(aggregate.new_order_receipts.len());
        for facts in &aggregate.new_order_receipts {
            let line = Self::receipt_line(facts, tier_rate, rule, rates, mode, display);
            new_order_commission += line.unrounded_commission;
            new_orders.push(line.breakdown);
        }

        // Installments: cash against earlier signing months, priced through
        // the fallback chain of locked rate, then the signing month's
        // recomputed tier, then the current tier rate.
        let mut installment_commission = Decimal::ZERO;
        let mut installments = Vec::with_capacity(aggregate.installment_receipts.len());
        for facts in &aggregate.installment_receipts {
            let sign_month = Month::of(facts.contract.sign_date);
            let history =
                HistoricalTierLookup::resolve(ledger, rates, rule, mode, person.id, sign_month);

            let rate = match facts.contract.effective_locked_rate() {
                Some(locked) => locked,
                None if history.rate > Decimal::ZERO => history.rate,
                None if tier_rate > Decimal::ZERO => tier_rate,
                None => {
                    warn!(
                        receipt_id = facts.receipt.id,
                        contract_id = facts.contract.id,
                        %sign_month,
                        "no commission rate at any fallback level, receipt earns zero"
                    );
                    Decimal::ZERO
                }
            };

            let line = Self::receipt_line(facts, rate, rule, rates, mode, display);
            installment_commission += line.unrounded_commission;
            installments.push(InstallmentBreakdown {
                receipt: line.breakdown,
                sign_month,
                history_tier_base: history.base.round_dp(2),
                history_tier_base_display: rates
                    .convert(history.base, &rule.currency, display, mode)
                    .round_dp(2),
                history_tier_contracts: history.contracts,
            });
        }

        let commission = new_order_commission + installment_commission;
        let manual_adjustment = ledger.adjustment_total(person.id, month);
        let adjustments = ledger
            .adjustments_of(person.id, month)
            .into_iter()
            .cloned()
            .collect();

        let salary = SalaryMergeStage::merge(
            commission,
            manual_adjustment,
            ledger.salary_of(person.id, month),
            rule,
            rates,
            mode,
            display,
        );

        let to_display = |amount: Decimal| rates.convert(amount, &rule.currency, display, mode);
        let round = |figure: ComponentFigure| ComponentFigure {
            amount_rule: figure.amount_rule.round_dp(2),
            amount_display: figure.amount_display.round_dp(2),
            ..figure
        };

        CommissionStatement {
            user_id: person.id,
            user_name: person.name.clone(),
            department: person.department.clone(),
            tier_base: aggregate.tier_base.round_dp(2),
            tier_base_display: to_display(aggregate.tier_base).round_dp(2),
            tier_rate,
            new_order_commission: new_order_commission.round_dp(2),
            new_order_commission_display: to_display(new_order_commission).round_dp(2),
            installment_commission: installment_commission.round_dp(2),
            installment_commission_display: to_display(installment_commission).round_dp(2),
            commission: commission.round_dp(2),
            commission_display: to_display(commission).round_dp(2),
            manual_adjustment: manual_adjustment.round_dp(2),
            manual_adjustment_display: to_display(manual_adjustment).round_dp(2),
            base_salary: round(salary.base_salary),
            attendance: round(salary.attendance),
            incentive: round(salary.incentive),
            adjustment: round(salary.adjustment),
            deduction: round(salary.deduction),
            total: salary.total_rule.round_dp(2),
            total_display: salary.total_display.round_dp(2),
            rule_currency: rule.currency.clone(),
            display_currency: display.to_string(),
            rate_mode: mode,
            rule_rate: rates.rate_of(&rule.currency, mode),
            display_rate: rates.rate_of(display, mode),
            details: StatementDetails {
                tier_contracts: aggregate.contracts,
                new_orders,
                installments,
                adjustments,
            },
        }
    }

    fn receipt_line(
        facts: &ReceiptFacts<'_>,
        rate: Decimal,
        rule: &CommissionRuleSet,
        rates: &RateTable,
        mode: RateMode,
        display: &str,
    ) -> ReceiptLine {
        let receipt = facts.receipt;
        let amount_in_rule =
            rates.convert(receipt.amount_received, &receipt.currency, &rule.currency, mode);
        let commission = amount_in_rule * rate;
        ReceiptLine {
            unrounded_commission: commission,
            breakdown: ReceiptBreakdown {
                id: receipt.id,
                contract_id: facts.contract.id,
                contract_name: facts.contract.title.clone(),
                customer: facts.customer.name.clone(),
                amount: receipt.amount_received,
                currency: receipt.currency.clone(),
                amount_in_rule: amount_in_rule.round_dp(2),
                amount_display: rates
                    .convert(amount_in_rule, &rule.currency, display, mode)
                    .round_dp(2),
                rate,
                commission: commission.round_dp(2),
                commission_display: rates
                    .convert(commission, &rule.currency, display, mode)
                    .round_dp(2),
                collector: receipt.collector_name.clone(),
            },
        }
    }
}

struct ReceiptLine {
    /// Accumulated into the statement totals before any rounding
    unrounded_commission: Decimal,
    breakdown: ReceiptBreakdown,
}

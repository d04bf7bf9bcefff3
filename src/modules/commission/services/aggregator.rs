use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{Month, RateMode, RateTable};
use crate::modules::commission::models::ContractBreakdown;
use crate::modules::ledger::services::{Ledger, ReceiptFacts};
use crate::modules::rules::models::CommissionRuleSet;

/// Everything one salesperson did in one calendar month, ready for pricing.
#[derive(Debug)]
pub struct PeriodAggregate<'a> {
    /// Sum of the month's contract values in rule currency, unrounded
    pub tier_base: Decimal,
    /// Per-contract tier-base breakdown (presentation-rounded figures)
    pub contracts: Vec<ContractBreakdown>,
    /// Eligible receipts whose contract was signed in the same month
    pub new_order_receipts: Vec<ReceiptFacts<'a>>,
    /// Eligible receipts tracing back to an earlier signing month
    pub installment_receipts: Vec<ReceiptFacts<'a>>,
}

/// PeriodAggregator rolls a salesperson's contracts and receipts up into the
/// month's tier base and the first-order receipt split.
pub struct PeriodAggregator;

impl PeriodAggregator {
    /// Aggregate one owner's facts for one month.
    ///
    /// The tier base counts every contract signed in the month, first order or
    /// repeat. Receipts are gated harder: a receipt earns commission only when
    /// its contract is the customer's first, and is classified as a new-order
    /// receipt when that contract was also signed in this month, otherwise as
    /// an installment.
    pub fn aggregate<'a>(
        ledger: &'a Ledger,
        rates: &RateTable,
        rule: &CommissionRuleSet,
        mode: RateMode,
        owner: i64,
        month: Month,
    ) -> PeriodAggregate<'a> {
        let (tier_base, contracts) = Self::contract_rollup(ledger, rates, rule, mode, owner, month);

        let mut new_order_receipts = Vec::new();
        let mut installment_receipts = Vec::new();
        for facts in ledger.receipts_collected_for(owner, month) {
            // repeat and renewal contracts never generate commission
            if !facts.contract.is_first_contract {
                continue;
            }
            if month.contains(facts.contract.sign_date) {
                new_order_receipts.push(facts);
            } else {
                installment_receipts.push(facts);
            }
        }

        debug!(
            owner,
            %month,
            %tier_base,
            new_orders = new_order_receipts.len(),
            installments = installment_receipts.len(),
            "aggregated period facts"
        );

        PeriodAggregate {
            tier_base,
            contracts,
            new_order_receipts,
            installment_receipts,
        }
    }

    /// Contracts-only rollup: the month's tier base and its breakdown.
    ///
    /// Shared with the historical lookup, which re-runs exactly this over a
    /// past signing month.
    pub fn contract_rollup(
        ledger: &Ledger,
        rates: &RateTable,
        rule: &CommissionRuleSet,
        mode: RateMode,
        owner: i64,
        month: Month,
    ) -> (Decimal, Vec<ContractBreakdown>) {
        let mut tier_base = Decimal::ZERO;
        let mut breakdown = Vec::new();
        for facts in ledger.contracts_signed_by(owner, month) {
            let contract = facts.contract;
            let amount_in_rule =
                rates.convert(contract.net_amount, &contract.currency, &rule.currency, mode);
            tier_base += amount_in_rule;
            breakdown.push(ContractBreakdown {
                id: contract.id,
                name: contract.title.clone(),
                customer: facts.customer.name.clone(),
                amount: contract.net_amount,
                currency: contract.currency.clone(),
                amount_in_rule: amount_in_rule.round_dp(2),
                first_order: contract.is_first_contract,
            });
        }
        (tier_base, breakdown)
    }
}

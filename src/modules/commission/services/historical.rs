use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{Month, RateMode, RateTable};
use crate::modules::commission::models::ContractBreakdown;
use crate::modules::commission::services::aggregator::PeriodAggregator;
use crate::modules::ledger::services::Ledger;
use crate::modules::rules::models::{CommissionRuleSet, RuleKind};
use crate::modules::rules::services::TierResolver;

/// Tier context recomputed for a past signing month.
#[derive(Debug, Clone)]
pub struct HistoricalTier {
    pub rate: Decimal,
    /// Signing month's tier base, rule currency, unrounded
    pub base: Decimal,
    pub contracts: Vec<ContractBreakdown>,
}

/// HistoricalTierLookup re-derives the tier a contract's signing month earned,
/// so that installment cash arriving months later is priced at the rate the
/// sale originally qualified for.
///
/// The signing month's *base* is resolved against the *current* rule set's
/// brackets; the engine does not version brackets by month. Callers holding
/// bracket snapshots can pass the snapshot rule value instead.
pub struct HistoricalTierLookup;

impl HistoricalTierLookup {
    pub fn resolve(
        ledger: &Ledger,
        rates: &RateTable,
        rule: &CommissionRuleSet,
        mode: RateMode,
        owner: i64,
        sign_month: Month,
    ) -> HistoricalTier {
        if rule.kind == RuleKind::Fixed {
            return HistoricalTier {
                rate: rule.fixed_rate,
                base: Decimal::ZERO,
                contracts: Vec::new(),
            };
        }

        let (base, contracts) =
            PeriodAggregator::contract_rollup(ledger, rates, rule, mode, owner, sign_month);
        let rate = TierResolver::resolve_rate(base, &rule.sorted_tiers());

        debug!(owner, %sign_month, %base, %rate, "resolved historical tier");

        HistoricalTier {
            rate,
            base,
            contracts,
        }
    }
}

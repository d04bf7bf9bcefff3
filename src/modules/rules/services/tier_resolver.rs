use rust_decimal::Decimal;
use tracing::warn;

use crate::modules::rules::models::{CommissionRuleSet, CommissionTier, RuleKind};

/// TierResolver maps a monthly tier base onto a commission rate bracket.
pub struct TierResolver;

impl TierResolver {
    /// Resolve the rate for a tier base against pre-sorted brackets.
    ///
    /// The first bracket where `from <= base` and (`to` is unbounded or
    /// `base < to`) wins. No match returns 0 as the neutral rate; fixed-kind
    /// rule sets never call this, they use their flat rate directly.
    pub fn resolve_rate(tier_base: Decimal, tiers: &[CommissionTier]) -> Decimal {
        tiers
            .iter()
            .find(|tier| tier.matches(tier_base))
            .map(|tier| tier.rate)
            .unwrap_or(Decimal::ZERO)
    }

    /// Rate a rule set yields for a tier base, dispatching on the rule kind.
    ///
    /// A tiered rule resolving rate 0 against a positive base is a
    /// data-quality signal (gap in the bracket table), logged but not fatal.
    pub fn rate_for_base(rule: &CommissionRuleSet, tier_base: Decimal) -> Decimal {
        match rule.kind {
            RuleKind::Fixed => rule.fixed_rate,
            RuleKind::Tiered => {
                let rate = Self::resolve_rate(tier_base, &rule.sorted_tiers());
                if rate == Decimal::ZERO && tier_base > Decimal::ZERO {
                    warn!(
                        rule_id = rule.id,
                        %tier_base,
                        "tiered rule resolved rate 0 against a positive base"
                    );
                }
                rate
            }
        }
    }
}

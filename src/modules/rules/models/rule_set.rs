// A commission rule set bundles everything a calculation run needs to price
// a salesperson's performance: the scheme kind (flat rate vs. tiered
// brackets), the currency its thresholds are defined in, and the per-salary-
// component currency/default configuration.
//
// Rule sets are explicit values passed into every engine call. There is no
// ambient "currently active rule" state; the engine only checks that the
// value it was handed matches the requested id and is enabled.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result, PIVOT_CURRENCY};

/// Commission scheme kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Single flat rate applied to every eligible receipt
    Fixed,
    /// Rate selected by bracket lookup against the monthly tier base
    #[serde(alias = "tier")]
    Tiered,
}

/// One rate bracket of a tiered rule set.
///
/// Brackets are half-open: `from` is inclusive, `to` exclusive, `to = None`
/// means unbounded above. Brackets of one rule set are contiguous and
/// non-overlapping when ordered by `from`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionTier {
    pub from: Decimal,
    pub to: Option<Decimal>,
    pub rate: Decimal,
    #[serde(default)]
    pub sort_order: i32,
}

impl CommissionTier {
    pub fn new(from: Decimal, to: Option<Decimal>, rate: Decimal) -> Self {
        Self {
            from,
            to,
            rate,
            sort_order: 0,
        }
    }

    /// Whether a tier base falls inside this bracket.
    pub fn matches(&self, base: Decimal) -> bool {
        base >= self.from && self.to.map_or(true, |to| base < to)
    }
}

/// Closed set of salary component slots a monthly statement carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryComponent {
    BaseSalary,
    Attendance,
    Incentive,
    Adjustment,
    Deduction,
}

impl SalaryComponent {
    pub const ALL: [SalaryComponent; 5] = [
        SalaryComponent::BaseSalary,
        SalaryComponent::Attendance,
        SalaryComponent::Incentive,
        SalaryComponent::Adjustment,
        SalaryComponent::Deduction,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SalaryComponent::BaseSalary => "base_salary",
            SalaryComponent::Attendance => "attendance",
            SalaryComponent::Incentive => "incentive",
            SalaryComponent::Adjustment => "adjustment",
            SalaryComponent::Deduction => "deduction",
        }
    }
}

impl fmt::Display for SalaryComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How a component's monthly value is sourced when no salary row exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Fixed amount; the configured default applies when no row exists
    Fixed,
    /// Entered per month; absent rows contribute zero
    #[default]
    Variable,
}

/// Currency and default-value metadata for one salary component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    pub currency: String,
    #[serde(default)]
    pub kind: ComponentKind,
    #[serde(default)]
    pub default_value: Decimal,
}

impl ComponentConfig {
    pub fn variable(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            kind: ComponentKind::Variable,
            default_value: Decimal::ZERO,
        }
    }

    pub fn fixed(currency: impl Into<String>, default_value: Decimal) -> Self {
        Self {
            currency: currency.into(),
            kind: ComponentKind::Fixed,
            default_value,
        }
    }
}

/// Per-component salary configuration of a rule set, populated once at
/// rule-load time. Unconfigured components fall back to the pivot currency
/// with no default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryComponentConfig {
    #[serde(default)]
    components: HashMap<SalaryComponent, ComponentConfig>,
}

impl SalaryComponentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, component: SalaryComponent, config: ComponentConfig) {
        self.components.insert(component, config);
    }

    pub fn get(&self, component: SalaryComponent) -> Option<&ComponentConfig> {
        self.components.get(&component)
    }

    /// Source currency of a component, defaulting to CNY when unconfigured.
    pub fn currency_of(&self, component: SalaryComponent) -> &str {
        self.components
            .get(&component)
            .map(|c| c.currency.as_str())
            .unwrap_or(PIVOT_CURRENCY)
    }

    /// Default value injected when no salary row exists for the month.
    /// Only fixed-kind components carry a default; everything else is zero.
    pub fn default_of(&self, component: SalaryComponent) -> Decimal {
        match self.components.get(&component) {
            Some(c) if c.kind == ComponentKind::Fixed => c.default_value,
            _ => Decimal::ZERO,
        }
    }
}

impl FromIterator<(SalaryComponent, ComponentConfig)> for SalaryComponentConfig {
    fn from_iter<T: IntoIterator<Item = (SalaryComponent, ComponentConfig)>>(iter: T) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

/// A complete commission rule set, including its ordered tier brackets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionRuleSet {
    pub id: i64,
    pub name: String,
    pub kind: RuleKind,
    /// Used only when `kind == Fixed`
    #[serde(default)]
    pub fixed_rate: Decimal,
    /// Currency the rule's thresholds and commission figures are defined in
    pub currency: String,
    #[serde(default)]
    pub components: SalaryComponentConfig,
    #[serde(default)]
    pub tiers: Vec<CommissionTier>,
    pub is_active: bool,
}

impl CommissionRuleSet {
    /// Fails the run when the rule set is disabled.
    pub fn ensure_active(&self) -> Result<()> {
        if !self.is_active {
            return Err(EngineError::RuleInactive(self.id));
        }
        Ok(())
    }

    /// Tiers ordered ascending by lower bound, as bracket resolution expects.
    pub fn sorted_tiers(&self) -> Vec<CommissionTier> {
        let mut tiers = self.tiers.clone();
        tiers.sort_by(|a, b| a.from.cmp(&b.from));
        tiers
    }
}

use serde::{Deserialize, Serialize};

use crate::core::{Month, RateMode};

fn default_display_currency() -> String {
    crate::core::PIVOT_CURRENCY.to_string()
}

fn default_rate_mode() -> RateMode {
    RateMode::Fixed
}

/// Parameters of one calculation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Target calendar month
    pub month: Month,
    /// Rule set the run must be priced under; must match the rule value
    /// handed to the engine
    pub rule_id: i64,
    /// Restrict the run to a single salesperson
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Restrict the run to one department
    #[serde(default)]
    pub department_id: Option<i64>,
    /// Currency figures are additionally rendered in
    #[serde(default = "default_display_currency")]
    pub display_currency: String,
    /// Which stored exchange rate the whole run uses
    #[serde(default = "default_rate_mode")]
    pub rate_mode: RateMode,
}

impl CalculationRequest {
    pub fn new(month: Month, rule_id: i64) -> Self {
        Self {
            month,
            rule_id,
            user_id: None,
            department_id: None,
            display_currency: default_display_currency(),
            rate_mode: default_rate_mode(),
        }
    }
}

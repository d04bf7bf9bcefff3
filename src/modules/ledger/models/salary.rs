use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Month;
use crate::modules::rules::models::SalaryComponent;

/// One salesperson's manually entered salary figures for a month.
///
/// Each figure is a bare number; its currency comes from the rule set's
/// per-component configuration at merge time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryMonthly {
    pub user_id: i64,
    pub month: Month,
    #[serde(default)]
    pub base_salary: Decimal,
    #[serde(default)]
    pub attendance: Decimal,
    #[serde(default)]
    pub incentive: Decimal,
    #[serde(default)]
    pub adjustment: Decimal,
    #[serde(default)]
    pub deduction: Decimal,
}

impl SalaryMonthly {
    pub fn component(&self, component: SalaryComponent) -> Decimal {
        match component {
            SalaryComponent::BaseSalary => self.base_salary,
            SalaryComponent::Attendance => self.attendance,
            SalaryComponent::Incentive => self.incentive,
            SalaryComponent::Adjustment => self.adjustment,
            SalaryComponent::Deduction => self.deduction,
        }
    }
}

/// A manual commission adjustment, denominated in the rule currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualAdjustment {
    pub user_id: i64,
    pub month: Month,
    pub amount: Decimal,
    #[serde(default)]
    pub note: String,
}

/// A salesperson evaluated by a calculation run. Output statements preserve
/// the order of the input salesperson list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Salesperson {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default)]
    pub department: Option<String>,
}

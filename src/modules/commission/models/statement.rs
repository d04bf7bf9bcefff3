// Output shape of a calculation run: one statement per salesperson, with
// enough per-contract and per-receipt detail for an auditor to reconstruct
// every headline figure by hand.
//
// Statements are ephemeral derived values. The engine never persists them;
// callers serialize them straight into a response or feed them to exporters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Month, RateMode};
use crate::modules::ledger::models::ManualAdjustment;
use crate::modules::rules::models::SalaryComponent;

/// One contract's contribution to a tier base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractBreakdown {
    pub id: i64,
    pub name: String,
    pub customer: String,
    /// Original amount in the contract's own currency
    pub amount: Decimal,
    pub currency: String,
    /// Converted to rule currency, rounded for presentation
    pub amount_in_rule: Decimal,
    pub first_order: bool,
}

/// One receipt's commission line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptBreakdown {
    pub id: i64,
    pub contract_id: i64,
    pub contract_name: String,
    pub customer: String,
    /// Original amount in the receipt's own currency
    pub amount: Decimal,
    pub currency: String,
    pub amount_in_rule: Decimal,
    pub amount_display: Decimal,
    /// Rate actually applied to this receipt
    pub rate: Decimal,
    pub commission: Decimal,
    pub commission_display: Decimal,
    #[serde(default)]
    pub collector: Option<String>,
}

/// An installment receipt's commission line, carrying the signing-month
/// context that justified its rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentBreakdown {
    #[serde(flatten)]
    pub receipt: ReceiptBreakdown,
    /// Month the underlying contract was signed in
    pub sign_month: Month,
    /// Tier base recomputed for the signing month, rule currency
    pub history_tier_base: Decimal,
    pub history_tier_base_display: Decimal,
    /// Contracts that made up the signing month's tier base
    pub history_tier_contracts: Vec<ContractBreakdown>,
}

/// A salary component rendered in its source, rule, and display currencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentFigure {
    /// Raw value in the component's configured source currency
    pub amount: Decimal,
    pub currency: String,
    pub amount_rule: Decimal,
    pub amount_display: Decimal,
}

/// Supporting detail lists backing a statement's headline figures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementDetails {
    pub tier_contracts: Vec<ContractBreakdown>,
    pub new_orders: Vec<ReceiptBreakdown>,
    pub installments: Vec<InstallmentBreakdown>,
    pub adjustments: Vec<ManualAdjustment>,
}

/// Final per-salesperson monthly statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionStatement {
    pub user_id: i64,
    pub user_name: String,
    #[serde(default)]
    pub department: Option<String>,

    /// Aggregate contract value used for bracket selection, rule currency
    pub tier_base: Decimal,
    pub tier_base_display: Decimal,
    pub tier_rate: Decimal,

    pub new_order_commission: Decimal,
    pub new_order_commission_display: Decimal,
    pub installment_commission: Decimal,
    pub installment_commission_display: Decimal,
    /// New-order plus installment commission, rule currency
    pub commission: Decimal,
    pub commission_display: Decimal,

    /// Manual commission adjustments, rule currency
    pub manual_adjustment: Decimal,
    pub manual_adjustment_display: Decimal,

    pub base_salary: ComponentFigure,
    pub attendance: ComponentFigure,
    pub incentive: ComponentFigure,
    pub adjustment: ComponentFigure,
    pub deduction: ComponentFigure,

    /// Grand total in rule currency
    pub total: Decimal,
    /// Grand total from independently display-converted components
    pub total_display: Decimal,

    pub rule_currency: String,
    pub display_currency: String,
    pub rate_mode: RateMode,
    /// Raw pivot rate of the rule currency under the run's rate mode
    pub rule_rate: Decimal,
    /// Raw pivot rate of the display currency under the run's rate mode
    pub display_rate: Decimal,

    pub details: StatementDetails,
}

impl CommissionStatement {
    pub fn component(&self, component: SalaryComponent) -> &ComponentFigure {
        match component {
            SalaryComponent::BaseSalary => &self.base_salary,
            SalaryComponent::Attendance => &self.attendance,
            SalaryComponent::Incentive => &self.incentive,
            SalaryComponent::Adjustment => &self.adjustment,
            SalaryComponent::Deduction => &self.deduction,
        }
    }
}

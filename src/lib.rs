//! Monthly sales-commission calculation engine.
//!
//! Turns raw contract, receipt, and salary-component rows into a
//! per-salesperson commission and total-pay statement, expressed in both a
//! rule currency and a caller-chosen display currency, under fixed or tiered
//! commission schemes. Installment cash arriving after the signing month is
//! priced at the tier the signing month earned, with a locked-rate override
//! and a current-rate fallback.
//!
//! The engine is a pure batch computation: callers load the rows, hand them
//! in as values, and serialize the resulting statements however they like.

pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{
    CurrencyRate, EngineError, Month, RateMode, RateTable, Result, PIVOT_CURRENCY,
};
pub use modules::commission::models::{CalculationRequest, CommissionStatement};
pub use modules::commission::services::CommissionEngine;
pub use modules::ledger::models::{
    Contract, Customer, ManualAdjustment, Receipt, SalaryMonthly, Salesperson,
};
pub use modules::ledger::services::Ledger;
pub use modules::rules::models::{
    CommissionRuleSet, CommissionTier, ComponentConfig, ComponentKind, RuleKind, SalaryComponent,
    SalaryComponentConfig,
};

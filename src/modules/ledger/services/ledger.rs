use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::warn;

use crate::core::Month;
use crate::modules::ledger::models::{
    Contract, Customer, ManualAdjustment, Receipt, SalaryMonthly,
};

/// A contract joined to its owning customer.
#[derive(Debug, Clone, Copy)]
pub struct ContractFacts<'a> {
    pub contract: &'a Contract,
    pub customer: &'a Customer,
}

/// A receipt joined to its contract and the contract's owning customer.
#[derive(Debug, Clone, Copy)]
pub struct ReceiptFacts<'a> {
    pub receipt: &'a Receipt,
    pub contract: &'a Contract,
    pub customer: &'a Customer,
}

/// In-memory view over the financial fact rows of one calculation run.
///
/// The caller loads all rows once (supersets are fine); the ledger builds its
/// lookup indexes up front and performs the ownership and period filtering the
/// compute stages rely on. All rows are read-only for the life of the run.
#[derive(Debug, Default)]
pub struct Ledger {
    contracts: Vec<Contract>,
    receipts: Vec<Receipt>,
    customers: Vec<Customer>,
    adjustments: Vec<ManualAdjustment>,
    salaries: Vec<SalaryMonthly>,
    customer_index: HashMap<i64, usize>,
    contract_index: HashMap<i64, usize>,
}

impl Ledger {
    pub fn new(
        contracts: Vec<Contract>,
        receipts: Vec<Receipt>,
        customers: Vec<Customer>,
        adjustments: Vec<ManualAdjustment>,
        salaries: Vec<SalaryMonthly>,
    ) -> Self {
        let customer_index = customers
            .iter()
            .enumerate()
            .map(|(idx, c)| (c.id, idx))
            .collect();
        let contract_index = contracts
            .iter()
            .enumerate()
            .map(|(idx, c)| (c.id, idx))
            .collect();
        Self {
            contracts,
            receipts,
            customers,
            adjustments,
            salaries,
            customer_index,
            contract_index,
        }
    }

    pub fn contract(&self, id: i64) -> Option<&Contract> {
        self.contract_index.get(&id).map(|&idx| &self.contracts[idx])
    }

    pub fn customer(&self, id: i64) -> Option<&Customer> {
        self.customer_index.get(&id).map(|&idx| &self.customers[idx])
    }

    pub fn owner_of(&self, customer_id: i64) -> Option<i64> {
        self.customer(customer_id).map(|c| c.owner_user_id)
    }

    /// Contracts whose owning customer belongs to `owner` and whose sign date
    /// falls inside the month.
    pub fn contracts_signed_by(&self, owner: i64, month: Month) -> Vec<ContractFacts<'_>> {
        self.contracts
            .iter()
            .filter(|c| month.contains(c.sign_date))
            .filter_map(|contract| {
                let customer = match self.customer(contract.customer_id) {
                    Some(customer) => customer,
                    None => {
                        warn!(
                            contract_id = contract.id,
                            customer_id = contract.customer_id,
                            "contract references an unknown customer, skipping"
                        );
                        return None;
                    }
                };
                (customer.owner_user_id == owner).then_some(ContractFacts { contract, customer })
            })
            .collect()
    }

    /// Receipts received inside the month whose contract's owning customer
    /// belongs to `owner`, ordered by received date.
    ///
    /// Receipts with dangling contract or customer references cannot be
    /// attributed to anyone and are skipped.
    pub fn receipts_collected_for(&self, owner: i64, month: Month) -> Vec<ReceiptFacts<'_>> {
        let mut rows: Vec<ReceiptFacts<'_>> = self
            .receipts
            .iter()
            .filter(|r| month.contains(r.received_date))
            .filter_map(|receipt| {
                let contract = match self.contract(receipt.contract_id) {
                    Some(contract) => contract,
                    None => {
                        warn!(
                            receipt_id = receipt.id,
                            contract_id = receipt.contract_id,
                            "receipt references an unknown contract, skipping"
                        );
                        return None;
                    }
                };
                let customer = match self.customer(contract.customer_id) {
                    Some(customer) => customer,
                    None => {
                        warn!(
                            receipt_id = receipt.id,
                            customer_id = contract.customer_id,
                            "receipt's contract references an unknown customer, skipping"
                        );
                        return None;
                    }
                };
                (customer.owner_user_id == owner).then_some(ReceiptFacts {
                    receipt,
                    contract,
                    customer,
                })
            })
            .collect();
        rows.sort_by_key(|facts| (facts.receipt.received_date, facts.receipt.id));
        rows
    }

    pub fn salary_of(&self, user_id: i64, month: Month) -> Option<&SalaryMonthly> {
        self.salaries
            .iter()
            .find(|s| s.user_id == user_id && s.month == month)
    }

    pub fn adjustments_of(&self, user_id: i64, month: Month) -> Vec<&ManualAdjustment> {
        self.adjustments
            .iter()
            .filter(|a| a.user_id == user_id && a.month == month)
            .collect()
    }

    /// Sum of a salesperson's manual commission adjustments for the month,
    /// in rule currency.
    pub fn adjustment_total(&self, user_id: i64, month: Month) -> Decimal {
        self.adjustments_of(user_id, month)
            .iter()
            .map(|a| a.amount)
            .sum()
    }
}

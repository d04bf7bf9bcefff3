pub mod commission;
pub mod ledger;
pub mod rules;

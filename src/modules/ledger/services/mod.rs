pub mod ledger;

pub use ledger::{ContractFacts, Ledger, ReceiptFacts};

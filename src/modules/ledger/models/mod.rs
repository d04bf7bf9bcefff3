pub mod contract;
pub mod customer;
pub mod receipt;
pub mod salary;

pub use contract::Contract;
pub use customer::Customer;
pub use receipt::Receipt;
pub use salary::{ManualAdjustment, SalaryMonthly, Salesperson};

pub mod request;
pub mod statement;

pub use request::CalculationRequest;
pub use statement::{
    CommissionStatement, ComponentFigure, ContractBreakdown, InstallmentBreakdown,
    ReceiptBreakdown, StatementDetails,
};

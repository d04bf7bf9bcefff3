use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A cash receipt against a contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub id: i64,
    pub contract_id: i64,
    pub amount_received: Decimal,
    /// Currency the cash actually arrived in
    pub currency: String,
    pub received_date: NaiveDate,
    #[serde(default)]
    pub collector_user_id: Option<i64>,
    #[serde(default)]
    pub collector_name: Option<String>,
}

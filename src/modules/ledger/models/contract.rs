use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A signed sales contract.
///
/// Commission attribution follows the owning customer's account owner, not
/// any salesperson recorded on the contract itself, because accounts may be
/// reassigned after signing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub id: i64,
    pub customer_id: i64,
    #[serde(default)]
    pub title: String,
    pub net_amount: Decimal,
    /// Currency the contract amount is denominated in
    pub currency: String,
    pub sign_date: NaiveDate,
    /// First purchase by this customer; only first contracts earn commission
    pub is_first_contract: bool,
    /// Commission rate frozen when the signing month was settled. Takes
    /// priority over any recomputed historical rate when present and > 0.
    #[serde(default)]
    pub locked_commission_rate: Option<Decimal>,
}

impl Contract {
    /// Locked rate, if one was settled and is meaningful.
    pub fn effective_locked_rate(&self) -> Option<Decimal> {
        self.locked_commission_rate.filter(|rate| *rate > Decimal::ZERO)
    }
}

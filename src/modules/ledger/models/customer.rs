use serde::{Deserialize, Serialize};

/// A customer account. The `owner_user_id` drives commission attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub owner_user_id: i64,
}

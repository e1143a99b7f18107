//! Wire types for the supply-request endpoints.

use crate::features::auth::types::Role;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SupplyRequest {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub message: String,
    pub tag: String,
    pub status: String,
    pub submitted_time: String,
    pub fulfilled_time: Option<String>,
    pub vendor_name: Option<String>,
    pub solution: Option<String>,
    pub estimated_delivery: Option<String>,
    #[serde(default)]
    pub forwarded_to_production: bool,
}

/// Payload for submitting a new request. `new_product_name` is only present
/// when the product dropdown is on its "new product" choice.
#[derive(Clone, Debug, Serialize)]
pub struct NewRequest {
    pub message: String,
    pub tag: String,
    pub product: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_product_name: Option<String>,
}

//! Client helper for the inventory endpoint.

use crate::{app_lib::AppError, app_lib::get_json, features::inventory::types::InventoryItem};

/// Fetches the inventory list, ordered by item name.
pub async fn fetch_inventory() -> Result<Vec<InventoryItem>, AppError> {
    get_json("/api/inventory").await
}

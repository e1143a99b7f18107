//! Wire types for the inventory endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock state as the API reports it. The wire format uses the display names.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub item_name: String,
    pub quantity: i64,
    pub status: StockStatus,
}

#[cfg(test)]
mod tests {
    use super::{InventoryItem, StockStatus};

    #[test]
    fn stock_status_uses_display_names_on_the_wire() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).expect("Failed to serialize");
        assert_eq!(json, "\"Out of Stock\"");

        let item: InventoryItem = serde_json::from_str(
            r#"{"id": 4, "item_name": "Product D", "quantity": 10, "status": "Low Stock"}"#,
        )
        .expect("Failed to deserialize");
        assert_eq!(item.status, StockStatus::LowStock);
        assert_eq!(item.item_name, "Product D");
    }
}

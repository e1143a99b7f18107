//! Availability messaging for the submit form's product dropdown. What the
//! form shows for each selection is decided here; the route only renders the
//! result.

use crate::features::inventory::types::StockStatus;

/// Dropdown value of the "request a new product" option.
pub const NEW_PRODUCT_VALUE: &str = "new_product";

/// Current state of the product dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductSelection {
    /// The placeholder option.
    Unselected,
    /// The "request a new product" option.
    NewProduct,
    /// An inventory item with its reported stock state.
    Existing(StockStatus),
}

/// Severity of the availability notice, mapped to an alert style by the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AvailabilityNotice {
    pub kind: NoticeKind,
    pub message: &'static str,
}

/// Notice shown under the dropdown, or `None` while nothing is selected.
pub fn availability_notice(selection: ProductSelection) -> Option<AvailabilityNotice> {
    match selection {
        ProductSelection::Unselected => None,
        ProductSelection::NewProduct => Some(AvailabilityNotice {
            kind: NoticeKind::Info,
            message: "New product will be added to inventory and forwarded to production.",
        }),
        ProductSelection::Existing(StockStatus::InStock) => Some(AvailabilityNotice {
            kind: NoticeKind::Success,
            message: "Product is in stock and available for immediate delivery.",
        }),
        ProductSelection::Existing(StockStatus::LowStock) => Some(AvailabilityNotice {
            kind: NoticeKind::Warning,
            message: "Product is in low stock. Order may be partially fulfilled.",
        }),
        ProductSelection::Existing(StockStatus::OutOfStock) => Some(AvailabilityNotice {
            kind: NoticeKind::Danger,
            message: "Product is out of stock. Request will be forwarded to production.",
        }),
    }
}

/// The quantity field applies to everything except a brand-new product.
pub fn shows_quantity(selection: ProductSelection) -> bool {
    selection != ProductSelection::NewProduct
}

/// The name/description fields only appear for a brand-new product.
pub fn shows_new_product_fields(selection: ProductSelection) -> bool {
    selection == ProductSelection::NewProduct
}

#[cfg(test)]
mod tests {
    use super::{
        NoticeKind, ProductSelection, availability_notice, shows_new_product_fields,
        shows_quantity,
    };
    use crate::features::inventory::types::StockStatus;

    #[test]
    fn no_selection_means_no_notice() {
        assert_eq!(availability_notice(ProductSelection::Unselected), None);
    }

    #[test]
    fn notices_follow_stock_state() {
        let in_stock = availability_notice(ProductSelection::Existing(StockStatus::InStock))
            .expect("notice expected");
        assert_eq!(in_stock.kind, NoticeKind::Success);

        let low = availability_notice(ProductSelection::Existing(StockStatus::LowStock))
            .expect("notice expected");
        assert_eq!(low.kind, NoticeKind::Warning);
        assert!(low.message.contains("partially fulfilled"));

        let out = availability_notice(ProductSelection::Existing(StockStatus::OutOfStock))
            .expect("notice expected");
        assert_eq!(out.kind, NoticeKind::Danger);
        assert!(out.message.contains("forwarded to production"));
    }

    #[test]
    fn new_product_swaps_quantity_for_name_fields() {
        let selection = ProductSelection::NewProduct;
        let notice = availability_notice(selection).expect("notice expected");
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(!shows_quantity(selection));
        assert!(shows_new_product_fields(selection));
    }

    #[test]
    fn existing_products_keep_the_quantity_field() {
        for status in [
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::OutOfStock,
        ] {
            let selection = ProductSelection::Existing(status);
            assert!(shows_quantity(selection));
            assert!(!shows_new_product_fields(selection));
        }
        assert!(shows_quantity(ProductSelection::Unselected));
    }
}

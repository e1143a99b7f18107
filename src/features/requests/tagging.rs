//! Role-aware tag suggestion for the submit form. The dropdown is preselected
//! from keywords in the message text, but the user keeps the last word.

use crate::features::auth::types::Role;

/// Tags offered to each role, in dropdown order. The last entry doubles as
/// the fallback suggestion.
pub fn role_tags(role: Role) -> [&'static str; 3] {
    match role {
        Role::SalesExecutive => ["Urgent Delivery", "Stock Check", "Sales Request"],
        Role::WarehouseOfficer => ["Stock Confirmation", "Shipment", "Warehouse Request"],
        Role::ProductionPlanner => ["Delay Report", "Production Schedule", "Production Request"],
        Role::SupportAgent => ["Customer Complaint", "Service Request", "Support Request"],
    }
}

/// Suggests a tag from keywords in the message, scoped to the author's role.
pub fn suggest_tag(role: Role, message: &str) -> &'static str {
    let message = message.to_lowercase();

    match role {
        Role::SalesExecutive => {
            if message.contains("urgent") || message.contains("immediate") {
                "Urgent Delivery"
            } else if message.contains("stock")
                || message.contains("inventory")
                || message.contains("available")
            {
                "Stock Check"
            } else {
                "Sales Request"
            }
        }
        Role::WarehouseOfficer => {
            if message.contains("confirm") || message.contains("availability") {
                "Stock Confirmation"
            } else if message.contains("ship") || message.contains("deliver") {
                "Shipment"
            } else {
                "Warehouse Request"
            }
        }
        Role::ProductionPlanner => {
            if message.contains("delay") {
                "Delay Report"
            } else if message.contains("schedule") {
                "Production Schedule"
            } else {
                "Production Request"
            }
        }
        Role::SupportAgent => {
            if message.contains("complaint") {
                "Customer Complaint"
            } else if message.contains("service") {
                "Service Request"
            } else {
                "Support Request"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{role_tags, suggest_tag};
    use crate::features::auth::types::Role;

    #[test]
    fn sales_keywords_pick_the_expected_tags() {
        assert_eq!(
            suggest_tag(Role::SalesExecutive, "URGENT: customer waiting"),
            "Urgent Delivery"
        );
        assert_eq!(
            suggest_tag(Role::SalesExecutive, "is product B available?"),
            "Stock Check"
        );
        assert_eq!(
            suggest_tag(Role::SalesExecutive, "quote for 50 units"),
            "Sales Request"
        );
    }

    #[test]
    fn warehouse_keywords_pick_the_expected_tags() {
        assert_eq!(
            suggest_tag(Role::WarehouseOfficer, "please confirm availability"),
            "Stock Confirmation"
        );
        assert_eq!(
            suggest_tag(Role::WarehouseOfficer, "ready to ship tomorrow"),
            "Shipment"
        );
        assert_eq!(
            suggest_tag(Role::WarehouseOfficer, "aisle 3 recount"),
            "Warehouse Request"
        );
    }

    #[test]
    fn production_and_support_fall_back_to_generic_tags() {
        assert_eq!(
            suggest_tag(Role::ProductionPlanner, "line 2 delay expected"),
            "Delay Report"
        );
        assert_eq!(
            suggest_tag(Role::SupportAgent, "customer complaint about packaging"),
            "Customer Complaint"
        );
        assert_eq!(
            suggest_tag(Role::ProductionPlanner, "raw material order"),
            "Production Request"
        );
        assert_eq!(suggest_tag(Role::SupportAgent, "question"), "Support Request");
    }

    #[test]
    fn suggestion_is_always_offered_in_the_dropdown() {
        for role in [
            Role::SalesExecutive,
            Role::WarehouseOfficer,
            Role::ProductionPlanner,
            Role::SupportAgent,
        ] {
            let suggested = suggest_tag(role, "urgent confirm delay complaint");
            assert!(role_tags(role).contains(&suggested));
        }
    }
}

//! Pure predicates behind the dashboard's status tabs and live search box.
//! The table itself only shows or hides rows; everything decidable is decided
//! here where it can be tested.

use crate::features::requests::types::SupplyRequest;

/// Sentinel filter for the tab that shows every row.
pub const FILTER_ALL: &str = "all";

/// Dashboard tabs as (label, filter) pairs. Filters match by containment so
/// "Production" also picks up "Forwarded to Production".
pub const STATUS_TABS: [(&str, &str); 5] = [
    ("All", FILTER_ALL),
    ("Submitted", "Submitted"),
    ("In Transit", "In Transit"),
    ("Production", "Production"),
    ("Fulfilled", "Fulfilled"),
];

/// Tab predicate: the "all" filter keeps everything, any other filter keeps
/// rows whose status contains the filter text.
pub fn matches_status_filter(status: &str, filter: &str) -> bool {
    filter == FILTER_ALL || status.contains(filter)
}

/// Search predicate over the row's visible text, case-insensitive. An empty
/// or whitespace-only query keeps every row.
pub fn matches_search(request: &SupplyRequest, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    searchable_text(request).contains(&query)
}

/// Applies the active tab and search query to a request list.
pub fn visible_requests<'a>(
    requests: &'a [SupplyRequest],
    filter: &str,
    query: &str,
) -> Vec<&'a SupplyRequest> {
    requests
        .iter()
        .filter(|request| matches_status_filter(&request.status, filter))
        .filter(|request| matches_search(request, query))
        .collect()
}

fn searchable_text(request: &SupplyRequest) -> String {
    [
        request.username.as_str(),
        request.role.as_str(),
        request.message.as_str(),
        request.tag.as_str(),
        request.status.as_str(),
        request.vendor_name.as_deref().unwrap_or(""),
        request.solution.as_deref().unwrap_or(""),
    ]
    .join(" ")
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{FILTER_ALL, matches_search, matches_status_filter, visible_requests};
    use crate::features::auth::types::Role;
    use crate::features::requests::types::SupplyRequest;

    fn request(status: &str, message: &str, vendor: Option<&str>) -> SupplyRequest {
        SupplyRequest {
            id: 1,
            username: "sales".to_string(),
            role: Role::SalesExecutive,
            message: message.to_string(),
            tag: "Stock Check".to_string(),
            status: status.to_string(),
            submitted_time: "2024-05-01 09:30:00".to_string(),
            fulfilled_time: None,
            vendor_name: vendor.map(str::to_string),
            solution: None,
            estimated_delivery: None,
            forwarded_to_production: false,
        }
    }

    #[test]
    fn all_filter_keeps_every_status() {
        assert!(matches_status_filter("Submitted", FILTER_ALL));
        assert!(matches_status_filter("Forwarded to Production", FILTER_ALL));
    }

    #[test]
    fn status_filter_matches_by_containment() {
        assert!(matches_status_filter("Forwarded to Production", "Production"));
        assert!(matches_status_filter("Submitted", "Submitted"));
        assert!(!matches_status_filter("Fulfilled", "Submitted"));
    }

    #[test]
    fn empty_query_keeps_every_row() {
        let row = request("Submitted", "need 20 units", None);
        assert!(matches_search(&row, ""));
        assert!(matches_search(&row, "   "));
    }

    #[test]
    fn search_is_case_insensitive_over_visible_text() {
        let row = request("Submitted", "Urgent delivery for Product A", None);
        assert!(matches_search(&row, "URGENT"));
        assert!(matches_search(&row, "product a"));
        assert!(!matches_search(&row, "backorder"));
    }

    #[test]
    fn search_covers_vendor_and_tag() {
        let row = request("Fulfilled", "restock", Some("Acme Logistics"));
        assert!(matches_search(&row, "acme"));
        assert!(matches_search(&row, "stock check"));
    }

    #[test]
    fn tab_and_search_compose() {
        let rows = vec![
            request("Submitted", "urgent restock", None),
            request("Fulfilled", "urgent shipment", None),
            request("Submitted", "routine order", None),
        ];

        let visible = visible_requests(&rows, "Submitted", "urgent");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "urgent restock");
    }
}

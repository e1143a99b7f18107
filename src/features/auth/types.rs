//! Request and response types for auth API calls. Passwords pass through these
//! payloads, so they must never be logged.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The four roles the 4S system knows. The wire format uses the display names.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "Sales Executive")]
    SalesExecutive,
    #[serde(rename = "Warehouse Officer")]
    WarehouseOfficer,
    #[serde(rename = "Production Planner")]
    ProductionPlanner,
    #[serde(rename = "Support Agent")]
    SupportAgent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SalesExecutive => "Sales Executive",
            Role::WarehouseOfficer => "Warehouse Officer",
            Role::ProductionPlanner => "Production Planner",
            Role::SupportAgent => "Support Agent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Session summary returned by the API to hydrate auth state.
/// This mirrors cookie-backed session state and contains no secrets.
pub struct UserSession {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::{Role, UserSession};

    #[test]
    fn role_uses_display_names_on_the_wire() {
        let json = serde_json::to_string(&Role::WarehouseOfficer).expect("Failed to serialize");
        assert_eq!(json, "\"Warehouse Officer\"");

        let role: Role = serde_json::from_str("\"Sales Executive\"").expect("Failed to deserialize");
        assert_eq!(role, Role::SalesExecutive);
    }

    #[test]
    fn session_round_trips() {
        let session = UserSession {
            user_id: 3,
            username: "warehouse".to_string(),
            role: Role::WarehouseOfficer,
        };

        let json = serde_json::to_string(&session).expect("Failed to serialize");
        let decoded: UserSession = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(decoded.user_id, 3);
        assert_eq!(decoded.username, "warehouse");
        assert_eq!(decoded.role, Role::WarehouseOfficer);
    }
}

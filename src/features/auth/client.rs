//! Client wrappers for the 4S auth endpoints. These helpers centralize
//! session-aware requests so route code never builds raw requests or handles
//! cookies itself.

use crate::{
    app_lib::{AppError, get_optional_json, post_empty, post_json_response},
    features::auth::types::{LoginRequest, UserSession},
};

/// Fetches the current session using cookie-based auth.
/// Returns `None` when the session is missing or expired.
pub async fn fetch_session() -> Result<Option<UserSession>, AppError> {
    get_optional_json("/api/session").await
}

/// Verifies credentials and lets the server set the session cookie.
/// The credentials must never be logged.
pub async fn login(request: &LoginRequest) -> Result<UserSession, AppError> {
    post_json_response("/api/login", request).await
}

/// Clears the current session on the server. The server answers by setting
/// the `logged_out` cookie that protected pages react to.
pub async fn logout() -> Result<(), AppError> {
    post_empty("/api/logout").await
}

//! Client helpers for the supply-request endpoints.

use crate::{
    app_lib::{AppError, get_json, post_json},
    features::requests::types::{NewRequest, SupplyRequest},
};

/// Fetches the caller's requests, newest first.
pub async fn fetch_requests() -> Result<Vec<SupplyRequest>, AppError> {
    get_json("/api/requests").await
}

/// Submits a new supply request.
pub async fn submit_request(request: &NewRequest) -> Result<(), AppError> {
    post_json("/api/requests", request).await
}

//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Session lifecycle
//!
//! 1. **Hydrate:** on mount the client calls `GET /api/session`; 204/401 mean
//!    no session and the UI stays signed out.
//! 2. **Login:** `POST /api/login` verifies credentials server-side and sets
//!    the `HttpOnly` session cookie.
//! 3. **Logout:** `POST /api/logout` clears the server session and sets the
//!    `logged_out` cookie consumed by the navigation guard on protected pages.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Real access control lives on the
//! API; everything here is client-side convenience.

pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod theme;

pub(crate) const GIT_COMMIT_HASH: &str = env!("SUPPLY4S_WEB_GIT_SHA");

pub(crate) use api::{get_json, get_optional_json, post_empty, post_json, post_json_response};
pub(crate) use errors::AppError;

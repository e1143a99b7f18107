//! Auth feature module covering the credential login flow and session
//! hydration. It keeps authentication logic out of the UI and must stay
//! aligned with backend expectations: the session cookie is `HttpOnly`, the
//! `logged_out` cookie is the server's logout signal, and no secret ever
//! lands in a log line.

pub(crate) mod client;
mod guards;
pub(crate) mod state;
pub(crate) mod types;

pub(crate) use guards::RequireAuth;

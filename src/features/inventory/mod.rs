//! Inventory feature: wire types, availability messaging for the submit form,
//! and API calls.

pub(crate) mod availability;
pub(crate) mod client;
pub(crate) mod types;

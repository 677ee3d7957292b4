//! Networking modules for the chapter REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` defines the user-facing failure
//! taxonomy, and `types` defines the shared wire schema also used by the
//! server's upstream client.

pub mod api;
pub mod error;
pub mod types;

//! Networking modules for the ERP REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoints` describes every request, `api` sends them and unwraps the
//! response envelope, and `types` defines the shared wire schema.

pub mod api;
pub mod endpoints;
pub mod types;

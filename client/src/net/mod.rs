//! Networking modules for the remote auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the three HTTP calls the client makes and `types` defines
//! their wire schema.

pub mod api;
pub mod types;

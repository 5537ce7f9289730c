//! Reusable UI building blocks.
//!
//! ARCHITECTURE
//! ============
//! Pages compose these; components read shared state from context rather
//! than taking it as props.

pub mod auth_form;
pub mod auth_route;
pub mod nav;

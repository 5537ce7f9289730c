//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is kept as plain structs wrapped in a single `RwSignal` provided via
//! context, so transitions stay testable without a reactive runtime.

pub mod session;

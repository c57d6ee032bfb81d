//! Application layer - use-case handlers consumed by the adapters.

pub mod handlers;

//! In-memory adapters standing in for the external persistence
//! collaborator.

mod session_store;

pub use session_store::InMemorySessionStore;

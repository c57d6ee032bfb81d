//! Ports - traits at the seams between the rule engine and its
//! collaborators.

mod session_reader;

pub use session_reader::{SessionReadError, SessionReader};

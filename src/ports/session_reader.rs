//! Session snapshot port for the capacity check.
//!
//! The rule engine never fetches data itself; the persistence collaborator
//! supplies a snapshot of the sessions already scheduled on a calendar
//! date. The snapshot is exactly that: sessions created by another
//! administrator between snapshot and submit are invisible, so two
//! concurrent bookings can both pass the ceiling check (last-write-wins,
//! accepted). Closing that race requires an aggregate constraint at insert
//! time in the external store.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::scheduling::SessionSlot;

/// Errors surfaced by session snapshot reads.
#[derive(Debug, Clone, Error)]
pub enum SessionReadError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Reads the sessions scheduled on a calendar date.
///
/// # Contract
///
/// Implementations return every session whose start falls on `date`,
/// including sessions with bare "HH:MM" starts recorded against that date.
/// They must not filter by category; the capacity check scopes to the slot
/// itself.
#[async_trait]
pub trait SessionReader: Send + Sync {
    async fn sessions_on(&self, date: NaiveDate) -> Result<Vec<SessionSlot>, SessionReadError>;
}

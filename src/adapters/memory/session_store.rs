//! In-memory session store.
//!
//! The real session records live in the external persistence collaborator;
//! this store stands in for it in the binary and in tests. Snapshot
//! semantics match the real thing: readers get a point-in-time copy.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::scheduling::SessionSlot;
use crate::ports::{SessionReadError, SessionReader};

/// Thread-safe in-memory collection of scheduled sessions.
#[derive(Default)]
pub struct InMemorySessionStore {
    slots: RwLock<Vec<SessionSlot>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a session, assigning a fresh id when the slot carries none.
    /// Returns the stored session's id.
    pub fn insert(&self, mut slot: SessionSlot) -> String {
        let id = slot
            .id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone();
        self.slots
            .write()
            .expect("session store lock poisoned")
            .push(slot);
        id
    }

    /// Convenience for scheduling a session at a date and time.
    pub fn schedule(
        &self,
        date: NaiveDate,
        start_time: &str,
        max_capacity: u32,
        enrolled_count: u32,
    ) -> String {
        self.insert(SessionSlot {
            id: None,
            start_time: format!("{}T{}:00", date.format("%Y-%m-%d"), start_time),
            max_capacity,
            enrolled_count: Some(enrolled_count),
        })
    }
}

#[async_trait]
impl SessionReader for InMemorySessionStore {
    async fn sessions_on(&self, date: NaiveDate) -> Result<Vec<SessionSlot>, SessionReadError> {
        let prefix = date.format("%Y-%m-%d").to_string();
        let slots = self
            .slots
            .read()
            .map_err(|_| SessionReadError::Unavailable("store lock poisoned".to_string()))?;
        Ok(slots
            .iter()
            .filter(|slot| slot.start_time.starts_with(&prefix))
            .cloned()
            .collect())
    }
}

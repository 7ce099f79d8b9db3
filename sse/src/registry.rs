use dashmap::DashMap;
use domain::SessionDescriptor;

/// Opaque client-visible identifier for one streamable log session.
pub type SessionId = String;

/// Concurrent registry of active log sessions, shared by every connection.
///
/// Lookups take a shard read lock and insert/remove take a shard write lock,
/// so readers never observe a partially-written descriptor and unrelated
/// sessions never contend on the same critical section. The registry offers
/// per-key atomicity only; no ordering is guaranteed between operations on
/// different sessions.
pub struct SessionRegistry {
    sessions: DashMap<SessionId, SessionDescriptor>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Returns a copy of the descriptor stored for `session_id`. Absence is a
    /// normal outcome, not an error. The clone keeps the critical section
    /// bounded; no lock is held once this returns.
    pub fn get(&self, session_id: &str) -> Option<SessionDescriptor> {
        self.sessions
            .get(session_id)
            .map(|entry| entry.value().clone())
    }

    /// Inserts or overwrites the descriptor for `session_id`. Always succeeds.
    pub fn set(&self, session_id: SessionId, descriptor: SessionDescriptor) {
        self.sessions.insert(session_id, descriptor);
    }

    /// Removes the entry for `session_id` if present. Deleting a missing ID
    /// is a no-op, so eviction is idempotent.
    pub fn delete(&self, session_id: &str) {
        self.sessions.remove(session_id);
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

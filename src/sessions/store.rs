use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use time::{Duration, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
struct Session {
    user_id: i32,
    expires_at: OffsetDateTime,
}

/// In-process session store keyed by random session id. Entries past their
/// TTL read as absent and are dropped on the next lookup.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for a user and return its id.
    pub fn start(&self, user_id: i32, ttl: Duration) -> Uuid {
        let id = Uuid::new_v4();
        let session = Session {
            user_id,
            expires_at: OffsetDateTime::now_utc() + ttl,
        };
        self.inner
            .write()
            .expect("session store lock poisoned")
            .insert(id, session);
        id
    }

    /// Resolve a session id to a user id, expiring stale entries.
    pub fn user_id(&self, session_id: Uuid) -> Option<i32> {
        let now = OffsetDateTime::now_utc();
        {
            let sessions = self.inner.read().expect("session store lock poisoned");
            match sessions.get(&session_id) {
                Some(s) if s.expires_at > now => return Some(s.user_id),
                Some(_) => {}
                None => return None,
            }
        }
        // Entry exists but is stale; take the write lock to drop it.
        self.inner
            .write()
            .expect("session store lock poisoned")
            .remove(&session_id);
        None
    }

    /// End a session. Ending an unknown or already-ended session is a no-op.
    pub fn revoke(&self, session_id: Uuid) {
        self.inner
            .write()
            .expect("session store lock poisoned")
            .remove(&session_id);
    }
}

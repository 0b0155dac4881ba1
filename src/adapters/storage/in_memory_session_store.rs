//! In-Memory Session Store Adapter
//!
//! Keeps assessment sessions in a process-local map. The only store this
//! version ships; a session is discarded when its comfort check ends, so
//! nothing needs to outlive the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::AssessmentId;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for assessment sessions
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<AssessmentId, AssessmentSession>>>,
}

impl InMemorySessionStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    /// Number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session: &AssessmentSession) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn load(&self, id: AssessmentId) -> Result<AssessmentSession, SessionStoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(id))
    }

    async fn exists(&self, id: AssessmentId) -> Result<bool, SessionStoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.contains_key(&id))
    }

    async fn delete(&self, id: AssessmentId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(&id);
        Ok(())
    }
}

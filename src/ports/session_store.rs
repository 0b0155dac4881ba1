//! Session Store Port - Interface for persisting assessment sessions.
//!
//! Sessions live only for the duration of one comfort check; the store
//! exists so multiple concurrent checks can be kept apart, not for
//! long-term persistence.

use async_trait::async_trait;

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::AssessmentId;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Assessment not found: {0}")]
    NotFound(AssessmentId),

    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Port for persisting and loading assessment sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Save a session, replacing any previous snapshot.
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the save fails
    async fn save(&self, session: &AssessmentSession) -> Result<(), SessionStoreError>;

    /// Load a session by its identifier.
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no session exists
    async fn load(&self, id: AssessmentId) -> Result<AssessmentSession, SessionStoreError>;

    /// Check whether a session exists.
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the check fails
    async fn exists(&self, id: AssessmentId) -> Result<bool, SessionStoreError>;

    /// Delete a session. Deleting an absent session is not an error.
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the delete fails
    async fn delete(&self, id: AssessmentId) -> Result<(), SessionStoreError>;
}

//! GetAssessmentHandler - Read-only snapshot of a session.

use std::sync::Arc;

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::AssessmentId;
use crate::ports::{SessionStore, SessionStoreError};

/// Query for one session snapshot
#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub assessment_id: AssessmentId,
}

/// Error type for the snapshot query
#[derive(Debug, Clone)]
pub enum GetAssessmentError {
    /// No session exists for the id
    NotFound(AssessmentId),
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for GetAssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetAssessmentError::NotFound(id) => write!(f, "Assessment not found: {}", id),
            GetAssessmentError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for GetAssessmentError {}

impl From<SessionStoreError> for GetAssessmentError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => GetAssessmentError::NotFound(id),
            other => GetAssessmentError::Storage(other.to_string()),
        }
    }
}

/// Handler for inspecting sessions without mutating them
pub struct GetAssessmentHandler {
    store: Arc<dyn SessionStore>,
}

impl GetAssessmentHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetAssessmentQuery,
    ) -> Result<AssessmentSession, GetAssessmentError> {
        Ok(self.store.load(query.assessment_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionStore;
    use crate::domain::assessment::AssessmentStage;

    #[tokio::test]
    async fn query_returns_the_stored_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let session = AssessmentSession::new(AssessmentId::new());
        store.save(&session).await.unwrap();

        let loaded = GetAssessmentHandler::new(store)
            .handle(GetAssessmentQuery {
                assessment_id: *session.id(),
            })
            .await
            .unwrap();

        assert_eq!(loaded.stage(), AssessmentStage::Idle);
        assert_eq!(loaded.id(), session.id());
    }

    #[tokio::test]
    async fn missing_session_yields_not_found() {
        let store = Arc::new(InMemorySessionStore::new());
        let missing = AssessmentId::new();

        let err = GetAssessmentHandler::new(store)
            .handle(GetAssessmentQuery {
                assessment_id: missing,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, GetAssessmentError::NotFound(id) if id == missing));
    }
}

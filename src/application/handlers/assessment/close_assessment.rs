//! CloseAssessmentHandler - Abandon a comfort check and discard its data.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::AssessmentId;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to abandon a comfort check
#[derive(Debug, Clone)]
pub struct CloseAssessmentCommand {
    pub assessment_id: AssessmentId,
}

/// Error type for closing a comfort check
#[derive(Debug, Clone)]
pub enum CloseAssessmentError {
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for CloseAssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CloseAssessmentError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for CloseAssessmentError {}

impl From<SessionStoreError> for CloseAssessmentError {
    fn from(err: SessionStoreError) -> Self {
        CloseAssessmentError::Storage(err.to_string())
    }
}

/// Handler for discarding sessions.
///
/// Closing is idempotent: closing an already-absent session succeeds.
pub struct CloseAssessmentHandler {
    store: Arc<dyn SessionStore>,
}

impl CloseAssessmentHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CloseAssessmentCommand) -> Result<(), CloseAssessmentError> {
        self.store.delete(cmd.assessment_id).await?;
        info!(
            assessment_id = %cmd.assessment_id,
            "Closed comfort check"
        );
        Ok(())
    }
}

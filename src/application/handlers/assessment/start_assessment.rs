//! StartAssessmentHandler - Create a session and open the guided flow.

use std::sync::Arc;

use tracing::info;

use crate::domain::assessment::{
    AssessmentSession, RenderInstruction, StageController, UserAction,
};
use crate::domain::foundation::AssessmentId;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to start a new comfort check
#[derive(Debug, Clone, Default)]
pub struct StartAssessmentCommand;

/// Result of starting a comfort check
#[derive(Debug, Clone)]
pub struct StartAssessmentResult {
    pub assessment_id: AssessmentId,
    pub instructions: Vec<RenderInstruction>,
}

/// Error type for starting a comfort check
#[derive(Debug, Clone)]
pub enum StartAssessmentError {
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for StartAssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartAssessmentError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for StartAssessmentError {}

impl From<SessionStoreError> for StartAssessmentError {
    fn from(err: SessionStoreError) -> Self {
        StartAssessmentError::Storage(err.to_string())
    }
}

/// Handler for starting comfort checks
pub struct StartAssessmentHandler {
    store: Arc<dyn SessionStore>,
    controller: StageController,
}

impl StartAssessmentHandler {
    pub fn new(store: Arc<dyn SessionStore>, controller: StageController) -> Self {
        Self { store, controller }
    }

    pub async fn handle(
        &self,
        _cmd: StartAssessmentCommand,
    ) -> Result<StartAssessmentResult, StartAssessmentError> {
        let assessment_id = AssessmentId::new();
        let mut session = AssessmentSession::new(assessment_id);

        let instructions = self.controller.apply(&mut session, UserAction::Start);
        self.store.save(&session).await?;

        info!(
            assessment_id = %assessment_id,
            "Started comfort check"
        );

        Ok(StartAssessmentResult {
            assessment_id,
            instructions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionStore;
    use crate::domain::assessment::AssessmentStage;

    fn handler(store: Arc<InMemorySessionStore>) -> StartAssessmentHandler {
        StartAssessmentHandler::new(store, StageController::default())
    }

    #[tokio::test]
    async fn start_persists_a_session_in_the_inputs_stage() {
        let store = Arc::new(InMemorySessionStore::new());
        let result = handler(store.clone())
            .handle(StartAssessmentCommand)
            .await
            .unwrap();

        assert!(!result.instructions.is_empty());
        let session = store.load(result.assessment_id).await.unwrap();
        assert_eq!(session.stage(), AssessmentStage::InitialInputs);
    }

    #[tokio::test]
    async fn each_start_creates_a_distinct_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = handler(store.clone());

        let first = handler.handle(StartAssessmentCommand).await.unwrap();
        let second = handler.handle(StartAssessmentCommand).await.unwrap();

        assert_ne!(first.assessment_id, second.assessment_id);
        assert_eq!(store.session_count().await, 2);
    }
}

//! ApplyActionHandler - Drive an existing session one action forward.

use std::sync::Arc;

use tracing::debug;

use crate::domain::assessment::{
    AssessmentStage, RenderInstruction, StageController, UserAction,
};
use crate::domain::foundation::AssessmentId;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to apply one user action to a session
#[derive(Debug, Clone)]
pub struct ApplyActionCommand {
    pub assessment_id: AssessmentId,
    pub action: UserAction,
}

/// Result of applying an action
#[derive(Debug, Clone)]
pub struct ApplyActionResult {
    pub stage: AssessmentStage,
    pub instructions: Vec<RenderInstruction>,
}

/// Error type for applying actions
#[derive(Debug, Clone)]
pub enum ApplyActionError {
    /// No session exists for the id
    NotFound(AssessmentId),
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for ApplyActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplyActionError::NotFound(id) => write!(f, "Assessment not found: {}", id),
            ApplyActionError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for ApplyActionError {}

impl From<SessionStoreError> for ApplyActionError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => ApplyActionError::NotFound(id),
            other => ApplyActionError::Storage(other.to_string()),
        }
    }
}

/// Handler for driving sessions through the guided flow
pub struct ApplyActionHandler {
    store: Arc<dyn SessionStore>,
    controller: StageController,
}

impl ApplyActionHandler {
    pub fn new(store: Arc<dyn SessionStore>, controller: StageController) -> Self {
        Self { store, controller }
    }

    /// Loads the session, applies the action, and persists the result.
    ///
    /// A `Close` action deletes the session instead of saving it; the
    /// comfort check keeps nothing once abandoned.
    pub async fn handle(
        &self,
        cmd: ApplyActionCommand,
    ) -> Result<ApplyActionResult, ApplyActionError> {
        let mut session = self.store.load(cmd.assessment_id).await?;
        let closing = matches!(cmd.action, UserAction::Close);

        let instructions = self.controller.apply(&mut session, cmd.action);
        let stage = session.stage();

        if closing {
            self.store.delete(cmd.assessment_id).await?;
        } else {
            self.store.save(&session).await?;
        }

        debug!(
            assessment_id = %cmd.assessment_id,
            stage = %stage.label(),
            instructions = instructions.len(),
            "Applied action"
        );

        Ok(ApplyActionResult {
            stage,
            instructions,
        })
    }
}

//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    ApplyActionCommand, ApplyActionError, ApplyActionHandler, ApplyActionResult,
    CloseAssessmentCommand, CloseAssessmentError, CloseAssessmentHandler,
    GetAssessmentError, GetAssessmentHandler, GetAssessmentQuery,
    StartAssessmentCommand, StartAssessmentError, StartAssessmentHandler, StartAssessmentResult,
};

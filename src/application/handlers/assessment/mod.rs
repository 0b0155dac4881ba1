//! Assessment handlers - start, drive, inspect, and close comfort checks.

mod apply_action;
mod close_assessment;
mod get_assessment;
mod start_assessment;

pub use apply_action::{
    ApplyActionCommand, ApplyActionError, ApplyActionHandler, ApplyActionResult,
};
pub use close_assessment::{CloseAssessmentCommand, CloseAssessmentError, CloseAssessmentHandler};
pub use get_assessment::{GetAssessmentError, GetAssessmentHandler, GetAssessmentQuery};
pub use start_assessment::{
    StartAssessmentCommand, StartAssessmentError, StartAssessmentHandler, StartAssessmentResult,
};

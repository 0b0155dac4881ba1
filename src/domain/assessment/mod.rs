//! Assessment module - the guided comfort-check flow.
//!
//! Holds the session aggregate, the stage state machine, the inbound
//! action vocabulary, the outbound rendering instructions, and the stage
//! controller that ties them together.

mod action;
mod controller;
mod render;
mod session;
mod stage;

pub use action::{
    ConfidenceFeeling, FinalAction, LoanFollowUp, ProfileAnswer, QuickAction, UserAction,
};
pub use controller::StageController;
pub use render::{AgentMessage, OptionSpec, Panel, QuestionSpec, RenderInstruction, SliderSpec};
pub use session::{AssessmentSession, EmiPreference};
pub use stage::AssessmentStage;

//! Outbound rendering instructions.
//!
//! The stage controller never touches a screen; it emits these structured
//! instructions and leaves display entirely to the presentation boundary.

use serde::{Deserialize, Serialize};

use super::action::{ConfidenceFeeling, FinalAction, LoanFollowUp, QuickAction};
use crate::domain::estimator::{DipOutcome, LoanVariant};

/// One instruction for the presentation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderInstruction {
    /// A message bubble from the assistant persona.
    Agent(AgentMessage),
    /// An echo bubble summarising what the user just did.
    UserEcho { text: String },
    /// An interactive panel to display.
    Panel(Panel),
}

/// A tagged assistant message: one or more paragraphs plus optional
/// chrome (category tag, meta line, subtext).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AgentMessage {
    pub paragraphs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
}

impl AgentMessage {
    /// Single-paragraph message.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![text.into()],
            ..Self::default()
        }
    }

    /// Multi-paragraph message.
    pub fn paragraphs(paragraphs: impl IntoIterator<Item = String>) -> Self {
        Self {
            paragraphs: paragraphs.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Adds a category tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Adds a meta line (shown above the message body).
    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    /// Adds a subtext line (shown under the message body).
    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }
}

/// Range-slider description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
}

/// One selectable option in a question group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Stable value tag the boundary feeds back on selection.
    pub value: String,
    /// User-facing label.
    pub label: String,
}

/// One profile question with its option pills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSpec {
    pub prompt: String,
    pub options: Vec<OptionSpec>,
}

/// An interactive panel, described as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum Panel {
    /// Property value, income, and the optional preferred-EMI slider.
    InitialInputs {
        header: String,
        emi_slider: SliderSpec,
    },
    /// Quick-action chips after the soft eligibility estimate.
    QuickActions { options: Vec<QuickAction> },
    /// The three profile questions.
    ProfileQuestions {
        header: String,
        questions: Vec<QuestionSpec>,
    },
    /// The three illustrative loan cards plus follow-up chips.
    LoanOptions {
        header: String,
        variants: Vec<LoanVariant>,
        follow_ups: Vec<LoanFollowUp>,
    },
    /// The income-dip slider and the current scenario outcome.
    StressTest {
        header: String,
        dip_slider: SliderSpec,
        outcome: DipOutcome,
        legal: String,
    },
    /// The confidence option pills.
    ConfidenceOptions {
        header: String,
        options: Vec<ConfidenceFeeling>,
    },
    /// The terminal hand-off buttons.
    FinalActions {
        header: String,
        options: Vec<FinalAction>,
        note: String,
    },
}

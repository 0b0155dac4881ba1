//! Inbound user actions.
//!
//! The closed vocabulary of discrete actions the presentation boundary
//! can feed into the stage controller. One action is processed at a time;
//! anything not expressible here cannot reach the core.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{IncomeStability, RiskComfort, SavingsBuffer};

/// A discrete user action consumed by the stage controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UserAction {
    /// Explicit start of the comfort check.
    Start,
    /// Submission of the initial inputs form.
    SubmitInitialInputs {
        property_value: f64,
        monthly_income: f64,
        preferred_emi: Option<f64>,
    },
    /// Submission of the initial inputs form with the EMI preference
    /// deliberately skipped.
    SkipEmiPreference {
        property_value: f64,
        monthly_income: f64,
    },
    /// Selection of one profile answer pill.
    SelectProfileAnswer(ProfileAnswer),
    /// Submission of the profile questionnaire.
    SubmitProfile,
    /// Choice of what to do after the soft eligibility estimate.
    SelectQuickAction(QuickAction),
    /// Choice of what to do after seeing the loan options.
    SelectLoanFollowUp(LoanFollowUp),
    /// Movement of the income-dip slider.
    SetDipPercent { percent: u8 },
    /// Request for a scenario other than the income dip.
    RequestAnotherScenario,
    /// Request to move on to the confidence checkpoint.
    RequestConfidenceCheck,
    /// The subjective comfort signal.
    SelectConfidenceFeeling(ConfidenceFeeling),
    /// One of the two terminal hand-off actions.
    SelectFinalAction(FinalAction),
    /// Abandon the session; the session object is discarded.
    Close,
}

/// One answer to one of the three profile questions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileAnswer {
    IncomeStability(IncomeStability),
    SavingsBuffer(SavingsBuffer),
    RiskComfort(RiskComfort),
}

/// Quick action offered alongside the soft eligibility estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    /// Walk through the future-profile questions first.
    FutureFinances,
    /// Jump straight to the income-dip stress test.
    StressTest,
}

impl QuickAction {
    /// User-facing chip label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FutureFinances => "Predict my future finances",
            Self::StressTest => "Stress test my finances",
        }
    }
}

/// Follow-up offered under the loan option cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanFollowUp {
    /// Stress test the presented options.
    StressOptions,
    /// Read-only trade-off comparison of the three variants.
    CompareTradeOffs,
}

impl LoanFollowUp {
    /// User-facing chip label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::StressOptions => "Stress test my options",
            Self::CompareTradeOffs => "Compare trade-offs",
        }
    }
}

/// The subjective comfort signal gathered at the confidence checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceFeeling {
    Comfortable,
    SlightlyRisky,
    TooStressful,
}

impl ConfidenceFeeling {
    /// User-facing option label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Comfortable => "Feels comfortable",
            Self::SlightlyRisky => "Feels slightly risky",
            Self::TooStressful => "Feels too stressful",
        }
    }

    /// All options, in display order.
    pub fn options() -> [Self; 3] {
        [Self::Comfortable, Self::SlightlyRisky, Self::TooStressful]
    }
}

/// Terminal hand-off actions; mutually exclusive, side-effect only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalAction {
    Proceed,
    TalkToAdvisor,
}

impl FinalAction {
    /// User-facing button label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Proceed => "Proceed with this loan",
            Self::TalkToAdvisor => "Talk to a loan advisor",
        }
    }

    /// Both options, in display order.
    pub fn options() -> [Self; 2] {
        [Self::Proceed, Self::TalkToAdvisor]
    }
}

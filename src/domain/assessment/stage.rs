//! Assessment stage state machine.
//!
//! The ordered stages of the comfort check. The stage only ever moves
//! forward; invalid input re-prompts in place without a transition.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The stage an assessment session is currently in.
///
/// Stress testing can be entered either after the soft eligibility
/// estimate (skipping profile and loan options) or after the loan
/// options; every other edge is linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssessmentStage {
    /// Nothing started yet; waiting for an explicit start action.
    Idle,
    /// Collecting property value, income, and the optional EMI preference.
    InitialInputs,
    /// Showing the soft eligibility band and the quick-action choice.
    SoftEligibility,
    /// Collecting the three financial-profile answers.
    FutureProfile,
    /// Showing the three illustrative loan variants.
    LoanOptions,
    /// Income-dip scenario with a mutable dip slider.
    StressTesting,
    /// Asking how the loan feels.
    Confidence,
    /// Terminal hand-off: proceed or talk to an advisor.
    Final,
}

impl AssessmentStage {
    /// Short label for logs and UI chrome.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::InitialInputs => "Initial inputs",
            Self::SoftEligibility => "Soft eligibility",
            Self::FutureProfile => "Future profile",
            Self::LoanOptions => "Loan options",
            Self::StressTesting => "Stress testing",
            Self::Confidence => "Confidence checkpoint",
            Self::Final => "Final",
        }
    }
}

impl StateMachine for AssessmentStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentStage::*;
        matches!(
            (self, target),
            (Idle, InitialInputs)
                | (InitialInputs, SoftEligibility)
                | (SoftEligibility, FutureProfile)
                | (SoftEligibility, StressTesting)
                | (FutureProfile, LoanOptions)
                | (LoanOptions, StressTesting)
                | (StressTesting, Confidence)
                | (Confidence, Final)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AssessmentStage::*;
        match self {
            Idle => vec![InitialInputs],
            InitialInputs => vec![SoftEligibility],
            SoftEligibility => vec![FutureProfile, StressTesting],
            FutureProfile => vec![LoanOptions],
            LoanOptions => vec![StressTesting],
            StressTesting => vec![Confidence],
            Confidence => vec![Final],
            Final => vec![],
        }
    }
}

impl Default for AssessmentStage {
    fn default() -> Self {
        Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stage_is_idle() {
        assert_eq!(AssessmentStage::default(), AssessmentStage::Idle);
    }

    #[test]
    fn linear_path_is_valid() {
        use AssessmentStage::*;
        let path = [
            Idle,
            InitialInputs,
            SoftEligibility,
            FutureProfile,
            LoanOptions,
            StressTesting,
            Confidence,
            Final,
        ];
        for pair in path.windows(2) {
            assert!(
                pair[0].can_transition_to(&pair[1]),
                "{:?} -> {:?} should be valid",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn stress_testing_is_reachable_directly_from_soft_eligibility() {
        assert!(
            AssessmentStage::SoftEligibility.can_transition_to(&AssessmentStage::StressTesting)
        );
    }

    #[test]
    fn stage_never_moves_backwards() {
        use AssessmentStage::*;
        assert!(!SoftEligibility.can_transition_to(&InitialInputs));
        assert!(!LoanOptions.can_transition_to(&FutureProfile));
        assert!(!Confidence.can_transition_to(&StressTesting));
    }

    #[test]
    fn profile_cannot_be_skipped_into_loan_options() {
        assert!(!AssessmentStage::SoftEligibility.can_transition_to(&AssessmentStage::LoanOptions));
    }

    #[test]
    fn final_is_terminal() {
        assert!(AssessmentStage::Final.is_terminal());
        assert!(!AssessmentStage::Confidence.is_terminal());
    }

    #[test]
    fn transition_to_validates() {
        let stage = AssessmentStage::Idle;
        assert!(stage.transition_to(AssessmentStage::InitialInputs).is_ok());
        assert!(stage.transition_to(AssessmentStage::Final).is_err());
    }

    #[test]
    fn serializes_to_camel_case() {
        let json = serde_json::to_string(&AssessmentStage::SoftEligibility).unwrap();
        assert_eq!(json, "\"softEligibility\"");
        let json = serde_json::to_string(&AssessmentStage::StressTesting).unwrap();
        assert_eq!(json, "\"stressTesting\"");
    }
}

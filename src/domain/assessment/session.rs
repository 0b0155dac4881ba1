//! Assessment session aggregate.
//!
//! The single stateful object of the comfort check: everything collected
//! so far plus the current stage. One instance per user interaction,
//! created on start and discarded on close; nothing survives the session.
//!
//! # Invariants
//!
//! - `property_value` and `monthly_income` are strictly positive and
//!   immutable once recorded.
//! - `loan_variants` is computed once and only ever replaced wholesale.
//! - The stage advances only through [`AssessmentStage`] transitions;
//!   re-prompts leave the session untouched.

use serde::{Deserialize, Serialize};

use super::stage::AssessmentStage;
use crate::domain::estimator::assumptions::{
    EMI_PREFERENCE_TOLERANCE, FALLBACK_EMI_INCOME_RATIO,
};
use crate::domain::estimator::{DipOutcome, EligibilityBand, LoanVariant};
use crate::domain::foundation::{
    AssessmentId, DomainError, ErrorCode, Money, StateMachine, Timestamp,
};
use crate::domain::profile::{FinancialProfile, IncomeStability, RiskComfort, SavingsBuffer};

/// Preferred EMI with its ±20% tolerance band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiPreference {
    pub preferred: Money,
    pub min: Money,
    pub max: Money,
}

impl EmiPreference {
    /// Builds the tolerance band around a stated preference.
    pub fn around(preferred: f64) -> Self {
        Self {
            preferred: Money::new(preferred),
            min: Money::new(preferred * (1.0 - EMI_PREFERENCE_TOLERANCE)),
            max: Money::new(preferred * (1.0 + EMI_PREFERENCE_TOLERANCE)),
        }
    }
}

/// The assessment session aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    id: AssessmentId,
    stage: AssessmentStage,
    property_value: Option<Money>,
    monthly_income: Option<Money>,
    preferred_emi: Option<EmiPreference>,
    profile: FinancialProfile,
    eligibility: Option<EligibilityBand>,
    loan_variants: Option<[LoanVariant; 3]>,
    last_scenario: Option<DipOutcome>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl AssessmentSession {
    /// Creates a fresh idle session.
    pub fn new(id: AssessmentId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            stage: AssessmentStage::Idle,
            property_value: None,
            monthly_income: None,
            preferred_emi: None,
            profile: FinancialProfile::new(),
            eligibility: None,
            loan_variants: None,
            last_scenario: None,
            created_at: now,
            updated_at: now,
        }
    }

    // ============================================================
    // Accessors
    // ============================================================

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn stage(&self) -> AssessmentStage {
        self.stage
    }

    pub fn property_value(&self) -> Option<Money> {
        self.property_value
    }

    pub fn monthly_income(&self) -> Option<Money> {
        self.monthly_income
    }

    pub fn preferred_emi(&self) -> Option<&EmiPreference> {
        self.preferred_emi.as_ref()
    }

    pub fn profile(&self) -> &FinancialProfile {
        &self.profile
    }

    pub fn eligibility(&self) -> Option<&EligibilityBand> {
        self.eligibility.as_ref()
    }

    pub fn loan_variants(&self) -> Option<&[LoanVariant; 3]> {
        self.loan_variants.as_ref()
    }

    pub fn last_scenario(&self) -> Option<&DipOutcome> {
        self.last_scenario.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ============================================================
    // Mutations
    // ============================================================

    /// Moves from idle to collecting the initial inputs.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless the session is idle
    pub fn begin(&mut self) -> Result<(), DomainError> {
        self.advance(AssessmentStage::InitialInputs)
    }

    /// Records the initial inputs and advances to soft eligibility.
    ///
    /// Validates before mutating: a failed submission leaves the session
    /// exactly as it was, including the stage.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredInput` naming each absent or non-positive field
    /// - `InvalidStateTransition` unless collecting initial inputs
    pub fn record_initial_inputs(
        &mut self,
        property_value: f64,
        monthly_income: f64,
        preferred_emi: Option<f64>,
    ) -> Result<(), DomainError> {
        self.ensure_stage(AssessmentStage::InitialInputs)?;

        let mut missing: Vec<&str> = Vec::new();
        if !(property_value.is_finite() && property_value > 0.0) {
            missing.push("property value");
        }
        if !(monthly_income.is_finite() && monthly_income > 0.0) {
            missing.push("monthly take-home income");
        }
        if !missing.is_empty() {
            return Err(DomainError::new(
                ErrorCode::MissingRequiredInput,
                format!("Required input missing or not positive: {}", missing.join(", ")),
            )
            .with_detail("fields", missing.join(",")));
        }

        self.property_value = Some(Money::new(property_value));
        self.monthly_income = Some(Money::new(monthly_income));
        // Omission is the semantic for a skipped preference; a zero or
        // negative slider value must never become a zero EMI cap.
        self.preferred_emi = preferred_emi
            .filter(|value| value.is_finite() && *value > 0.0)
            .map(EmiPreference::around);
        self.advance(AssessmentStage::SoftEligibility)
    }

    /// Stores the computed eligibility band.
    pub fn set_eligibility(&mut self, band: EligibilityBand) {
        self.eligibility = Some(band);
        self.touch();
    }

    /// Moves from soft eligibility into the profile questions.
    pub fn begin_profile(&mut self) -> Result<(), DomainError> {
        self.advance(AssessmentStage::FutureProfile)
    }

    /// Records one profile answer. Answers may be changed freely until
    /// the profile is submitted.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless in the profile stage
    pub fn answer_income_stability(
        &mut self,
        value: IncomeStability,
    ) -> Result<(), DomainError> {
        self.ensure_stage(AssessmentStage::FutureProfile)?;
        self.profile.income_stability = Some(value);
        self.touch();
        Ok(())
    }

    /// Records the savings-buffer answer.
    pub fn answer_savings_buffer(&mut self, value: SavingsBuffer) -> Result<(), DomainError> {
        self.ensure_stage(AssessmentStage::FutureProfile)?;
        self.profile.savings_buffer = Some(value);
        self.touch();
        Ok(())
    }

    /// Records the risk-comfort answer.
    pub fn answer_risk_comfort(&mut self, value: RiskComfort) -> Result<(), DomainError> {
        self.ensure_stage(AssessmentStage::FutureProfile)?;
        self.profile.risk_comfort = Some(value);
        self.touch();
        Ok(())
    }

    /// Completes the profile stage: stores the variant snapshot and
    /// advances to loan options. Variants are computed once; a second
    /// submission is rejected by the stage guard.
    ///
    /// # Errors
    ///
    /// - `IncompleteProfile` if any answer is missing (session unchanged)
    /// - `InvalidStateTransition` unless in the profile stage
    pub fn complete_profile(&mut self, variants: [LoanVariant; 3]) -> Result<(), DomainError> {
        self.ensure_stage(AssessmentStage::FutureProfile)?;
        if !self.profile.is_complete() {
            return Err(DomainError::new(
                ErrorCode::IncompleteProfile,
                format!(
                    "Profile answers missing: {}",
                    self.profile.missing_answers().join(", ")
                ),
            ));
        }
        self.loan_variants = Some(variants);
        self.advance(AssessmentStage::LoanOptions)
    }

    /// Enters stress testing from either soft eligibility or loan options.
    pub fn begin_stress_testing(&mut self) -> Result<(), DomainError> {
        self.advance(AssessmentStage::StressTesting)
    }

    /// Records the latest scenario outcome, overwriting any previous one.
    ///
    /// # Errors
    ///
    /// - `ScenarioNotReachable` unless in the stress-testing stage
    pub fn record_scenario(&mut self, outcome: DipOutcome) -> Result<(), DomainError> {
        if self.stage != AssessmentStage::StressTesting {
            return Err(DomainError::new(
                ErrorCode::ScenarioNotReachable,
                "Scenario can only be computed while stress testing",
            ));
        }
        self.last_scenario = Some(outcome);
        self.touch();
        Ok(())
    }

    /// Moves to the confidence checkpoint.
    ///
    /// # Errors
    ///
    /// - `ScenarioNotReachable` if no scenario outcome exists yet
    /// - `InvalidStateTransition` unless stress testing
    pub fn begin_confidence(&mut self) -> Result<(), DomainError> {
        if self.last_scenario.is_none() {
            return Err(DomainError::new(
                ErrorCode::ScenarioNotReachable,
                "Confidence checkpoint requires a scenario outcome",
            ));
        }
        self.advance(AssessmentStage::Confidence)
    }

    /// Moves to the terminal hand-off stage.
    pub fn begin_final(&mut self) -> Result<(), DomainError> {
        self.advance(AssessmentStage::Final)
    }

    // ============================================================
    // Derived
    // ============================================================

    /// Base EMI reference for the stress test.
    ///
    /// Priority order, first available wins: first loan variant's EMI,
    /// then the eligibility band's reference EMI, then the income
    /// heuristic. `None` only before income is recorded.
    pub fn stress_base_emi(&self) -> Option<f64> {
        if let Some(variants) = &self.loan_variants {
            return Some(variants[0].emi.amount());
        }
        if let Some(band) = &self.eligibility {
            return Some(band.reference_emi.amount());
        }
        self.monthly_income
            .map(|income| income.amount() * FALLBACK_EMI_INCOME_RATIO)
    }

    // ============================================================
    // Private helpers
    // ============================================================

    fn advance(&mut self, target: AssessmentStage) -> Result<(), DomainError> {
        self.stage = self.stage.transition_to(target).map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "Cannot move from {} to {}",
                    self.stage.label(),
                    target.label()
                ),
            )
        })?;
        self.touch();
        Ok(())
    }

    fn ensure_stage(&self, expected: AssessmentStage) -> Result<(), DomainError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "Action requires the {} stage, currently {}",
                    expected.label(),
                    self.stage.label()
                ),
            ))
        }
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::estimator::{
        build_loan_variants, estimate_eligibility_band, simulate_income_dip, DipPercent,
    };

    fn started_session() -> AssessmentSession {
        let mut session = AssessmentSession::new(AssessmentId::new());
        session.begin().unwrap();
        session
    }

    fn session_at_soft_eligibility() -> AssessmentSession {
        let mut session = started_session();
        session
            .record_initial_inputs(7_500_000.0, 85_000.0, None)
            .unwrap();
        let income = session.monthly_income().unwrap().amount();
        session.set_eligibility(estimate_eligibility_band(income, None));
        session
    }

    #[test]
    fn new_session_is_idle_and_empty() {
        let session = AssessmentSession::new(AssessmentId::new());
        assert_eq!(session.stage(), AssessmentStage::Idle);
        assert!(session.property_value().is_none());
        assert!(session.loan_variants().is_none());
        assert!(session.last_scenario().is_none());
    }

    #[test]
    fn begin_moves_to_initial_inputs() {
        let session = started_session();
        assert_eq!(session.stage(), AssessmentStage::InitialInputs);
    }

    #[test]
    fn begin_twice_fails() {
        let mut session = started_session();
        assert!(session.begin().is_err());
    }

    #[test]
    fn valid_initial_inputs_advance_to_soft_eligibility() {
        let mut session = started_session();
        session
            .record_initial_inputs(7_500_000.0, 85_000.0, Some(30_000.0))
            .unwrap();
        assert_eq!(session.stage(), AssessmentStage::SoftEligibility);
        assert_eq!(session.property_value().unwrap().amount(), 7_500_000.0);
        let preference = session.preferred_emi().unwrap();
        assert_eq!(preference.min.amount(), 24_000.0);
        assert_eq!(preference.max.amount(), 36_000.0);
    }

    #[test]
    fn zero_property_value_reprompts_without_mutation() {
        let mut session = started_session();
        let err = session
            .record_initial_inputs(0.0, 85_000.0, None)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredInput);
        assert!(err.message.contains("property value"));
        assert_eq!(session.stage(), AssessmentStage::InitialInputs);
        assert!(session.property_value().is_none());
        assert!(session.monthly_income().is_none());
    }

    #[test]
    fn zero_income_reprompts_and_names_the_field() {
        let mut session = started_session();
        let err = session
            .record_initial_inputs(7_500_000.0, 0.0, None)
            .unwrap_err();
        assert!(err.message.contains("monthly take-home income"));
        assert_eq!(session.stage(), AssessmentStage::InitialInputs);
    }

    #[test]
    fn skipped_preference_is_absent_not_zero() {
        let mut session = started_session();
        session
            .record_initial_inputs(7_500_000.0, 85_000.0, None)
            .unwrap();
        assert!(session.preferred_emi().is_none());
    }

    #[test]
    fn zero_preference_is_treated_as_skipped() {
        let mut session = started_session();
        session
            .record_initial_inputs(7_500_000.0, 85_000.0, Some(0.0))
            .unwrap();
        assert!(session.preferred_emi().is_none());
    }

    #[test]
    fn profile_answers_require_the_profile_stage() {
        let mut session = session_at_soft_eligibility();
        let result = session.answer_risk_comfort(RiskComfort::Risk);
        assert!(result.is_err());
    }

    #[test]
    fn incomplete_profile_cannot_complete() {
        let mut session = session_at_soft_eligibility();
        session.begin_profile().unwrap();
        session
            .answer_income_stability(IncomeStability::Stable)
            .unwrap();
        let variants = build_loan_variants(28_900.0, 85_000.0, 1);
        let err = session.complete_profile(variants).unwrap_err();
        assert_eq!(err.code, ErrorCode::IncompleteProfile);
        assert!(err.message.contains("savings buffer"));
        assert!(err.message.contains("risk comfort"));
        assert_eq!(session.stage(), AssessmentStage::FutureProfile);
        assert!(session.loan_variants().is_none());
    }

    #[test]
    fn complete_profile_snapshots_variants_and_advances() {
        let mut session = session_at_soft_eligibility();
        session.begin_profile().unwrap();
        session
            .answer_income_stability(IncomeStability::Stable)
            .unwrap();
        session
            .answer_savings_buffer(SavingsBuffer::MoreThanSix)
            .unwrap();
        session.answer_risk_comfort(RiskComfort::Risk).unwrap();
        let variants = build_loan_variants(28_900.0, 85_000.0, 3);
        session.complete_profile(variants.clone()).unwrap();
        assert_eq!(session.stage(), AssessmentStage::LoanOptions);
        assert_eq!(session.loan_variants(), Some(&variants));
    }

    #[test]
    fn stress_base_emi_prefers_the_first_variant() {
        let mut session = session_at_soft_eligibility();
        session.begin_profile().unwrap();
        session
            .answer_income_stability(IncomeStability::Stable)
            .unwrap();
        session
            .answer_savings_buffer(SavingsBuffer::MoreThanSix)
            .unwrap();
        session.answer_risk_comfort(RiskComfort::Risk).unwrap();
        let variants = build_loan_variants(28_900.0, 85_000.0, 3);
        let stable_emi = variants[0].emi.amount();
        session.complete_profile(variants).unwrap();
        assert_eq!(session.stress_base_emi(), Some(stable_emi));
    }

    #[test]
    fn stress_base_emi_falls_back_to_reference_emi() {
        let session = session_at_soft_eligibility();
        let reference = session.eligibility().unwrap().reference_emi.amount();
        assert_eq!(session.stress_base_emi(), Some(reference));
    }

    #[test]
    fn stress_base_emi_last_resort_is_income_heuristic() {
        let mut session = started_session();
        session
            .record_initial_inputs(7_500_000.0, 85_000.0, None)
            .unwrap();
        // No eligibility stored yet.
        assert_eq!(session.stress_base_emi(), Some(85_000.0 * 0.35));
    }

    #[test]
    fn scenario_recording_requires_stress_testing() {
        let mut session = session_at_soft_eligibility();
        let outcome = simulate_income_dip(85_000.0, DipPercent::DEFAULT, 25_000.0, None);
        let err = session.record_scenario(outcome).unwrap_err();
        assert_eq!(err.code, ErrorCode::ScenarioNotReachable);
    }

    #[test]
    fn scenario_overwrites_previous_outcome() {
        let mut session = session_at_soft_eligibility();
        session.begin_stress_testing().unwrap();
        let first = simulate_income_dip(85_000.0, DipPercent::DEFAULT, 25_000.0, None);
        session.record_scenario(first).unwrap();
        let second = simulate_income_dip(
            85_000.0,
            DipPercent::try_new(40).unwrap(),
            25_000.0,
            None,
        );
        session.record_scenario(second.clone()).unwrap();
        assert_eq!(session.last_scenario(), Some(&second));
    }

    #[test]
    fn confidence_requires_a_scenario_outcome() {
        let mut session = session_at_soft_eligibility();
        session.begin_stress_testing().unwrap();
        let err = session.begin_confidence().unwrap_err();
        assert_eq!(err.code, ErrorCode::ScenarioNotReachable);

        let outcome = simulate_income_dip(85_000.0, DipPercent::DEFAULT, 25_000.0, None);
        session.record_scenario(outcome).unwrap();
        session.begin_confidence().unwrap();
        assert_eq!(session.stage(), AssessmentStage::Confidence);
    }

    #[test]
    fn final_follows_confidence() {
        let mut session = session_at_soft_eligibility();
        session.begin_stress_testing().unwrap();
        let outcome = simulate_income_dip(85_000.0, DipPercent::DEFAULT, 25_000.0, None);
        session.record_scenario(outcome).unwrap();
        session.begin_confidence().unwrap();
        session.begin_final().unwrap();
        assert_eq!(session.stage(), AssessmentStage::Final);
        assert!(session.begin_final().is_err());
    }
}

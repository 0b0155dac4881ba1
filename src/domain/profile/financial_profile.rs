//! Financial profile value object and suitability score.

use serde::{Deserialize, Serialize};

use super::{IncomeStability, RiskComfort, SavingsBuffer};
use crate::domain::foundation::ValidationError;

/// Maximum suitability score a profile can reach.
pub const MAX_PROFILE_SCORE: u8 = 3;

/// The three categorical survey answers, each optional until selected.
///
/// All three answers must be present before the profile stage can
/// advance; completeness is checked by the stage controller via
/// [`FinancialProfile::missing_answers`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub income_stability: Option<IncomeStability>,
    pub savings_buffer: Option<SavingsBuffer>,
    pub risk_comfort: Option<RiskComfort>,
}

impl FinancialProfile {
    /// An empty profile with no answers selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when all three questions have been answered.
    pub fn is_complete(&self) -> bool {
        self.income_stability.is_some()
            && self.savings_buffer.is_some()
            && self.risk_comfort.is_some()
    }

    /// Field names of the unanswered questions, in question order.
    pub fn missing_answers(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.income_stability.is_none() {
            missing.push("income stability");
        }
        if self.savings_buffer.is_none() {
            missing.push("savings buffer");
        }
        if self.risk_comfort.is_none() {
            missing.push("risk comfort");
        }
        missing
    }

    /// Computes the 0-3 suitability score.
    ///
    /// +1 for stable income, +1 for a 6+ month savings buffer, +1 for
    /// comfort with risk. Only defined on complete profiles.
    ///
    /// # Errors
    ///
    /// `MissingField` naming the first unanswered question.
    pub fn score(&self) -> Result<u8, ValidationError> {
        let income = self
            .income_stability
            .ok_or_else(|| ValidationError::missing_field("income_stability"))?;
        let savings = self
            .savings_buffer
            .ok_or_else(|| ValidationError::missing_field("savings_buffer"))?;
        let risk = self
            .risk_comfort
            .ok_or_else(|| ValidationError::missing_field("risk_comfort"))?;

        let mut score = 0;
        if income == IncomeStability::Stable {
            score += 1;
        }
        if savings == SavingsBuffer::MoreThanSix {
            score += 1;
        }
        if risk == RiskComfort::Risk {
            score += 1;
        }
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(
        income: IncomeStability,
        savings: SavingsBuffer,
        risk: RiskComfort,
    ) -> FinancialProfile {
        FinancialProfile {
            income_stability: Some(income),
            savings_buffer: Some(savings),
            risk_comfort: Some(risk),
        }
    }

    #[test]
    fn empty_profile_is_incomplete() {
        let profile = FinancialProfile::new();
        assert!(!profile.is_complete());
        assert_eq!(
            profile.missing_answers(),
            vec!["income stability", "savings buffer", "risk comfort"]
        );
    }

    #[test]
    fn partially_answered_profile_names_missing_questions() {
        let profile = FinancialProfile {
            income_stability: Some(IncomeStability::Stable),
            savings_buffer: None,
            risk_comfort: Some(RiskComfort::Some),
        };
        assert!(!profile.is_complete());
        assert_eq!(profile.missing_answers(), vec!["savings buffer"]);
    }

    #[test]
    fn score_fails_on_incomplete_profile() {
        let profile = FinancialProfile::new();
        assert!(profile.score().is_err());
    }

    #[test]
    fn score_is_zero_for_least_favorable_answers() {
        let profile = complete(
            IncomeStability::Uncertain,
            SavingsBuffer::LessThanThree,
            RiskComfort::Safety,
        );
        assert_eq!(profile.score().unwrap(), 0);
    }

    #[test]
    fn score_is_three_for_most_favorable_answers() {
        let profile = complete(
            IncomeStability::Stable,
            SavingsBuffer::MoreThanSix,
            RiskComfort::Risk,
        );
        assert_eq!(profile.score().unwrap(), MAX_PROFILE_SCORE);
    }

    #[test]
    fn score_counts_each_favorable_answer_independently() {
        let profile = complete(
            IncomeStability::Stable,
            SavingsBuffer::ThreeToSix,
            RiskComfort::Risk,
        );
        assert_eq!(profile.score().unwrap(), 2);
    }

    #[test]
    fn score_is_in_range_for_every_complete_profile() {
        for income in IncomeStability::options() {
            for savings in SavingsBuffer::options() {
                for risk in RiskComfort::options() {
                    let score = complete(income, savings, risk).score().unwrap();
                    assert!(score <= MAX_PROFILE_SCORE);
                }
            }
        }
    }

    #[test]
    fn score_is_monotone_in_favorable_substitutions() {
        // Swapping any answer for the favorable one never lowers the score.
        for income in IncomeStability::options() {
            for savings in SavingsBuffer::options() {
                for risk in RiskComfort::options() {
                    let base = complete(income, savings, risk).score().unwrap();
                    let better_income = complete(IncomeStability::Stable, savings, risk)
                        .score()
                        .unwrap();
                    let better_savings = complete(income, SavingsBuffer::MoreThanSix, risk)
                        .score()
                        .unwrap();
                    let better_risk = complete(income, savings, RiskComfort::Risk)
                        .score()
                        .unwrap();
                    assert!(better_income >= base);
                    assert!(better_savings >= base);
                    assert!(better_risk >= base);
                }
            }
        }
    }
}

//! Illustrative loan variants.
//!
//! Three fixed shapes (Stable, Balanced, Stretched) derived from the
//! reference EMI and income, each capped by its EMI-to-income safety
//! ratio. Tenure and interest-type text are fixed per label; only the
//! EMI and the comfort-note wording vary with the inputs.

use serde::{Deserialize, Serialize};

use super::assumptions::{
    BALANCED_EMI_RATIO, DEFAULT_TENURE_YEARS, MAX_EMI_RATIO, SAFE_EMI_RATIO, STABLE_EMI_FACTOR,
    STABLE_TENURE_YEARS, STRETCHED_EMI_FACTOR,
};
use crate::domain::foundation::Money;

/// Profile score at or above which the reassuring comfort note is used.
pub const REASSURING_SCORE_THRESHOLD: u8 = 2;

/// The three illustrative loan shapes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantLabel {
    Stable,
    Balanced,
    Stretched,
}

impl VariantLabel {
    /// Display name of the variant.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Balanced => "Balanced",
            Self::Stretched => "Stretched",
        }
    }

    /// Fixed tenure per label, in years.
    pub fn tenure_years(&self) -> u32 {
        match self {
            Self::Stable => STABLE_TENURE_YEARS,
            Self::Balanced | Self::Stretched => DEFAULT_TENURE_YEARS,
        }
    }

    /// Fixed interest-type description per label.
    pub fn interest_type(&self) -> &'static str {
        match self {
            Self::Stable => "Fixed + floating mix",
            Self::Balanced => "Standard floating",
            Self::Stretched => "Floating",
        }
    }

    /// Risk level attributed to this shape.
    pub fn risk_level(&self) -> RiskLevel {
        match self {
            Self::Stable => RiskLevel::Low,
            Self::Balanced => RiskLevel::Medium,
            Self::Stretched => RiskLevel::High,
        }
    }

    /// Comfort note shown when the profile score clears the threshold.
    fn reassuring_note(&self) -> &'static str {
        match self {
            Self::Stable => {
                "Designed to stay comfortable even with some changes in income or expenses."
            }
            Self::Balanced => "Balances faster loan repayment with a reasonable comfort buffer.",
            Self::Stretched => "Best suited for higher risk comfort and strong savings back‑up.",
        }
    }

    /// Comfort note shown for lower profile scores.
    fn cautious_note(&self) -> &'static str {
        match self {
            Self::Stable => "Keeps room for essentials and savings before EMI each month.",
            Self::Balanced => "May feel slightly tight in some months if expenses increase.",
            Self::Stretched => "Could feel stressful if income dips or expenses rise together.",
        }
    }

    /// Selects the comfort note for the given profile score.
    pub fn comfort_note(&self, profile_score: u8) -> &'static str {
        if profile_score >= REASSURING_SCORE_THRESHOLD {
            self.reassuring_note()
        } else {
            self.cautious_note()
        }
    }

    /// All labels, in display order.
    pub fn all() -> [Self; 3] {
        [Self::Stable, Self::Balanced, Self::Stretched]
    }
}

/// Risk attributed to a loan shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// One illustrative loan shape, as presented to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanVariant {
    pub label: VariantLabel,
    pub emi: Money,
    pub tenure_years: u32,
    pub interest_type: String,
    pub risk_level: RiskLevel,
    pub comfort_note: String,
}

/// Builds the three loan variants from the reference EMI, income, and
/// profile score.
///
/// Each variant's EMI is the capped minimum of a reference-EMI multiple
/// and an income safety ratio; the variants are deliberately checked
/// independently rather than assuming a strict EMI ordering between them.
///
/// Precondition: `monthly_income > 0` (guarded upstream).
pub fn build_loan_variants(
    reference_emi: f64,
    monthly_income: f64,
    profile_score: u8,
) -> [LoanVariant; 3] {
    let emi_for = |label: VariantLabel| -> f64 {
        match label {
            VariantLabel::Stable => {
                (reference_emi * STABLE_EMI_FACTOR).min(monthly_income * SAFE_EMI_RATIO)
            }
            VariantLabel::Balanced => reference_emi.min(monthly_income * BALANCED_EMI_RATIO),
            VariantLabel::Stretched => {
                (reference_emi * STRETCHED_EMI_FACTOR).min(monthly_income * MAX_EMI_RATIO)
            }
        }
    };

    VariantLabel::all().map(|label| LoanVariant {
        label,
        emi: Money::new(emi_for(label)),
        tenure_years: label.tenure_years(),
        interest_type: label.interest_type().to_string(),
        risk_level: label.risk_level(),
        comfort_note: label.comfort_note(profile_score).to_string(),
    })
}

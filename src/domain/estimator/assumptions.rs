//! Fixed lending assumptions.
//!
//! These are illustrative constants, not user-editable configuration.
//! Every derived figure in the assessment traces back to the values here.

/// Annual interest rate assumed for the eligibility estimate.
pub const ANNUAL_INTEREST_RATE: f64 = 0.09;

/// Default tenure assumed for the eligibility estimate, in years.
pub const DEFAULT_TENURE_YEARS: u32 = 20;

/// Tenure for the Stable variant, in years.
pub const STABLE_TENURE_YEARS: u32 = 25;

/// Highest share of income considered available for an EMI.
pub const MAX_EMI_FROM_INCOME_RATIO: f64 = 0.4;

/// Reference-EMI factor applied when no EMI preference was given.
pub const NO_PREFERENCE_EMI_FACTOR: f64 = 0.85;

/// Eligibility band bounds around the estimated principal.
pub const BAND_LOW_FACTOR: f64 = 0.9;
pub const BAND_HIGH_FACTOR: f64 = 1.1;

/// EMI-to-income safety ratios per variant.
pub const SAFE_EMI_RATIO: f64 = 0.30;
pub const BALANCED_EMI_RATIO: f64 = SAFE_EMI_RATIO + 0.05;
pub const MAX_EMI_RATIO: f64 = 0.45;

/// Reference-EMI multipliers per variant.
pub const STABLE_EMI_FACTOR: f64 = 0.85;
pub const STRETCHED_EMI_FACTOR: f64 = 1.15;

/// Income-dip slider range (percent), in steps of five.
pub const DIP_MIN_PERCENT: u8 = 10;
pub const DIP_MAX_PERCENT: u8 = 40;
pub const DIP_STEP_PERCENT: u8 = 5;
pub const DIP_DEFAULT_PERCENT: u8 = 20;

/// Last-resort base EMI heuristic for the stress test when neither a loan
/// variant nor an eligibility band exists yet.
pub const FALLBACK_EMI_INCOME_RATIO: f64 = 0.35;

/// Surplus-ratio thresholds for the stress tiers (lower bound inclusive).
pub const COMFORTABLE_SURPLUS_RATIO: f64 = 0.25;
pub const CAUTION_SURPLUS_RATIO: f64 = 0.10;

/// Preferred-EMI slider shown at the initial inputs stage.
pub const EMI_SLIDER_MIN: f64 = 10_000.0;
pub const EMI_SLIDER_MAX: f64 = 150_000.0;
pub const EMI_SLIDER_STEP: f64 = 5_000.0;
pub const EMI_SLIDER_DEFAULT: f64 = 30_000.0;

/// Tolerance band applied around a stated EMI preference (±20%).
pub const EMI_PREFERENCE_TOLERANCE: f64 = 0.2;

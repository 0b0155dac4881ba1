//! Financial estimation engine.
//!
//! Pure functions that turn property value, income, preferences and the
//! profile score into an eligibility band, three illustrative loan
//! variants, and an income-dip stress outcome. No state, no I/O; every
//! function is deterministic in its inputs.

pub mod assumptions;
mod eligibility;
mod stress;
mod variants;

pub use eligibility::{estimate_eligibility_band, EligibilityBand};
pub use stress::{simulate_income_dip, DipOutcome, DipPercent, StressTier};
pub use variants::{build_loan_variants, LoanVariant, RiskLevel, VariantLabel};

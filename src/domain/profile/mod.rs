//! Financial profile module.
//!
//! Three categorical survey answers (income stability, savings buffer,
//! risk comfort) and the 0-3 suitability score derived from them.

mod answers;
mod financial_profile;

pub use answers::{IncomeStability, RiskComfort, SavingsBuffer};
pub use financial_profile::{FinancialProfile, MAX_PROFILE_SCORE};

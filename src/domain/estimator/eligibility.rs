//! Soft eligibility band estimation.

use serde::{Deserialize, Serialize};

use super::assumptions::{
    ANNUAL_INTEREST_RATE, BAND_HIGH_FACTOR, BAND_LOW_FACTOR, DEFAULT_TENURE_YEARS,
    MAX_EMI_FROM_INCOME_RATIO, NO_PREFERENCE_EMI_FACTOR,
};
use crate::domain::foundation::Money;

/// Illustrative low-high loan-amount range derived from affordable EMI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityBand {
    /// Lower bound of the illustrative loan amount.
    pub low: Money,
    /// Upper bound of the illustrative loan amount.
    pub high: Money,
    /// The affordable EMI the band was derived from.
    pub reference_emi: Money,
}

/// Estimates the soft eligibility band from income and an optional EMI
/// preference cap.
///
/// The affordable EMI is 40% of income, capped by the stated preference;
/// without a preference it is discounted to 85% of that maximum. The EMI
/// is converted to a principal with the standard amortizing-loan annuity
/// formula at the fixed 9%/20-year assumptions, and the band is ±10%
/// around that principal.
///
/// Precondition: `monthly_income > 0`. Callers validate upstream; the
/// formula is not defined for non-positive income.
pub fn estimate_eligibility_band(
    monthly_income: f64,
    preferred_emi_max: Option<f64>,
) -> EligibilityBand {
    let max_emi_from_income = monthly_income * MAX_EMI_FROM_INCOME_RATIO;
    let reference_emi = match preferred_emi_max {
        Some(cap) => max_emi_from_income.min(cap),
        None => max_emi_from_income * NO_PREFERENCE_EMI_FACTOR,
    };

    let r = ANNUAL_INTEREST_RATE / 12.0;
    let n = (DEFAULT_TENURE_YEARS * 12) as i32;
    let growth = (1.0 + r).powi(n);
    let principal = reference_emi * (growth - 1.0) / (r * growth);

    EligibilityBand {
        low: Money::new(principal * BAND_LOW_FACTOR),
        high: Money::new(principal * BAND_HIGH_FACTOR),
        reference_emi: Money::new(reference_emi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reference_emi_without_preference_is_discounted_forty_percent() {
        let band = estimate_eligibility_band(85_000.0, None);
        // 85000 * 0.4 * 0.85 = 28900
        assert!((band.reference_emi.amount() - 28_900.0).abs() < 1e-9);
    }

    #[test]
    fn reference_emi_with_preference_takes_the_lower_cap() {
        let band = estimate_eligibility_band(85_000.0, Some(20_000.0));
        assert!((band.reference_emi.amount() - 20_000.0).abs() < 1e-9);

        // A generous preference leaves the income cap binding, undiscounted.
        let band = estimate_eligibility_band(85_000.0, Some(60_000.0));
        assert!((band.reference_emi.amount() - 34_000.0).abs() < 1e-9);
    }

    #[test]
    fn principal_matches_the_annuity_formula() {
        let band = estimate_eligibility_band(85_000.0, None);
        // 28900 / (EMI per rupee at 9%/240 months) ~ 3.212 million
        let principal = band.low.amount() / 0.9;
        assert!((principal - 3_212_000.0).abs() < 2_000.0, "got {principal}");
        assert!((band.high.amount() - principal * 1.1).abs() < 1.0);
    }

    #[test]
    fn band_is_ordered_for_positive_income() {
        let band = estimate_eligibility_band(50_000.0, None);
        assert!(band.low < band.high);
    }

    proptest! {
        #[test]
        fn band_low_is_always_below_high(income in 1.0f64..10_000_000.0) {
            let band = estimate_eligibility_band(income, None);
            prop_assert!(band.low.amount() < band.high.amount());
        }

        #[test]
        fn band_grows_monotonically_with_income(
            income in 1_000.0f64..1_000_000.0,
            bump in 1.0f64..100_000.0,
        ) {
            let base = estimate_eligibility_band(income, None);
            let richer = estimate_eligibility_band(income + bump, None);
            prop_assert!(richer.reference_emi.amount() >= base.reference_emi.amount());
            prop_assert!(richer.low.amount() >= base.low.amount());
            prop_assert!(richer.high.amount() >= base.high.amount());
        }

        #[test]
        fn preference_never_raises_the_reference_emi_above_the_income_cap(
            income in 1_000.0f64..1_000_000.0,
            cap in 1.0f64..1_000_000.0,
        ) {
            let band = estimate_eligibility_band(income, Some(cap));
            prop_assert!(band.reference_emi.amount() <= income * 0.4 + 1e-9);
            prop_assert!(band.reference_emi.amount() <= cap + 1e-9);
        }
    }
}

//! Income-dip stress scenario.
//!
//! The single stress scenario in this version: reduce income by a chosen
//! percentage and evaluate the leftover surplus against the base EMI.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::assumptions::{
    CAUTION_SURPLUS_RATIO, COMFORTABLE_SURPLUS_RATIO, DIP_DEFAULT_PERCENT, DIP_MAX_PERCENT,
    DIP_MIN_PERCENT, DIP_STEP_PERCENT,
};
use crate::domain::foundation::{Money, ValidationError};
use crate::domain::profile::SavingsBuffer;

/// Validated income-dip percentage: 10-40 in steps of 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DipPercent(u8);

impl DipPercent {
    /// The slider's default position (20%).
    pub const DEFAULT: Self = Self(DIP_DEFAULT_PERCENT);

    /// Creates a DipPercent, rejecting values outside 10-40 or off the
    /// 5-point step.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(DIP_MIN_PERCENT..=DIP_MAX_PERCENT).contains(&value)
            || value % DIP_STEP_PERCENT != 0
        {
            return Err(ValidationError::out_of_range(
                "dip_percent",
                DIP_MIN_PERCENT as i32,
                DIP_MAX_PERCENT as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the percentage as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the dip as a fraction of income (0.10 to 0.40).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for DipPercent {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for DipPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Comfort tier of a stress outcome, from the surplus ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressTier {
    Comfortable,
    Caution,
    Stress,
}

impl StressTier {
    /// Derives the tier from the post-dip surplus ratio.
    ///
    /// Checked in order, first match wins; each tier's lower bound is
    /// inclusive.
    pub fn from_surplus_ratio(surplus_ratio: f64) -> Self {
        if surplus_ratio >= COMFORTABLE_SURPLUS_RATIO {
            Self::Comfortable
        } else if surplus_ratio >= CAUTION_SURPLUS_RATIO {
            Self::Caution
        } else {
            Self::Stress
        }
    }

    /// Short status label for the result pill.
    pub fn status_label(&self) -> &'static str {
        match self {
            Self::Comfortable => "Feels broadly comfortable",
            Self::Caution => "Needs some caution",
            Self::Stress => "High stress",
        }
    }

    /// Fixed explanatory sentence for the tier.
    pub fn tone_text(&self) -> &'static str {
        match self {
            Self::Comfortable => {
                "Even with this dip, you’d have a healthy buffer after EMI for living expenses and savings."
            }
            Self::Caution => {
                "You’d still manage, but you may need to be more intentional with monthly spends until income stabilises."
            }
            Self::Stress => {
                "At this dip level, the EMI could feel stressful. You might need to cut back on several areas or rely on savings."
            }
        }
    }
}

/// Result of one income-dip simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DipOutcome {
    pub dip_percent: DipPercent,
    pub base_emi: Money,
    pub income_after_dip: Money,
    pub surplus: Money,
    pub surplus_ratio: f64,
    pub tier: StressTier,
    pub months_cover: String,
}

impl DipOutcome {
    /// The tier's fixed explanatory sentence.
    pub fn tone_text(&self) -> &'static str {
        self.tier.tone_text()
    }

    /// The tier's short status label.
    pub fn status_label(&self) -> &'static str {
        self.tier.status_label()
    }
}

/// Simulates an income dip against a base EMI.
///
/// The months-cover text comes from the savings buffer alone and is
/// independent of the dip itself. If the post-dip income is not positive
/// (unreachable through the allowed dip range) the surplus ratio clamps
/// to -1.0 and the outcome is the Stress tier; NaN and infinity never
/// escape.
pub fn simulate_income_dip(
    monthly_income: f64,
    dip: DipPercent,
    base_emi: f64,
    savings_buffer: Option<SavingsBuffer>,
) -> DipOutcome {
    let income_after_dip = monthly_income * (1.0 - dip.as_fraction());
    let surplus = income_after_dip - base_emi;
    let surplus_ratio = if income_after_dip > 0.0 {
        surplus / income_after_dip
    } else {
        -1.0
    };

    DipOutcome {
        dip_percent: dip,
        base_emi: Money::new(base_emi),
        income_after_dip: Money::new(income_after_dip),
        surplus: Money::new(surplus),
        surplus_ratio,
        tier: StressTier::from_surplus_ratio(surplus_ratio),
        months_cover: SavingsBuffer::cover_text(savings_buffer).to_string(),
    }
}

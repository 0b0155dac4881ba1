//! Categorical answers for the financial profile questions.
//!
//! Each question is a closed enumeration so an invalid category is a type
//! error rather than a silent runtime mismatch. The serde tags match the
//! values the presentation layer feeds back from its option pills.

use serde::{Deserialize, Serialize};

/// How the user's income usually behaves month to month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeStability {
    /// Mostly the same every month.
    Stable,
    /// Changes a little month to month.
    Slight,
    /// Changes a lot / uncertain.
    Uncertain,
}

impl IncomeStability {
    /// User-facing option label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stable => "Mostly the same every month",
            Self::Slight => "Changes a little month to month",
            Self::Uncertain => "Changes a lot / uncertain",
        }
    }

    /// Stable value tag, matching the serde representation.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Slight => "slight",
            Self::Uncertain => "uncertain",
        }
    }

    /// All selectable options, in display order.
    pub fn options() -> [Self; 3] {
        [Self::Stable, Self::Slight, Self::Uncertain]
    }
}

/// How long the user's savings could support them if needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SavingsBuffer {
    /// Less than 3 months.
    #[serde(rename = "lt3")]
    LessThanThree,
    /// 3-6 months.
    #[serde(rename = "3to6")]
    ThreeToSix,
    /// More than 6 months.
    #[serde(rename = "gt6")]
    MoreThanSix,
}

impl SavingsBuffer {
    /// User-facing option label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LessThanThree => "Less than 3 months",
            Self::ThreeToSix => "3–6 months",
            Self::MoreThanSix => "More than 6 months",
        }
    }

    /// Months-of-runway text used in the stress scenario subtext.
    ///
    /// This is a static profile attribute, deliberately independent of the
    /// dip simulation itself.
    pub fn cover_text(buffer: Option<Self>) -> &'static str {
        match buffer {
            Some(Self::MoreThanSix) => "6+ months",
            Some(Self::ThreeToSix) => "around 3–6 months",
            _ => "less than 3 months",
        }
    }

    /// Stable value tag, matching the serde representation.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::LessThanThree => "lt3",
            Self::ThreeToSix => "3to6",
            Self::MoreThanSix => "gt6",
        }
    }

    /// All selectable options, in display order.
    pub fn options() -> [Self; 3] {
        [Self::LessThanThree, Self::ThreeToSix, Self::MoreThanSix]
    }
}

/// How the user usually handles financial ups and downs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskComfort {
    /// Prefers stability and safety.
    Safety,
    /// Okay with some fluctuation.
    Some,
    /// Comfortable taking risks.
    Risk,
}

impl RiskComfort {
    /// User-facing option label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safety => "I prefer stability and safety",
            Self::Some => "I’m okay with some fluctuation",
            Self::Risk => "I’m comfortable taking risks",
        }
    }

    /// Stable value tag, matching the serde representation.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Safety => "safety",
            Self::Some => "some",
            Self::Risk => "risk",
        }
    }

    /// All selectable options, in display order.
    pub fn options() -> [Self; 3] {
        [Self::Safety, Self::Some, Self::Risk]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_stability_serializes_to_snake_case() {
        let json = serde_json::to_string(&IncomeStability::Stable).unwrap();
        assert_eq!(json, "\"stable\"");
    }

    #[test]
    fn savings_buffer_uses_compact_tags() {
        assert_eq!(
            serde_json::to_string(&SavingsBuffer::LessThanThree).unwrap(),
            "\"lt3\""
        );
        assert_eq!(
            serde_json::to_string(&SavingsBuffer::ThreeToSix).unwrap(),
            "\"3to6\""
        );
        assert_eq!(
            serde_json::to_string(&SavingsBuffer::MoreThanSix).unwrap(),
            "\"gt6\""
        );
    }

    #[test]
    fn risk_comfort_deserializes_from_snake_case() {
        let value: RiskComfort = serde_json::from_str("\"risk\"").unwrap();
        assert_eq!(value, RiskComfort::Risk);
    }

    #[test]
    fn all_options_have_labels() {
        for opt in IncomeStability::options() {
            assert!(!opt.label().is_empty());
        }
        for opt in SavingsBuffer::options() {
            assert!(!opt.label().is_empty());
        }
        for opt in RiskComfort::options() {
            assert!(!opt.label().is_empty());
        }
    }

    #[test]
    fn tags_match_the_serde_representation() {
        for opt in IncomeStability::options() {
            let json = serde_json::to_string(&opt).unwrap();
            assert_eq!(json, format!("\"{}\"", opt.tag()));
        }
        for opt in SavingsBuffer::options() {
            let json = serde_json::to_string(&opt).unwrap();
            assert_eq!(json, format!("\"{}\"", opt.tag()));
        }
        for opt in RiskComfort::options() {
            let json = serde_json::to_string(&opt).unwrap();
            assert_eq!(json, format!("\"{}\"", opt.tag()));
        }
    }

    #[test]
    fn cover_text_depends_only_on_buffer() {
        assert_eq!(
            SavingsBuffer::cover_text(Some(SavingsBuffer::MoreThanSix)),
            "6+ months"
        );
        assert_eq!(
            SavingsBuffer::cover_text(Some(SavingsBuffer::ThreeToSix)),
            "around 3–6 months"
        );
        assert_eq!(
            SavingsBuffer::cover_text(Some(SavingsBuffer::LessThanThree)),
            "less than 3 months"
        );
        // An unanswered buffer falls back to the most conservative text.
        assert_eq!(SavingsBuffer::cover_text(None), "less than 3 months");
    }
}

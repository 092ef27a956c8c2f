//! Core types for the GTC-45 classification engine
//!
//! The three ordinal inputs are closed enums carrying the numeric magnitudes
//! the GTC 45 scales assign to them. Out-of-range integers are rejected at
//! construction; nothing downstream ever sees an unchecked value.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Allowed deficiency-level magnitudes (ND)
pub const ALLOWED_DEFICIENCY: &[i32] = &[-10, 2, 6, 10];

/// Allowed exposure-level magnitudes (NE)
pub const ALLOWED_EXPOSURE: &[i32] = &[1, 2, 3, 4];

/// Allowed consequence-level magnitudes (NC)
pub const ALLOWED_CONSEQUENCE: &[i32] = &[10, 25, 60, 100];

/// Identifies which ordinal input an [`Error::InvalidInput`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputField {
    /// Deficiency level (ND)
    #[serde(rename = "deficiency_level")]
    DeficiencyLevel,
    /// Exposure level (NE)
    #[serde(rename = "exposure_level")]
    ExposureLevel,
    /// Consequence level (NC)
    #[serde(rename = "consequence_level")]
    ConsequenceLevel,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InputField::DeficiencyLevel => "deficiency_level",
            InputField::ExposureLevel => "exposure_level",
            InputField::ConsequenceLevel => "consequence_level",
        };
        f.write_str(s)
    }
}

/// Deficiency level (ND): how inadequate the existing controls are.
///
/// GTC 45 assigns `Low` the magnitude -10 while `VeryHigh` is 10; the
/// encoding is intentionally non-monotonic relative to the label names and
/// is preserved exactly as the methodology documents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeficiencyLevel {
    /// Controls are adequate; hazard not significant (ND = -10)
    Low,
    /// Some deficiencies detectable (ND = 2)
    Medium,
    /// Significant deficiencies (ND = 6)
    High,
    /// Controls absent or ineffective (ND = 10)
    VeryHigh,
}

impl DeficiencyLevel {
    /// All variants, in scale order
    pub const ALL: [DeficiencyLevel; 4] = [
        DeficiencyLevel::Low,
        DeficiencyLevel::Medium,
        DeficiencyLevel::High,
        DeficiencyLevel::VeryHigh,
    ];

    /// Numeric magnitude used in the probability product
    pub const fn value(self) -> i32 {
        match self {
            DeficiencyLevel::Low => -10,
            DeficiencyLevel::Medium => 2,
            DeficiencyLevel::High => 6,
            DeficiencyLevel::VeryHigh => 10,
        }
    }

    /// Construct from a raw magnitude, rejecting values outside the allowed set
    pub fn from_value(value: i32) -> Result<Self> {
        match value {
            -10 => Ok(DeficiencyLevel::Low),
            2 => Ok(DeficiencyLevel::Medium),
            6 => Ok(DeficiencyLevel::High),
            10 => Ok(DeficiencyLevel::VeryHigh),
            _ => Err(Error::InvalidInput {
                field: InputField::DeficiencyLevel,
                value,
                allowed: ALLOWED_DEFICIENCY,
            }),
        }
    }
}

/// Exposure level (NE): how often and how long people face the hazard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExposureLevel {
    /// Irregular exposure (NE = 1)
    Sporadic,
    /// Some time during the shift, short periods (NE = 2)
    Occasional,
    /// Several times during the shift (NE = 3)
    Frequent,
    /// Continuous exposure through the full shift (NE = 4)
    Continuous,
}

impl ExposureLevel {
    /// All variants, in scale order
    pub const ALL: [ExposureLevel; 4] = [
        ExposureLevel::Sporadic,
        ExposureLevel::Occasional,
        ExposureLevel::Frequent,
        ExposureLevel::Continuous,
    ];

    /// Numeric magnitude used in the probability product
    pub const fn value(self) -> i32 {
        match self {
            ExposureLevel::Sporadic => 1,
            ExposureLevel::Occasional => 2,
            ExposureLevel::Frequent => 3,
            ExposureLevel::Continuous => 4,
        }
    }

    /// Construct from a raw magnitude, rejecting values outside the allowed set
    pub fn from_value(value: i32) -> Result<Self> {
        match value {
            1 => Ok(ExposureLevel::Sporadic),
            2 => Ok(ExposureLevel::Occasional),
            3 => Ok(ExposureLevel::Frequent),
            4 => Ok(ExposureLevel::Continuous),
            _ => Err(Error::InvalidInput {
                field: InputField::ExposureLevel,
                value,
                allowed: ALLOWED_EXPOSURE,
            }),
        }
    }
}

/// Consequence level (NC): worst plausible harm outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConsequenceLevel {
    /// Minor injuries, first aid only (NC = 10)
    Minor,
    /// Injuries with temporary incapacity (NC = 25)
    Moderate,
    /// Severe injuries with permanent effects (NC = 60)
    Severe,
    /// Fatality or multiple fatalities (NC = 100)
    VerySevere,
}

impl ConsequenceLevel {
    /// All variants, in scale order
    pub const ALL: [ConsequenceLevel; 4] = [
        ConsequenceLevel::Minor,
        ConsequenceLevel::Moderate,
        ConsequenceLevel::Severe,
        ConsequenceLevel::VerySevere,
    ];

    /// Numeric magnitude used in the risk product
    pub const fn value(self) -> i32 {
        match self {
            ConsequenceLevel::Minor => 10,
            ConsequenceLevel::Moderate => 25,
            ConsequenceLevel::Severe => 60,
            ConsequenceLevel::VerySevere => 100,
        }
    }

    /// Construct from a raw magnitude, rejecting values outside the allowed set
    pub fn from_value(value: i32) -> Result<Self> {
        match value {
            10 => Ok(ConsequenceLevel::Minor),
            25 => Ok(ConsequenceLevel::Moderate),
            60 => Ok(ConsequenceLevel::Severe),
            100 => Ok(ConsequenceLevel::VerySevere),
            _ => Err(Error::InvalidInput {
                field: InputField::ConsequenceLevel,
                value,
                allowed: ALLOWED_CONSEQUENCE,
            }),
        }
    }
}

/// Probability interpretation (NP bands)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProbabilityLevel {
    /// NP <= 3, including the negative products reached via ND = -10
    Low,
    /// NP 4-9
    Medium,
    /// NP 10-23
    High,
    /// NP >= 24
    #[serde(rename = "Very-High")]
    VeryHigh,
}

impl fmt::Display for ProbabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProbabilityLevel::Low => "Low",
            ProbabilityLevel::Medium => "Medium",
            ProbabilityLevel::High => "High",
            ProbabilityLevel::VeryHigh => "Very-High",
        };
        f.write_str(s)
    }
}

/// Risk interpretation (NR bands)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// NR <= 39 (intervention level IV)
    Low,
    /// NR 40-149 (intervention level III)
    Medium,
    /// NR 150-599 (intervention level II)
    High,
    /// NR >= 600 (intervention level I)
    Critical,
}

impl RiskLevel {
    /// All variants, in severity order
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        };
        f.write_str(s)
    }
}

/// GTC 45 intervention level (I is the most urgent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InterventionLevel {
    /// Critical situation, immediate intervention
    I,
    /// Correct and adopt control measures urgently
    II,
    /// Improve where possible
    III,
    /// Maintain existing control measures
    IV,
}

impl fmt::Display for InterventionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InterventionLevel::I => "I",
            InterventionLevel::II => "II",
            InterventionLevel::III => "III",
            InterventionLevel::IV => "IV",
        };
        f.write_str(s)
    }
}

/// Acceptability ruling for a classified risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Acceptability {
    /// Risk must not be accepted; intervention is mandatory
    #[serde(rename = "Not-Acceptable")]
    NotAcceptable,
    /// Acceptable only with specific controls in place
    #[serde(rename = "Conditionally-Acceptable")]
    ConditionallyAcceptable,
    /// Acceptable under periodic monitoring
    Acceptable,
}

impl fmt::Display for Acceptability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Acceptability::NotAcceptable => "Not-Acceptable",
            Acceptability::ConditionallyAcceptable => "Conditionally-Acceptable",
            Acceptability::Acceptable => "Acceptable",
        };
        f.write_str(s)
    }
}

/// Color code used by the risk matrix report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskColor {
    /// Critical risk
    Red,
    /// High risk
    Orange,
    /// Medium risk
    Yellow,
    /// Low risk
    Green,
}

/// Complete classification result for one hazard
///
/// Every field is derived from the three ordinal inputs; callers must treat
/// this as a value, never as stored truth to be edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Probability score, ND x NE
    pub probability_score: i32,

    /// Probability interpretation
    pub probability_level: ProbabilityLevel,

    /// Risk score, NP x NC
    pub risk_score: i32,

    /// Risk interpretation
    pub risk_level: RiskLevel,

    /// GTC 45 intervention level
    pub intervention_level: InterventionLevel,

    /// Acceptability ruling
    pub acceptability: Acceptability,

    /// Matrix color for reporting
    pub risk_color: RiskColor,

    /// Human-readable recommended action
    pub recommended_action: String,

    /// Mandated response timeframe
    pub response_window: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deficiency_low_is_negative_ten() {
        // The inverted Low = -10 convention is deliberate; do not "fix" it.
        assert_eq!(DeficiencyLevel::Low.value(), -10);
        assert_eq!(DeficiencyLevel::VeryHigh.value(), 10);
        assert_eq!(DeficiencyLevel::from_value(-10), Ok(DeficiencyLevel::Low));
    }

    #[test]
    fn test_from_value_rejects_out_of_set() {
        let err = DeficiencyLevel::from_value(5).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInput {
                field: InputField::DeficiencyLevel,
                value: 5,
                allowed: ALLOWED_DEFICIENCY,
            }
        );

        assert!(ExposureLevel::from_value(0).is_err());
        assert!(ConsequenceLevel::from_value(50).is_err());
    }

    #[test]
    fn test_from_value_round_trips_allowed_sets() {
        for d in DeficiencyLevel::ALL {
            assert_eq!(DeficiencyLevel::from_value(d.value()), Ok(d));
        }
        for e in ExposureLevel::ALL {
            assert_eq!(ExposureLevel::from_value(e.value()), Ok(e));
        }
        for c in ConsequenceLevel::ALL {
            assert_eq!(ConsequenceLevel::from_value(c.value()), Ok(c));
        }
    }
}

//! Risk classification operations
//!
//! The composite entry point is [`RiskClassifier::classify`]; the individual
//! steps are exposed for callers that already hold intermediate scores.

use crate::error::Result;
use crate::tables::{self, RangeTable};
use crate::types::{
    Acceptability, Classification, ConsequenceLevel, DeficiencyLevel, ExposureLevel,
    InterventionLevel, ProbabilityLevel, RiskColor, RiskLevel,
};
use tracing::{debug, warn};

/// Validate three raw ordinal magnitudes against their allowed sets.
///
/// Values come back as typed levels, never coerced; the first out-of-set
/// value aborts with an error naming the field.
pub fn validate_inputs(
    deficiency: i32,
    exposure: i32,
    consequence: i32,
) -> Result<(DeficiencyLevel, ExposureLevel, ConsequenceLevel)> {
    let d = DeficiencyLevel::from_value(deficiency)?;
    let e = ExposureLevel::from_value(exposure)?;
    let c = ConsequenceLevel::from_value(consequence)?;
    Ok((d, e, c))
}

/// Probability score: ND x NE, exact product with no clamping
pub const fn compute_probability(deficiency: DeficiencyLevel, exposure: ExposureLevel) -> i32 {
    deficiency.value() * exposure.value()
}

/// Risk score: NP x NC, exact product with no clamping
pub const fn compute_risk(probability_score: i32, consequence: ConsequenceLevel) -> i32 {
    probability_score * consequence.value()
}

/// Acceptability outcome for a risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptabilityRuling {
    /// Acceptability category
    pub acceptability: Acceptability,
    /// GTC 45 intervention level
    pub intervention_level: InterventionLevel,
    /// Matrix color for reporting
    pub color: RiskColor,
    /// Recommended action text
    pub recommended_action: &'static str,
    /// Mandated response timeframe
    pub response_window: &'static str,
}

/// Map a risk level to its acceptability ruling.
///
/// The match is exhaustive over the closed [`RiskLevel`] enum, so totality
/// holds by construction; there is no error path.
pub const fn determine_acceptability(risk_level: RiskLevel) -> AcceptabilityRuling {
    match risk_level {
        RiskLevel::Critical => AcceptabilityRuling {
            acceptability: Acceptability::NotAcceptable,
            intervention_level: InterventionLevel::I,
            color: RiskColor::Red,
            recommended_action:
                "Critical situation: suspend the activity until the risk is under control",
            response_window: "Immediate",
        },
        RiskLevel::High => AcceptabilityRuling {
            acceptability: Acceptability::NotAcceptable,
            intervention_level: InterventionLevel::II,
            color: RiskColor::Orange,
            recommended_action: "Correct urgently and adopt control measures",
            response_window: "Urgent, within a fixed short window",
        },
        RiskLevel::Medium => AcceptabilityRuling {
            acceptability: Acceptability::ConditionallyAcceptable,
            intervention_level: InterventionLevel::III,
            color: RiskColor::Yellow,
            recommended_action: "Improve controls where possible and justify acceptance",
            response_window: "Short-term improvement plan",
        },
        RiskLevel::Low => AcceptabilityRuling {
            acceptability: Acceptability::Acceptable,
            intervention_level: InterventionLevel::IV,
            color: RiskColor::Green,
            recommended_action: "Maintain existing control measures",
            response_window: "Periodic monitoring",
        },
    }
}

/// Stateless GTC 45 classifier holding the verified scale tables.
///
/// The tables are immutable after construction; the classifier can be shared
/// freely across threads and invoked concurrently without coordination.
pub struct RiskClassifier {
    probability: RangeTable<ProbabilityLevel>,
    risk: RangeTable<RiskLevel>,
}

impl RiskClassifier {
    /// Create a classifier with the standard GTC 45 scale tables.
    ///
    /// Table verification happens here; an incomplete or overlapping table
    /// fails construction rather than surfacing later as a gap error.
    pub fn new() -> Result<Self> {
        Ok(Self {
            probability: tables::probability_table()?,
            risk: tables::risk_table()?,
        })
    }

    /// Interpret a probability score against the probability scale
    pub fn interpret_probability(&self, probability_score: i32) -> Result<ProbabilityLevel> {
        self.probability.lookup(probability_score).map_err(|e| {
            warn!("Probability scale gap at score {}", probability_score);
            e
        })
    }

    /// Interpret a risk score against the risk scale
    pub fn interpret_risk(&self, risk_score: i32) -> Result<RiskLevel> {
        self.risk.lookup(risk_score).map_err(|e| {
            warn!("Risk scale gap at score {}", risk_score);
            e
        })
    }

    /// Classify a hazard from typed ordinal inputs.
    ///
    /// Pure and deterministic: the same inputs always produce the same
    /// classification, and nothing is stored between calls.
    pub fn classify(
        &self,
        deficiency: DeficiencyLevel,
        exposure: ExposureLevel,
        consequence: ConsequenceLevel,
    ) -> Result<Classification> {
        let probability_score = compute_probability(deficiency, exposure);
        let probability_level = self.interpret_probability(probability_score)?;

        let risk_score = compute_risk(probability_score, consequence);
        let risk_level = self.interpret_risk(risk_score)?;

        let ruling = determine_acceptability(risk_level);

        Ok(Classification {
            probability_score,
            probability_level,
            risk_score,
            risk_level,
            intervention_level: ruling.intervention_level,
            acceptability: ruling.acceptability,
            risk_color: ruling.color,
            recommended_action: ruling.recommended_action.to_string(),
            response_window: ruling.response_window.to_string(),
        })
    }

    /// Classify from raw ordinal magnitudes, validating them first.
    ///
    /// This is the entry point for dynamically-typed callers (the web layer);
    /// out-of-set values are rejected here, never coerced.
    pub fn classify_values(
        &self,
        deficiency: i32,
        exposure: i32,
        consequence: i32,
    ) -> Result<Classification> {
        let (d, e, c) = validate_inputs(deficiency, exposure, consequence).map_err(|err| {
            debug!("Rejected classification request: {}", err);
            err
        })?;
        self.classify(d, e, c)
    }
}

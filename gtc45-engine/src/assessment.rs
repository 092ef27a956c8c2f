//! Hazard assessment records
//!
//! Wraps a classification into the timestamped, identified record the
//! persistence and report layers consume. The assessor stores nothing;
//! assessment history is owned entirely by the caller.

use crate::classifier::RiskClassifier;
use crate::error::Result;
use crate::types::{Classification, ConsequenceLevel, DeficiencyLevel, ExposureLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Assessment result for a single hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardAssessment {
    /// Assessment ID
    pub assessment_id: Uuid,

    /// ID of the hazard being assessed
    pub hazard_id: Uuid,

    /// Deficiency level input
    pub deficiency: DeficiencyLevel,

    /// Exposure level input
    pub exposure: ExposureLevel,

    /// Consequence level input
    pub consequence: ConsequenceLevel,

    /// Derived classification
    pub classification: Classification,

    /// Assessment timestamp
    pub assessed_at: DateTime<Utc>,
}

/// Hazard assessor
pub struct HazardAssessor {
    classifier: RiskClassifier,
}

impl HazardAssessor {
    /// Create a new assessor with the standard scale tables
    pub fn new() -> Result<Self> {
        Ok(Self {
            classifier: RiskClassifier::new()?,
        })
    }

    /// Assess a hazard from typed ordinal inputs
    pub fn assess(
        &self,
        hazard_id: Uuid,
        deficiency: DeficiencyLevel,
        exposure: ExposureLevel,
        consequence: ConsequenceLevel,
    ) -> Result<HazardAssessment> {
        let classification = self.classifier.classify(deficiency, exposure, consequence)?;

        info!(
            "Hazard {} classified: NR {} ({})",
            hazard_id, classification.risk_score, classification.risk_level
        );

        Ok(HazardAssessment {
            assessment_id: Uuid::new_v4(),
            hazard_id,
            deficiency,
            exposure,
            consequence,
            classification,
            assessed_at: Utc::now(),
        })
    }

    /// Assess a hazard from raw ordinal magnitudes, validating them first
    pub fn assess_values(
        &self,
        hazard_id: Uuid,
        deficiency: i32,
        exposure: i32,
        consequence: i32,
    ) -> Result<HazardAssessment> {
        let (d, e, c) = crate::classifier::validate_inputs(deficiency, exposure, consequence)?;
        self.assess(hazard_id, d, e, c)
    }
}

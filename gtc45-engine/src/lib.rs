//! GTC-45 Risk Classification Engine
//!
//! Table-driven occupational risk scoring per the GTC 45 methodology:
//! deficiency x exposure -> probability, probability x consequence -> risk,
//! then categorical interpretation, acceptability and intervention guidance.
//!
//! The engine is stateless and pure: every classification is recomputed from
//! the three ordinal inputs, and the scale tables are immutable once built.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;
pub mod tables;
pub mod classifier;
pub mod assessment;

pub use error::{Error, Result};
pub use types::*;
pub use tables::{Band, RangeTable};
pub use classifier::{
    compute_probability, compute_risk, determine_acceptability, validate_inputs,
    AcceptabilityRuling, RiskClassifier,
};
pub use assessment::{HazardAssessment, HazardAssessor};

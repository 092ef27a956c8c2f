//! Classification scale tables
//!
//! The GTC 45 scales are expressed as ordered lists of inclusive score bands.
//! A table is verified at construction: bands must be sorted, non-overlapping
//! and contiguous, so the exhaustiveness property can be checked mechanically
//! instead of being implied by a chain of conditionals.

use crate::error::{Error, Result};
use crate::types::{ProbabilityLevel, RiskLevel};
use serde::{Deserialize, Serialize};

/// Inclusive score band mapped to a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band<L> {
    /// Lowest score in the band
    pub min: i32,
    /// Highest score in the band
    pub max: i32,
    /// Label assigned to scores in the band
    pub label: L,
}

impl<L> Band<L> {
    /// Create a band over `min..=max`
    pub const fn new(min: i32, max: i32, label: L) -> Self {
        Self { min, max, label }
    }
}

/// Ordered, gap-free set of bands over a closed score domain
#[derive(Debug, Clone)]
pub struct RangeTable<L: Copy> {
    quantity: &'static str,
    bands: Vec<Band<L>>,
}

impl<L: Copy> RangeTable<L> {
    /// Build a table, verifying band ordering, non-overlap and contiguity.
    ///
    /// `quantity` names the scored quantity ("probability", "risk") and is
    /// reported in gap errors.
    pub fn new(quantity: &'static str, bands: Vec<Band<L>>) -> Result<Self> {
        if bands.is_empty() {
            return Err(Error::InvalidTable(format!(
                "{quantity} table has no bands"
            )));
        }
        for band in &bands {
            if band.min > band.max {
                return Err(Error::InvalidTable(format!(
                    "{quantity} band {}..={} is inverted",
                    band.min, band.max
                )));
            }
        }
        for pair in bands.windows(2) {
            if pair[1].min <= pair[0].max {
                return Err(Error::InvalidTable(format!(
                    "{quantity} bands overlap or are unsorted at {}..={} / {}..={}",
                    pair[0].min, pair[0].max, pair[1].min, pair[1].max
                )));
            }
            if pair[1].min != pair[0].max + 1 {
                return Err(Error::InvalidTable(format!(
                    "{quantity} table has a gap between {} and {}",
                    pair[0].max, pair[1].min
                )));
            }
        }
        Ok(Self { quantity, bands })
    }

    /// Lowest score the table covers
    pub fn domain_min(&self) -> i32 {
        self.bands[0].min
    }

    /// Highest score the table covers
    pub fn domain_max(&self) -> i32 {
        self.bands[self.bands.len() - 1].max
    }

    /// Map a score to its band label.
    ///
    /// A score outside the covered domain is a table defect relative to the
    /// allowed input combinations and surfaces as a gap error.
    pub fn lookup(&self, score: i32) -> Result<L> {
        self.bands
            .iter()
            .find(|band| score >= band.min && score <= band.max)
            .map(|band| band.label)
            .ok_or(Error::ClassificationGap {
                quantity: self.quantity,
                score,
            })
    }
}

/// Standard GTC 45 probability scale (NP = ND x NE, domain -40..=40).
///
/// Negative products are reachable because ND "Low" carries the magnitude
/// -10; they are classified explicitly as Low rather than falling through.
pub fn probability_table() -> Result<RangeTable<ProbabilityLevel>> {
    RangeTable::new(
        "probability",
        vec![
            Band::new(-40, 3, ProbabilityLevel::Low),
            Band::new(4, 9, ProbabilityLevel::Medium),
            Band::new(10, 23, ProbabilityLevel::High),
            Band::new(24, 40, ProbabilityLevel::VeryHigh),
        ],
    )
}

/// Standard GTC 45 risk scale (NR = NP x NC, domain -4000..=4000).
///
/// Bands follow the GTC 45 intervention levels: I (>= 600), II (150-599),
/// III (40-149), IV (<= 39). Source planning documents also circulated a
/// 600/200/50 variant; the intervention-level bands are the canonical choice
/// and the exact boundaries are pinned by tests.
pub fn risk_table() -> Result<RangeTable<RiskLevel>> {
    RangeTable::new(
        "risk",
        vec![
            Band::new(-4000, 39, RiskLevel::Low),
            Band::new(40, 149, RiskLevel::Medium),
            Band::new(150, 599, RiskLevel::High),
            Band::new(600, 4000, RiskLevel::Critical),
        ],
    )
}

//! Integration tests for the GTC-45 classification engine
//!
//! Covers the worked examples from the risk-matrix documentation, the exact
//! scale boundaries, and the engine-wide properties: determinism, the product
//! law, exhaustiveness over the allowed input cross product, and monotonicity
//! over the non-negative deficiency range.

use gtc45_engine::{
    compute_probability, determine_acceptability, Acceptability, Classification,
    ConsequenceLevel, DeficiencyLevel, Error, ExposureLevel, InputField, InterventionLevel,
    ProbabilityLevel, RiskClassifier, RiskLevel,
};
use proptest::prelude::*;
use std::sync::Once;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("gtc45_engine=debug")
            .with_test_writer()
            .try_init();
    });
}

fn classifier() -> RiskClassifier {
    init_tracing();
    RiskClassifier::new().expect("standard tables must verify")
}

#[test]
fn test_worked_example_very_high_probability_critical_risk() {
    let result = classifier().classify_values(10, 4, 60).unwrap();

    assert_eq!(result.probability_score, 40);
    assert_eq!(result.probability_level, ProbabilityLevel::VeryHigh);
    assert_eq!(result.risk_score, 2400);
    assert_eq!(result.risk_level, RiskLevel::Critical);
    assert_eq!(result.acceptability, Acceptability::NotAcceptable);
}

#[test]
fn test_worked_example_boundary_600() {
    // NP 24 is the Very-High boundary; NR 600 is the Critical boundary.
    let result = classifier().classify_values(6, 4, 25).unwrap();

    assert_eq!(result.probability_score, 24);
    assert_eq!(result.probability_level, ProbabilityLevel::VeryHigh);
    assert_eq!(result.risk_score, 600);
    assert_eq!(result.risk_level, RiskLevel::Critical);
    assert_eq!(result.intervention_level, InterventionLevel::I);
}

#[test]
fn test_worked_example_high_probability() {
    let result = classifier().classify_values(6, 3, 60).unwrap();

    assert_eq!(result.probability_score, 18);
    assert_eq!(result.probability_level, ProbabilityLevel::High);
    assert_eq!(result.risk_score, 1080);
    assert_eq!(result.risk_level, RiskLevel::Critical);
    assert_eq!(result.acceptability, Acceptability::NotAcceptable);
}

#[test]
fn test_invalid_deficiency_identifies_field_and_value() {
    let err = classifier().classify_values(5, 4, 60).unwrap_err();
    match err {
        Error::InvalidInput { field, value, .. } => {
            assert_eq!(field, InputField::DeficiencyLevel);
            assert_eq!(value, 5);
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    assert!(err.to_string().contains("deficiency_level"));
    assert!(err.to_string().contains("5"));
}

#[test]
fn test_inverted_low_deficiency_convention() {
    // ND "Low" carries -10 in the source methodology. The whole chain must
    // classify the resulting negative scores explicitly.
    assert_eq!(DeficiencyLevel::Low.value(), -10);

    let result = classifier().classify_values(-10, 4, 100).unwrap();
    assert_eq!(result.probability_score, -40);
    assert_eq!(result.probability_level, ProbabilityLevel::Low);
    assert_eq!(result.risk_score, -4000);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.acceptability, Acceptability::Acceptable);
    assert_eq!(result.intervention_level, InterventionLevel::IV);
}

#[test]
fn test_exhaustive_over_allowed_cross_product() {
    let classifier = classifier();
    for d in DeficiencyLevel::ALL {
        for e in ExposureLevel::ALL {
            let np = compute_probability(d, e);
            classifier
                .interpret_probability(np)
                .unwrap_or_else(|err| panic!("gap at NP {np}: {err}"));
            for c in ConsequenceLevel::ALL {
                classifier
                    .classify(d, e, c)
                    .unwrap_or_else(|err| panic!("gap for ({d:?}, {e:?}, {c:?}): {err}"));
            }
        }
    }
}

#[test]
fn test_acceptability_totality() {
    for level in RiskLevel::ALL {
        let ruling = determine_acceptability(level);
        assert!(!ruling.recommended_action.is_empty());
    }
}

#[test]
fn test_label_serialization_matches_report_vocabulary() {
    init_tracing();
    assert_eq!(
        serde_json::to_value(ProbabilityLevel::VeryHigh).unwrap(),
        serde_json::json!("Very-High")
    );
    assert_eq!(
        serde_json::to_value(Acceptability::NotAcceptable).unwrap(),
        serde_json::json!("Not-Acceptable")
    );
    assert_eq!(
        serde_json::to_value(Acceptability::ConditionallyAcceptable).unwrap(),
        serde_json::json!("Conditionally-Acceptable")
    );

    let result = classifier().classify_values(10, 4, 60).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["probability_level"], "Very-High");
    assert_eq!(json["risk_level"], "Critical");
    assert_eq!(json["acceptability"], "Not-Acceptable");

    let round_trip: Classification = serde_json::from_value(json).unwrap();
    assert_eq!(round_trip, result);
}

fn any_deficiency() -> impl Strategy<Value = DeficiencyLevel> {
    proptest::sample::select(DeficiencyLevel::ALL.to_vec())
}

fn any_exposure() -> impl Strategy<Value = ExposureLevel> {
    proptest::sample::select(ExposureLevel::ALL.to_vec())
}

fn any_consequence() -> impl Strategy<Value = ConsequenceLevel> {
    proptest::sample::select(ConsequenceLevel::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_classify_is_deterministic(
        d in any_deficiency(),
        e in any_exposure(),
        c in any_consequence(),
    ) {
        let classifier = classifier();
        let first = classifier.classify(d, e, c).unwrap();
        let second = classifier.classify(d, e, c).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_risk_score_is_exact_product(
        d in any_deficiency(),
        e in any_exposure(),
        c in any_consequence(),
    ) {
        let result = classifier().classify(d, e, c).unwrap();
        prop_assert_eq!(result.probability_score, d.value() * e.value());
        prop_assert_eq!(result.risk_score, result.probability_score * c.value());
    }

    #[test]
    fn prop_probability_monotone_over_nonnegative_deficiency(
        e in any_exposure(),
    ) {
        // Within {2, 6, 10} a higher deficiency never lowers the probability
        // score at fixed exposure. Low (-10) is excluded: its sign is the
        // documented inversion, not part of the monotone range.
        let positives = [
            DeficiencyLevel::Medium,
            DeficiencyLevel::High,
            DeficiencyLevel::VeryHigh,
        ];
        for pair in positives.windows(2) {
            prop_assert!(
                compute_probability(pair[0], e) <= compute_probability(pair[1], e)
            );
        }
    }

    #[test]
    fn prop_out_of_set_values_rejected(
        nd in -50i32..50,
        ne in -10i32..10,
        nc in -200i32..200,
    ) {
        let classifier = classifier();
        let result = classifier.classify_values(nd, ne, nc);
        let all_valid = gtc45_engine::ALLOWED_DEFICIENCY.contains(&nd)
            && gtc45_engine::ALLOWED_EXPOSURE.contains(&ne)
            && gtc45_engine::ALLOWED_CONSEQUENCE.contains(&nc);
        prop_assert_eq!(result.is_ok(), all_valid);
    }
}

//! Tests for the classifier

use proptest::prelude::*;

use super::classify::*;
use super::constraint::{Constraint, ConstraintId, MetricType};

fn dmax(limit: f64) -> Constraint {
    Constraint {
        id: ConstraintId::new("c1"),
        site: "Thorax".into(),
        organ: "Spinal cord".into(),
        metric: MetricType::Dmax,
        param: None,
        limit,
        unit: "Gy".into(),
        note: None,
    }
}

fn pct_5() -> TolerancePolicy {
    TolerancePolicy::new(0.05).unwrap()
}

#[test]
fn test_caution_just_under_limit() {
    // 45 Gy limit, 5% band of 2.25: 44.5 technically passes but is flagged.
    let eval = classify(Some(44.5), &dmax(45.0), pct_5());
    assert_eq!(eval.status, Status::Caution);
    assert_eq!(eval.margin, Some(0.5));
}

#[test]
fn test_fail_over_limit() {
    let eval = classify(Some(46.0), &dmax(45.0), pct_5());
    assert_eq!(eval.status, Status::Fail);
    assert_eq!(eval.margin, Some(-1.0));
}

#[test]
fn test_pass_below_band() {
    let eval = classify(Some(40.0), &dmax(45.0), pct_5());
    assert_eq!(eval.status, Status::Pass);
    assert_eq!(eval.margin, Some(5.0));
}

#[test]
fn test_missing_when_absent() {
    let eval = classify(None, &dmax(45.0), pct_5());
    assert_eq!(eval.status, Status::Missing);
    assert_eq!(eval.margin, None);
}

#[test]
fn test_non_finite_measurement_is_missing() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let eval = classify(Some(bad), &dmax(45.0), pct_5());
        assert_eq!(eval.status, Status::Missing);
        assert_eq!(eval.margin, None);
    }
}

#[test]
fn test_exact_limit_is_caution() {
    let eval = classify(Some(45.0), &dmax(45.0), pct_5());
    assert_eq!(eval.status, Status::Caution);
    assert_eq!(eval.margin, Some(0.0));
}

#[test]
fn test_exact_limit_passes_with_zero_tolerance() {
    let eval = classify(Some(45.0), &dmax(45.0), TolerancePolicy::ZERO);
    assert_eq!(eval.status, Status::Pass);
    assert_eq!(eval.margin, Some(0.0));
}

#[test]
fn test_band_edge_is_caution() {
    // 45 - 2.25 = 42.75 sits on the band edge, inclusive.
    let eval = classify(Some(42.75), &dmax(45.0), pct_5());
    assert_eq!(eval.status, Status::Caution);
}

#[test]
fn test_zero_measurement_is_not_missing() {
    let eval = classify(Some(0.0), &dmax(45.0), pct_5());
    assert_eq!(eval.status, Status::Pass);
}

#[test]
fn test_negative_fraction_rejected() {
    assert!(TolerancePolicy::new(-0.01).is_err());
    assert!(TolerancePolicy::new(f64::NAN).is_err());
}

#[test]
fn test_wide_band_accepted_without_clamping() {
    // Fraction >= 1 is unusual but valid: everything under the limit is caution.
    let wide = TolerancePolicy::new(1.5).unwrap();
    let eval = classify(Some(1.0), &dmax(45.0), wide);
    assert_eq!(eval.status, Status::Caution);
}

proptest! {
    #[test]
    fn prop_below_band_passes(
        limit in -1000.0f64..1000.0,
        fraction in 0.0f64..1.0,
        slack in 0.001f64..500.0,
    ) {
        let policy = TolerancePolicy::new(fraction).unwrap();
        let measured = limit - policy.band(limit) - slack;
        prop_assume!(measured < limit - policy.band(limit));
        let eval = classify(Some(measured), &dmax(limit), policy);
        prop_assert_eq!(eval.status, Status::Pass);
    }

    #[test]
    fn prop_inside_band_cautions(
        limit in -1000.0f64..1000.0,
        fraction in 0.01f64..1.0,
        t in 0.0f64..=1.0,
    ) {
        let policy = TolerancePolicy::new(fraction).unwrap();
        let band = policy.band(limit);
        let measured = limit - band * t;
        prop_assume!(measured <= limit && measured >= limit - band);
        let eval = classify(Some(measured), &dmax(limit), policy);
        prop_assert_eq!(eval.status, Status::Caution);
    }

    #[test]
    fn prop_over_limit_fails(
        limit in -1000.0f64..1000.0,
        fraction in 0.0f64..2.0,
        excess in 0.001f64..500.0,
    ) {
        let policy = TolerancePolicy::new(fraction).unwrap();
        let eval = classify(Some(limit + excess), &dmax(limit), policy);
        prop_assert_eq!(eval.status, Status::Fail);
    }

    #[test]
    fn prop_margin_sign_matches_status(
        limit in -1000.0f64..1000.0,
        measured in -1000.0f64..1000.0,
        fraction in 0.0f64..2.0,
    ) {
        let policy = TolerancePolicy::new(fraction).unwrap();
        let eval = classify(Some(measured), &dmax(limit), policy);
        let margin = eval.margin.unwrap();
        prop_assert_eq!(margin, limit - measured);
        match eval.status {
            Status::Fail => prop_assert!(margin < 0.0),
            Status::Pass | Status::Caution => prop_assert!(margin >= 0.0),
            Status::Missing => prop_assert!(false, "finite input classified missing"),
        }
    }
}

//! Pre-built constraint lists for aggregation and report tests.

use dosecheck_core::{Constraint, ConstraintId, MetricType};

/// Thorax / Spinal cord / Dmax 45 Gy, with a fixed id.
pub fn cord(id: &str) -> Constraint {
    Constraint {
        id: ConstraintId::new(id),
        site: "Thorax".to_string(),
        organ: "Spinal cord".to_string(),
        metric: MetricType::Dmax,
        param: None,
        limit: 45.0,
        unit: "Gy".to_string(),
        note: None,
    }
}

/// Head & Neck / Brainstem / Dmax 54 Gy, with a fixed id.
pub fn brainstem(id: &str) -> Constraint {
    Constraint {
        id: ConstraintId::new(id),
        site: "Head & Neck".to_string(),
        organ: "Brainstem".to_string(),
        metric: MetricType::Dmax,
        param: None,
        limit: 54.0,
        unit: "Gy".to_string(),
        note: None,
    }
}

/// Thorax / Lung (total) / V20 <= 35%, with a fixed id.
pub fn lung_v20(id: &str) -> Constraint {
    Constraint {
        id: ConstraintId::new(id),
        site: "Thorax".to_string(),
        organ: "Lung (total)".to_string(),
        metric: MetricType::Vx,
        param: Some(20.0),
        limit: 35.0,
        unit: "%".to_string(),
        note: None,
    }
}

/// One Thorax and one Head & Neck constraint, in that order.
pub fn mixed_sites() -> Vec<Constraint> {
    vec![cord("c1"), brainstem("c2")]
}

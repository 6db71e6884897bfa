//! Seed constraint template.
//!
//! Illustrative values only; the report disclaimer tells users to replace
//! them with validated institutional constraints.

use dosecheck_core::{Constraint, IdGenerator, MetricType};

/// Builds the fixed starter set with fresh ids from `ids`.
///
/// Covers every metric type and more than one site so the filter and
/// summary surfaces have something to show on first load.
pub fn seed_constraints<G: IdGenerator>(ids: &mut G) -> Vec<Constraint> {
    let rows: [(&str, &str, MetricType, Option<f64>, f64, &str, Option<&str>); 5] = [
        ("Thorax", "Spinal cord", MetricType::Dmax, None, 45.0, "Gy", Some("QUANTEC")),
        ("Thorax", "Lung (total)", MetricType::Vx, Some(20.0), 30.0, "%", None),
        ("Thorax", "Heart", MetricType::Dmean, None, 26.0, "Gy", None),
        ("Head & Neck", "Brainstem", MetricType::Dmax, None, 54.0, "Gy", None),
        ("Head & Neck", "Parotid (contralateral)", MetricType::Dmean, None, 26.0, "Gy", Some("spare if possible")),
    ];
    rows.into_iter()
        .map(|(site, organ, metric, param, limit, unit, note)| Constraint {
            id: ids.next_id(),
            site: site.to_string(),
            organ: organ.to_string(),
            metric,
            param,
            limit,
            unit: unit.to_string(),
            note: note.map(str::to_string),
        })
        .collect()
}

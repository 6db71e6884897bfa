//! Valid constraint drafts for store tests.

use dosecheck_core::{ConstraintDraft, MetricType};

/// Thorax / Spinal cord / Dmax 45 Gy.
pub fn spinal_cord_dmax() -> ConstraintDraft {
    ConstraintDraft::new()
        .site("Thorax")
        .organ("Spinal cord")
        .metric(MetricType::Dmax)
        .limit(45.0)
        .unit("Gy")
}

/// Thorax / Lung (total) / V20 <= 30%.
pub fn lung_v20() -> ConstraintDraft {
    ConstraintDraft::new()
        .site("Thorax")
        .organ("Lung (total)")
        .metric(MetricType::Vx)
        .param(20.0)
        .limit(30.0)
        .unit("%")
}

/// Head & Neck / Parotid / Dmean 26 Gy.
pub fn parotid_dmean() -> ConstraintDraft {
    ConstraintDraft::new()
        .site("Head & Neck")
        .organ("Parotid (contralateral)")
        .metric(MetricType::Dmean)
        .limit(26.0)
        .unit("Gy")
}

//! Report exporters: canonical JSON dump and Markdown summary table.

use tracing::info;

use dosecheck_core::{classify, Constraint, DoseCheckError, Result, TolerancePolicy};
use dosecheck_store::MeasurementStore;

/// Trailing line appended once per Markdown report.
pub const DISCLAIMER: &str =
    "Educational template. Replace with validated institutional constraints before any clinical use.";

/// Cell placeholder for absent measurements and margins.
const ABSENT_GLYPH: &str = "—";

/// Serializes the full constraint list to the canonical interchange form.
///
/// Always the unfiltered list: the dump is for re-import, not display.
/// Numeric fields stay numeric and optional fields are omitted when absent,
/// so [`from_json`] round-trips to an equal list.
///
/// # Errors
///
/// Returns [`DoseCheckError::Export`] if serialization fails.
pub fn to_json(constraints: &[Constraint]) -> Result<String> {
    let json = serde_json::to_string_pretty(constraints)
        .map_err(|e| DoseCheckError::Export(e.to_string()))?;
    info!(event = "json_exported", count = constraints.len());
    Ok(json)
}

/// Parses a constraint list previously produced by [`to_json`].
///
/// # Errors
///
/// Returns [`DoseCheckError::Export`] when the input is not a valid dump.
pub fn from_json(json: &str) -> Result<Vec<Constraint>> {
    serde_json::from_str(json).map_err(|e| DoseCheckError::Export(e.to_string()))
}

/// Renders the filtered view as a Markdown table.
///
/// One row per constraint in `filtered` order, with a fixed column order:
/// site, organ, metric label, limit, measured value (or a placeholder
/// glyph), uppercase status, and the signed margin to two decimals. The
/// disclaimer is appended once at the end.
pub fn to_markdown(
    filtered: &[&Constraint],
    measurements: &MeasurementStore,
    policy: TolerancePolicy,
) -> String {
    let mut out = String::new();
    out.push_str("| Site | OAR | Metric | Limit | Measured | Status | Δ (limit–meas) |\n");
    out.push_str("| --- | --- | --- | --- | --- | --- | --- |\n");
    for constraint in filtered {
        let measured = measurements.get(&constraint.id);
        let eval = classify(measured, constraint, policy);
        let measured_cell = match measured {
            Some(v) => v.to_string(),
            None => ABSENT_GLYPH.to_string(),
        };
        let margin_cell = match eval.margin {
            Some(m) => format!("{m:.2}"),
            None => ABSENT_GLYPH.to_string(),
        };
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            constraint.site,
            constraint.organ,
            constraint.metric_label(),
            constraint.limit_label(),
            measured_cell,
            eval.status.as_str().to_uppercase(),
            margin_cell,
        ));
    }
    out.push('\n');
    out.push_str(DISCLAIMER);
    out.push('\n');
    info!(event = "markdown_rendered", rows = filtered.len());
    out
}

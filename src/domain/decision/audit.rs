//! Audit trail rendering.

use super::{Decision, FreightCriterion};
use crate::domain::analysis::TopsisRanker;

/// Renders the human-readable audit trail for `decision`.
///
/// Everything is derived from the decision itself, so the same decision
/// always renders the same text.
pub fn render_audit_trail(decision: &Decision) -> String {
    let verdict = if decision.is_consistent {
        "consistent"
    } else {
        "inconsistent, review judgments"
    };

    let mut out = String::from("FREIGHT FORWARDER DECISION AUDIT\n");
    out.push_str(&format!("Timestamp: {}\n", decision.timestamp.to_rfc3339()));
    out.push_str(&format!("Data version: {}\n", decision.data_version));
    out.push_str(&format!(
        "Consistency ratio: {:.4} ({})\n",
        decision.consistency_ratio, verdict
    ));
    out.push_str(&format!("Decision id: {}\n\n", decision.id));
    out.push_str("Criteria weights:\n");
    for criterion in FreightCriterion::ALL {
        out.push_str(&format!(
            "  {}: {:.2}%\n",
            criterion,
            decision.criteria_weights.get(criterion) * 100.0
        ));
    }
    out.push('\n');

    let criteria = decision.criteria_weights.to_criteria();
    out.push_str(&TopsisRanker::new().report(&decision.ranking, &criteria));
    out
}

//! Overlap validation between a candidate budget and existing ones.

use fedha_shared::types::BudgetId;
use tracing::debug;

use super::period::ranges_overlap;
use super::types::{Budget, ConflictResult};

/// Finds every existing budget whose active range intersects the candidate's.
///
/// `existing` must already be scoped to the candidate's owner and category;
/// no filtering on either happens here. A budget whose ID equals
/// `exclude_id` is skipped, which lets an edited budget be re-validated
/// against its stored self. Period kinds are irrelevant: a weekly and a
/// monthly budget conflict whenever their ranges intersect.
#[must_use]
pub fn check_conflict(
    candidate: &Budget,
    existing: &[Budget],
    exclude_id: Option<BudgetId>,
) -> ConflictResult {
    let candidate_range = candidate.active_range();

    let conflicts: Vec<Budget> = existing
        .iter()
        .filter(|budget| exclude_id.is_none() || budget.id != exclude_id)
        .filter(|budget| ranges_overlap(&candidate_range, &budget.active_range()))
        .cloned()
        .collect();

    debug!(
        category = %candidate.category,
        period = %candidate.period_kind,
        start = %candidate_range.start,
        end = %candidate_range.end,
        checked = existing.len(),
        conflicts = conflicts.len(),
        "Budget conflict check"
    );

    ConflictResult::from_conflicts(conflicts)
}

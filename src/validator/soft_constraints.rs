//! Independent recomputation of the soft-cost score (spec.md §4.6),
//! grounded in the teacher's `validator/soft_constraints.rs::calculate_soft_scores`
//! pattern of scoring a finished schedule against its input.

use crate::soft_cost::compute_soft_cost;
use crate::types::{CspResult, ScheduleConfig, TimeSlot};
use crate::validator::SoftScore;

/// Recomputes the soft cost from scratch and reports it alongside the
/// value the solver itself recorded, so a mismatch between the two is
/// visible as a score rather than silently trusted.
pub fn score_soft_cost(result: &CspResult, slots: &[TimeSlot], cfg: &ScheduleConfig) -> SoftScore {
    let recomputed = compute_soft_cost(&result.assignments, slots, cfg);
    SoftScore {
        constraint: "SoftCost".to_string(),
        reported: result.soft_cost,
        recomputed,
        matches: recomputed == result.soft_cost,
    }
}

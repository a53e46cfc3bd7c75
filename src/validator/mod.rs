//! Result validation (spec.md §8 "Universal invariants"), adapted from
//! the teacher's `validator/mod.rs::validate_schedule` — an independent
//! pass over a finished `CspResult` that re-derives every invariant the
//! solver claims to uphold instead of trusting its own bookkeeping.

mod hard_constraints;
mod soft_constraints;

pub use hard_constraints::*;
pub use soft_constraints::*;

use crate::domain::Domain;
use crate::types::{CspResult, ScheduleConfig, SessionVariable, TimeSlot};

/// A violated invariant found during result validation.
#[derive(Debug, Clone)]
pub struct Violation {
    pub constraint: String,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

/// The soft-cost score as independently recomputed against the reported
/// value on `CspResult`.
#[derive(Debug, Clone)]
pub struct SoftScore {
    pub constraint: String,
    pub reported: i64,
    pub recomputed: i64,
    pub matches: bool,
}

/// Counts relevant to judging a result, independent of validity.
#[derive(Debug, Clone)]
pub struct ResultStatistics {
    pub total_variables: usize,
    pub total_assigned: usize,
    pub reported_hard_violations: u32,
    pub solve_seconds: f64,
}

/// The outcome of validating a `CspResult` against its originating
/// variables/domains.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
    pub soft_score: SoftScore,
    pub statistics: ResultStatistics,
}

/// Re-derives spec.md §8's universal invariants over a finished result:
/// no two assignments conflict, course-professor consistency holds, every
/// assignment is a genuine member of its variable's domain, and the
/// reported soft cost matches an independent recomputation. A successful
/// `CspResult` that fails this check points at a solver bug, not a data
/// problem.
pub fn validate_result(
    variables: &[SessionVariable],
    domains: &[Domain],
    result: &CspResult,
    slots: &[TimeSlot],
    cfg: &ScheduleConfig,
) -> ValidationReport {
    let mut violations = Vec::new();

    if result.success && result.assignments.len() != variables.len() {
        violations.push(Violation {
            constraint: "CompleteAssignment".to_string(),
            message: format!(
                "success=true but {} of {} variables are assigned",
                result.assignments.len(),
                variables.len()
            ),
            severity: Severity::Error,
        });
    }

    violations.extend(check_pairwise_conflicts(variables, result, slots));
    violations.extend(check_course_professor_consistency(variables, result));
    violations.extend(check_domain_membership(variables, domains, result));

    let soft_score = score_soft_cost(result, slots, cfg);

    let statistics = ResultStatistics {
        total_variables: variables.len(),
        total_assigned: result.assignments.len(),
        reported_hard_violations: result.hard_violations,
        solve_seconds: result.solve_seconds,
    };

    ValidationReport {
        is_valid: violations.iter().all(|v| v.severity != Severity::Error),
        violations,
        soft_score,
        statistics,
    }
}

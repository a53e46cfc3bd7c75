//! Hard-constraint invariant checks (spec.md §8 "Universal invariants"),
//! replaying the Conflict Oracle and the course-professor consistency
//! rule over a finished `CspResult` as an independent audit of the
//! solver's own bookkeeping.

use crate::conflict::is_hard_conflict;
use crate::types::{CspResult, SessionType, SessionVariable, TimeSlot};
use crate::validator::{Severity, Violation};
use std::collections::HashMap;

/// Re-checks every pair of assigned variables against the Conflict Oracle.
/// A non-empty result here means the solver produced an internally
/// inconsistent assignment — spec.md §8 invariant (ii).
pub fn check_pairwise_conflicts(
    variables: &[SessionVariable],
    result: &CspResult,
    slots: &[TimeSlot],
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let assigned: Vec<&SessionVariable> = variables
        .iter()
        .filter(|v| result.assignments.contains_key(&v.var_id))
        .collect();

    for i in 0..assigned.len() {
        for j in (i + 1)..assigned.len() {
            let var_a = assigned[i];
            let var_b = assigned[j];
            let a = &result.assignments[&var_a.var_id];
            let b = &result.assignments[&var_b.var_id];
            if is_hard_conflict(a, b, var_a, var_b, slots) {
                violations.push(Violation {
                    constraint: "ConflictOracle".to_string(),
                    message: format!(
                        "'{}' and '{}' hold conflicting resources at overlapping times",
                        var_a.var_id, var_b.var_id
                    ),
                    severity: Severity::Error,
                });
            }
        }
    }

    violations
}

/// Checks that every LECTURE session of the same course shares one
/// `staff_id` (spec.md §8 invariant (iii)).
pub fn check_course_professor_consistency(
    variables: &[SessionVariable],
    result: &CspResult,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut staff_by_course: HashMap<&str, &crate::types::StaffId> = HashMap::new();

    for var in variables {
        if var.session_type != SessionType::Lecture {
            continue;
        }
        let Some(assignment) = result.assignments.get(&var.var_id) else {
            continue;
        };
        match staff_by_course.get(var.course_id.0.as_str()) {
            Some(existing) if *existing != &assignment.staff_id => {
                violations.push(Violation {
                    constraint: "CourseProfessorConsistency".to_string(),
                    message: format!(
                        "Course '{}' has LECTURE sessions split across staff '{}' and '{}'",
                        var.course_id, existing, assignment.staff_id
                    ),
                    severity: Severity::Error,
                });
            }
            Some(_) => {}
            None => {
                staff_by_course.insert(var.course_id.0.as_str(), &assignment.staff_id);
            }
        }
    }

    violations
}

/// Checks that every assigned value was actually a member of its
/// variable's domain (spec.md §8 invariant (iv)).
pub fn check_domain_membership(
    variables: &[SessionVariable],
    domains: &[crate::domain::Domain],
    result: &CspResult,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (var, domain) in variables.iter().zip(domains.iter()) {
        let Some(assignment) = result.assignments.get(&var.var_id) else {
            continue;
        };
        if !domain.contains(assignment) {
            violations.push(Violation {
                constraint: "DomainMembership".to_string(),
                message: format!("'{}' was assigned a value outside its own domain", var.var_id),
                severity: Severity::Error,
            });
        }
    }
    violations
}

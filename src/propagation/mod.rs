//! Alternative Propagation Formulation (spec.md §4.5), grounded in the
//! teacher's `good_lp`-based ILP idiom (`scheduler/ilp_solver.rs`) but
//! modeling the boolean clause families spec.md describes rather than
//! the teacher's student-assignment objective:
//!
//! 1. Exactly-one candidate per session.
//! 2. At-most-one session per `(room, slot)`, full-day expanded to all
//!    of its occupied slots.
//! 3. At-most-one session per `(staff, slot)`, same expansion.
//! 4. At-most-one session per `(section, slot)` — a section is affected
//!    by its own tutorial/lab assignments and by lecture/grad-project/
//!    whole-group-lab assignments for its group.
//!
//! This is a drop-in alternative to the backtracking solver: the two
//! formulations must agree on feasibility (spec.md §4.5), but the
//! backtracking solver remains normative.

use crate::domain::Domain;
use crate::types::{AssignmentValue, CspResult, ScheduleConfig, SessionVariable, TimeSlot, VarId};
use good_lp::{constraint, variable, variables, Expression, Solution, SolverModel};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::Instant;

/// The slots (`TimeSlot` indices) one `(variable, candidate)` pair
/// occupies once committed.
fn occupied_slots(var: &SessionVariable, cand: &AssignmentValue, cfg: &ScheduleConfig) -> Vec<usize> {
    if var.is_full_day {
        (cand.timeslot_index..cand.timeslot_index + cfg.full_day_slot_count).collect()
    } else if var.needs_consecutive_pair {
        vec![cand.timeslot_index, cand.timeslot_index + 1]
    } else {
        vec![cand.timeslot_index]
    }
}

/// Section keys a variable affects: its own `(year, group, section)` if
/// it's section-scoped, or every section of its group if it's a
/// group-wide session (lecture, grad project, or a whole-group lab).
fn affected_sections(
    var: &SessionVariable,
    sections_by_group: &HashMap<(i32, i32), BTreeSet<i32>>,
) -> Vec<(i32, i32, i32)> {
    if var.group_id == 0 {
        return Vec::new();
    }
    if var.section_id > 0 {
        return vec![(var.year, var.group_id, var.section_id)];
    }
    match sections_by_group.get(&(var.year, var.group_id)) {
        Some(sections) if !sections.is_empty() => sections
            .iter()
            .map(|&s| (var.year, var.group_id, s))
            .collect(),
        _ => vec![(var.year, var.group_id, 0)],
    }
}

pub fn solve(
    variables: &[SessionVariable],
    domains: &[Domain],
    slots: &[TimeSlot],
    cfg: &ScheduleConfig,
) -> CspResult {
    let start = Instant::now();

    if variables.iter().zip(domains).any(|(_, d)| d.is_empty()) {
        return CspResult::failure(1, start.elapsed().as_secs_f64());
    }

    let mut sections_by_group: HashMap<(i32, i32), BTreeSet<i32>> = HashMap::new();
    for v in variables {
        if v.group_id > 0 && v.section_id > 0 {
            sections_by_group
                .entry((v.year, v.group_id))
                .or_default()
                .insert(v.section_id);
        }
    }

    let mut vars = variables!();
    let mut x: BTreeMap<(usize, usize), _> = BTreeMap::new();

    for (vi, dom) in domains.iter().enumerate() {
        for (ci, _) in dom.iter().enumerate() {
            x.insert((vi, ci), vars.add(variable().binary()));
        }
    }

    let objective = Expression::default();
    let mut problem = vars.minimise(objective).using(good_lp::solvers::highs::highs);

    for (vi, dom) in domains.iter().enumerate() {
        let sum: Expression = (0..dom.len())
            .filter_map(|ci| x.get(&(vi, ci)).copied())
            .map(Expression::from)
            .sum();
        problem = problem.with(constraint!(sum == 1));
    }

    let mut by_room_slot: HashMap<(&str, usize), Vec<Expression>> = HashMap::new();
    let mut by_staff_slot: HashMap<(&str, usize), Vec<Expression>> = HashMap::new();
    let mut by_section_slot: HashMap<(i32, i32, i32, usize), Vec<Expression>> = HashMap::new();

    for (vi, (var, dom)) in variables.iter().zip(domains).enumerate() {
        let sections = affected_sections(var, &sections_by_group);
        for (ci, cand) in dom.iter().enumerate() {
            let Some(&v) = x.get(&(vi, ci)) else { continue };
            for slot in occupied_slots(var, cand, cfg) {
                by_room_slot
                    .entry((cand.room_id.0.as_str(), slot))
                    .or_default()
                    .push(Expression::from(v));
                by_staff_slot
                    .entry((cand.staff_id.0.as_str(), slot))
                    .or_default()
                    .push(Expression::from(v));
                for &key in &sections {
                    by_section_slot
                        .entry((key.0, key.1, key.2, slot))
                        .or_default()
                        .push(Expression::from(v));
                }
            }
        }
    }

    for exprs in by_room_slot.into_values() {
        if exprs.len() > 1 {
            let sum: Expression = exprs.into_iter().sum();
            problem = problem.with(constraint!(sum <= 1));
        }
    }
    for exprs in by_staff_slot.into_values() {
        if exprs.len() > 1 {
            let sum: Expression = exprs.into_iter().sum();
            problem = problem.with(constraint!(sum <= 1));
        }
    }
    for exprs in by_section_slot.into_values() {
        if exprs.len() > 1 {
            let sum: Expression = exprs.into_iter().sum();
            problem = problem.with(constraint!(sum <= 1));
        }
    }

    let solution = match problem.solve() {
        Ok(s) => s,
        Err(_) => return CspResult::failure(1, start.elapsed().as_secs_f64()),
    };

    let mut assignments: HashMap<VarId, AssignmentValue> = HashMap::new();
    for (vi, var) in variables.iter().enumerate() {
        let dom = &domains[vi];
        for (ci, cand) in dom.iter().enumerate() {
            if let Some(&v) = x.get(&(vi, ci)) {
                if solution.value(v) > 0.5 {
                    assignments.insert(var.var_id.clone(), cand.clone());
                    break;
                }
            }
        }
    }

    let success = assignments.len() == variables.len();
    let solve_seconds = start.elapsed().as_secs_f64();

    if !success {
        return CspResult {
            success: false,
            assignments: HashMap::new(),
            hard_violations: 1,
            soft_cost: 0,
            solve_seconds,
        };
    }

    let soft_cost = crate::soft_cost::compute_soft_cost(&assignments, slots, cfg);

    CspResult {
        success: true,
        assignments,
        hard_violations: 0,
        soft_cost,
        solve_seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CourseId, RoomId, SessionType, StaffId};

    fn lecture_var(id: &str, course: &str, group: i32) -> SessionVariable {
        SessionVariable {
            var_id: VarId(id.into()),
            course_id: CourseId::from(course),
            year: 1,
            group_id: group,
            section_id: 0,
            specialization: String::new(),
            session_type: SessionType::Lecture,
            length_min: 90,
            is_full_day: false,
            needs_consecutive_pair: false,
        }
    }

    fn domain(slots: usize, room: &str, staff: &str) -> Domain {
        (0..slots)
            .map(|i| AssignmentValue {
                timeslot_index: i,
                room_id: RoomId::from(room),
                staff_id: StaffId::from(staff),
            })
            .collect()
    }

    #[test]
    fn affected_sections_for_group_wide_session_covers_all_known_sections() {
        let mut sections_by_group = HashMap::new();
        sections_by_group.insert((1, 1), BTreeSet::from([1, 2, 3]));
        let var = lecture_var("C1_Y1_G1_LEC", "C1", 1);
        let affected = affected_sections(&var, &sections_by_group);
        assert_eq!(affected.len(), 3);
    }

    #[test]
    fn section_scoped_variable_affects_only_its_own_section() {
        let sections_by_group = HashMap::new();
        let mut var = lecture_var("C1_Y1_G1_S2_LAB", "C1", 1);
        var.session_type = SessionType::Lab;
        var.section_id = 2;
        let affected = affected_sections(&var, &sections_by_group);
        assert_eq!(affected, vec![(1, 1, 2)]);
    }

    #[test]
    fn two_disjoint_sessions_with_disjoint_rooms_and_staff_are_feasible() {
        let variables = vec![
            lecture_var("C1_Y1_G1_LEC", "C1", 1),
            lecture_var("C2_Y1_G2_LEC", "C2", 2),
        ];
        let domains = vec![domain(2, "R1", "P1"), domain(2, "R2", "P2")];
        let slots: Vec<TimeSlot> = (0..2)
            .map(|i| TimeSlot {
                id: i,
                day: "Sunday".into(),
                start_min: 540 + i * 90,
                end_min: 630 + i * 90,
            })
            .collect();
        let cfg = ScheduleConfig::default();
        let result = solve(&variables, &domains, &slots, &cfg);
        assert!(result.success);
        assert_eq!(result.assignments.len(), 2);
    }

    #[test]
    fn empty_domain_is_infeasible_up_front() {
        let variables = vec![lecture_var("C1_Y1_G1_LEC", "C1", 1)];
        let domains = vec![Vec::new()];
        let cfg = ScheduleConfig::default();
        let result = solve(&variables, &domains, &[], &cfg);
        assert!(!result.success);
        assert_eq!(result.hard_violations, 1);
    }
}

//! Backtracking Solver (spec.md §4.4), grounded in
//! `original_source/solver/csp_solver.py::backtrack_search`/`dfs`.
//!
//! MRV variable ordering plus forward checking, with an undo log so
//! domain pruning rolls back cleanly on backtrack, and a
//! `course_professor` map enforcing that every LECTURE session of a
//! course shares one instructor across the whole schedule.

use crate::conflict::is_hard_conflict;
use crate::domain::Domain;
use crate::solver::control::SolveControl;
use crate::types::{AssignmentValue, CourseId, CspResult, ScheduleConfig, SessionVariable, StaffId, TimeSlot, VarId};
use std::collections::HashMap;
use std::time::Instant;

pub fn solve(
    variables: &[SessionVariable],
    domains: &[Domain],
    slots: &[TimeSlot],
    cfg: &ScheduleConfig,
    control: &SolveControl,
) -> CspResult {
    let start = Instant::now();

    if let Some(_empty_var) = variables.iter().zip(domains).find(|(_, d)| d.is_empty()) {
        return CspResult::failure(1, start.elapsed().as_secs_f64());
    }

    let var_index: HashMap<VarId, usize> = variables
        .iter()
        .enumerate()
        .map(|(i, v)| (v.var_id.clone(), i))
        .collect();

    let mut doms: Vec<Domain> = domains.to_vec();
    let mut assignments: HashMap<VarId, AssignmentValue> = HashMap::new();
    let mut course_professor: HashMap<CourseId, StaffId> = HashMap::new();

    let found = dfs(
        variables,
        slots,
        control,
        &var_index,
        &mut doms,
        &mut assignments,
        &mut course_professor,
    );

    let solve_seconds = start.elapsed().as_secs_f64();

    if !found {
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

#[allow(clippy::too_many_arguments)]
fn dfs(
    variables: &[SessionVariable],
    slots: &[TimeSlot],
    control: &SolveControl,
    var_index: &HashMap<VarId, usize>,
    doms: &mut Vec<Domain>,
    assignments: &mut HashMap<VarId, AssignmentValue>,
    course_professor: &mut HashMap<CourseId, StaffId>,
) -> bool {
    if control.is_cancelled() {
        return false;
    }

    if assignments.len() == variables.len() {
        return true;
    }

    let chosen = variables
        .iter()
        .enumerate()
        .filter(|(_, v)| !assignments.contains_key(&v.var_id))
        .min_by_key(|(i, _)| doms[*i].len())
        .map(|(i, _)| i);

    let Some(chosen) = chosen else {
        return false;
    };

    let chosen_var = &variables[chosen];
    let candidates = doms[chosen].clone();

    for val in candidates {
        if chosen_var.is_lecture() {
            if let Some(pinned) = course_professor.get(&chosen_var.course_id) {
                if *pinned != val.staff_id {
                    continue;
                }
            }
        }

        let conflict = assignments.iter().any(|(var_id, assigned_val)| {
            let other_idx = var_index[var_id];
            is_hard_conflict(&val, assigned_val, chosen_var, &variables[other_idx], slots)
        });
        if conflict {
            continue;
        }

        assignments.insert(chosen_var.var_id.clone(), val.clone());
        if chosen_var.is_lecture() {
            course_professor.insert(chosen_var.course_id.clone(), val.staff_id.clone());
        }

        let mut changed: Vec<(usize, Domain)> = Vec::new();
        for (j, other_var) in variables.iter().enumerate() {
            if assignments.contains_key(&other_var.var_id) {
                continue;
            }
            let old_dom = &doms[j];
            let new_dom: Domain = old_dom
                .iter()
                .filter(|cand| {
                    if is_hard_conflict(&val, cand, chosen_var, other_var, slots) {
                        return false;
                    }
                    if other_var.is_lecture() {
                        if let Some(pinned) = course_professor.get(&other_var.course_id) {
                            if *pinned != cand.staff_id {
                                return false;
                            }
                        }
                    }
                    true
                })
                .cloned()
                .collect();

            if new_dom.len() != old_dom.len() {
                changed.push((j, old_dom.clone()));
                doms[j] = new_dom;
            }
        }

        let any_empty = variables
            .iter()
            .enumerate()
            .any(|(j, v)| !assignments.contains_key(&v.var_id) && doms[j].is_empty());

        if !any_empty && dfs(variables, slots, control, var_index, doms, assignments, course_professor) {
            return true;
        }

        for (j, old_dom) in changed {
            doms[j] = old_dom;
        }

        assignments.remove(&chosen_var.var_id);
        if chosen_var.is_lecture() {
            let other_lecture_assigned = assignments.keys().any(|var_id| {
                let v = &variables[var_index[var_id]];
                v.course_id == chosen_var.course_id && v.is_lecture()
            });
            if !other_lecture_assigned {
                course_professor.remove(&chosen_var.course_id);
            }
        }
    }

    false
}

//! Soft-Cost Accountant (spec.md §4.6), grounded in
//! `original_source/solver/csp_solver.py::compute_soft_cost`.
//!
//! Two penalties, weighted by `ScheduleConfig`: every session landing on
//! the day's earliest slot costs `earliest_start_weight`, and every
//! repeat of the same course on the same day beyond the first costs
//! `repeat_day_weight` per repeat. The course id is recovered from a
//! `var_id` by truncating at the first `"_Y"` marker, matching the
//! original string convention.

use crate::types::{AssignmentValue, ScheduleConfig, TimeSlot, VarId};
use std::collections::HashMap;

pub fn compute_soft_cost(
    assignments: &HashMap<VarId, AssignmentValue>,
    slots: &[TimeSlot],
    cfg: &ScheduleConfig,
) -> i64 {
    if slots.is_empty() {
        return 0;
    }

    let earliest_start_min = slots.iter().map(|s| s.start_min).min().unwrap();
    let mut cost: i64 = 0;

    for val in assignments.values() {
        if slots[val.timeslot_index].start_min == earliest_start_min {
            cost += cfg.earliest_start_weight;
        }
    }

    let mut course_day_count: HashMap<&str, HashMap<&str, i64>> = HashMap::new();
    for (var_id, val) in assignments {
        let course_id = course_prefix(&var_id.0);
        let day = slots[val.timeslot_index].day.as_str();
        *course_day_count
            .entry(course_id)
            .or_default()
            .entry(day)
            .or_insert(0) += 1;
    }

    for days in course_day_count.values() {
        for count in days.values() {
            if *count > 1 {
                cost += (count - 1) * cfg.repeat_day_weight;
            }
        }
    }

    cost
}

fn course_prefix(var_id: &str) -> &str {
    match var_id.find("_Y") {
        Some(pos) => &var_id[..pos],
        None => var_id,
    }
}

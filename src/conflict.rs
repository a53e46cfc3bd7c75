//! Conflict Oracle (spec.md §4.3), grounded in
//! `original_source/solver/csp_solver.py::is_hard_conflict`.
//!
//! Pure, side-effect-free predicate: given two candidate assignments and
//! the variables they belong to, decide whether committing both at once
//! would violate a hard constraint. The solver calls this once per
//! assignment-pair during both the initial placement check and forward
//! checking; it never inspects solver state itself.

use crate::types::{AssignmentValue, SessionType, SessionVariable, TimeSlot};

/// The end-of-interval minute a committed assignment occupies: the end of
/// the next slot for a doubled (consecutive-pair) session, otherwise the
/// end of its own slot (spec.md §4.3 point 2, "doubled sessions").
fn effective_end_min(var: &SessionVariable, val: &AssignmentValue, slots: &[TimeSlot]) -> i32 {
    if var.needs_consecutive_pair {
        slots[val.timeslot_index + 1].end_min
    } else {
        slots[val.timeslot_index].end_min
    }
}

/// True iff assigning `a` to `var_a` and `b` to `var_b` at the same time
/// cannot both hold.
pub fn is_hard_conflict(
    a: &AssignmentValue,
    b: &AssignmentValue,
    var_a: &SessionVariable,
    var_b: &SessionVariable,
    slots: &[TimeSlot],
) -> bool {
    let ts_a = &slots[a.timeslot_index];
    let ts_b = &slots[b.timeslot_index];

    if ts_a.day != ts_b.day {
        return false;
    }

    let end_a = effective_end_min(var_a, a, slots);
    let end_b = effective_end_min(var_b, b, slots);

    let time_overlap = var_a.is_full_day
        || var_b.is_full_day
        || !(end_a <= ts_b.start_min || end_b <= ts_a.start_min);

    if !time_overlap {
        return false;
    }

    if a.staff_id == b.staff_id {
        return true;
    }

    if a.room_id == b.room_id {
        return true;
    }

    if var_a.group_id > 0 && var_b.group_id > 0 && var_a.year == var_b.year && var_a.group_id == var_b.group_id {
        let lab_section_split = var_a.session_type == SessionType::Lab
            && var_b.session_type == SessionType::Lab
            && var_a.section_id != var_b.section_id;
        if !lab_section_split {
            return true;
        }
    }

    if !var_a.specialization.is_empty()
        && !var_b.specialization.is_empty()
        && var_a.year == var_b.year
        && var_a.specialization == var_b.specialization
    {
        return true;
    }

    if var_a.course_id == var_b.course_id
        && var_a.session_type == SessionType::Lecture
        && var_b.session_type == SessionType::Lecture
        && a.staff_id != b.staff_id
    {
        return true;
    }

    false
}

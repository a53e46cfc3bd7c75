//! Input validation (spec.md §7 "InputError"), adapted from the teacher's
//! `parser/validation.rs::validate_input`.
//!
//! Checked up front, before the Catalog Indexer runs: duplicate ids within
//! each catalog table, and instructor-course join rows that reference a
//! course id absent from the course catalog. Passing validation does not
//! guarantee a feasible solve — it only guarantees `build()` won't choke
//! on malformed input.

use crate::types::ScheduleInput;
use std::collections::HashSet;

/// Collected validation errors and warnings. Unlike `TimetableError`, this
/// accumulates everything found in one pass instead of failing on the
/// first problem, matching the teacher's `ValidationResult`.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }
}

/// Validates a `ScheduleInput`. Returns `Err` (an aggregated `InputError`
/// message) if any hard validation rule fails; warnings never fail the
/// call.
pub fn validate_input(input: &ScheduleInput) -> crate::Result<ValidationResult> {
    let mut result = ValidationResult::default();

    let course_ids: HashSet<&str> = input.courses.iter().map(|c| c.id.0.as_str()).collect();

    check_duplicate_course_ids(input, &mut result);
    check_duplicate_staff_ids(input, &mut result);
    check_duplicate_room_ids(input, &mut result);
    check_duplicate_time_slot_ids(input, &mut result);

    for join in &input.staff_courses {
        if !course_ids.contains(join.course_id.0.as_str()) {
            result.add_error(format!(
                "Instructor-course join references unknown course '{}'",
                join.course_id
            ));
        }
    }

    for staff in &input.staff {
        for course_id in &staff.qualified_courses {
            if !course_ids.contains(course_id.0.as_str()) {
                result.add_error(format!(
                    "Staff '{}' qualified_courses references unknown course '{}'",
                    staff.id, course_id
                ));
            }
        }
    }

    for course in &input.courses {
        if !course.in_supported_year_range() {
            result.add_warning(format!(
                "Course '{}' has an out-of-range year: {}",
                course.id, course.year
            ));
        }
    }

    if !result.is_valid() {
        return Err(anyhow::anyhow!(
            "Input validation failed with {} errors:\n{}",
            result.errors.len(),
            result.errors.join("\n")
        ));
    }

    Ok(result)
}

fn check_duplicate_course_ids(input: &ScheduleInput, result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for course in &input.courses {
        if !seen.insert(&course.id) {
            result.add_error(format!("Duplicate course ID: '{}'", course.id));
        }
    }
}

fn check_duplicate_staff_ids(input: &ScheduleInput, result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for staff in &input.staff {
        if !seen.insert(&staff.id) {
            result.add_error(format!("Duplicate staff ID: '{}'", staff.id));
        }
    }
}

fn check_duplicate_room_ids(input: &ScheduleInput, result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for room in &input.rooms {
        if !seen.insert(&room.id) {
            result.add_error(format!("Duplicate room ID: '{}'", room.id));
        }
    }
}

fn check_duplicate_time_slot_ids(input: &ScheduleInput, result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for slot in &input.time_slots {
        if !seen.insert(slot.id) {
            result.add_error(format!("Duplicate time slot ID: '{}'", slot.id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Course, CourseId, Role, Room, RoomId, RoomType, ScheduleConfig, Staff, StaffCourse,
        StaffId, TimeSlot,
    };

    fn valid_input() -> ScheduleInput {
        ScheduleInput {
            courses: vec![Course {
                id: CourseId::from("CSC111"),
                name: "Intro".into(),
                credits: 3,
                kind: "core".into(),
                year: 1,
                specialization: "".into(),
                has_lecture: true,
                has_lab: false,
                is_grad_project: false,
                lec_count: 0,
                tut_count: 0,
                lab_count: 0,
            }],
            staff: vec![Staff {
                id: StaffId::from("P1"),
                name: "Dr. A".into(),
                role: Role::Professor,
                qualified_courses: vec![],
            }],
            staff_courses: vec![StaffCourse {
                staff_id: StaffId::from("P1"),
                course_id: CourseId::from("CSC111"),
            }],
            rooms: vec![Room {
                id: RoomId::from("R1"),
                building: "B".into(),
                name: "R1".into(),
                capacity: 50,
                kind: RoomType::Classroom,
            }],
            time_slots: vec![TimeSlot {
                id: 0,
                day: "Sunday".into(),
                start_min: 540,
                end_min: 630,
            }],
            group_rosters: vec![],
            config: ScheduleConfig::default(),
        }
    }

    #[test]
    fn well_formed_input_passes() {
        assert!(validate_input(&valid_input()).unwrap().is_valid());
    }

    #[test]
    fn unknown_course_in_join_table_fails() {
        let mut input = valid_input();
        input.staff_courses[0].course_id = CourseId::from("GHOST");
        assert!(validate_input(&input).is_err());
    }

    #[test]
    fn duplicate_room_id_fails() {
        let mut input = valid_input();
        let dup = input.rooms[0].clone();
        input.rooms.push(dup);
        assert!(validate_input(&input).is_err());
    }
}

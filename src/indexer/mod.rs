//! Catalog Indexer (spec.md §2, §4 "Catalog Indexer").
//!
//! Builds the lookup tables the rest of the pipeline needs: course→id,
//! course→qualified-staff (with the comma-delimited fallback parser),
//! slot→day, day→slot-list, and the consecutive-slot relation.

use crate::types::{
    consecutive_runs, parse_qualified_courses, Course, CourseId, GroupRoster, Role, Room,
    ScheduleInput, Staff, StaffId, TimeSlot,
};
use std::collections::HashMap;

/// Read-only lookup tables derived once from a `ScheduleInput` and held
/// for the lifetime of a solve.
pub struct CatalogIndex<'a> {
    pub courses: &'a [Course],
    pub staff: &'a [Staff],
    pub rooms: &'a [Room],
    pub rosters: &'a [GroupRoster],
    pub rooms_by_id: HashMap<&'a str, usize>,
    pub course_by_id: HashMap<&'a str, &'a Course>,
    pub staff_by_id: HashMap<&'a str, &'a Staff>,
    /// course id -> qualified staff ids, in join-table (or fallback) order.
    pub course_to_staff: HashMap<String, Vec<StaffId>>,
    pub day_to_slots: HashMap<String, Vec<usize>>,
    pub slots: &'a [TimeSlot],
}

impl<'a> CatalogIndex<'a> {
    pub fn build(input: &'a ScheduleInput) -> Self {
        let course_by_id: HashMap<&str, &Course> =
            input.courses.iter().map(|c| (c.id.0.as_str(), c)).collect();
        let staff_by_id: HashMap<&str, &Staff> =
            input.staff.iter().map(|s| (s.id.0.as_str(), s)).collect();
        let rooms_by_id: HashMap<&str, usize> = input
            .rooms
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.0.as_str(), i))
            .collect();

        let course_to_staff = build_course_to_staff(input);

        let mut day_to_slots: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, slot) in input.time_slots.iter().enumerate() {
            day_to_slots.entry(slot.day.clone()).or_default().push(idx);
        }

        Self {
            courses: &input.courses,
            staff: &input.staff,
            rooms: &input.rooms,
            rosters: &input.group_rosters,
            rooms_by_id,
            course_by_id,
            staff_by_id,
            course_to_staff,
            day_to_slots,
            slots: &input.time_slots,
        }
    }

    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.course_by_id.get(id.0.as_str()).copied()
    }

    pub fn staff_member(&self, id: &StaffId) -> Option<&Staff> {
        self.staff_by_id.get(id.0.as_str()).copied()
    }

    pub fn qualified_staff(&self, course_id: &CourseId, role: Role) -> Vec<StaffId> {
        self.course_to_staff
            .get(&course_id.0)
            .into_iter()
            .flatten()
            .filter(|sid| {
                self.staff_by_id
                    .get(sid.0.as_str())
                    .map(|s| s.role == role)
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    pub fn all_with_role(&self, role: Role) -> Vec<StaffId> {
        self.staff
            .iter()
            .filter(|s| s.role == role)
            .map(|s| s.id.clone())
            .collect()
    }

    /// Staff of any role qualified for a course, used by GRAD_PROJECT
    /// (spec.md §4.2: "an instructor qualified for the course", no role
    /// restriction).
    pub fn qualified_any_role(&self, course_id: &CourseId) -> Vec<StaffId> {
        self.course_to_staff
            .get(&course_id.0)
            .cloned()
            .unwrap_or_default()
    }

    /// Cohort size for the capacity floor (spec.md §4.2, "when cohort
    /// sizes are available"). Looks up a matching roster by
    /// `(year, group_id)`, then narrows to a section if `section_id > 0`;
    /// returns `None` when no roster data covers this cohort, in which
    /// case the capacity floor is skipped entirely.
    pub fn cohort_size(&self, year: i32, group_id: i32, section_id: i32) -> Option<u32> {
        let roster = if group_id > 0 {
            self.rosters.iter().find(|r| r.year == year && r.group_id == group_id)
        } else {
            None
        };
        let roster = roster?;
        if section_id > 0 {
            roster
                .sections
                .iter()
                .find(|s| s.section_id == section_id)
                .map(|s| s.student_count)
        } else {
            Some(roster.total_students())
        }
    }

    pub fn room_by_id(&self, id: &str) -> Option<&'a Room> {
        self.rooms_by_id.get(id).map(|&i| &self.rooms[i])
    }

    /// Full-day (`len`-slot) consecutive runs, grouped by day, across the
    /// whole grid. Used by both variable generators for GRAD_PROJECT.
    pub fn consecutive_runs(&self, len: usize) -> Vec<Vec<usize>> {
        consecutive_runs(self.slots, len)
    }
}

/// Mirrors the Python solver's fallback: if the relational join table
/// (`staff_courses`) is empty, parse each staff member's `qualified_courses`
/// field as a comma-delimited string (spec.md §9). Here `qualified_courses`
/// is already a `Vec<CourseId>` on `Staff`, populated either from the join
/// table by the parser or from the fallback string parser at load time, so
/// the indexer simply walks it; the string-splitting logic itself lives in
/// `types::parse_qualified_courses` and is exercised directly by the
/// parser layer.
fn build_course_to_staff(input: &ScheduleInput) -> HashMap<String, Vec<StaffId>> {
    let mut map: HashMap<String, Vec<StaffId>> = HashMap::new();

    if !input.staff_courses.is_empty() {
        for join in &input.staff_courses {
            map.entry(join.course_id.0.clone())
                .or_default()
                .push(join.staff_id.clone());
        }
        return map;
    }

    for staff in &input.staff {
        let quals = if staff.qualified_courses.is_empty() {
            Vec::new()
        } else {
            staff.qualified_courses.clone()
        };
        for course_id in quals {
            map.entry(course_id.0).or_default().push(staff.id.clone());
        }
    }

    map
}

/// Entry point used when staff rows carry only a raw comma-delimited
/// string (e.g. freshly loaded from a spreadsheet-shaped source) instead
/// of a pre-split `qualified_courses` vector.
pub fn resolve_qualified_courses(raw: &str) -> Vec<CourseId> {
    parse_qualified_courses(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Room, RoomType, ScheduleConfig};

    fn sample_input() -> ScheduleInput {
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
            staff_courses: vec![],
            rooms: vec![Room {
                id: crate::types::RoomId::from("R1"),
                building: "B".into(),
                name: "R1".into(),
                capacity: 50,
                kind: RoomType::Classroom,
            }],
            time_slots: vec![],
            group_rosters: vec![],
            config: ScheduleConfig::default(),
        }
    }

    #[test]
    fn fallback_builds_course_to_staff_when_join_empty() {
        let mut input = sample_input();
        input.staff[0].qualified_courses = vec![CourseId::from("CSC111")];
        let idx = CatalogIndex::build(&input);
        let quals = idx.qualified_staff(&CourseId::from("CSC111"), Role::Professor);
        assert_eq!(quals, vec![StaffId::from("P1")]);
    }

    #[test]
    fn join_table_takes_precedence_over_fallback() {
        let mut input = sample_input();
        input.staff[0].qualified_courses = vec![CourseId::from("OTHER")];
        input.staff_courses.push(crate::types::StaffCourse {
            staff_id: StaffId::from("P1"),
            course_id: CourseId::from("CSC111"),
        });
        let idx = CatalogIndex::build(&input);
        let quals = idx.qualified_staff(&CourseId::from("CSC111"), Role::Professor);
        assert_eq!(quals, vec![StaffId::from("P1")]);
    }
}

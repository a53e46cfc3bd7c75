//! Domain Builder (spec.md §4.2), grounded in
//! `original_source/solver/csp_solver.py::build_domains` and
//! `original_source::get_suitable_halls` for the room-eligibility rules.
//!
//! For every session variable, enumerates every legal `(time, room, staff)`
//! triple. Lecture and graduation-project sessions use a Classroom,
//! Theater, or Hall; lab sessions use a Lab or Classroom room, subject to
//! the physics-lab exclusivity rule; tutorials use anything but a Lab.
//! Staff eligibility follows the qualified→role-fallback→any-staff chain
//! per session type. Full-day variables restrict the timeslot axis to the
//! start index of an eligible 8-slot consecutive run; doubled
//! tutorial/lab sessions restrict it to the start of an eligible
//! consecutive 2-slot run.

use crate::indexer::CatalogIndex;
use crate::types::{AssignmentValue, Role, Room, RoomId, RoomType, SessionType, SessionVariable, StaffId};

/// The domain for one variable: every `(time, room, staff)` triple that
/// satisfies the length/room-type/role rules, independent of any other
/// variable's assignment (conflicts are pruned later by the solver).
pub type Domain = Vec<AssignmentValue>;

pub fn build_domains(
    variables: &[SessionVariable],
    index: &CatalogIndex,
    full_day_slot_count: usize,
) -> Vec<Domain> {
    variables
        .iter()
        .map(|v| build_domain_for(v, index, full_day_slot_count))
        .collect()
}

fn build_domain_for(
    var: &SessionVariable,
    index: &CatalogIndex,
    full_day_slot_count: usize,
) -> Domain {
    let qualified_staff = qualified_staff_for(var, index);
    if qualified_staff.is_empty() {
        return Vec::new();
    }

    let cohort_size = index.cohort_size(var.year, var.group_id, var.section_id);
    let rooms = rooms_matching(var, index, cohort_size);
    if rooms.is_empty() {
        return Vec::new();
    }

    let mut domain = Vec::new();

    if var.is_full_day {
        for run in index.consecutive_runs(full_day_slot_count) {
            push_candidates(&mut domain, run[0], &rooms, &qualified_staff);
        }
        return domain;
    }

    if var.needs_consecutive_pair {
        for run in index.consecutive_runs(2) {
            push_candidates(&mut domain, run[0], &rooms, &qualified_staff);
        }
        return domain;
    }

    for (ts_idx, ts) in index.slots.iter().enumerate() {
        if ts.length_min() < var.length_min {
            continue;
        }
        push_candidates(&mut domain, ts_idx, &rooms, &qualified_staff);
    }

    domain
}

fn push_candidates(domain: &mut Domain, ts_idx: usize, rooms: &[RoomId], staff: &[StaffId]) {
    for room in rooms {
        for staff_id in staff {
            domain.push(AssignmentValue {
                timeslot_index: ts_idx,
                room_id: room.clone(),
                staff_id: staff_id.clone(),
            });
        }
    }
}

/// The room-type rule for a session type (spec.md §4.2): LECTURE and
/// GRAD_PROJECT need a Classroom/Theater/Hall, LAB needs a Lab or
/// Classroom, and TUTORIAL accepts anything except a Lab.
fn room_type_allowed(var: &SessionVariable, kind: RoomType) -> bool {
    match var.session_type {
        SessionType::Lab => matches!(kind, RoomType::Lab | RoomType::Classroom),
        SessionType::Tutorial => kind != RoomType::Lab,
        SessionType::Lecture | SessionType::GradProject => {
            matches!(kind, RoomType::Classroom | RoomType::Theater | RoomType::Hall)
        }
    }
}

/// A room is usable by `var` iff its type is allowed for the session
/// type, it clears the capacity floor, and — for LAB sessions only — its
/// physics-lab marking matches the course's physics-lab status (spec.md
/// §3, §4 "supplemented features" item 2 and 4).
fn room_ok(var: &SessionVariable, room: &Room, is_physics_course: bool, cohort_size: Option<u32>) -> bool {
    if !room_type_allowed(var, room.kind) {
        return false;
    }

    if !room.meets_capacity(cohort_size) {
        return false;
    }

    if var.session_type == SessionType::Lab {
        if is_physics_course && !room.is_physics_lab() {
            return false;
        }
        if !is_physics_course && room.is_physics_lab() {
            return false;
        }
    }

    true
}

fn rooms_matching(var: &SessionVariable, index: &CatalogIndex, cohort_size: Option<u32>) -> Vec<RoomId> {
    let is_physics_course = index
        .course(&var.course_id)
        .map(|c| c.is_physics_lab_course())
        .unwrap_or(false);

    index
        .rooms
        .iter()
        .filter(|r| room_ok(var, r, is_physics_course, cohort_size))
        .map(|r| r.id.clone())
        .collect()
}

fn qualified_staff_for(var: &SessionVariable, index: &CatalogIndex) -> Vec<crate::types::StaffId> {
    match var.session_type {
        SessionType::Lab | SessionType::Tutorial => {
            let mut staff = index.qualified_staff(&var.course_id, Role::AssistantProfessor);
            if staff.is_empty() {
                staff = index.qualified_staff(&var.course_id, Role::Ta);
            }
            if staff.is_empty() {
                staff = index.all_with_role(Role::AssistantProfessor);
            }
            if staff.is_empty() {
                staff = index.staff.iter().map(|s| s.id.clone()).collect();
            }
            staff
        }
        SessionType::GradProject => index.qualified_any_role(&var.course_id),
        SessionType::Lecture => {
            let mut staff = index.qualified_staff(&var.course_id, Role::Professor);
            if staff.is_empty() {
                staff = index.all_with_role(Role::Professor);
            }
            staff
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Course, CourseId, Room, RoomId, ScheduleConfig, ScheduleInput, SessionType, Staff,
        StaffId, TimeSlot, VarId,
    };

    fn base_input() -> ScheduleInput {
        ScheduleInput {
            courses: vec![Course {
                id: CourseId::from("CSC111"),
                name: "Intro".into(),
                credits: 3,
                kind: "core".into(),
                year: 1,
                specialization: "".into(),
                has_lecture: true,
                has_lab: true,
                is_grad_project: false,
                lec_count: 0,
                tut_count: 0,
                lab_count: 0,
            }],
            staff: vec![
                Staff {
                    id: StaffId::from("P1"),
                    name: "Dr. A".into(),
                    role: Role::Professor,
                    qualified_courses: vec![CourseId::from("CSC111")],
                },
                Staff {
                    id: StaffId::from("AP1"),
                    name: "Dr. B".into(),
                    role: Role::AssistantProfessor,
                    qualified_courses: vec![CourseId::from("CSC111")],
                },
            ],
            staff_courses: vec![],
            rooms: vec![
                Room {
                    id: RoomId::from("C1"),
                    building: "B".into(),
                    name: "Classroom 1".into(),
                    capacity: 60,
                    kind: RoomType::Classroom,
                },
                Room {
                    id: RoomId::from("L1"),
                    building: "B".into(),
                    name: "Lab 1".into(),
                    capacity: 30,
                    kind: RoomType::Lab,
                },
            ],
            time_slots: (0..4)
                .map(|i| TimeSlot {
                    id: i,
                    day: "Sunday".into(),
                    start_min: 540 + i * 90,
                    end_min: 630 + i * 90,
                })
                .collect(),
            group_rosters: vec![],
            config: ScheduleConfig::default(),
        }
    }

    fn lecture_var() -> SessionVariable {
        SessionVariable {
            var_id: VarId("CSC111_Y1_G1_LEC".into()),
            course_id: CourseId::from("CSC111"),
            year: 1,
            group_id: 1,
            section_id: 0,
            specialization: "".into(),
            session_type: SessionType::Lecture,
            length_min: 90,
            is_full_day: false,
            needs_consecutive_pair: false,
        }
    }

    #[test]
    fn lecture_domain_only_uses_classroom_type_rooms() {
        let input = base_input();
        let index = CatalogIndex::build(&input);
        let domains = build_domains(&[lecture_var()], &index, 8);
        assert!(!domains[0].is_empty());
        assert!(domains[0].iter().all(|a| a.room_id == RoomId::from("C1")));
        assert!(domains[0].iter().all(|a| a.staff_id == StaffId::from("P1")));
    }

    #[test]
    fn lab_domain_falls_back_when_no_join_entry() {
        let mut input = base_input();
        input.staff[1].qualified_courses.clear();
        let mut v = lecture_var();
        v.session_type = SessionType::Lab;
        v.var_id = VarId("CSC111_Y1_G1_S1_LAB".into());
        let index = CatalogIndex::build(&input);
        let domains = build_domains(&[v], &index, 8);
        assert!(domains[0].iter().any(|a| a.staff_id == StaffId::from("AP1")));
    }

    #[test]
    fn empty_domain_when_no_staff_of_any_role() {
        let mut input = base_input();
        input.staff.clear();
        let index = CatalogIndex::build(&input);
        let domains = build_domains(&[lecture_var()], &index, 8);
        assert!(domains[0].is_empty());
    }

    #[test]
    fn full_day_variable_restricts_to_run_start_indices() {
        let input = base_input();
        let index = CatalogIndex::build(&input);
        let mut v = lecture_var();
        v.is_full_day = true;
        v.session_type = SessionType::GradProject;
        let domains = build_domains(&[v], &index, 4);
        assert!(domains[0].iter().all(|a| a.timeslot_index == 0));
    }

    #[test]
    fn physics_course_lab_requires_physics_marked_room() {
        let mut input = base_input();
        input.courses[0].id = CourseId::from("PHY113");
        input.rooms.push(Room {
            id: RoomId::from("PHYLAB1"),
            building: "B".into(),
            name: "PHY LAB 1".into(),
            capacity: 30,
            kind: RoomType::Lab,
        });
        let mut v = lecture_var();
        v.course_id = CourseId::from("PHY113");
        v.session_type = SessionType::Lab;
        let index = CatalogIndex::build(&input);
        let domains = build_domains(&[v], &index, 8);
        assert!(!domains[0].is_empty());
        assert!(domains[0].iter().all(|a| a.room_id == RoomId::from("PHYLAB1")));
    }

    #[test]
    fn non_physics_course_lab_avoids_physics_marked_room() {
        let mut input = base_input();
        input.rooms.push(Room {
            id: RoomId::from("PHYLAB1"),
            building: "B".into(),
            name: "PHY LAB 1".into(),
            capacity: 30,
            kind: RoomType::Lab,
        });
        let mut v = lecture_var();
        v.session_type = SessionType::Lab;
        let index = CatalogIndex::build(&input);
        let domains = build_domains(&[v], &index, 8);
        assert!(domains[0].iter().all(|a| a.room_id != RoomId::from("PHYLAB1")));
    }

    #[test]
    fn tutorial_domain_never_uses_lab_rooms() {
        let mut v = lecture_var();
        v.session_type = SessionType::Tutorial;
        let input = base_input();
        let index = CatalogIndex::build(&input);
        let domains = build_domains(&[v], &index, 8);
        assert!(domains[0].iter().all(|a| a.room_id != RoomId::from("L1")));
    }

    #[test]
    fn consecutive_pair_domain_only_starts_where_a_run_exists() {
        let mut v = lecture_var();
        v.needs_consecutive_pair = true;
        let input = base_input();
        let index = CatalogIndex::build(&input);
        let domains = build_domains(&[v], &index, 8);
        assert!(!domains[0].is_empty());
        assert!(domains[0].iter().all(|a| a.timeslot_index < 3));
    }

    #[test]
    fn capacity_floor_excludes_undersized_rooms_when_roster_present() {
        use crate::types::{GroupRoster, SectionRoster};
        let mut input = base_input();
        input.rooms[0].capacity = 10;
        input.group_rosters.push(GroupRoster {
            year: 1,
            specialization: String::new(),
            group_id: 1,
            sections: vec![SectionRoster {
                section_id: 0,
                student_count: 50,
            }],
        });
        let index = CatalogIndex::build(&input);
        let domains = build_domains(&[lecture_var()], &index, 8);
        assert!(domains[0].is_empty());
    }
}

//! The fixed-whitelist generator, grounded in
//! `original_source/solver/csp_solver.py::build_lecture_variables`
//! (spec.md §4.1 table).

use crate::indexer::CatalogIndex;
use crate::types::{Course, ScheduleInput, SessionType, SessionVariable, VarId};

pub fn build_variables(input: &ScheduleInput, index: &CatalogIndex) -> Vec<SessionVariable> {
    let mut vars = Vec::new();
    let cfg = &input.config;

    for course in index.courses {
        if !course.in_supported_year_range() || course.is_grad_project {
            continue;
        }
        if let Some(whitelist) = cfg.whitelist_for_year(course.year) {
            if !whitelist.contains(&course.id) {
                continue;
            }
        }

        let is_japanese = cfg.is_japanese(&course.id);
        let yr = course.year;

        if yr == 3 || yr == 4 {
            if course.is_common() {
                for spec in &cfg.specializations {
                    vars.push(lecture_var(
                        course,
                        yr,
                        0,
                        0,
                        spec.clone(),
                        format!("{}_Y{}_{}_LEC", course.id, yr, spec),
                        cfg.lecture_length_min,
                    ));
                }
            } else {
                vars.push(lecture_var(
                    course,
                    yr,
                    0,
                    0,
                    course.specialization.clone(),
                    format!("{}_Y{}_{}_LEC", course.id, yr, course.specialization),
                    cfg.lecture_length_min,
                ));
            }
        } else if is_japanese {
            for grp in 1..=3 {
                for sec in 1..=3 {
                    vars.push(lecture_var(
                        course,
                        yr,
                        grp,
                        sec,
                        String::new(),
                        format!("{}_Y{}_G{}_S{}", course.id, yr, grp, sec),
                        cfg.lecture_length_min,
                    ));
                }
            }
        } else {
            for grp in 1..=3 {
                vars.push(lecture_var(
                    course,
                    yr,
                    grp,
                    0,
                    String::new(),
                    format!("{}_Y{}_G{}_LEC", course.id, yr, grp),
                    cfg.lecture_length_min,
                ));
            }
        }
    }

    for course in index.courses {
        if !course.in_supported_year_range() {
            continue;
        }
        if !course.has_lab && !course.is_grad_project {
            continue;
        }

        let yr = course.year;

        if yr == 1 || yr == 2 {
            for grp in 1..=3 {
                for sec in 1..=3 {
                    vars.push(lab_var(
                        course,
                        yr,
                        grp,
                        sec,
                        String::new(),
                        format!("{}_Y{}_G{}_S{}_LAB", course.id, yr, grp, sec),
                        cfg.lab_length_min,
                        course.is_grad_project,
                    ));
                }
            }
        } else if course.is_common() {
            for spec in &cfg.specializations {
                vars.push(lab_var(
                    course,
                    yr,
                    0,
                    1,
                    spec.clone(),
                    format!("{}_Y{}_{}_S1_LAB", course.id, yr, spec),
                    cfg.lab_length_min,
                    course.is_grad_project,
                ));
            }
        } else {
            vars.push(lab_var(
                course,
                yr,
                0,
                1,
                course.specialization.clone(),
                format!("{}_Y{}_{}_S1_LAB", course.id, yr, course.specialization),
                cfg.lab_length_min,
                course.is_grad_project,
            ));
        }
    }

    vars
}

#[allow(clippy::too_many_arguments)]
fn lecture_var(
    course: &Course,
    year: i32,
    group_id: i32,
    section_id: i32,
    specialization: String,
    var_id: String,
    length_min: i32,
) -> SessionVariable {
    SessionVariable {
        var_id: VarId(var_id),
        course_id: course.id.clone(),
        year,
        group_id,
        section_id,
        specialization,
        session_type: SessionType::Lecture,
        length_min,
        is_full_day: false,
        needs_consecutive_pair: false,
    }
}

#[allow(clippy::too_many_arguments)]
fn lab_var(
    course: &Course,
    year: i32,
    group_id: i32,
    section_id: i32,
    specialization: String,
    var_id: String,
    length_min: i32,
    is_full_day: bool,
) -> SessionVariable {
    SessionVariable {
        var_id: VarId(var_id),
        course_id: course.id.clone(),
        year,
        group_id,
        section_id,
        specialization,
        session_type: SessionType::Lab,
        length_min,
        is_full_day,
        needs_consecutive_pair: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Role, ScheduleConfig, Staff, StaffId};

    fn course(id: &str, year: i32, spec: &str, has_lab: bool, grad: bool) -> Course {
        Course {
            id: id.into(),
            name: id.into(),
            credits: 3,
            kind: "core".into(),
            year,
            specialization: spec.into(),
            has_lecture: true,
            has_lab,
            is_grad_project: grad,
            lec_count: 0,
            tut_count: 0,
            lab_count: 0,
        }
    }

    fn input_with(courses: Vec<Course>) -> ScheduleInput {
        ScheduleInput {
            courses,
            staff: vec![Staff {
                id: StaffId::from("P1"),
                name: "P1".into(),
                role: Role::Professor,
                qualified_courses: vec![],
            }],
            staff_courses: vec![],
            rooms: vec![],
            time_slots: vec![],
            group_rosters: vec![],
            config: ScheduleConfig::default(),
        }
    }

    #[test]
    fn year1_whitelisted_course_emits_three_group_lectures() {
        let input = input_with(vec![course("CSC111", 1, "", false, false)]);
        let index = CatalogIndex::build(&input);
        let vars = build_variables(&input, &index);
        let lectures: Vec<_> = vars.iter().filter(|v| v.is_lecture()).collect();
        assert_eq!(lectures.len(), 3);
        assert!(lectures.iter().all(|v| v.section_id == 0));
    }

    #[test]
    fn year1_non_whitelisted_course_is_skipped() {
        let input = input_with(vec![course("ZZZ999", 1, "", false, false)]);
        let index = CatalogIndex::build(&input);
        let vars = build_variables(&input, &index);
        assert!(vars.is_empty());
    }

    #[test]
    fn japanese_course_emits_nine_group_section_lectures() {
        let input = input_with(vec![course("LRA401", 1, "", false, false)]);
        let index = CatalogIndex::build(&input);
        let vars = build_variables(&input, &index);
        let lectures: Vec<_> = vars.iter().filter(|v| v.is_lecture()).collect();
        assert_eq!(lectures.len(), 9);
    }

    #[test]
    fn year3_common_course_emits_one_lecture_per_specialization() {
        let input = input_with(vec![course("AID311", 3, "", false, false)]);
        let index = CatalogIndex::build(&input);
        let vars = build_variables(&input, &index);
        let lectures: Vec<_> = vars.iter().filter(|v| v.is_lecture()).collect();
        assert_eq!(lectures.len(), 4);
        assert!(lectures.iter().all(|v| v.group_id == 0 && v.section_id == 0));
    }

    #[test]
    fn year3_specific_specialization_emits_single_lecture() {
        let input = input_with(vec![course("AID311", 3, "AID", false, false)]);
        let index = CatalogIndex::build(&input);
        let vars = build_variables(&input, &index);
        let lectures: Vec<_> = vars.iter().filter(|v| v.is_lecture()).collect();
        assert_eq!(lectures.len(), 1);
        assert_eq!(lectures[0].specialization, "AID");
    }

    #[test]
    fn lab_variables_split_by_section_for_year1() {
        let input = input_with(vec![course("CSC111", 1, "", true, false)]);
        let index = CatalogIndex::build(&input);
        let vars = build_variables(&input, &index);
        let labs: Vec<_> = vars.iter().filter(|v| v.is_lab()).collect();
        assert_eq!(labs.len(), 9);
    }

    #[test]
    fn grad_project_lab_is_full_day() {
        let mut c = course("BIF410", 4, "BIF", false, true);
        c.has_lab = false;
        let input = input_with(vec![c]);
        let index = CatalogIndex::build(&input);
        let vars = build_variables(&input, &index);
        assert!(vars.iter().all(|v| v.is_full_day));
        assert!(!vars.is_empty());
    }

    #[test]
    fn out_of_range_year_is_ignored() {
        let input = input_with(vec![course("CSC111", 5, "", true, false)]);
        let index = CatalogIndex::build(&input);
        let vars = build_variables(&input, &index);
        assert!(vars.is_empty());
    }
}

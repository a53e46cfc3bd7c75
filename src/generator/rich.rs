//! The richer, roster-aware generator, grounded in
//! `original_source/timetable_generator.py::create_variables` (spec.md
//! §4.1 "second variant"). Runs only when `ScheduleInput::has_rosters`
//! is true — lecture sessions are emitted per `lec_count`, tutorials and
//! labs per `tut_count`/`lab_count` with a consecutive-pair requirement,
//! and graduation projects as one full-day variable per group.

use crate::indexer::CatalogIndex;
use crate::types::{
    Course, GroupRoster, ScheduleInput, SessionType, SessionVariable, VarId,
};

/// The physics-lab course is the one course the original generator
/// treats as a whole-group lab rather than a section-split one (its labs
/// share the single physics lab hall and run one session per group).
fn is_whole_group_lab(course: &Course) -> bool {
    course.is_physics_lab_course()
}

fn rosters_for_course<'a>(input: &'a ScheduleInput, course: &Course) -> Vec<&'a GroupRoster> {
    input
        .group_rosters
        .iter()
        .filter(|r| r.year == course.year && (course.is_common() || r.specialization == course.specialization))
        .collect()
}

pub fn build_variables(input: &ScheduleInput, index: &CatalogIndex) -> Vec<SessionVariable> {
    let mut vars = Vec::new();

    for course in index.courses {
        if !course.in_supported_year_range() {
            continue;
        }
        let rosters = rosters_for_course(input, course);
        if rosters.is_empty() {
            continue;
        }

        if course.is_grad_project {
            for roster in &rosters {
                vars.push(SessionVariable {
                    var_id: VarId(format!(
                        "{}_Y{}_G{}_GRADPROJ",
                        course.id, course.year, roster.group_id
                    )),
                    course_id: course.id.clone(),
                    year: course.year,
                    group_id: roster.group_id,
                    section_id: 0,
                    specialization: roster.specialization.clone(),
                    session_type: SessionType::GradProject,
                    length_min: 0,
                    is_full_day: true,
                    needs_consecutive_pair: false,
                });
            }
            continue;
        }

        if course.lec_count > 0 {
            for roster in &rosters {
                for session_num in 1..=course.lec_count {
                    vars.push(SessionVariable {
                        var_id: VarId(format!(
                            "{}_Y{}_G{}_LEC{}",
                            course.id, course.year, roster.group_id, session_num
                        )),
                        course_id: course.id.clone(),
                        year: course.year,
                        group_id: roster.group_id,
                        section_id: 0,
                        specialization: roster.specialization.clone(),
                        session_type: SessionType::Lecture,
                        length_min: 90,
                        is_full_day: false,
                        needs_consecutive_pair: false,
                    });
                }
            }
        }

        if course.tut_count > 0 {
            for roster in &rosters {
                for section in &roster.sections {
                    for session_num in 1..=course.tut_count {
                        vars.push(SessionVariable {
                            var_id: VarId(format!(
                                "{}_Y{}_G{}_S{}_TUT{}",
                                course.id, course.year, roster.group_id, section.section_id, session_num
                            )),
                            course_id: course.id.clone(),
                            year: course.year,
                            group_id: roster.group_id,
                            section_id: section.section_id,
                            specialization: roster.specialization.clone(),
                            session_type: SessionType::Tutorial,
                            length_min: 180,
                            is_full_day: false,
                            needs_consecutive_pair: true,
                        });
                    }
                }
            }
        }

        if course.lab_count > 0 {
            for roster in &rosters {
                if is_whole_group_lab(course) {
                    for session_num in 1..=course.lab_count {
                        vars.push(SessionVariable {
                            var_id: VarId(format!(
                                "{}_Y{}_G{}_LAB{}",
                                course.id, course.year, roster.group_id, session_num
                            )),
                            course_id: course.id.clone(),
                            year: course.year,
                            group_id: roster.group_id,
                            section_id: 0,
                            specialization: roster.specialization.clone(),
                            session_type: SessionType::Lab,
                            length_min: 180,
                            is_full_day: false,
                            needs_consecutive_pair: true,
                        });
                    }
                } else {
                    for section in &roster.sections {
                        for session_num in 1..=course.lab_count {
                            vars.push(SessionVariable {
                                var_id: VarId(format!(
                                    "{}_Y{}_G{}_S{}_LAB{}",
                                    course.id, course.year, roster.group_id, section.section_id, session_num
                                )),
                                course_id: course.id.clone(),
                                year: course.year,
                                group_id: roster.group_id,
                                section_id: section.section_id,
                                specialization: roster.specialization.clone(),
                                session_type: SessionType::Lab,
                                length_min: 180,
                                is_full_day: false,
                                needs_consecutive_pair: true,
                            });
                        }
                    }
                }
            }
        }
    }

    vars
}

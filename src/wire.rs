//! Wire format for emitted schedules (spec.md §6), grounded in
//! `original_source/gui/main_window.py::generate_json` for the JSON shape
//! and `original_source/solver/csp_solver.py::print_result`/
//! `min_to_12_hour` for the human-readable text summary.

use crate::indexer::CatalogIndex;
use crate::types::{CspResult, SessionType, SessionVariable};
use serde::Serialize;
use std::collections::BTreeMap;

/// `hh:mm{AM|PM}`, 12-hour zero-padded, per spec.md §6.
pub fn render_12_hour(mins: i32) -> String {
    let h = mins.div_euclid(60);
    let m = mins.rem_euclid(60);
    let pm = h >= 12;
    let hh = if h % 12 == 0 { 12 } else { h % 12 };
    format!("{:02}:{:02}{}", hh, m, if pm { "PM" } else { "AM" })
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionOut {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub day: String,
    pub time: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
    pub instructor: String,
    pub room: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    #[serde(rename = "totalCourses")]
    pub total_courses: usize,
    #[serde(rename = "totalSessions")]
    pub total_sessions: usize,
    pub violations: u32,
    #[serde(rename = "solveTime")]
    pub solve_time: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleOutput {
    pub success: bool,
    #[serde(rename = "generatedAt")]
    pub generated_at: String,
    pub stats: Stats,
    /// `<year>` → `<group_key>` → sessions, per spec.md §6.
    pub schedule: BTreeMap<String, BTreeMap<String, Vec<SessionOut>>>,
}

fn group_key(var: &SessionVariable) -> String {
    if var.year <= 2 {
        format!("G{}", var.group_id)
    } else if !var.specialization.is_empty() {
        var.specialization.clone()
    } else {
        "G1".to_string()
    }
}

fn session_type_label(var: &SessionVariable) -> String {
    match var.session_type {
        SessionType::Lecture => {
            if (var.year == 3 || var.year == 4) && !var.specialization.is_empty() {
                format!("{} Lecture", var.specialization)
            } else if var.section_id > 0 && var.group_id > 0 {
                format!("G{} Section {}", var.group_id, var.section_id)
            } else {
                format!("G{} Lecture", var.group_id)
            }
        }
        SessionType::Lab => {
            let base = if !var.specialization.is_empty() && var.section_id > 0 {
                format!("{} Lab", var.specialization)
            } else if var.group_id > 0 && var.section_id > 0 {
                format!("G{} S{} Lab", var.group_id, var.section_id)
            } else {
                "Lab".to_string()
            };
            if var.is_full_day {
                format!("{} (Full Day)", base)
            } else {
                base
            }
        }
        SessionType::Tutorial => format!("G{} S{} Tutorial", var.group_id, var.section_id),
        SessionType::GradProject => "Graduation Project".to_string(),
    }
}

/// Builds the emitted `ScheduleOutput` from a successful `CspResult`.
/// `full_day_slot_count` and the one fixed full-day time window
/// (`"09:00AM - 03:45PM"`, matching the original's hard-coded render)
/// are injected by the caller rather than assumed here.
pub fn build_schedule_output(
    variables: &[SessionVariable],
    result: &CspResult,
    index: &CatalogIndex,
    full_day_label: (&str, &str),
) -> ScheduleOutput {
    let total_courses = index
        .courses
        .iter()
        .filter(|c| c.in_supported_year_range())
        .count();

    let mut schedule: BTreeMap<String, BTreeMap<String, Vec<SessionOut>>> = BTreeMap::new();

    for var in variables {
        let Some(assignment) = result.assignments.get(&var.var_id) else {
            continue;
        };
        let ts = &index.slots[assignment.timeslot_index];
        let room = index.room_by_id(&assignment.room_id.0);
        let course = index.course(&var.course_id);
        let staff = index.staff_member(&assignment.staff_id);

        let (start_time, end_time, time) = if var.is_full_day {
            (
                full_day_label.0.to_string(),
                full_day_label.1.to_string(),
                format!("{} - {}", full_day_label.0, full_day_label.1),
            )
        } else {
            let start = render_12_hour(ts.start_min);
            let end = render_12_hour(ts.end_min);
            (start.clone(), end.clone(), format!("{} - {}", start, end))
        };

        let room_label = match room {
            Some(r) => format!("{} ({})", r.name, r.building),
            None => assignment.room_id.0.clone(),
        };

        let session = SessionOut {
            code: var.course_id.0.clone(),
            name: course.map(|c| c.name.clone()).unwrap_or_else(|| var.course_id.0.clone()),
            kind: session_type_label(var),
            day: ts.day.clone(),
            time,
            start_time,
            end_time,
            instructor: staff.map(|s| s.name.clone()).unwrap_or_else(|| "null".to_string()),
            room: room_label,
        };

        schedule
            .entry(var.year.to_string())
            .or_default()
            .entry(group_key(var))
            .or_default()
            .push(session);
    }

    ScheduleOutput {
        success: result.success,
        generated_at: chrono::Utc::now().to_rfc3339(),
        stats: Stats {
            total_courses,
            total_sessions: variables.len(),
            violations: result.hard_violations,
            solve_time: result.solve_seconds,
        },
        schedule,
    }
}

/// A plain-text rendering of a result, one line-pair per scheduled
/// session, matching the original `print_result` layout.
pub fn render_text_summary(variables: &[SessionVariable], result: &CspResult, index: &CatalogIndex) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if !result.success {
        let _ = writeln!(
            out,
            "No solution found. Hard violations: {}, time: {:.2}s",
            result.hard_violations, result.solve_seconds
        );
        return out;
    }

    for var in variables {
        let Some(assignment) = result.assignments.get(&var.var_id) else {
            continue;
        };
        let ts = &index.slots[assignment.timeslot_index];
        let room = index.room_by_id(&assignment.room_id.0);
        let course = index.course(&var.course_id);
        let staff = index.staff_member(&assignment.staff_id);

        let cname = course.map(|c| c.name.as_str()).unwrap_or(&var.course_id.0);
        let ins_name = staff.map(|s| s.name.as_str()).unwrap_or("null");
        let room_label = match room {
            Some(r) => format!("{} ({})", r.name, r.building),
            None => assignment.room_id.0.clone(),
        };

        let time_line = if var.is_full_day {
            format!("{} 9:00 AM - 3:45 PM (Full Day)", ts.day)
        } else {
            format!(
                "{} {} - {}",
                ts.day,
                render_12_hour(ts.start_min),
                render_12_hour(ts.end_min)
            )
        };

        let _ = writeln!(
            out,
            "{} | {} (Y{}) | {}\n  {} | {} | {}",
            var.course_id, cname, var.year, session_type_label(var), time_line, room_label, ins_name
        );
    }

    let _ = writeln!(out, "Solution found in {:.2}s", result.solve_seconds);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_hour_rendering_wraps_midnight_to_noon() {
        assert_eq!(render_12_hour(0), "12:00AM");
        assert_eq!(render_12_hour(60), "01:00AM");
        assert_eq!(render_12_hour(720), "12:00PM");
        assert_eq!(render_12_hour(810), "01:30PM");
    }

    #[test]
    fn group_key_uses_group_number_for_years_1_and_2() {
        let mut v = sample_var();
        v.year = 1;
        v.group_id = 3;
        assert_eq!(group_key(&v), "G3");
    }

    #[test]
    fn group_key_uses_specialization_for_years_3_and_4() {
        let mut v = sample_var();
        v.year = 3;
        v.specialization = "AID".into();
        assert_eq!(group_key(&v), "AID");
    }

    #[test]
    fn group_key_falls_back_to_g1_when_specialization_is_empty() {
        let mut v = sample_var();
        v.year = 4;
        v.specialization = String::new();
        assert_eq!(group_key(&v), "G1");
    }

    fn sample_var() -> SessionVariable {
        SessionVariable {
            var_id: crate::types::VarId("C1_Y1_G1_LEC".into()),
            course_id: crate::types::CourseId::from("C1"),
            year: 1,
            group_id: 1,
            section_id: 0,
            specialization: String::new(),
            session_type: SessionType::Lecture,
            length_min: 90,
            is_full_day: false,
            needs_consecutive_pair: false,
        }
    }
}

//! JSON rendering of a `ScheduleOutput` (spec.md §6 wire format), adapted
//! from the teacher's `reporter/json.rs::generate_json_report`.

use crate::wire::ScheduleOutput;

pub fn generate_json_report(output: &ScheduleOutput) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(output)?)
}

#[derive(serde::Serialize)]
pub struct JsonSummary {
    #[serde(rename = "totalCourses")]
    pub total_courses: usize,
    #[serde(rename = "totalSessions")]
    pub total_sessions: usize,
    pub violations: u32,
    #[serde(rename = "solveTime")]
    pub solve_time: f64,
}

pub fn generate_json_summary(output: &ScheduleOutput) -> crate::Result<String> {
    let summary = JsonSummary {
        total_courses: output.stats.total_courses,
        total_sessions: output.stats.total_sessions,
        violations: output.stats.violations,
        solve_time: output.stats.solve_time,
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

//! Markdown rendering of a `ScheduleOutput`, adapted from the teacher's
//! `reporter/markdown.rs::generate_markdown_report`.

use crate::wire::ScheduleOutput;

pub fn generate_markdown_report(output: &ScheduleOutput) -> String {
    let mut lines = vec![
        "# Timetable Report".to_string(),
        format!("Generated: {}", output.generated_at),
        String::new(),
        "## Summary\n".to_string(),
        "| Metric | Value |".to_string(),
        "|--------|-------|".to_string(),
        format!("| Total Courses | {} |", output.stats.total_courses),
        format!("| Total Sessions | {} |", output.stats.total_sessions),
        format!("| Hard Violations | {} |", output.stats.violations),
        format!("| Solve Time | {:.3}s |", output.stats.solve_time),
        String::new(),
    ];

    if output.success {
        lines.push("## Status: ✅ Feasible\n".to_string());
    } else {
        lines.push("## Status: ❌ Infeasible\n".to_string());
    }

    for (year, groups) in &output.schedule {
        lines.push(format!("## Year {}\n", year));
        for (group_key, sessions) in groups {
            lines.push(format!("### Group {}\n", group_key));
            lines.push("| Course | Type | Day | Time | Room | Instructor |".to_string());
            lines.push("|--------|------|-----|------|------|------------|".to_string());
            for session in sessions {
                lines.push(format!(
                    "| {} ({}) | {} | {} | {} | {} | {} |",
                    session.code,
                    session.name,
                    session.kind,
                    session.day,
                    session.time,
                    session.room,
                    session.instructor,
                ));
            }
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{ScheduleOutput, Stats};
    use std::collections::BTreeMap;

    #[test]
    fn empty_schedule_still_renders_summary() {
        let output = ScheduleOutput {
            success: true,
            generated_at: "2026-01-01T00:00:00Z".to_string(),
            stats: Stats {
                total_courses: 0,
                total_sessions: 0,
                violations: 0,
                solve_time: 0.01,
            },
            schedule: BTreeMap::new(),
        };
        let md = generate_markdown_report(&output);
        assert!(md.contains("Timetable Report"));
        assert!(md.contains("Feasible"));
    }
}

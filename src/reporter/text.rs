//! Plain-text rendering of a `ScheduleOutput`, adapted from the teacher's
//! `reporter/text.rs::generate_text_report`/`print_summary`.

use crate::wire::ScheduleOutput;
use colored::Colorize;

pub fn generate_text_report(output: &ScheduleOutput) -> String {
    let mut lines = Vec::new();

    lines.push("=".repeat(60));
    lines.push("               TIMETABLE REPORT".to_string());
    lines.push("=".repeat(60));
    lines.push(format!("Generated: {}", output.generated_at));
    lines.push(String::new());

    lines.push("-".repeat(40));
    lines.push("STATISTICS".to_string());
    lines.push("-".repeat(40));
    lines.push(format!("  Courses:      {}", output.stats.total_courses));
    lines.push(format!("  Sessions:     {}", output.stats.total_sessions));
    lines.push(format!("  Violations:   {}", output.stats.violations));
    lines.push(format!("  Solve time:   {:.3}s", output.stats.solve_time));
    lines.push(String::new());

    lines.push("-".repeat(40));
    if output.success {
        lines.push("STATUS: FEASIBLE".green().to_string());
    } else {
        lines.push("STATUS: INFEASIBLE".red().to_string());
    }
    lines.push("-".repeat(40));
    lines.push(String::new());

    for (year, groups) in &output.schedule {
        lines.push(format!("Year {}", year).bold().to_string());
        for (group_key, sessions) in groups {
            lines.push(format!("  Group {}", group_key));
            for session in sessions {
                lines.push(format!(
                    "    {} | {} | {} {} | {} | {}",
                    session.code, session.kind, session.day, session.time, session.room, session.instructor
                ));
            }
        }
    }

    lines.push(String::new());
    lines.push("=".repeat(60));

    lines.join("\n")
}

/// Prints a short colored summary to stdout, matching the teacher's
/// `print_summary`.
pub fn print_summary(output: &ScheduleOutput) {
    println!();
    if output.success {
        println!("{}", "✓ Timetable generated successfully".green().bold());
    } else {
        println!("{}", "✗ Timetable is infeasible".red().bold());
    }
    println!();
    println!("  Courses:    {}", output.stats.total_courses);
    println!("  Sessions:   {}", output.stats.total_sessions);
    println!("  Violations: {}", output.stats.violations);
    println!("  Time:       {:.3}s", output.stats.solve_time);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::Stats;
    use std::collections::BTreeMap;

    #[test]
    fn infeasible_result_renders_red_status() {
        let output = ScheduleOutput {
            success: false,
            generated_at: "2026-01-01T00:00:00Z".to_string(),
            stats: Stats {
                total_courses: 1,
                total_sessions: 1,
                violations: 1,
                solve_time: 0.1,
            },
            schedule: BTreeMap::new(),
        };
        let text = generate_text_report(&output);
        assert!(text.contains("INFEASIBLE"));
    }
}

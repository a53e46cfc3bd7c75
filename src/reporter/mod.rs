//! Report generation (spec.md §6 supplemented features), adapted from
//! the teacher's `reporter/mod.rs::generate_reports`.

mod json;
mod markdown;
mod text;

pub use json::*;
pub use markdown::*;
pub use text::*;

use crate::wire::ScheduleOutput;
use std::fs;
use std::path::Path;

/// Output format for reports (teacher: `reporter::OutputFormat`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Text,
}

/// Renders `output` in each requested format and writes it to
/// `output_dir`.
pub fn generate_reports(
    output: &ScheduleOutput,
    output_dir: &Path,
    formats: &[OutputFormat],
) -> crate::Result<()> {
    fs::create_dir_all(output_dir)?;

    for format in formats {
        match format {
            OutputFormat::Json => {
                let json = generate_json_report(output)?;
                fs::write(output_dir.join("schedule.json"), json)?;
            }
            OutputFormat::Markdown => {
                let md = generate_markdown_report(output);
                fs::write(output_dir.join("schedule.md"), md)?;
            }
            OutputFormat::Text => {
                let txt = generate_text_report(output);
                fs::write(output_dir.join("schedule.txt"), txt)?;
            }
        }
    }

    Ok(())
}

/// Parses a comma-delimited format list, or `"all"` for every format,
/// matching the teacher's `main.rs::parse_formats`.
pub fn parse_formats(format: &str) -> Vec<OutputFormat> {
    if format == "all" {
        return vec![OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text];
    }

    format
        .split(',')
        .filter_map(|f| match f.trim().to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "text" | "txt" => Some(OutputFormat::Text),
            _ => None,
        })
        .collect()
}

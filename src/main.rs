use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use csit_timetable::orchestrator;
use csit_timetable::parser::{load_input_from_dir, validate_input};
use csit_timetable::reporter::{generate_reports, parse_formats, print_summary};
use csit_timetable::solver::SolveControl;
use csit_timetable::validator::validate_result;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "csit-timetable")]
#[command(about = "CSP-based weekly timetable engine for a multi-year CS faculty")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a timetable from catalog data and write it out.
    Solve {
        /// Directory containing courses.json, staff.json, rooms.json, time_slots.json.
        input: PathBuf,

        /// Directory to write schedule.{json,md,txt} into.
        output: PathBuf,

        /// Output format(s): json, markdown, text, or all.
        #[arg(short, long, default_value = "all")]
        format: String,

        /// Suppress the progress bar and print a one-line JSON summary instead.
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run with the bundled demo catalog.
    Demo,

    /// Re-solve an input catalog and independently re-check every invariant
    /// the solver claims to uphold (spec.md §8).
    Validate {
        /// Directory containing catalog data.
        input: PathBuf,

        /// Show every violation found, not just the pass/fail summary.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Render an existing schedule.json in a different format.
    Report {
        /// Path to a schedule.json produced by `solve`.
        schedule: PathBuf,

        /// Output format: json, markdown, or text.
        #[arg(short, long, default_value = "markdown")]
        format: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Solve {
            input,
            output,
            format,
            quiet,
        } => run_solve(&input, &output, &format, quiet),
        Commands::Demo => run_demo(),
        Commands::Validate { input, verbose } => run_validate(&input, verbose),
        Commands::Report { schedule, format } => run_report(&schedule, &format),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::from(2)
        }
    }
}

/// `solve <input-path> <output-path>` (spec.md §6 minimal CLI surface):
/// exit code 0 on success, 1 on infeasible, 2 on input error.
fn run_solve(input: &PathBuf, output: &PathBuf, format: &str, quiet: bool) -> anyhow::Result<ExitCode> {
    let schedule_input = load_input_from_dir(input).context("Failed to load input data")?;
    validate_input(&schedule_input).context("Input failed validation")?;

    if !quiet {
        println!(
            "Loaded {} courses, {} staff, {} rooms, {} time slots",
            schedule_input.courses.len(),
            schedule_input.staff.len(),
            schedule_input.rooms.len(),
            schedule_input.time_slots.len()
        );
    }

    let (schedule_output, csp_result) = orchestrator::run(&schedule_input, quiet)?;

    let formats = parse_formats(format);
    generate_reports(&schedule_output, output, &formats)?;

    if quiet {
        let summary = csit_timetable::reporter::generate_json_summary(&schedule_output)?;
        println!("{}", summary);
    } else {
        print_summary(&schedule_output);
        println!("Reports written to: {}", output.display().to_string().green());
    }

    Ok(ExitCode::from(if csp_result.success { 0 } else { 1 }))
}

fn run_demo() -> anyhow::Result<ExitCode> {
    println!("{}", "CSIT Timetable Demo".bold().cyan());
    println!("{}", "-".repeat(40));

    let demo_path = PathBuf::from("demos/input");
    let output_path = PathBuf::from("demos/output");

    if !demo_path.join("courses.json").exists() {
        eprintln!(
            "{} {}",
            "Warning:".yellow(),
            format!("demo catalog not found at {}", demo_path.display())
        );
        return Ok(ExitCode::from(2));
    }

    run_solve(&demo_path, &output_path, "all", false)
}

fn run_validate(input: &PathBuf, verbose: bool) -> anyhow::Result<ExitCode> {
    let schedule_input = load_input_from_dir(input).context("Failed to load input data")?;
    validate_input(&schedule_input).context("Input failed validation")?;

    let problem = orchestrator::build(&schedule_input)?;
    let result = orchestrator::solve(&problem, &SolveControl::new());
    let report = validate_result(
        &problem.variables,
        &problem.domains,
        &result,
        &problem.slots,
        &problem.config,
    );

    if report.is_valid {
        println!("{}", "✓ Result satisfies every invariant".green().bold());
    } else {
        println!("{}", "✗ Result violates an invariant".red().bold());
        for v in &report.violations {
            println!("  - {}: {}", v.constraint.red(), v.message);
        }
    }

    if verbose {
        println!("\n{}", "Statistics:".bold());
        println!("  Variables: {}", report.statistics.total_variables);
        println!("  Assigned:  {}", report.statistics.total_assigned);
        println!(
            "  Soft cost: reported={} recomputed={} (match: {})",
            report.soft_score.reported, report.soft_score.recomputed, report.soft_score.matches
        );
    }

    Ok(ExitCode::from(if report.is_valid { 0 } else { 1 }))
}

fn run_report(schedule_path: &PathBuf, format: &str) -> anyhow::Result<ExitCode> {
    let content = std::fs::read_to_string(schedule_path).context("Failed to read schedule file")?;
    let output: csit_timetable::wire::ScheduleOutput = serde_json::from_str(&content)?;

    match format.to_lowercase().as_str() {
        "json" => println!("{}", csit_timetable::reporter::generate_json_report(&output)?),
        "text" | "txt" => println!("{}", csit_timetable::reporter::generate_text_report(&output)),
        _ => println!("{}", csit_timetable::reporter::generate_markdown_report(&output)),
    }

    Ok(ExitCode::from(0))
}

//! Orchestrator (spec.md §2, §4 "Orchestrator", §6 "Core API").
//!
//! Exposes the two-call external API spec.md §6 names — `build(input) ->
//! Problem` and `solve(problem, cancel?) -> CSPResult` — plus a `run`
//! convenience wrapper that also renders the wire-format `ScheduleOutput`,
//! reporting progress phases the way the teacher's `scheduler/mod.rs`
//! drives its own phase pipeline with an `indicatif::ProgressBar`.

use crate::domain::{build_domains, Domain};
use crate::error::TimetableError;
use crate::generator::build_variables;
use crate::indexer::CatalogIndex;
use crate::solver::{self, control::Phase, SolveControl};
use crate::types::{CspResult, ScheduleConfig, ScheduleInput, SessionVariable, TimeSlot};
use crate::wire::{build_schedule_output, ScheduleOutput};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;

/// A fully built CSP instance: variables, their domains, and the slice of
/// `ScheduleInput` the solver needs, all owned so the catalog indexer's
/// borrow can be dropped once `build` returns.
pub struct Problem {
    pub variables: Vec<SessionVariable>,
    pub domains: Vec<Domain>,
    pub slots: Vec<TimeSlot>,
    pub config: ScheduleConfig,
}

/// Builds a `Problem` from a `ScheduleInput`: indexes the catalog,
/// generates variables, and constructs domains. Returns `Err` only for an
/// `InputError` (spec.md §7) — a variable id collision (invariant 2). An
/// empty domain is NOT an input error; it's reported by `solve` as
/// `hard_violations = 1` (spec.md §4.2).
pub fn build(input: &ScheduleInput) -> crate::Result<Problem> {
    let index = CatalogIndex::build(input);
    let variables = build_variables(input, &index);
    check_var_id_uniqueness(&variables)?;
    let domains = build_domains(&variables, &index, input.config.full_day_slot_count);

    Ok(Problem {
        variables,
        domains,
        slots: input.time_slots.clone(),
        config: input.config.clone(),
    })
}

fn check_var_id_uniqueness(variables: &[SessionVariable]) -> crate::Result<()> {
    let mut seen = HashSet::new();
    for v in variables {
        if !seen.insert(&v.var_id) {
            return Err(TimetableError::VarIdCollision {
                var_id: v.var_id.0.clone(),
            }
            .into());
        }
    }
    Ok(())
}

/// Runs the backtracking solver over a built `Problem` (spec.md §6
/// `solve(problem, cancel?)`).
pub fn solve(problem: &Problem, control: &SolveControl) -> CspResult {
    solver::solve(&problem.variables, &problem.domains, &problem.slots, &problem.config, control)
}

/// Runs one full solve over `input` and renders the wire-format output.
/// `quiet` suppresses the progress bar, matching the teacher's
/// `generate_schedule(&input, quiet)` convention.
pub fn run(input: &ScheduleInput, quiet: bool) -> crate::Result<(ScheduleOutput, CspResult)> {
    run_with_control(input, quiet, &SolveControl::new())
}

pub fn run_with_control(
    input: &ScheduleInput,
    quiet: bool,
    control: &SolveControl,
) -> crate::Result<(ScheduleOutput, CspResult)> {
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(3);
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} [{bar:30.cyan/blue}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    };

    progress.set_message(Phase::BuildingVariables.label());
    control.report(Phase::BuildingVariables);
    let index = CatalogIndex::build(input);
    let variables = build_variables(input, &index);
    check_var_id_uniqueness(&variables)?;
    progress.inc(1);

    progress.set_message(Phase::BuildingDomains.label());
    control.report(Phase::BuildingDomains);
    let domains = build_domains(&variables, &index, input.config.full_day_slot_count);
    progress.inc(1);

    progress.set_message(Phase::Solving.label());
    control.report(Phase::Solving);
    let result = solver::solve(&variables, &domains, &input.time_slots, &input.config, control);
    progress.inc(1);
    progress.finish_and_clear();

    let output = build_schedule_output(&variables, &result, &index, ("09:00AM", "03:45PM"));
    Ok((output, result))
}

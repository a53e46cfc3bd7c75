//! Variable Generator (spec.md §4.1).
//!
//! Translates the course catalog into the exact set of session variables.
//! Two generators are provided: the fixed-whitelist generator
//! (`fixed::build_variables`) that spec.md describes as the primary path,
//! and the richer, roster-aware generator (`rich::build_variables`) used
//! "when richer catalogs are available" — selected by the orchestrator
//! based on `ScheduleInput::has_rosters`.

mod fixed;
mod rich;

pub use fixed::build_variables as build_fixed_variables;
pub use rich::build_variables as build_rich_variables;

use crate::indexer::CatalogIndex;
use crate::types::{ScheduleInput, SessionVariable};

/// Build the ordered list of session variables for this input, choosing
/// the generator variant per SPEC_FULL.md §4: the richer generator runs
/// when group/section rosters are present, otherwise the fixed-whitelist
/// generator matching the original Python solver runs.
pub fn build_variables(input: &ScheduleInput, index: &CatalogIndex) -> Vec<SessionVariable> {
    if input.has_rosters() {
        build_rich_variables(input, index)
    } else {
        build_fixed_variables(input, index)
    }
}

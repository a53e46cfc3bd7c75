use super::{AssignmentValue, VarId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of a solve (spec.md §3 "CSPResult").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CspResult {
    pub success: bool,
    pub assignments: HashMap<VarId, AssignmentValue>,
    pub hard_violations: u32,
    pub soft_cost: i64,
    pub solve_seconds: f64,
}

impl CspResult {
    pub fn failure(hard_violations: u32, solve_seconds: f64) -> Self {
        Self {
            success: false,
            assignments: HashMap::new(),
            hard_violations,
            soft_cost: 0,
            solve_seconds,
        }
    }
}

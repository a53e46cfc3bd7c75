use super::{CourseId, VarId};
use serde::{Deserialize, Serialize};

/// The kind of teaching session a variable represents. Full-day is a
/// property of a GradProject instance, not a separate variant
/// (spec.md §9 "Dynamic typing of session variants").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionType {
    Lecture,
    Lab,
    Tutorial,
    GradProject,
}

/// One schedulable session for one cohort — a lecture, lab, tutorial, or
/// graduation-project meeting (spec.md §3 "Session Variable").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionVariable {
    pub var_id: VarId,
    pub course_id: CourseId,
    pub year: i32,
    /// 0 means "not a group-level entity".
    pub group_id: i32,
    /// 0 means "whole group" (no section split).
    pub section_id: i32,
    #[serde(default)]
    pub specialization: String,
    pub session_type: SessionType,
    pub length_min: i32,
    #[serde(default)]
    pub is_full_day: bool,
    /// Set by the richer generator for doubled tutorial/lab sessions that
    /// must land on a consecutive pair of slots.
    #[serde(default)]
    pub needs_consecutive_pair: bool,
}

impl SessionVariable {
    pub fn is_lecture(&self) -> bool {
        self.session_type == SessionType::Lecture
    }

    pub fn is_lab(&self) -> bool {
        self.session_type == SessionType::Lab
    }
}

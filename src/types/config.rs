use super::CourseId;
use serde::{Deserialize, Serialize};

/// Tunable configuration for the variable generator and soft-cost
/// accountant. Defaults reproduce the literal constants the original
/// Python solver hard-coded (spec.md §4.1, §4.6); exposing them here lets
/// a deployment override via `config.toml` without touching code, per
/// spec.md §9 ("exposing them as configuration is prudent but not
/// required").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_year1")]
    pub year1_whitelist: Vec<CourseId>,
    #[serde(default = "default_year2")]
    pub year2_whitelist: Vec<CourseId>,
    #[serde(default = "default_year3")]
    pub year3_whitelist: Vec<CourseId>,
    #[serde(default = "default_japanese")]
    pub japanese_language_courses: Vec<CourseId>,
    #[serde(default = "default_specializations")]
    pub specializations: Vec<String>,
    #[serde(default = "default_lecture_length")]
    pub lecture_length_min: i32,
    #[serde(default = "default_lab_length")]
    pub lab_length_min: i32,
    #[serde(default = "default_full_day_slot_count")]
    pub full_day_slot_count: usize,
    #[serde(default = "default_earliest_start_weight")]
    pub earliest_start_weight: i64,
    #[serde(default = "default_repeat_day_weight")]
    pub repeat_day_weight: i64,
}

fn ids(raw: &[&str]) -> Vec<CourseId> {
    raw.iter().map(|s| CourseId::from(*s)).collect()
}

fn default_year1() -> Vec<CourseId> {
    ids(&[
        "LRA401", "CSC111", "MTH111", "PHY113", "ECE111", "LRA101", "LRA104", "LRA105",
    ])
}

fn default_year2() -> Vec<CourseId> {
    ids(&[
        "MTH212", "ACM215", "LRA403", "CSC211", "CNC111", "CSC114", "CSE214", "LRA306",
    ])
}

fn default_year3() -> Vec<CourseId> {
    ids(&[
        "AID311", "AID312", "BIF311", "CNC311", "CNC312", "CNC314", "CSC314", "CSC317", "ECE324",
    ])
}

fn default_japanese() -> Vec<CourseId> {
    ids(&["LRA401", "LRA403"])
}

fn default_specializations() -> Vec<String> {
    vec!["AID".into(), "BIF".into(), "CSC".into(), "CNC".into()]
}

fn default_lecture_length() -> i32 {
    90
}

fn default_lab_length() -> i32 {
    90
}

fn default_full_day_slot_count() -> usize {
    8
}

fn default_earliest_start_weight() -> i64 {
    5
}

fn default_repeat_day_weight() -> i64 {
    2
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            year1_whitelist: default_year1(),
            year2_whitelist: default_year2(),
            year3_whitelist: default_year3(),
            japanese_language_courses: default_japanese(),
            specializations: default_specializations(),
            lecture_length_min: default_lecture_length(),
            lab_length_min: default_lab_length(),
            full_day_slot_count: default_full_day_slot_count(),
            earliest_start_weight: default_earliest_start_weight(),
            repeat_day_weight: default_repeat_day_weight(),
        }
    }
}

impl ScheduleConfig {
    pub fn whitelist_for_year(&self, year: i32) -> Option<&[CourseId]> {
        match year {
            1 => Some(&self.year1_whitelist),
            2 => Some(&self.year2_whitelist),
            3 => Some(&self.year3_whitelist),
            _ => None,
        }
    }

    pub fn is_japanese(&self, course_id: &CourseId) -> bool {
        self.japanese_language_courses.contains(course_id)
    }
}

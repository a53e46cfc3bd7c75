//! JSON/TOML catalog loading (spec.md §6 "ScheduleInput"), adapted from
//! the teacher's `parser/json.rs::load_input_from_dir`.

use crate::error::TimetableError;
use crate::types::{
    Course, GroupRoster, Room, ScheduleConfig, ScheduleInput, Staff, StaffCourse, TimeSlot,
};
use std::fs;
use std::path::Path;

/// Loads a full `ScheduleInput` from a directory of catalog files:
/// `courses.json`, `staff.json`, `rooms.json`, `time_slots.json`
/// (required), `staff_courses.json` and `group_rosters.json` (optional,
/// default to empty), `config.toml` (optional, defaults to
/// `ScheduleConfig::default()`).
pub fn load_input_from_dir(dir: &Path) -> crate::Result<ScheduleInput> {
    let courses = load_courses(&dir.join("courses.json"))?;
    let staff = load_staff(&dir.join("staff.json"))?;
    let rooms = load_rooms(&dir.join("rooms.json"))?;
    let time_slots = load_time_slots(&dir.join("time_slots.json"))?;
    let staff_courses = load_optional_json_file(&dir.join("staff_courses.json"))?.unwrap_or_default();
    let group_rosters = load_optional_json_file(&dir.join("group_rosters.json"))?.unwrap_or_default();
    let config = load_config_or_default(&dir.join("config.toml"));

    Ok(ScheduleInput {
        courses,
        staff,
        staff_courses,
        rooms,
        time_slots,
        group_rosters,
        config,
    })
}

pub fn load_courses(path: &Path) -> crate::Result<Vec<Course>> {
    load_json_file(path)
}

pub fn load_staff(path: &Path) -> crate::Result<Vec<Staff>> {
    load_json_file(path)
}

pub fn load_staff_courses(path: &Path) -> crate::Result<Vec<StaffCourse>> {
    load_json_file(path)
}

pub fn load_rooms(path: &Path) -> crate::Result<Vec<Room>> {
    load_json_file(path)
}

pub fn load_time_slots(path: &Path) -> crate::Result<Vec<TimeSlot>> {
    load_json_file(path)
}

pub fn load_group_rosters(path: &Path) -> crate::Result<Vec<GroupRoster>> {
    load_json_file(path)
}

/// Loads `config.toml`, or returns `ScheduleConfig::default()` if the file
/// is absent or unparsable, matching the teacher's lenient config loading.
pub fn load_config_or_default(path: &Path) -> ScheduleConfig {
    if !path.exists() {
        return ScheduleConfig::default();
    }
    match fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_default(),
        Err(_) => ScheduleConfig::default(),
    }
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> crate::Result<T> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| TimetableError::FileRead {
        path: path_str.clone(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| {
        TimetableError::JsonParse {
            file: path_str,
            message: e.to_string(),
        }
        .into()
    })
}

/// Like `load_json_file`, but returns `Ok(None)` instead of erroring when
/// the file doesn't exist (used for optional catalog inputs).
fn load_optional_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> crate::Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    load_json_file(path).map(Some)
}

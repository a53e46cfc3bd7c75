use super::{Course, Room, ScheduleConfig, Staff, StaffCourse, TimeSlot};
use serde::{Deserialize, Serialize};

/// A group/section enrollment roster, used by the richer variable
/// generator and the capacity-floor domain predicate (spec.md §4.1
/// "second variant", §4.2 capacity floor). Optional: a catalog without
/// rosters still generates the fixed-whitelist lecture/lab variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRoster {
    pub year: i32,
    pub specialization: String,
    pub group_id: i32,
    /// Section numbers present within this group, with student counts.
    pub sections: Vec<SectionRoster>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRoster {
    pub section_id: i32,
    pub student_count: u32,
}

impl GroupRoster {
    pub fn total_students(&self) -> u32 {
        self.sections.iter().map(|s| s.student_count).sum()
    }
}

/// Everything the core needs for one solve (spec.md §6 "ScheduleInput").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub courses: Vec<Course>,
    pub staff: Vec<Staff>,
    #[serde(default)]
    pub staff_courses: Vec<StaffCourse>,
    pub rooms: Vec<Room>,
    pub time_slots: Vec<TimeSlot>,
    #[serde(default)]
    pub group_rosters: Vec<GroupRoster>,
    #[serde(default)]
    pub config: ScheduleConfig,
}

impl ScheduleInput {
    pub fn has_rosters(&self) -> bool {
        !self.group_rosters.is_empty()
    }
}

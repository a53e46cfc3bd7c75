use super::{CourseId, StaffId};
use serde::{Deserialize, Serialize};

/// Instructor or teaching-assistant role. Governs which session types a
/// staff member may be assigned to (spec.md §4.2 staff-role rules).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Role {
    Professor,
    AssistantProfessor,
    #[serde(rename = "TA")]
    Ta,
    Other,
}

/// A member of the teaching staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: StaffId,
    pub name: String,
    pub role: Role,
    /// Ordered list of course ids this staff member is qualified for.
    /// Populated by the Catalog Indexer from the join table, or by the
    /// comma-delimited fallback parser (spec.md §9).
    #[serde(default)]
    pub qualified_courses: Vec<CourseId>,
}

/// A join-table row linking a staff member to a course they may teach.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCourse {
    pub staff_id: StaffId,
    pub course_id: CourseId,
}

/// Parse a comma-delimited qualification string into course ids, trimming
/// whitespace and dropping empty tokens. This is the data-recovery path
/// described in spec.md §9 ("Qualification string fallback parser"), used
/// only when the relational join table is empty.
pub fn parse_qualified_courses(raw: &str) -> Vec<CourseId> {
    raw.split(',')
        .map(|tok| tok.trim())
        .filter(|tok| !tok.is_empty())
        .map(CourseId::from)
        .collect()
}

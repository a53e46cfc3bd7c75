use super::CourseId;
use serde::{Deserialize, Serialize};

/// A catalog course. Immutable for the lifetime of a solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub credits: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub year: i32,
    #[serde(default)]
    pub specialization: String,
    pub has_lecture: bool,
    pub has_lab: bool,
    #[serde(default)]
    pub is_grad_project: bool,

    /// Session counts for the richer, group/section-aware generator
    /// (§4.1 "second variant"). Absent catalogs default these to 0,
    /// which keeps the rich generator a no-op for that course.
    #[serde(default)]
    pub lec_count: u32,
    #[serde(default)]
    pub tut_count: u32,
    #[serde(default)]
    pub lab_count: u32,
}

impl Course {
    pub fn in_supported_year_range(&self) -> bool {
        (1..=4).contains(&self.year)
    }

    /// Per spec.md §9 open question: an empty specialization at year 3/4
    /// is treated identically to "Common".
    pub fn is_common(&self) -> bool {
        self.specialization.is_empty() || self.specialization == "Common"
    }

    /// True for the physics-lab course, grounded in `original_source`'s
    /// `get_suitable_halls` special-casing of the exact course id
    /// `PHY113` (matching `generator::rich::is_whole_group_lab`'s same
    /// exact check). Drives the domain builder's physics-room
    /// exclusivity rule (spec.md §3, §4.2).
    pub fn is_physics_lab_course(&self) -> bool {
        self.id.0 == "PHY113"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(year: i32, spec: &str) -> Course {
        Course {
            id: CourseId("CSC111".into()),
            name: "Intro".into(),
            credits: 3,
            kind: "core".into(),
            year,
            specialization: spec.into(),
            has_lecture: true,
            has_lab: false,
            is_grad_project: false,
            lec_count: 0,
            tut_count: 0,
            lab_count: 0,
        }
    }

    #[test]
    fn empty_specialization_is_common() {
        assert!(course(3, "").is_common());
        assert!(course(3, "Common").is_common());
        assert!(!course(3, "AID").is_common());
    }

    #[test]
    fn physics_lab_course_detected_by_id() {
        assert!(course(1, "").is_physics_lab_course() == false);
        let mut c = course(1, "");
        c.id = CourseId("PHY113".into());
        assert!(c.is_physics_lab_course());
    }

    #[test]
    fn year_bounds() {
        assert!(course(1, "").in_supported_year_range());
        assert!(course(4, "").in_supported_year_range());
        assert!(!course(0, "").in_supported_year_range());
        assert!(!course(5, "").in_supported_year_range());
    }
}

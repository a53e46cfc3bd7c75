use super::RoomId;
use serde::{Deserialize, Serialize};

/// The kind of space a room provides. Drives the room-type rule in the
/// Domain Builder (spec.md §4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum RoomType {
    Classroom,
    Theater,
    Hall,
    Lab,
    Other,
}

/// A physical teaching space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub building: String,
    pub name: String,
    pub capacity: u32,
    #[serde(rename = "type")]
    pub kind: RoomType,
}

impl Room {
    /// A room is a *physics lab* iff its space identifier contains both
    /// "PHY" and "LAB" (spec.md §3), case-insensitively as in the original
    /// Python `is_phy_lab` check which upper-cased the space string first.
    pub fn is_physics_lab(&self) -> bool {
        let upper = self.name.to_uppercase();
        upper.contains("PHY") && upper.contains("LAB")
    }

    pub fn meets_capacity(&self, cohort_size: Option<u32>) -> bool {
        match cohort_size {
            Some(n) => (self.capacity as f64) >= 0.8 * (n as f64),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(name: &str, kind: RoomType) -> Room {
        Room {
            id: RoomId::from("R1"),
            building: "B1".into(),
            name: name.into(),
            capacity: 40,
            kind,
        }
    }

    #[test]
    fn physics_lab_requires_both_tokens() {
        assert!(room("PHY LAB 1", RoomType::Lab).is_physics_lab());
        assert!(room("phy_lab_2", RoomType::Lab).is_physics_lab());
        assert!(!room("LAB 1", RoomType::Lab).is_physics_lab());
        assert!(!room("PHY LECTURE HALL", RoomType::Hall).is_physics_lab());
    }

    #[test]
    fn capacity_floor_is_80_percent() {
        let r = room("Classroom 1", RoomType::Classroom);
        assert!(r.meets_capacity(Some(50)));
        assert!(!r.meets_capacity(Some(51)));
        assert!(r.meets_capacity(None));
    }
}

use super::{RoomId, StaffId};
use serde::{Deserialize, Serialize};

/// A candidate (or committed) `(time, room, staff)` triple for a single
/// variable. A full-day assignment implicitly occupies the variable's
/// full run of consecutive slots; `timeslot_index` is the start of that
/// run (spec.md §3 "AssignmentValue").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentValue {
    pub timeslot_index: usize,
    pub room_id: RoomId,
    pub staff_id: StaffId,
}

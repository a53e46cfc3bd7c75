use serde::{Deserialize, Serialize};

/// A single entry in the weekly time grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: i32,
    pub day: String,
    pub start_min: i32,
    pub end_min: i32,
}

impl TimeSlot {
    pub fn length_min(&self) -> i32 {
        self.end_min - self.start_min
    }
}

/// Two slots are consecutive iff they fall on the same day and the first
/// ends exactly when the second starts (spec.md §3).
pub fn is_consecutive(a: &TimeSlot, b: &TimeSlot) -> bool {
    a.day == b.day && a.end_min == b.start_min
}

/// Finds every run of `len` consecutive slot indices on the same day,
/// anchored at each possible start. Used for doubled tutorial/lab slots
/// (`len == 2`) and full-day graduation-project blocks (`len == 8`),
/// grounded in `original_source::get_full_day_slots`.
pub fn consecutive_runs(slots: &[TimeSlot], len: usize) -> Vec<Vec<usize>> {
    if len == 0 || slots.is_empty() {
        return Vec::new();
    }

    let mut runs = Vec::new();
    for start in 0..slots.len() {
        if start + len > slots.len() {
            continue;
        }
        let mut ok = true;
        for w in start..start + len - 1 {
            if !is_consecutive(&slots[w], &slots[w + 1]) {
                ok = false;
                break;
            }
        }
        if ok {
            runs.push((start..start + len).collect());
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: i32, day: &str, start: i32, end: i32) -> TimeSlot {
        TimeSlot {
            id,
            day: day.to_string(),
            start_min: start,
            end_min: end,
        }
    }

    #[test]
    fn consecutive_requires_same_day_and_touching_bounds() {
        let a = slot(0, "Sunday", 540, 630);
        let b = slot(1, "Sunday", 630, 720);
        let c = slot(2, "Monday", 630, 720);
        assert!(is_consecutive(&a, &b));
        assert!(!is_consecutive(&a, &c));
    }

    #[test]
    fn finds_eight_slot_runs() {
        let slots: Vec<TimeSlot> = (0..8)
            .map(|i| slot(i, "Monday", 540 + i * 45, 585 + i * 45))
            .collect();
        let runs = consecutive_runs(&slots, 8);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 8);
    }

    #[test]
    fn no_run_when_gap_present() {
        let mut slots: Vec<TimeSlot> = (0..8)
            .map(|i| slot(i, "Monday", 540 + i * 45, 585 + i * 45))
            .collect();
        slots[4].start_min += 10;
        slots[4].end_min += 10;
        let runs = consecutive_runs(&slots, 8);
        assert!(runs.is_empty());
    }
}

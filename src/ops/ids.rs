use chrono::Utc;

use crate::model::TaskId;

/// Time-based task id source.
///
/// Ids are epoch milliseconds. Two tasks created within the same
/// millisecond, or after the wall clock steps backwards, get `last + 1`,
/// so ids are strictly increasing for the life of the generator.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id from the current wall clock
    pub fn next_id(&mut self) -> TaskId {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Next id given the current time in epoch milliseconds
    pub fn next_at(&mut self, now_millis: i64) -> TaskId {
        let millis = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(millis);
        TaskId::new(millis.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_clock_when_advancing() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at(1_000).as_str(), "1000");
        assert_eq!(ids.next_at(2_500).as_str(), "2500");
    }

    #[test]
    fn same_millisecond_bumps() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at(1_000).as_str(), "1000");
        assert_eq!(ids.next_at(1_000).as_str(), "1001");
        assert_eq!(ids.next_at(1_000).as_str(), "1002");
    }

    #[test]
    fn clock_going_backwards_still_unique() {
        let mut ids = IdGenerator::new();
        ids.next_at(5_000);
        assert_eq!(ids.next_at(10).as_str(), "5001");
        assert_eq!(ids.next_at(6_000).as_str(), "6000");
    }

    #[test]
    fn wall_clock_ids_never_repeat() {
        let mut ids = IdGenerator::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            assert!(seen.insert(ids.next_id()));
        }
    }
}

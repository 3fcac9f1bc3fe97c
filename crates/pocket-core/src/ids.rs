/// Issues transaction ids derived from the creation time in milliseconds.
///
/// Two records created within the same millisecond (or under a clock that
/// went backwards) would share a timestamp, so each id is at least one
/// greater than the previous one.
#[derive(Debug, Clone, Default)]
pub struct MonotonicIds {
    last: Option<i64>,
}

impl MonotonicIds {
    /// Starts after `last`, typically the largest id already in the ledger.
    pub fn seeded(last: Option<i64>) -> Self {
        Self { last }
    }

    pub fn next(&mut self, now_millis: i64) -> i64 {
        let id = match self.last {
            Some(last) if now_millis <= last => last.saturating_add(1),
            _ => now_millis,
        };
        self.last = Some(id);
        id
    }

    /// Records an id issued elsewhere so later ids stay above it.
    pub fn observe(&mut self, id: i64) {
        if self.last.map_or(true, |last| id > last) {
            self.last = Some(id);
        }
    }

    pub fn last(&self) -> Option<i64> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_timestamp_when_clock_moves_forward() {
        let mut ids = MonotonicIds::default();
        assert_eq!(ids.next(1_000), 1_000);
        assert_eq!(ids.next(2_500), 2_500);
    }

    #[test]
    fn same_millisecond_yields_distinct_ids() {
        let mut ids = MonotonicIds::default();
        let first = ids.next(5_000);
        let second = ids.next(5_000);
        let third = ids.next(4_000);
        assert_eq!((first, second, third), (5_000, 5_001, 5_002));
    }

    #[test]
    fn seeded_generator_stays_above_existing_ids() {
        let mut ids = MonotonicIds::seeded(Some(9_000));
        assert_eq!(ids.next(8_000), 9_001);
        ids.observe(20_000);
        assert_eq!(ids.next(10_000), 20_001);
        ids.observe(3);
        assert_eq!(ids.last(), Some(20_001));
    }
}

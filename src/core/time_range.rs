use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Inclusive integer year range rendered along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    start: i32,
    end: i32,
}

impl TimeRange {
    pub fn new(start: i32, end: i32) -> TimelineResult<Self> {
        if end <= start {
            return Err(TimelineError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> i32 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> i32 {
        self.end
    }

    /// Number of integer years in the range, bounds included.
    #[must_use]
    pub fn year_count(self) -> usize {
        (i64::from(self.end) - i64::from(self.start) + 1) as usize
    }

    #[must_use]
    pub fn contains(self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// Zero-based offset of `year` from the range start.
    #[must_use]
    pub fn index_of(self, year: i32) -> Option<usize> {
        self.contains(year)
            .then(|| (i64::from(year) - i64::from(self.start)) as usize)
    }

    pub fn years(self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }

    /// Re-checks the ordering invariant after deserialization.
    pub fn validate(self) -> TimelineResult<Self> {
        Self::new(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::TimeRange;

    #[test]
    fn index_of_is_relative_to_start() {
        let range = TimeRange::new(1700, 1705).expect("valid range");
        assert_eq!(range.year_count(), 6);
        assert_eq!(range.index_of(1700), Some(0));
        assert_eq!(range.index_of(1705), Some(5));
        assert_eq!(range.index_of(1706), None);
        assert_eq!(range.years().collect::<Vec<_>>(), vec![1700, 1701, 1702, 1703, 1704, 1705]);
    }

    #[test]
    fn single_year_range_is_rejected() {
        assert!(TimeRange::new(1700, 1700).is_err());
    }
}

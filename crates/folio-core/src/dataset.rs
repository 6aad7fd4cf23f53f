use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Per-day submission counts for a single year.
pub type DayCounts = BTreeMap<NaiveDate, u32>;

/// Submission counts bucketed by calendar year.
///
/// Built once when the fetch resolves and only read afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct YearBuckets {
    years: BTreeMap<i32, DayCounts>,
}

impl YearBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` for `date`, replacing any earlier value for that day.
    pub fn insert(&mut self, date: NaiveDate, count: u32) {
        self.years
            .entry(date.year())
            .or_default()
            .insert(date, count);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Years present in the dataset, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.years.keys().copied().collect()
    }

    #[inline]
    pub fn year(&self, year: i32) -> Option<&DayCounts> {
        self.years.get(&year)
    }

    /// Count for a day; days without an entry count as zero.
    pub fn count_on(&self, date: NaiveDate) -> u32 {
        self.years
            .get(&date.year())
            .and_then(|days| days.get(&date))
            .copied()
            .unwrap_or(0)
    }

    pub fn year_total(&self, year: i32) -> u64 {
        self.years
            .get(&year)
            .map(|days| days.values().map(|&c| u64::from(c)).sum())
            .unwrap_or(0)
    }

    /// Total number of recorded days across all years.
    pub fn day_count(&self) -> usize {
        self.years.values().map(BTreeMap::len).sum()
    }
}

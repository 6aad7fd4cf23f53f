use crate::dataset::YearBuckets;
use chrono::{Datelike, Duration, NaiveDate};

pub const DAYS_PER_WEEK: usize = 7;

/// Column headers, Sunday first to match the grid layout.
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One square of the heatmap.
///
/// Squares in the partial first/last week that fall outside the year have no
/// date and a zero count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub date: Option<NaiveDate>,
    pub count: u32,
}

impl Cell {
    const PLACEHOLDER: Cell = Cell {
        date: None,
        count: 0,
    };

    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.date.is_none()
    }

    #[inline]
    pub fn level(&self) -> u8 {
        intensity_level(self.count)
    }
}

/// Bucket a daily count into one of five shades (0 = empty).
#[inline]
pub fn intensity_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1 => 1,
        2 => 2,
        3 | 4 => 3,
        _ => 4,
    }
}

/// Weekday of January 1st, counted from Sunday = 0.
#[inline]
pub fn start_weekday(year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

#[inline]
pub fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

/// Number of Sunday-first week columns needed to cover the whole year.
#[inline]
pub fn week_count(year: i32) -> usize {
    let span = (start_weekday(year) + days_in_year(year)) as usize;
    span.div_ceil(DAYS_PER_WEEK)
}

/// Week-by-week layout of one calendar year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearGrid {
    pub year: i32,
    /// The Sunday the first column starts on; may belong to the previous year.
    pub first_day: NaiveDate,
    pub weeks: Vec<[Cell; DAYS_PER_WEEK]>,
}

impl YearGrid {
    /// Lay out `year` and fill in counts from `buckets`.
    ///
    /// Returns `None` only for years chrono cannot represent.
    pub fn build(year: i32, buckets: &YearBuckets) -> Option<Self> {
        let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let first_day = jan1 - Duration::days(i64::from(start_weekday(year)));
        let mut weeks = Vec::with_capacity(week_count(year));
        let mut day = first_day;
        for _ in 0..week_count(year) {
            let mut column = [Cell::PLACEHOLDER; DAYS_PER_WEEK];
            for cell in column.iter_mut() {
                if day.year() == year {
                    *cell = Cell {
                        date: Some(day),
                        count: buckets.count_on(day),
                    };
                }
                day = day.succ_opt()?;
            }
            weeks.push(column);
        }
        Some(Self {
            year,
            first_day,
            weeks,
        })
    }

    #[inline]
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.weeks.iter().flat_map(|w| w.iter())
    }

    /// Sum of the counts shown in the grid.
    pub fn total(&self) -> u64 {
        self.cells().map(|c| u64::from(c.count)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_of_known_years() {
        // 2023-01-01 was a Sunday, 2022-01-01 a Saturday
        assert_eq!(start_weekday(2023), 0);
        assert_eq!(start_weekday(2022), 6);
    }

    #[test]
    fn leap_years() {
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
        assert_eq!(days_in_year(2023), 365);
    }

    #[test]
    fn levels_are_monotonic() {
        let mut prev = 0;
        for c in 0..20 {
            let l = intensity_level(c);
            assert!(l >= prev);
            assert!(l <= 4);
            prev = l;
        }
    }
}

use crate::dataset::YearBuckets;
use crate::error::DataError;
use chrono::NaiveDate;
use serde::Deserialize;

/// Calendar container selectors, highest priority first.
pub const CALENDAR_SELECTORS: [&str; 3] = [".calendar-heatmap", ".submission-calendar", "svg"];

/// Day cells inside a calendar container.
pub const CELL_SELECTOR: &str =
    "rect[data-date], rect[data-count], .day[data-date], .day[data-count]";

pub const DATE_ATTRIBUTES: [&str; 2] = ["data-date", "data-day"];
pub const COUNT_ATTRIBUTES: [&str; 3] = ["data-count", "data-value", "fill-opacity"];

/// JSON body returned by the relay: `{ "contents": "<html>..." }`.
#[derive(Debug, Deserialize)]
pub struct RelayEnvelope {
    #[serde(default)]
    contents: Option<String>,
}

impl RelayEnvelope {
    /// Pull the proxied HTML out of a relay response body.
    pub fn parse(body: &str) -> Result<String, DataError> {
        let envelope: RelayEnvelope = serde_json::from_str(body)?;
        envelope.contents.ok_or(DataError::MissingContents)
    }
}

/// Attribute lookup on one scraped cell.
pub trait CellAttributes {
    fn attribute(&self, name: &str) -> Option<String>;
}

impl<C: CellAttributes + ?Sized> CellAttributes for &C {
    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }
}

/// Run `strategies` in order and return the first result produced.
pub fn first_match<S, T>(strategies: &[S], attempt: impl FnMut(&S) -> Option<T>) -> Option<T> {
    strategies.iter().find_map(attempt)
}

/// First attribute in `names` with a non-empty value.
fn first_present<C: CellAttributes>(cell: &C, names: &[&str]) -> Option<String> {
    first_match(names, |name| cell.attribute(name).filter(|v| !v.is_empty()))
}

/// Date of a cell; `None` when no date attribute is set or it is not `YYYY-MM-DD`.
pub fn cell_date<C: CellAttributes>(cell: &C) -> Option<NaiveDate> {
    let raw = first_present(cell, &DATE_ATTRIBUTES)?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Count of a cell. Missing, negative or non-numeric values count as zero.
pub fn cell_count<C: CellAttributes>(cell: &C) -> u32 {
    first_present(cell, &COUNT_ATTRIBUTES)
        .and_then(|raw| parse_leading_int(&raw))
        .map(|n| n.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

/// Integer prefix of `s` after leading whitespace: `" 42px"` is 42,
/// `"0.8"` is 0, `"abc"` is `None`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    Some(if negative { -value } else { value })
}

/// Build a dataset from calendar cells. Undated cells are skipped; an
/// input with no dated cell at all is an error.
pub fn extract_counts<C, I>(cells: I) -> Result<YearBuckets, DataError>
where
    C: CellAttributes,
    I: IntoIterator<Item = C>,
{
    let mut buckets = YearBuckets::new();
    let mut skipped = 0usize;
    for cell in cells {
        match cell_date(&cell) {
            Some(date) => buckets.insert(date, cell_count(&cell)),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        log::debug!("[scrape] skipped {skipped} cells without a usable date");
    }
    if buckets.is_empty() {
        return Err(DataError::NoDatedCells);
    }
    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_behaves_like_parse_int() {
        assert_eq!(parse_leading_int("3"), Some(3));
        assert_eq!(parse_leading_int("  4px"), Some(4));
        assert_eq!(parse_leading_int("0.75"), Some(0));
        assert_eq!(parse_leading_int("-2"), Some(-2));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("x1"), None);
    }

    #[test]
    fn first_match_stops_at_first_hit() {
        let mut tried = Vec::new();
        let hit = first_match(&["a", "b", "c"], |s| {
            tried.push(*s);
            (*s == "b").then_some(s.len())
        });
        assert_eq!(hit, Some(1));
        assert_eq!(tried, vec!["a", "b"]);
    }
}

// Host-side tests for relay envelope parsing and calendar extraction.

use chrono::NaiveDate;
use folio_core::{cell_count, cell_date, extract_counts, CellAttributes, DataError, RelayEnvelope};
use std::collections::HashMap;

// Stand-in for a parsed DOM element
struct FakeCell(HashMap<String, String>);

impl CellAttributes for FakeCell {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

fn cell(attrs: &[(&str, &str)]) -> FakeCell {
    FakeCell(
        attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn envelope_yields_contents() {
    let html = RelayEnvelope::parse(r#"{"contents":"<svg></svg>","status":{"http_code":200}}"#).unwrap();
    assert_eq!(html, "<svg></svg>");
}

#[test]
fn envelope_errors() {
    assert!(matches!(
        RelayEnvelope::parse(r#"{"status":{}}"#),
        Err(DataError::MissingContents)
    ));
    assert!(matches!(
        RelayEnvelope::parse(r#"{"contents":null}"#),
        Err(DataError::MissingContents)
    ));
    assert!(matches!(
        RelayEnvelope::parse("<html>rate limited</html>"),
        Err(DataError::Envelope(_))
    ));
}

#[test]
fn date_falls_back_to_data_day() {
    assert_eq!(cell_date(&cell(&[("data-day", "2022-03-04")])), Some(ymd(2022, 3, 4)));
    // data-date wins when both are present
    assert_eq!(
        cell_date(&cell(&[("data-date", "2022-03-05"), ("data-day", "2022-03-04")])),
        Some(ymd(2022, 3, 5))
    );
    // an empty data-date falls through
    assert_eq!(
        cell_date(&cell(&[("data-date", ""), ("data-day", "2022-03-04")])),
        Some(ymd(2022, 3, 4))
    );
    assert_eq!(cell_date(&cell(&[("data-date", "March 4")])), None);
    assert_eq!(cell_date(&cell(&[("data-count", "3")])), None);
}

#[test]
fn count_falls_back_through_attributes() {
    assert_eq!(cell_count(&cell(&[("data-count", "4"), ("data-value", "9")])), 4);
    assert_eq!(cell_count(&cell(&[("data-value", "9")])), 9);
    assert_eq!(cell_count(&cell(&[("fill-opacity", "0.6")])), 0);
    assert_eq!(cell_count(&cell(&[("fill-opacity", "2")])), 2);
    assert_eq!(cell_count(&cell(&[("data-count", ""), ("data-value", "3")])), 3);
    assert_eq!(cell_count(&cell(&[("data-count", "n/a")])), 0);
    assert_eq!(cell_count(&cell(&[("data-count", "-4")])), 0);
    assert_eq!(cell_count(&cell(&[])), 0);
}

#[test]
fn extract_buckets_dated_cells_and_skips_the_rest() {
    let cells = vec![
        cell(&[("data-date", "2021-12-31"), ("data-count", "2")]),
        cell(&[("data-date", "2022-01-01"), ("data-count", "5")]),
        cell(&[("data-count", "7")]),
        cell(&[("data-day", "2022-01-02"), ("data-value", "1")]),
    ];
    let b = extract_counts(&cells).unwrap();
    assert_eq!(b.years(), vec![2021, 2022]);
    assert_eq!(b.year_total(2022), 6);
    assert_eq!(b.count_on(ymd(2021, 12, 31)), 2);
    assert_eq!(b.day_count(), 3);
}

#[test]
fn extract_without_dates_is_an_error() {
    let cells = vec![cell(&[("data-count", "1")]), cell(&[("fill-opacity", "0.3")])];
    assert!(matches!(extract_counts(&cells), Err(DataError::NoDatedCells)));
    let none: Vec<FakeCell> = Vec::new();
    assert!(matches!(extract_counts(none), Err(DataError::NoDatedCells)));
}

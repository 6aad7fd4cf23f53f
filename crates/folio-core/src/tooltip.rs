use chrono::NaiveDate;

/// "1 submission", "3 submissions".
pub fn count_label(count: u32) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} submission{plural}")
}

/// Long US-style date, e.g. "Monday, March 4, 2024".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Tooltip body for a dated square.
pub fn tooltip_html(count: u32, date: NaiveDate) -> String {
    format!("<strong>{}</strong><br>{}", count_label(count), long_date(date))
}

pub fn title_text(total: u64, year: i32) -> String {
    format!("{total} submissions in {year}")
}

pub fn footer_text(total: u64) -> String {
    format!("{total} total submissions")
}

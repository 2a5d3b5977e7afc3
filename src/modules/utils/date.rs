use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

/// Due dates are entered and stored as `DD-MM-YYYY`
pub const DUE_DATE_FORMAT: &str = "%d-%m-%Y";

lazy_static! {
    // chrono accepts single-digit days and long years, so the shape is checked first
    static ref DUE_DATE_SHAPE: Regex = Regex::new(r"^\d{2}-\d{2}-\d{4}$").unwrap();
}

/// Parse a due date, rejecting anything that is not a real `DD-MM-YYYY` calendar day
pub fn parse_due_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if !DUE_DATE_SHAPE.is_match(trimmed) {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT).ok()
}

/// Format a date the way it is stored
pub fn format_due_date(date: NaiveDate) -> String {
    date.format(DUE_DATE_FORMAT).to_string()
}

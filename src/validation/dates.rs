use chrono::{Datelike, NaiveDate};

pub struct DateValidator;

impl DateValidator {
    /// A field value is a valid date when it parses as DD/MM/YYYY, names a
    /// real calendar date, and falls in the 1900-2100 year range.
    pub fn is_valid(value: &str) -> bool {
        match NaiveDate::parse_from_str(value, "%d/%m/%Y") {
            Ok(date) => (1900..=2100).contains(&date.year()),
            Err(_) => false,
        }
    }
}

//! Display formatting for catalog fields.
//!
//! Small helpers shared by whatever front end renders the catalog.
//! Absent values format as explicit "Unknown ..." strings rather than
//! blanks, so a sparse record still reads sensibly.

use chrono::NaiveDate;

/// Format a release date in long human form, e.g. "September 15, 2021".
pub fn format_release_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => "Unknown release date".to_string(),
    }
}

/// Format a runtime in minutes as "2h 35min".
pub fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        Some(minutes) => {
            let hours = minutes / 60;
            let mins = minutes % 60;
            format!("{hours}h {mins}min")
        }
        None => "Unknown runtime".to_string(),
    }
}

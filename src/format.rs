//! Rendering of due dates for display.

use chrono::NaiveDateTime;

/// `MM/dd/yyyy HH:mm`
pub const DATE_FORMAT: &str = "%m/%d/%Y %H:%M";

pub fn format_due(due: &NaiveDateTime) -> String {
    due.format(DATE_FORMAT).to_string()
}

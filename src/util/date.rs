//! Date text conversion between the API/input-field form (`YYYY-MM-DD`) and
//! the display form (`DD.MM.YYYY`).
//!
//! Conversion is purely textual: segments are swapped, never parsed. Inputs
//! that do not have exactly three segments are returned as given.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// `YYYY-MM-DD` → `DD.MM.YYYY`.
#[must_use]
pub fn format_date(date: &str) -> String {
    reverse_segments(date, '-', '.')
}

/// `DD.MM.YYYY` → `YYYY-MM-DD`.
#[must_use]
pub fn format_date_for_input(date: &str) -> String {
    reverse_segments(date, '.', '-')
}

fn reverse_segments(date: &str, from: char, to: char) -> String {
    if date.is_empty() {
        return String::new();
    }
    let parts: Vec<&str> = date.split(from).collect();
    let [first, second, third] = parts.as_slice() else {
        return date.to_owned();
    };
    format!("{third}{to}{second}{to}{first}")
}

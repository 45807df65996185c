use super::*;

// =============================================================
// format_date
// =============================================================

#[test]
fn format_date_reorders_iso_date() {
    assert_eq!(format_date("2026-01-21"), "21.01.2026");
}

#[test]
fn format_date_empty_is_empty() {
    assert_eq!(format_date(""), "");
}

#[test]
fn format_date_does_not_pad_or_validate() {
    assert_eq!(format_date("2026-1-21"), "21.1.2026");
    assert_eq!(format_date("2026-13-45"), "45.13.2026");
    assert_eq!(format_date("a-b-c"), "c.b.a");
}

#[test]
fn format_date_passes_through_wrong_arity() {
    assert_eq!(format_date("not a date"), "not a date");
    assert_eq!(format_date("2026-01"), "2026-01");
    assert_eq!(format_date("2026-01-21-extra"), "2026-01-21-extra");
    assert_eq!(format_date("21.01.2026"), "21.01.2026");
}

#[test]
fn format_date_reorders_any_three_dash_segments() {
    // Hyphenated words still split into three parts.
    assert_eq!(format_date("not-a-date"), "date.a.not");
}

#[test]
fn format_date_keeps_empty_segments() {
    assert_eq!(format_date("--"), "..");
    assert_eq!(format_date("2026--21"), "21..2026");
}

// =============================================================
// format_date_for_input
// =============================================================

#[test]
fn format_date_for_input_reorders_display_date() {
    assert_eq!(format_date_for_input("21.01.2026"), "2026-01-21");
}

#[test]
fn format_date_for_input_empty_is_empty() {
    assert_eq!(format_date_for_input(""), "");
}

#[test]
fn format_date_for_input_passes_through_wrong_arity() {
    assert_eq!(format_date_for_input("2026-01-21"), "2026-01-21");
    assert_eq!(format_date_for_input("21.01"), "21.01");
}

#[test]
fn display_then_input_round_trips_iso_dates() {
    for date in ["2026-01-21", "1999-12-31", "2024-02-29", "0001-01-01"] {
        assert_eq!(format_date_for_input(&format_date(date)), date);
    }
}

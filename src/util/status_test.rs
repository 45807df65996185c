use super::*;

#[test]
fn clean_status_keeps_known_labels() {
    for status in Status::ALL {
        assert_eq!(clean_status(status.label()), status.label());
    }
}

#[test]
fn clean_status_passes_unknown_through() {
    assert_eq!(clean_status("Storniert"), "Storniert");
    assert_eq!(clean_status(""), "");
}

#[test]
fn clean_status_is_case_sensitive_and_untrimmed() {
    assert_eq!(clean_status("geplant"), "geplant");
    assert_eq!(clean_status(" Geplant"), " Geplant");
    assert_eq!(Status::from_label("in bearbeitung"), None);
}

#[test]
fn from_label_inverts_label() {
    for status in Status::ALL {
        assert_eq!(Status::from_label(status.label()), Some(status));
    }
}

#[test]
fn tally_counts_each_status_and_total() {
    let counts = StatusCounts::tally(["Geplant", "Abgeschlossen", "Geplant", "In Bearbeitung", "Storniert"]);
    assert_eq!(counts.total, 5);
    assert_eq!(counts.get(Status::Planned), 2);
    assert_eq!(counts.get(Status::InProgress), 1);
    assert_eq!(counts.get(Status::Completed), 1);
}

#[test]
fn tally_of_nothing_is_zero() {
    assert_eq!(StatusCounts::tally(std::iter::empty()), StatusCounts::default());
}

#[test]
fn counts_use_stats_payload_field_names() {
    let counts: StatusCounts = serde_json::from_value(serde_json::json!({
        "total": 4,
        "geplant": 1,
        "in_bearbeitung": 2,
        "abgeschlossen": 1
    }))
    .unwrap();
    assert_eq!(counts, StatusCounts { total: 4, planned: 1, in_progress: 2, completed: 1 });
    assert_eq!(serde_json::to_value(counts).unwrap()["in_bearbeitung"], 2);
}

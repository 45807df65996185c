//! Review-meeting status labels.
//!
//! DESIGN
//! ======
//! The backend stores statuses as German display labels. `clean_status` maps
//! known labels through a fixed table and passes anything else through, so a
//! rename only has to touch [`Status::label`].

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use serde::{Deserialize, Serialize};

/// Known meeting statuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Planned,
    InProgress,
    Completed,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Planned, Self::InProgress, Self::Completed];

    /// Exact, case-sensitive match against the stored labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Geplant" => Some(Self::Planned),
            "In Bearbeitung" => Some(Self::InProgress),
            "Abgeschlossen" => Some(Self::Completed),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Planned => "Geplant",
            Self::InProgress => "In Bearbeitung",
            Self::Completed => "Abgeschlossen",
        }
    }
}

/// Canonical label for a known status, otherwise `status` unchanged.
#[must_use]
pub fn clean_status(status: &str) -> String {
    Status::from_label(status).map_or_else(|| status.to_owned(), |known| known.label().to_owned())
}

/// Per-status totals shown on the dashboard stat cards.
///
/// Field names follow the `/api/stats` payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    #[serde(rename = "geplant")]
    pub planned: usize,
    #[serde(rename = "in_bearbeitung")]
    pub in_progress: usize,
    #[serde(rename = "abgeschlossen")]
    pub completed: usize,
}

impl StatusCounts {
    /// Count `labels`. Unknown labels add to `total` only.
    pub fn tally<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = Self::default();
        for label in labels {
            counts.total += 1;
            match Status::from_label(label) {
                Some(Status::Planned) => counts.planned += 1,
                Some(Status::InProgress) => counts.in_progress += 1,
                Some(Status::Completed) => counts.completed += 1,
                None => {}
            }
        }
        counts
    }

    #[must_use]
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Planned => self.planned,
            Status::InProgress => self.in_progress,
            Status::Completed => self.completed,
        }
    }
}

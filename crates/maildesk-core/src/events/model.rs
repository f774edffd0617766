//! Event data models.

use chrono::NaiveDate;
use maildesk_store::new_id;
use serde::{Deserialize, Serialize};

/// A calendar entry on a specific day.
///
/// The time of day is kept as a zero-padded `"HH:MM"` 24-hour string, which
/// sorts correctly as text and round-trips without a timezone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier.
    pub id: String,
    /// What the event is.
    pub title: String,
    /// Day of the event (ISO calendar date).
    pub date: NaiveDate,
    /// Time of day as `"HH:MM"`, 24-hour.
    #[serde(default)]
    pub time: String,
    /// Optional location.
    #[serde(default)]
    pub location: String,
    /// Attendee names or addresses.
    #[serde(default)]
    pub attendees: Vec<String>,
    /// Display color token.
    #[serde(default)]
    pub color: String,
}

impl Event {
    /// Build a new event on `date`, filling defaults for anything omitted.
    #[must_use]
    pub fn from_params(date: NaiveDate, params: EventParams) -> Self {
        Self {
            id: new_id(),
            title: params.title.unwrap_or_else(|| "Untitled".to_string()),
            date,
            time: params.time.unwrap_or_else(|| "09:00".to_string()),
            location: params.location.unwrap_or_default(),
            attendees: params.attendees,
            color: params.color.unwrap_or_else(|| "blue".to_string()),
        }
    }
}

/// Partial input for creating an event.
#[derive(Debug, Clone, Default)]
pub struct EventParams {
    /// Title; defaults to "Untitled".
    pub title: Option<String>,
    /// Time of day as `"HH:MM"`; defaults to "09:00".
    pub time: Option<String>,
    /// Location; defaults to empty.
    pub location: Option<String>,
    /// Attendees; defaults to none.
    pub attendees: Vec<String>,
    /// Display color; defaults to "blue".
    pub color: Option<String>,
}

/// A shallow merge applied to an existing event.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    /// Replace the title.
    pub title: Option<String>,
    /// Move to another day.
    pub date: Option<NaiveDate>,
    /// Replace the time of day.
    pub time: Option<String>,
    /// Replace the location.
    pub location: Option<String>,
    /// Replace the attendee list.
    pub attendees: Option<Vec<String>>,
    /// Replace the display color.
    pub color: Option<String>,
}

impl EventPatch {
    /// Merge this patch into `event`.
    pub fn apply(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(time) = self.time {
            event.time = time;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(attendees) = self.attendees {
            event.attendees = attendees;
        }
        if let Some(color) = self.color {
            event.color = color;
        }
    }
}

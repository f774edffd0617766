//! Event storage repository.

use chrono::NaiveDate;
use maildesk_store::{CollectionStore, UserId};

use super::model::{Event, EventParams, EventPatch};
use crate::repository::{Record, Repository};

impl Record for Event {
    const COLLECTION: &'static str = "events";

    fn id(&self) -> &str {
        &self.id
    }

    // Chronological, earliest first; "HH:MM" strings order correctly as
    // text.
    fn sort(records: &mut [Self]) {
        records.sort_by(|a, b| (a.date, a.time.as_str()).cmp(&(b.date, b.time.as_str())));
    }
}

/// Repository for event storage and retrieval.
pub struct EventRepository {
    repo: Repository<Event>,
}

impl EventRepository {
    /// Create a repository over the given store.
    #[must_use]
    pub fn new(store: CollectionStore) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Schedule an event on `date` and persist it.
    pub fn create(&self, user: &UserId, date: NaiveDate, params: EventParams) -> Event {
        self.repo.insert(user, Event::from_params(date, params))
    }

    /// Shallow-merge `patch` into the event with `id`; `None` if not found.
    pub fn update(&self, user: &UserId, id: &str, patch: EventPatch) -> Option<Event> {
        self.repo.update_with(user, id, |event| patch.apply(event))
    }

    /// Delete the event with `id`; returns the remaining events.
    pub fn remove(&self, user: &UserId, id: &str) -> Vec<Event> {
        self.repo.remove(user, id)
    }

    /// All events, chronologically.
    #[must_use]
    pub fn list(&self, user: &UserId) -> Vec<Event> {
        self.repo.list(user)
    }

    /// Events on one day, ordered by time.
    #[must_use]
    pub fn on_date(&self, user: &UserId, date: NaiveDate) -> Vec<Event> {
        let mut events = self.list(user);
        events.retain(|e| e.date == date);
        events
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn repo() -> EventRepository {
        EventRepository::new(CollectionStore::in_memory(
            maildesk_store::KeyBuilder::new("maildesk", "test-app"),
        ))
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make(repo: &EventRepository, user: &UserId, title: &str, date: NaiveDate, time: &str) {
        repo.create(
            user,
            date,
            EventParams {
                title: Some(title.to_string()),
                time: Some(time.to_string()),
                ..EventParams::default()
            },
        );
    }

    #[test]
    fn list_is_chronological() {
        let repo = repo();
        let user = UserId::new("u_test");
        make(&repo, &user, "standup", day(2026, 8, 7), "09:30");
        make(&repo, &user, "lunch", day(2026, 8, 6), "12:00");
        make(&repo, &user, "review", day(2026, 8, 6), "09:00");

        let titles: Vec<String> = repo.list(&user).into_iter().map(|e| e.title).collect();
        assert_eq!(titles, ["review", "lunch", "standup"]);
    }

    #[test]
    fn on_date_filters_to_one_day() {
        let repo = repo();
        let user = UserId::new("u_test");
        make(&repo, &user, "a", day(2026, 8, 6), "10:00");
        make(&repo, &user, "b", day(2026, 8, 7), "10:00");

        let today = repo.on_date(&user, day(2026, 8, 6));
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].title, "a");
    }

    #[test]
    fn moving_an_event_changes_its_day() {
        let repo = repo();
        let user = UserId::new("u_test");
        let event = repo.create(&user, day(2026, 8, 6), EventParams::default());

        repo.update(
            &user,
            &event.id,
            EventPatch {
                date: Some(day(2026, 8, 8)),
                ..EventPatch::default()
            },
        )
        .unwrap();

        assert!(repo.on_date(&user, day(2026, 8, 6)).is_empty());
        assert_eq!(repo.on_date(&user, day(2026, 8, 8)).len(), 1);
    }
}

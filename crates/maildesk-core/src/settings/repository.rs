//! Settings storage repository.

use maildesk_store::{CollectionStore, UserId};

use super::model::Settings;

const COLLECTION: &str = "settings";

/// Repository for the per-user settings singleton.
pub struct SettingsRepository {
    store: CollectionStore,
}

impl SettingsRepository {
    /// Create a repository over the given store.
    #[must_use]
    pub fn new(store: CollectionStore) -> Self {
        Self { store }
    }

    /// The user's settings, or the defaults when nothing usable is stored.
    #[must_use]
    pub fn load(&self, user: &UserId) -> Settings {
        self.store.load_value(user, COLLECTION).unwrap_or_default()
    }

    /// Replace the stored settings wholesale.
    pub fn save(&self, user: &UserId, settings: &Settings) {
        self.store.save_value(user, COLLECTION, settings);
    }

    /// Load, mutate, and persist in one step; returns the new settings.
    pub fn update<F>(&self, user: &UserId, apply: F) -> Settings
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.load(user);
        apply(&mut settings);
        self.save(user, &settings);
        settings
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::settings::FontSize;
    use maildesk_store::KeyBuilder;

    fn repo() -> SettingsRepository {
        SettingsRepository::new(CollectionStore::in_memory(KeyBuilder::new(
            "maildesk", "test-app",
        )))
    }

    #[test]
    fn load_without_stored_settings_yields_defaults() {
        let repo = repo();
        let user = UserId::new("u_test");
        assert_eq!(repo.load(&user), Settings::default());
    }

    #[test]
    fn update_persists_the_change() {
        let repo = repo();
        let user = UserId::new("u_test");

        let updated = repo.update(&user, |s| {
            s.dark_mode = true;
            s.font_size = FontSize::Large;
        });
        assert!(updated.dark_mode);

        let loaded = repo.load(&user);
        assert!(loaded.dark_mode);
        assert_eq!(loaded.font_size, FontSize::Large);
        // Untouched fields keep their values.
        assert!(loaded.notifications_enabled);
    }

    #[test]
    fn corrupt_settings_fall_back_to_defaults() {
        let repo = repo();
        let user = UserId::new("u_test");
        repo.update(&user, |s| s.dark_mode = true);

        let key = repo.store.keys().collection_key(&user, "settings");
        repo.store.backend().write(&key, "{not json").unwrap();

        assert_eq!(repo.load(&user), Settings::default());
    }
}

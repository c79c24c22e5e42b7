//! UI preferences slot: theme, language, sidebar state.

use serde::{Deserialize, Serialize};

use crate::slot::StorageSlot;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub sidebar_collapsed: bool,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: default_language(),
            sidebar_collapsed: false,
        }
    }
}

/// Preferences persisted to their own slot, independent of the session.
pub struct PreferencesStore {
    slot: StorageSlot,
    current: UiPreferences,
}

impl PreferencesStore {
    /// Hydrate from the slot; corrupt or missing data falls back to defaults.
    pub fn open(slot: StorageSlot) -> Self {
        let current = slot.read().unwrap_or_default();
        Self { slot, current }
    }

    pub fn get(&self) -> &UiPreferences {
        &self.current
    }

    pub fn toggle_theme(&mut self) {
        self.current.theme = self.current.theme.toggled();
        self.persist();
    }

    pub fn toggle_sidebar(&mut self) {
        self.current.sidebar_collapsed = !self.current.sidebar_collapsed;
        self.persist();
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.current.language = language.into();
        self.persist();
    }

    pub fn reset(&mut self) {
        self.current = UiPreferences::default();
        self.slot.clear();
    }

    fn persist(&self) {
        if let Err(err) = self.slot.write(&self.current) {
            tracing::warn!("failed to persist preferences: {err:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::PREFERENCES_SLOT;

    #[test]
    fn preferences_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let slot = StorageSlot::open(dir.path(), PREFERENCES_SLOT);

        let mut store = PreferencesStore::open(slot.clone());
        store.toggle_theme();
        store.set_language("mr");
        drop(store);

        let reopened = PreferencesStore::open(slot);
        assert_eq!(reopened.get().theme, Theme::Dark);
        assert_eq!(reopened.get().language, "mr");
        assert!(!reopened.get().sidebar_collapsed);
    }

    #[test]
    fn corrupt_preferences_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let slot = StorageSlot::open(dir.path(), PREFERENCES_SLOT);
        std::fs::write(slot.path(), b"][").unwrap();

        let store = PreferencesStore::open(slot);
        assert_eq!(store.get(), &UiPreferences::default());
    }
}

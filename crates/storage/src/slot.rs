//! Named JSON storage slots.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use civiport_auth::{AuthUser, SessionStore};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Slot name for the persisted session (user + token).
pub const SESSION_SLOT: &str = "session";

/// Slot name for UI preferences (theme, language, sidebar state).
pub const PREFERENCES_SLOT: &str = "preferences";

/// One durable named slot, stored as a JSON file.
///
/// Reads are corruption-tolerant: a missing, unreadable or malformed file
/// yields `None` so callers can fall back to their default state.
#[derive(Debug, Clone)]
pub struct StorageSlot {
    name: String,
    path: PathBuf,
}

impl StorageSlot {
    /// Open a slot rooted at an explicit directory.
    pub fn open(dir: &Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: dir.join(format!("{name}.json")),
        }
    }

    /// Open a slot under the platform data directory for `app`.
    pub fn in_app_data(app: &str, name: &str) -> anyhow::Result<Self> {
        let base = dirs::data_dir().context("no platform data directory available")?;
        let dir = base.join(app);
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create storage directory {dir:?}"))?;
        Ok(Self::open(&dir, name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the slot. `None` when absent or corrupt.
    pub fn read<T: DeserializeOwned>(&self) -> Option<T> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(slot = %self.name, "failed to read storage slot: {err}");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(slot = %self.name, "discarding corrupt storage slot: {err}");
                None
            }
        }
    }

    pub fn write<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create storage directory {parent:?}"))?;
        }
        let bytes = serde_json::to_vec_pretty(value).context("failed to encode slot value")?;
        fs::write(&self.path, bytes)
            .with_context(|| format!("failed to write storage slot {:?}", self.path))
    }

    /// Remove the slot. A missing file is fine; other IO failures are
    /// logged and swallowed (clearing must never block a logout).
    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(slot = %self.name, "failed to clear storage slot: {err}");
            }
        }
    }
}

impl SessionStore for StorageSlot {
    fn save(&self, user: &AuthUser) -> anyhow::Result<()> {
        self.write(user)
    }

    fn load(&self) -> Option<AuthUser> {
        self.read()
    }

    fn clear(&self) {
        StorageSlot::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use civiport_auth::Role;

    use super::*;

    fn sample_user() -> AuthUser {
        AuthUser {
            id: 1,
            name: "Ravi Kumar".into(),
            email: "ravi@example.gov".into(),
            role: Role::new("Admin"),
            permissions: vec!["view_dashboard".into()],
            token: "tok".into(),
        }
    }

    #[test]
    fn round_trips_a_session() {
        let dir = tempfile::tempdir().unwrap();
        let slot = StorageSlot::open(dir.path(), SESSION_SLOT);

        SessionStore::save(&slot, &sample_user()).unwrap();
        let loaded = SessionStore::load(&slot).unwrap();
        assert_eq!(loaded, sample_user());
    }

    #[test]
    fn missing_slot_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = StorageSlot::open(dir.path(), SESSION_SLOT);
        assert!(slot.read::<AuthUser>().is_none());
    }

    #[test]
    fn corrupt_slot_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = StorageSlot::open(dir.path(), SESSION_SLOT);
        std::fs::write(slot.path(), b"{not json").unwrap();
        assert!(slot.read::<AuthUser>().is_none());
    }

    #[test]
    fn slots_clear_independently() {
        let dir = tempfile::tempdir().unwrap();
        let session = StorageSlot::open(dir.path(), SESSION_SLOT);
        let prefs = StorageSlot::open(dir.path(), PREFERENCES_SLOT);

        session.write(&sample_user()).unwrap();
        prefs.write(&crate::UiPreferences::default()).unwrap();

        session.clear();
        assert!(session.read::<AuthUser>().is_none());
        assert!(prefs.read::<crate::UiPreferences>().is_some());

        // Clearing twice is harmless.
        session.clear();
    }
}

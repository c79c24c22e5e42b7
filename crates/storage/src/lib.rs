//! `civiport-storage` — durable client storage.
//!
//! Two independent named slots back the client: one for the session
//! (user + token) and one for UI preferences. Each survives a process
//! restart and each is independently clearable. A corrupt slot reads as
//! empty rather than failing startup.

pub mod preferences;
pub mod slot;

pub use preferences::{PreferencesStore, Theme, UiPreferences};
pub use slot::{PREFERENCES_SLOT, SESSION_SLOT, StorageSlot};

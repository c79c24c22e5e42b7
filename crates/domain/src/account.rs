use chrono::{DateTime, Utc};
use civiport_auth::Role;
use serde::{Deserialize, Serialize};

/// Staff account identifier (server-issued).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserAccountId(pub i64);

impl core::fmt::Display for UserAccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A staff account as listed on the Users screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserAccountId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating a staff account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub active: bool,
}

use civiport_auth::Permission;
use serde::{Deserialize, Serialize};

/// Role record identifier (server-issued).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(pub i64);

/// A role as managed on the Roles screen.
///
/// Distinct from `civiport_auth::Role` (the session-side name): this is the
/// editable server record with its permission grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: RoleId,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub users_count: u64,
}

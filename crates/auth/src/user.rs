//! Authenticated user identity as delivered by the server at login.

use serde::{Deserialize, Serialize};

use crate::{Permission, Role};

/// The authenticated user plus the bearer credential for the session.
///
/// The `permissions` list is server-authoritative: it is what the session
/// grants, not a derivation from `role`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    pub token: String,
}

/// Partial update applied to the current user without re-authenticating.
///
/// Scalar fields merge; a present `permissions` list **replaces** the
/// granted set wholesale. Partial permission unions are disallowed: a merge
/// could silently widen access from a stale snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Permission>>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.role.is_none()
            && self.permissions.is_none()
    }
}

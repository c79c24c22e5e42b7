//! Login, logout, current-user refresh.

use std::sync::Arc;

use civiport_auth::{AuthUser, Permission, Role, UserPatch};
use civiport_core::PortalResult;
use serde::{Deserialize, Serialize};

use crate::envelope::ApiEnvelope;
use crate::http::{ApiClient, LOGIN_PATH};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginData {
    token: String,
    user: Profile,
}

#[derive(Deserialize)]
struct Profile {
    id: i64,
    name: String,
    email: String,
    role: Role,
    #[serde(default)]
    permissions: Vec<Permission>,
}

pub struct AuthService {
    api: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Authenticate and populate the session. A rejected credential comes
    /// back as `PortalError::Authentication` without the global session
    /// clearing (there is nothing to clear yet, and no redirect loop).
    pub async fn login(&self, email: &str, password: &str) -> PortalResult<AuthUser> {
        let envelope: ApiEnvelope<LoginData> = self
            .api
            .post_json(LOGIN_PATH, &LoginRequest { email, password })
            .await?;
        let data = envelope.into_data()?;

        let user = AuthUser {
            id: data.user.id,
            name: data.user.name,
            email: data.user.email,
            role: data.user.role,
            permissions: data.user.permissions,
            token: data.token,
        };

        self.api.session().write().await.login(user.clone());
        Ok(user)
    }

    /// End the session. The server call is best-effort: the local session
    /// is cleared no matter what, so logout cannot be blocked by a dead
    /// network. Navigation afterwards is the caller's responsibility.
    pub async fn logout(&self) {
        let result: PortalResult<ApiEnvelope<serde_json::Value>> =
            self.api.post_json("auth/logout", &serde_json::json!({})).await;
        if let Err(err) = result {
            tracing::warn!("server logout failed, clearing local session anyway: {err}");
        }
        self.api.session().write().await.logout();
    }

    /// Refresh the current user from the server. Scalar fields merge; a
    /// permission list in the response replaces the granted set wholesale.
    pub async fn me(&self) -> PortalResult<()> {
        let envelope: ApiEnvelope<Profile> = self.api.get_json("auth/me", &[]).await?;
        let profile = envelope.into_data()?;

        let patch = UserPatch {
            name: Some(profile.name),
            email: Some(profile.email),
            role: Some(profile.role),
            permissions: if profile.permissions.is_empty() {
                None
            } else {
                Some(profile.permissions)
            },
        };
        self.api.session().write().await.update_user(patch);
        Ok(())
    }
}

//! Staff account endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use civiport_auth::Role;
use civiport_core::PortalResult;
use civiport_domain::{NewUserAccount, UserAccount, UserAccountId};
use civiport_query::{PagedResult, QueryState};
use serde::Serialize;

use crate::envelope::{ApiEnvelope, PageEnvelope};
use crate::http::ApiClient;
use crate::screen::ListFetcher;

/// Editable account fields. Password is optional on update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

pub struct UserService {
    api: Arc<ApiClient>,
}

impl UserService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &QueryState) -> PortalResult<PagedResult<UserAccount>> {
        let envelope: ApiEnvelope<PageEnvelope<UserAccount>> =
            self.api.get_json("admin/users", &query.params()).await?;
        Ok(envelope.into_data()?.into())
    }

    pub async fn create(&self, account: &NewUserAccount) -> PortalResult<UserAccount> {
        let envelope: ApiEnvelope<UserAccount> =
            self.api.post_json("admin/users", account).await?;
        envelope.into_data()
    }

    pub async fn update(&self, id: UserAccountId, update: &UserUpdate) -> PortalResult<UserAccount> {
        let envelope: ApiEnvelope<UserAccount> = self
            .api
            .put_json(&format!("admin/users/{id}"), update)
            .await?;
        envelope.into_data()
    }

    pub async fn update_status(&self, id: UserAccountId, active: bool) -> PortalResult<UserAccount> {
        #[derive(Serialize)]
        struct Body {
            status: bool,
        }
        let envelope: ApiEnvelope<UserAccount> = self
            .api
            .patch_json(&format!("admin/users/{id}/status"), &Body { status: active })
            .await?;
        envelope.into_data()
    }

    pub async fn update_role(&self, id: UserAccountId, role: &Role) -> PortalResult<UserAccount> {
        #[derive(Serialize)]
        struct Body<'a> {
            role: &'a Role,
        }
        let envelope: ApiEnvelope<UserAccount> = self
            .api
            .patch_json(&format!("admin/users/{id}/role"), &Body { role })
            .await?;
        envelope.into_data()
    }

    pub async fn delete(&self, id: UserAccountId) -> PortalResult<()> {
        let envelope: ApiEnvelope<serde_json::Value> =
            self.api.delete_json(&format!("admin/users/{id}")).await?;
        envelope.into_data().map(|_| ())
    }
}

#[async_trait]
impl ListFetcher<UserAccount> for UserService {
    async fn fetch(&self, query: &QueryState) -> PortalResult<PagedResult<UserAccount>> {
        self.list(query).await
    }
}

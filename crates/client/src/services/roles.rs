//! Role management endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use civiport_auth::Permission;
use civiport_core::PortalResult;
use civiport_domain::{RoleId, RoleRecord};
use civiport_query::{PagedResult, QueryState};
use serde::Serialize;

use crate::envelope::{ApiEnvelope, PageEnvelope};
use crate::http::ApiClient;
use crate::screen::ListFetcher;

/// Create/update payload for a role.
#[derive(Debug, Clone, Serialize)]
pub struct RoleDraft {
    pub name: String,
    pub permissions: Vec<Permission>,
}

pub struct RoleService {
    api: Arc<ApiClient>,
}

impl RoleService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &QueryState) -> PortalResult<PagedResult<RoleRecord>> {
        let envelope: ApiEnvelope<PageEnvelope<RoleRecord>> =
            self.api.get_json("admin/roles", &query.params()).await?;
        Ok(envelope.into_data()?.into())
    }

    pub async fn create(&self, draft: &RoleDraft) -> PortalResult<RoleRecord> {
        let envelope: ApiEnvelope<RoleRecord> = self.api.post_json("admin/roles", draft).await?;
        envelope.into_data()
    }

    pub async fn update(&self, id: RoleId, draft: &RoleDraft) -> PortalResult<RoleRecord> {
        let envelope: ApiEnvelope<RoleRecord> = self
            .api
            .put_json(&format!("admin/roles/{}", id.0), draft)
            .await?;
        envelope.into_data()
    }

    pub async fn delete(&self, id: RoleId) -> PortalResult<()> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .api
            .delete_json(&format!("admin/roles/{}", id.0))
            .await?;
        envelope.into_data().map(|_| ())
    }

    /// The closed permission set, as the server publishes it for the role
    /// editor's checkbox grid.
    pub async fn permissions(&self) -> PortalResult<Vec<Permission>> {
        let envelope: ApiEnvelope<Vec<Permission>> =
            self.api.get_json("admin/permissions", &[]).await?;
        envelope.into_data()
    }
}

#[async_trait]
impl ListFetcher<RoleRecord> for RoleService {
    async fn fetch(&self, query: &QueryState) -> PortalResult<PagedResult<RoleRecord>> {
        self.list(query).await
    }
}

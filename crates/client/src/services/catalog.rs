//! Municipal services catalog endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use civiport_core::PortalResult;
use civiport_domain::{ServiceId, ServiceItem};
use civiport_query::{PagedResult, QueryState};
use serde::Serialize;

use crate::envelope::{ApiEnvelope, PageEnvelope};
use crate::http::ApiClient;
use crate::screen::ListFetcher;

/// Editable service fields.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
}

pub struct CatalogService {
    api: Arc<ApiClient>,
}

impl CatalogService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &QueryState) -> PortalResult<PagedResult<ServiceItem>> {
        let envelope: ApiEnvelope<PageEnvelope<ServiceItem>> =
            self.api.get_json("admin/services", &query.params()).await?;
        Ok(envelope.into_data()?.into())
    }

    /// List including per-service appointment counts.
    pub async fn list_with_appointments(
        &self,
        query: &QueryState,
    ) -> PortalResult<PagedResult<ServiceItem>> {
        let mut params = query.params();
        params.push(("include_appointments".to_string(), "true".to_string()));
        let envelope: ApiEnvelope<PageEnvelope<ServiceItem>> =
            self.api.get_json("admin/services", &params).await?;
        Ok(envelope.into_data()?.into())
    }

    pub async fn create(&self, draft: &ServiceDraft) -> PortalResult<ServiceItem> {
        let envelope: ApiEnvelope<ServiceItem> =
            self.api.post_json("admin/services", draft).await?;
        envelope.into_data()
    }

    pub async fn update(&self, id: ServiceId, draft: &ServiceDraft) -> PortalResult<ServiceItem> {
        let envelope: ApiEnvelope<ServiceItem> = self
            .api
            .put_json(&format!("admin/services/{id}"), draft)
            .await?;
        envelope.into_data()
    }

    pub async fn delete(&self, id: ServiceId) -> PortalResult<()> {
        let envelope: ApiEnvelope<serde_json::Value> =
            self.api.delete_json(&format!("admin/services/{id}")).await?;
        envelope.into_data().map(|_| ())
    }
}

#[async_trait]
impl ListFetcher<ServiceItem> for CatalogService {
    async fn fetch(&self, query: &QueryState) -> PortalResult<PagedResult<ServiceItem>> {
        self.list(query).await
    }
}

//! Notification endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use civiport_core::PortalResult;
use civiport_domain::{Notification, NotificationId};
use civiport_query::{PagedResult, QueryState};

use crate::envelope::{ApiEnvelope, PageEnvelope};
use crate::http::ApiClient;
use crate::screen::ListFetcher;

pub struct NotificationService {
    api: Arc<ApiClient>,
}

impl NotificationService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &QueryState) -> PortalResult<PagedResult<Notification>> {
        let envelope: ApiEnvelope<PageEnvelope<Notification>> = self
            .api
            .get_json("admin/notifications", &query.params())
            .await?;
        Ok(envelope.into_data()?.into())
    }

    pub async fn mark_read(&self, id: NotificationId) -> PortalResult<Notification> {
        let envelope: ApiEnvelope<Notification> = self
            .api
            .patch_json(
                &format!("admin/notifications/{}/read", id.0),
                &serde_json::json!({}),
            )
            .await?;
        envelope.into_data()
    }

    pub async fn mark_all_read(&self) -> PortalResult<()> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .api
            .patch_json("admin/notifications/read", &serde_json::json!({}))
            .await?;
        envelope.into_data().map(|_| ())
    }

    pub async fn delete(&self, id: NotificationId) -> PortalResult<()> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .api
            .delete_json(&format!("admin/notifications/{}", id.0))
            .await?;
        envelope.into_data().map(|_| ())
    }
}

#[async_trait]
impl ListFetcher<Notification> for NotificationService {
    async fn fetch(&self, query: &QueryState) -> PortalResult<PagedResult<Notification>> {
        self.list(query).await
    }
}

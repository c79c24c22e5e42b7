//! Lead management endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use civiport_core::PortalResult;
use civiport_domain::{Lead, LeadId, LeadNote, LeadSource, LeadStatus, TimelineEvent};
use civiport_query::{PagedResult, QueryState};
use serde::Serialize;

use crate::envelope::{ApiEnvelope, PageEnvelope};
use crate::http::ApiClient;
use crate::screen::ListFetcher;

/// Editable lead fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LeadUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<LeadSource>,
}

pub struct LeadService {
    api: Arc<ApiClient>,
}

impl LeadService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &QueryState) -> PortalResult<PagedResult<Lead>> {
        let envelope: ApiEnvelope<PageEnvelope<Lead>> =
            self.api.get_json("admin/leads", &query.params()).await?;
        Ok(envelope.into_data()?.into())
    }

    pub async fn get(&self, id: LeadId) -> PortalResult<Lead> {
        let envelope: ApiEnvelope<Lead> =
            self.api.get_json(&format!("admin/leads/{id}"), &[]).await?;
        envelope.into_data()
    }

    pub async fn update(&self, id: LeadId, update: &LeadUpdate) -> PortalResult<Lead> {
        let envelope: ApiEnvelope<Lead> =
            self.api.put_json(&format!("admin/leads/{id}"), update).await?;
        envelope.into_data()
    }

    pub async fn update_status(&self, id: LeadId, status: LeadStatus) -> PortalResult<Lead> {
        #[derive(Serialize)]
        struct Body {
            status: LeadStatus,
        }
        let envelope: ApiEnvelope<Lead> = self
            .api
            .patch_json(&format!("admin/leads/{id}/status"), &Body { status })
            .await?;
        envelope.into_data()
    }

    pub async fn add_note(&self, id: LeadId, note: &str) -> PortalResult<LeadNote> {
        #[derive(Serialize)]
        struct Body<'a> {
            note: &'a str,
        }
        let envelope: ApiEnvelope<LeadNote> = self
            .api
            .post_json(&format!("admin/leads/{id}/notes"), &Body { note })
            .await?;
        envelope.into_data()
    }

    pub async fn timeline(&self, id: LeadId) -> PortalResult<Vec<TimelineEvent>> {
        let envelope: ApiEnvelope<Vec<TimelineEvent>> = self
            .api
            .get_json(&format!("admin/leads/{id}/timeline"), &[])
            .await?;
        envelope.into_data()
    }

    pub async fn delete(&self, id: LeadId) -> PortalResult<()> {
        let envelope: ApiEnvelope<serde_json::Value> =
            self.api.delete_json(&format!("admin/leads/{id}")).await?;
        envelope.into_data().map(|_| ())
    }

    /// Full-result CSV for the current filters; pagination is dropped.
    pub async fn export(&self, query: &QueryState) -> PortalResult<Vec<u8>> {
        self.api
            .get_bytes("admin/leads/export", &query.export_params())
            .await
    }
}

#[async_trait]
impl ListFetcher<Lead> for LeadService {
    async fn fetch(&self, query: &QueryState) -> PortalResult<PagedResult<Lead>> {
        self.list(query).await
    }

    async fn export(&self, query: &QueryState) -> PortalResult<Vec<u8>> {
        LeadService::export(self, query).await
    }
}

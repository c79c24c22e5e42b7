//! Dashboard summary endpoint.

use std::sync::Arc;

use civiport_core::PortalResult;
use civiport_domain::DashboardSummary;

use crate::envelope::ApiEnvelope;
use crate::http::ApiClient;

pub struct DashboardService {
    api: Arc<ApiClient>,
}

impl DashboardService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn summary(&self) -> PortalResult<DashboardSummary> {
        let envelope: ApiEnvelope<DashboardSummary> =
            self.api.get_json("admin/dashboard", &[]).await?;
        envelope.into_data()
    }
}

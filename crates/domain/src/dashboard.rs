use serde::{Deserialize, Serialize};

use crate::lead::Lead;

/// Landing-page summary returned by the dashboard endpoint.
///
/// Every count defaults to zero so a partial payload still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_leads: u64,
    #[serde(default)]
    pub new_leads: u64,
    #[serde(default)]
    pub converted_leads: u64,
    #[serde(default)]
    pub total_appointments: u64,
    #[serde(default)]
    pub pending_appointments: u64,
    #[serde(default)]
    pub total_services: u64,
    #[serde(default)]
    pub recent_leads: Vec<Lead>,
}

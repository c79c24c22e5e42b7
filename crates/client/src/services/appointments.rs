//! Appointment and service-schedule endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use civiport_core::PortalResult;
use civiport_domain::appointment::CalendarDay;
use civiport_domain::{
    Appointment, AppointmentId, AppointmentStats, AppointmentStatus, AvailableSlot, ServiceId,
    ServiceSchedule, ServiceScheduleId,
};
use civiport_query::{PagedResult, QueryState};
use serde::Serialize;

use crate::envelope::{ApiEnvelope, PageEnvelope};
use crate::http::ApiClient;
use crate::screen::ListFetcher;

/// Editable schedule fields (create and update share the shape).
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleDraft {
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    pub slot_capacity: u32,
}

pub struct AppointmentService {
    api: Arc<ApiClient>,
}

impl AppointmentService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &QueryState) -> PortalResult<PagedResult<Appointment>> {
        let envelope: ApiEnvelope<PageEnvelope<Appointment>> =
            self.api.get_json("admin/appointments", &query.params()).await?;
        Ok(envelope.into_data()?.into())
    }

    pub async fn get(&self, id: AppointmentId) -> PortalResult<Appointment> {
        let envelope: ApiEnvelope<Appointment> = self
            .api
            .get_json(&format!("admin/appointments/{id}"), &[])
            .await?;
        envelope.into_data()
    }

    pub async fn update_status(
        &self,
        id: AppointmentId,
        status: AppointmentStatus,
    ) -> PortalResult<Appointment> {
        #[derive(Serialize)]
        struct Body {
            status: AppointmentStatus,
        }
        let envelope: ApiEnvelope<Appointment> = self
            .api
            .put_json(&format!("admin/appointments/{id}"), &Body { status })
            .await?;
        envelope.into_data()
    }

    pub async fn delete(&self, id: AppointmentId) -> PortalResult<()> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .api
            .delete_json(&format!("admin/appointments/{id}"))
            .await?;
        envelope.into_data().map(|_| ())
    }

    pub async fn stats(&self) -> PortalResult<AppointmentStats> {
        let envelope: ApiEnvelope<AppointmentStats> =
            self.api.get_json("admin/appointments/stats", &[]).await?;
        envelope.into_data()
    }

    pub async fn calendar(&self, month: u32, year: i32) -> PortalResult<Vec<CalendarDay>> {
        let params = vec![
            ("month".to_string(), month.to_string()),
            ("year".to_string(), year.to_string()),
        ];
        let envelope: ApiEnvelope<Vec<CalendarDay>> = self
            .api
            .get_json("admin/appointments/calendar", &params)
            .await?;
        envelope.into_data()
    }

    pub async fn schedules(&self, service: ServiceId) -> PortalResult<Vec<ServiceSchedule>> {
        let envelope: ApiEnvelope<Vec<ServiceSchedule>> = self
            .api
            .get_json(&format!("admin/services/{service}/schedules"), &[])
            .await?;
        envelope.into_data()
    }

    pub async fn create_schedule(
        &self,
        service: ServiceId,
        draft: &ScheduleDraft,
    ) -> PortalResult<ServiceSchedule> {
        let envelope: ApiEnvelope<ServiceSchedule> = self
            .api
            .post_json(&format!("admin/services/{service}/schedules"), draft)
            .await?;
        envelope.into_data()
    }

    pub async fn update_schedule(
        &self,
        service: ServiceId,
        schedule: ServiceScheduleId,
        draft: &ScheduleDraft,
    ) -> PortalResult<ServiceSchedule> {
        let envelope: ApiEnvelope<ServiceSchedule> = self
            .api
            .put_json(
                &format!("admin/services/{service}/schedules/{}", schedule.0),
                draft,
            )
            .await?;
        envelope.into_data()
    }

    pub async fn delete_schedule(
        &self,
        service: ServiceId,
        schedule: ServiceScheduleId,
    ) -> PortalResult<()> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .api
            .delete_json(&format!("admin/services/{service}/schedules/{}", schedule.0))
            .await?;
        envelope.into_data().map(|_| ())
    }

    pub async fn available_slots(
        &self,
        service: ServiceId,
        date: NaiveDate,
    ) -> PortalResult<Vec<AvailableSlot>> {
        let params = vec![("date".to_string(), date.to_string())];
        let envelope: ApiEnvelope<Vec<AvailableSlot>> = self
            .api
            .get_json(&format!("admin/services/{service}/available-slots"), &params)
            .await?;
        envelope.into_data()
    }
}

#[async_trait]
impl ListFetcher<Appointment> for AppointmentService {
    async fn fetch(&self, query: &QueryState) -> PortalResult<PagedResult<Appointment>> {
        self.list(query).await
    }
}

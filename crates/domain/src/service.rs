use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Municipal service identifier (server-issued).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub i64);

impl core::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceScheduleId(pub i64);

/// A bookable municipal service (e.g. water connection, plot transfer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: ServiceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub active: bool,
    #[serde(default)]
    pub appointments_count: Option<u64>,
}

/// Weekly availability window for a service.
///
/// `day_of_week` follows the server convention: 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSchedule {
    pub id: ServiceScheduleId,
    pub service_id: ServiceId,
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    pub slot_capacity: u32,
}

/// One bookable slot on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableSlot {
    pub date: NaiveDate,
    pub time: String,
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_tolerates_missing_optional_fields() {
        let item: ServiceItem =
            serde_json::from_str(r#"{"id":3,"name":"Water Connection","active":true}"#).unwrap();
        assert_eq!(item.id, ServiceId(3));
        assert!(item.description.is_none());
        assert!(item.appointments_count.is_none());
    }
}

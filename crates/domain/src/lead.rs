use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lead identifier (server-issued).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(pub i64);

impl core::fmt::Display for LeadId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Lead status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    FollowUp,
    Converted,
    NotInterested,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::FollowUp,
        LeadStatus::Converted,
        LeadStatus::NotInterested,
    ];

    /// Wire value, as the list endpoints expect it in a `status` filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::FollowUp => "follow_up",
            LeadStatus::Converted => "converted",
            LeadStatus::NotInterested => "not_interested",
        }
    }

    /// Human label for badges and filter dropdowns.
    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::FollowUp => "Follow-up",
            LeadStatus::Converted => "Converted",
            LeadStatus::NotInterested => "Not Interested",
        }
    }

    /// Terminal statuses end the follow-up workflow.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LeadStatus::Converted | LeadStatus::NotInterested)
    }
}

/// Where a lead came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadSource {
    Website,
    Phone,
    Email,
    #[serde(rename = "Walk-in")]
    WalkIn,
    Referral,
}

impl LeadSource {
    pub const ALL: [LeadSource; 5] = [
        LeadSource::Website,
        LeadSource::Phone,
        LeadSource::Email,
        LeadSource::WalkIn,
        LeadSource::Referral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Website => "Website",
            LeadSource::Phone => "Phone",
            LeadSource::Email => "Email",
            LeadSource::WalkIn => "Walk-in",
            LeadSource::Referral => "Referral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub source: LeadSource,
    pub status: LeadStatus,
    #[serde(default)]
    pub notes_count: u32,
    pub created_at: DateTime<Utc>,
}

/// A note attached to a lead by staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadNote {
    pub id: i64,
    pub note: String,
    #[serde(default)]
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One entry of a lead's activity timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: i64,
    pub action: String,
    #[serde(default)]
    pub detail: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&LeadStatus::FollowUp).unwrap();
        assert_eq!(json, "\"follow_up\"");
        let parsed: LeadStatus = serde_json::from_str("\"not_interested\"").unwrap();
        assert_eq!(parsed, LeadStatus::NotInterested);
    }

    #[test]
    fn walk_in_source_keeps_its_hyphenated_wire_form() {
        let json = serde_json::to_string(&LeadSource::WalkIn).unwrap();
        assert_eq!(json, "\"Walk-in\"");
    }

    #[test]
    fn only_converted_and_not_interested_are_terminal() {
        for status in LeadStatus::ALL {
            assert_eq!(
                status.is_terminal(),
                matches!(status, LeadStatus::Converted | LeadStatus::NotInterested),
            );
        }
    }
}

//! `civiport-domain` — entity models for the admin portal.
//!
//! These are the wire-facing shapes of the entities the portal manages.
//! The server owns their lifecycle; this crate owns their Rust form plus
//! the small amount of status logic the client needs (badges, transitions,
//! filter option lists).

pub mod account;
pub mod appointment;
pub mod dashboard;
pub mod lead;
pub mod notification;
pub mod role;
pub mod service;
pub mod settings;

pub use account::{NewUserAccount, UserAccount, UserAccountId};
pub use appointment::{Appointment, AppointmentId, AppointmentStats, AppointmentStatus, CalendarDay};
pub use dashboard::DashboardSummary;
pub use lead::{Lead, LeadId, LeadNote, LeadSource, LeadStatus, TimelineEvent};
pub use notification::{Notification, NotificationId};
pub use role::{RoleId, RoleRecord};
pub use service::{AvailableSlot, ServiceId, ServiceItem, ServiceSchedule, ServiceScheduleId};
pub use settings::{
    BrandingSettings, EmailSettings, GeneralSettings, HomepageFeature, HomepageSettings,
    SeoSettings, SiteSettings, SmtpEncryption,
};

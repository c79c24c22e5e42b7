//! Per-entity API services.
//!
//! Each service wraps one family of REST endpoints over the shared
//! [`crate::ApiClient`]. They return domain types; envelope unwrapping and
//! paged-result mapping happen here so screens never see the wire shapes.

pub mod appointments;
pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod leads;
pub mod notifications;
pub mod roles;
pub mod settings;
pub mod users;

pub use appointments::{AppointmentService, ScheduleDraft};
pub use auth::AuthService;
pub use catalog::{CatalogService, ServiceDraft};
pub use dashboard::DashboardService;
pub use leads::{LeadService, LeadUpdate};
pub use notifications::NotificationService;
pub use roles::{RoleDraft, RoleService};
pub use settings::{AssetUpload, BrandingUpdate, SeoUpdate, SettingsService};
pub use users::{UserService, UserUpdate};

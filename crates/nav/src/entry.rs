//! The declarative navigation tree.

use civiport_auth::{Permission, registry};
use serde::{Deserialize, Serialize};

/// One node of the menu tree.
///
/// `path` is absent for group entries that only contain children. When
/// `permission` is set and the session lacks it, the entry and its entire
/// subtree are invisible; a child's own `permission` is evaluated
/// independently only while its parent survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
    pub icon: String,
    #[serde(default)]
    pub permission: Option<Permission>,
    #[serde(default)]
    pub children: Vec<NavEntry>,
}

impl NavEntry {
    pub fn leaf(name: impl Into<String>, path: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: Some(path.into()),
            icon: icon.into(),
            permission: None,
            children: Vec::new(),
        }
    }

    pub fn group(name: impl Into<String>, icon: impl Into<String>, children: Vec<NavEntry>) -> Self {
        Self {
            name: name.into(),
            path: None,
            icon: icon.into(),
            permission: None,
            children,
        }
    }

    pub fn requires(mut self, permission: Permission) -> Self {
        self.permission = Some(permission);
        self
    }
}

/// The portal's static menu, defined at build time.
pub fn default_navigation() -> Vec<NavEntry> {
    vec![
        NavEntry::leaf("Dashboard", "/dashboard", "layout-dashboard")
            .requires(registry::VIEW_DASHBOARD),
        NavEntry::leaf("Leads", "/leads", "file-text").requires(registry::MANAGE_LEADS),
        NavEntry::leaf("Appointments", "/appointments", "calendar")
            .requires(registry::MANAGE_LEADS),
        NavEntry::leaf("Notifications", "/notifications", "bell")
            .requires(registry::VIEW_NOTIFICATIONS),
        NavEntry::leaf("Users", "/users", "users").requires(registry::MANAGE_USERS),
        NavEntry::leaf("Roles", "/roles", "user-cog").requires(registry::MANAGE_ROLES),
        NavEntry::leaf("Services", "/services", "briefcase")
            .requires(registry::MANAGE_WEBSITE_SETTINGS),
        NavEntry::group(
            "Settings",
            "settings",
            vec![
                NavEntry::leaf("General", "/settings/general", "sliders"),
                NavEntry::leaf("Branding", "/settings/branding", "palette"),
                NavEntry::leaf("Homepage", "/settings/home", "home"),
                NavEntry::leaf("SEO", "/settings/seo", "search"),
                NavEntry::leaf("Email", "/settings/email", "mail")
                    .requires(registry::MANAGE_EMAIL_SETTINGS),
            ],
        )
        .requires(registry::MANAGE_WEBSITE_SETTINGS),
    ]
}

//! Closed permission set and built-in role → permission mapping.
//!
//! The mapping here is a convenience default for display and pre-flight
//! checks; the authoritative permission set always comes from the server
//! with the login response.

use std::collections::HashSet;

use crate::{Permission, Role};

pub const VIEW_DASHBOARD: Permission = Permission::from_static("view_dashboard");
pub const MANAGE_LEADS: Permission = Permission::from_static("manage_leads");
pub const UPDATE_LEAD_STATUS: Permission = Permission::from_static("update_lead_status");
pub const VIEW_NOTIFICATIONS: Permission = Permission::from_static("view_notifications");
pub const MANAGE_WEBSITE_SETTINGS: Permission = Permission::from_static("manage_website_settings");
pub const MANAGE_EMAIL_SETTINGS: Permission = Permission::from_static("manage_email_settings");
pub const MANAGE_USERS: Permission = Permission::from_static("manage_users");
pub const MANAGE_ROLES: Permission = Permission::from_static("manage_roles");
pub const ACCESS_REPORTS: Permission = Permission::from_static("access_reports");

pub const SUPER_ADMIN: Role = Role::from_static("Super Admin");
pub const ADMIN: Role = Role::from_static("Admin");
pub const MANAGER: Role = Role::from_static("Manager");
pub const AGENT: Role = Role::from_static("Agent");

static ALL_PERMISSIONS: [Permission; 9] = [
    VIEW_DASHBOARD,
    MANAGE_LEADS,
    UPDATE_LEAD_STATUS,
    VIEW_NOTIFICATIONS,
    MANAGE_WEBSITE_SETTINGS,
    MANAGE_EMAIL_SETTINGS,
    MANAGE_USERS,
    MANAGE_ROLES,
    ACCESS_REPORTS,
];

static BUILTIN_ROLES: [Role; 4] = [SUPER_ADMIN, ADMIN, MANAGER, AGENT];

/// Every permission the portal knows about.
pub fn all_permissions() -> &'static [Permission] {
    &ALL_PERMISSIONS
}

/// The predefined roles, most privileged first.
pub fn builtin_roles() -> &'static [Role] {
    &BUILTIN_ROLES
}

/// Default permission set for a role name.
///
/// Unknown roles yield an empty set: an unmapped role defaults to least
/// privilege rather than an error.
pub fn permissions_for_role(role: &Role) -> HashSet<Permission> {
    match role.as_str() {
        "Super Admin" => all_permissions().iter().cloned().collect(),
        "Admin" => [
            VIEW_DASHBOARD,
            MANAGE_LEADS,
            UPDATE_LEAD_STATUS,
            VIEW_NOTIFICATIONS,
            MANAGE_WEBSITE_SETTINGS,
            MANAGE_EMAIL_SETTINGS,
            MANAGE_USERS,
        ]
        .into_iter()
        .collect(),
        "Manager" => [
            VIEW_DASHBOARD,
            MANAGE_LEADS,
            UPDATE_LEAD_STATUS,
            VIEW_NOTIFICATIONS,
            ACCESS_REPORTS,
        ]
        .into_iter()
        .collect(),
        "Agent" => [VIEW_DASHBOARD, UPDATE_LEAD_STATUS, VIEW_NOTIFICATIONS]
            .into_iter()
            .collect(),
        _ => HashSet::new(),
    }
}

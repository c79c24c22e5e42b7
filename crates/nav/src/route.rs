//! Route table and per-navigation access gate.

use std::collections::HashSet;

use civiport_auth::{Permission, Session, registry};

/// Where a freshly authenticated user lands. The path originally requested
/// before a login redirect is discarded, not replayed.
pub const DEFAULT_ROUTE: &str = "/dashboard";

/// A navigable route. `pattern` segments starting with `:` match any value
/// (`/leads/:id`). Public routes skip the gate entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: &'static str,
    pub permission: Option<Permission>,
    pub public: bool,
}

impl Route {
    const fn gated(pattern: &'static str, permission: Permission) -> Self {
        Self {
            pattern,
            permission: Some(permission),
            public: false,
        }
    }

    const fn public(pattern: &'static str) -> Self {
        Self {
            pattern,
            permission: None,
            public: true,
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        let mut pattern = self.pattern.trim_matches('/').split('/');
        let mut path = path.trim_matches('/').split('/');
        loop {
            match (pattern.next(), path.next()) {
                (None, None) => return true,
                (Some(p), Some(s)) => {
                    if !p.starts_with(':') && p != s {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

static ROUTES: [Route; 15] = [
    Route::public("/login"),
    Route::public("/no-access"),
    Route::gated("/dashboard", registry::VIEW_DASHBOARD),
    Route::gated("/leads", registry::MANAGE_LEADS),
    Route::gated("/leads/:id", registry::MANAGE_LEADS),
    Route::gated("/appointments", registry::MANAGE_LEADS),
    Route::gated("/notifications", registry::VIEW_NOTIFICATIONS),
    Route::gated("/users", registry::MANAGE_USERS),
    Route::gated("/roles", registry::MANAGE_ROLES),
    Route::gated("/services", registry::MANAGE_WEBSITE_SETTINGS),
    Route::gated("/settings/general", registry::MANAGE_WEBSITE_SETTINGS),
    Route::gated("/settings/branding", registry::MANAGE_WEBSITE_SETTINGS),
    Route::gated("/settings/home", registry::MANAGE_WEBSITE_SETTINGS),
    Route::gated("/settings/seo", registry::MANAGE_WEBSITE_SETTINGS),
    Route::gated("/settings/email", registry::MANAGE_EMAIL_SETTINGS),
];

/// The protected admin routes plus the two public entry points.
pub fn route_table() -> &'static [Route] {
    &ROUTES
}

/// Outcome of one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// No session: go to the login entry point.
    Unauthenticated,
    /// Authenticated but lacking the required permission: no-access view.
    Denied,
    /// Render the requested view.
    Granted,
}

/// Pure gate check. Runs on every route transition: permissions can change
/// mid-session, so the outcome is never cached.
pub fn evaluate(
    authenticated: bool,
    granted: &HashSet<Permission>,
    required: Option<&Permission>,
) -> RouteAccess {
    if !authenticated {
        return RouteAccess::Unauthenticated;
    }
    match required {
        Some(p) if !granted.contains(p) => RouteAccess::Denied,
        _ => RouteAccess::Granted,
    }
}

/// What the router should do with a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Render { path: String },
    RedirectToLogin,
    RedirectToNoAccess,
}

/// Resolve `path` against the route table for the given session.
///
/// Paths not in the table fall through with no required permission: they
/// still demand authentication but no specific grant.
pub fn resolve(path: &str, session: &Session) -> RouteDecision {
    let route = route_table().iter().find(|r| r.matches(path));

    if let Some(route) = route {
        if route.public {
            return RouteDecision::Render { path: path.into() };
        }
    }

    let required = route.and_then(|r| r.permission.as_ref());
    match evaluate(session.is_authenticated(), session.permissions(), required) {
        RouteAccess::Unauthenticated => RouteDecision::RedirectToLogin,
        RouteAccess::Denied => RouteDecision::RedirectToNoAccess,
        RouteAccess::Granted => RouteDecision::Render { path: path.into() },
    }
}

//! `civiport-nav` — permission-gated navigation and route access.
//!
//! Two pure pieces: the declarative menu tree with its visibility filter,
//! and the per-navigation route access gate. Neither caches anything;
//! both are recomputed against the live permission set on every use,
//! since stale gating is a security bug rather than a performance win.

pub mod entry;
pub mod filter;
pub mod route;

pub use entry::{NavEntry, default_navigation};
pub use filter::visible_tree;
pub use route::{DEFAULT_ROUTE, Route, RouteAccess, RouteDecision, evaluate, resolve, route_table};

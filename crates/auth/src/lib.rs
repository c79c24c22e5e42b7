//! `civiport-auth` — permission vocabulary and client session state.
//!
//! This crate is intentionally decoupled from HTTP and storage: the
//! durable-storage side effect of the session lives behind [`SessionStore`].

pub mod permissions;
pub mod registry;
pub mod roles;
pub mod session;
pub mod user;

pub use permissions::Permission;
pub use registry::{all_permissions, builtin_roles, permissions_for_role};
pub use roles::Role;
pub use session::{PersistentSession, Session, SessionStore};
pub use user::{AuthUser, UserPatch};

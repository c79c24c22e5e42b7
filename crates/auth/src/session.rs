//! Client session state.
//!
//! [`Session`] is the single owned container for the authenticated user and
//! the derived permission set. Mutation happens only through its narrow API
//! (`login` / `logout` / `update_user`); no other component writes it.
//! [`PersistentSession`] adds the durable-storage side effects behind the
//! [`SessionStore`] seam so this crate stays free of IO concerns.

use std::collections::HashSet;
use std::sync::Arc;

use crate::{AuthUser, Permission, UserPatch};

/// Durable storage for the session slot.
///
/// `load` must tolerate corrupt or unreadable storage by returning `None`;
/// startup never fails hard on a bad slot.
pub trait SessionStore: Send + Sync {
    fn save(&self, user: &AuthUser) -> anyhow::Result<()>;
    fn load(&self) -> Option<AuthUser>;
    fn clear(&self);
}

/// In-memory session state: current user plus the cached permission set.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<AuthUser>,
    granted: HashSet<Permission>,
}

impl Session {
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.token.as_str())
    }

    pub fn permissions(&self) -> &HashSet<Permission> {
        &self.granted
    }

    /// True iff the session holds `permission`. Never panics; always false
    /// for an unauthenticated session.
    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.granted.contains(permission)
    }

    /// Replace the current user wholesale and cache the permission set from
    /// the server-provided list. The role is *not* consulted here.
    pub fn login(&mut self, user: AuthUser) {
        self.granted = user.permissions.iter().cloned().collect();
        self.user = Some(user);
    }

    /// Clear user and permissions. Idempotent; a second call is a no-op.
    pub fn logout(&mut self) {
        self.user = None;
        self.granted.clear();
    }

    /// Merge a partial update into the current user.
    ///
    /// A patch carrying a permission list replaces the granted set
    /// wholesale. No-op when unauthenticated.
    pub fn update_user(&mut self, patch: UserPatch) {
        let Some(user) = self.user.as_mut() else {
            return;
        };

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
        if let Some(permissions) = patch.permissions {
            user.permissions = permissions;
            self.granted = user.permissions.iter().cloned().collect();
        }
    }
}

/// [`Session`] combined with a durable slot.
///
/// Login persists, logout clears the slot, and construction hydrates from
/// whatever the slot holds, initializing to unauthenticated when the slot
/// is empty or unreadable.
pub struct PersistentSession {
    session: Session,
    store: Arc<dyn SessionStore>,
}

impl PersistentSession {
    /// Hydrate from durable storage.
    pub fn open(store: Arc<dyn SessionStore>) -> Self {
        let mut session = Session::unauthenticated();
        if let Some(user) = store.load() {
            session.login(user);
        }
        Self { session, store }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.session.user()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn permissions(&self) -> &HashSet<Permission> {
        self.session.permissions()
    }

    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.session.has_permission(permission)
    }

    pub fn login(&mut self, user: AuthUser) {
        if let Err(err) = self.store.save(&user) {
            tracing::warn!("failed to persist session: {err:#}");
        }
        self.session.login(user);
    }

    pub fn logout(&mut self) {
        self.store.clear();
        self.session.logout();
    }

    pub fn update_user(&mut self, patch: UserPatch) {
        self.session.update_user(patch);
        if let Some(user) = self.session.user() {
            if let Err(err) = self.store.save(user) {
                tracing::warn!("failed to persist session: {err:#}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use proptest::prelude::*;

    use super::*;
    use crate::registry::{MANAGE_LEADS, VIEW_DASHBOARD, VIEW_NOTIFICATIONS};
    use crate::{Role, registry};

    fn agent_user() -> AuthUser {
        AuthUser {
            id: 7,
            name: "Asha Patil".into(),
            email: "asha@example.gov".into(),
            role: Role::new("Agent"),
            permissions: vec![
                VIEW_DASHBOARD,
                registry::UPDATE_LEAD_STATUS,
                VIEW_NOTIFICATIONS,
            ],
            token: "tok-123".into(),
        }
    }

    #[test]
    fn unauthenticated_session_denies_everything() {
        let session = Session::unauthenticated();
        for perm in registry::all_permissions() {
            assert!(!session.has_permission(perm));
        }
    }

    #[test]
    fn login_derives_permissions_from_server_list_not_role() {
        let mut user = agent_user();
        // Server grants more than the Agent default; the server list wins.
        user.permissions.push(MANAGE_LEADS);

        let mut session = Session::unauthenticated();
        session.login(user);
        assert!(session.has_permission(&MANAGE_LEADS));
    }

    #[test]
    fn logout_is_idempotent() {
        let mut session = Session::unauthenticated();
        session.login(agent_user());
        session.logout();
        let after_one = session.clone();
        session.logout();

        assert!(!session.is_authenticated());
        assert_eq!(session.user(), after_one.user());
        assert_eq!(session.permissions(), after_one.permissions());
    }

    #[test]
    fn update_user_merges_scalars_without_touching_permissions() {
        let mut session = Session::unauthenticated();
        session.login(agent_user());

        session.update_user(UserPatch {
            name: Some("A. Patil".into()),
            ..UserPatch::default()
        });

        let user = session.user().unwrap();
        assert_eq!(user.name, "A. Patil");
        assert!(session.has_permission(&VIEW_DASHBOARD));
        assert_eq!(session.permissions().len(), 3);
    }

    #[test]
    fn update_user_replaces_permissions_wholesale() {
        let mut session = Session::unauthenticated();
        session.login(agent_user());

        session.update_user(UserPatch {
            permissions: Some(vec![MANAGE_LEADS]),
            ..UserPatch::default()
        });

        assert!(session.has_permission(&MANAGE_LEADS));
        // The old grants must not survive the replacement.
        assert!(!session.has_permission(&VIEW_DASHBOARD));
        assert_eq!(session.permissions().len(), 1);
    }

    proptest! {
        #[test]
        fn has_permission_never_panics(name in "\\PC{0,40}") {
            let session = Session::unauthenticated();
            prop_assert!(!session.has_permission(&Permission::new(name)));
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        slot: Mutex<Option<AuthUser>>,
        poisoned: bool,
    }

    impl SessionStore for MemoryStore {
        fn save(&self, user: &AuthUser) -> anyhow::Result<()> {
            *self.slot.lock().unwrap() = Some(user.clone());
            Ok(())
        }

        fn load(&self) -> Option<AuthUser> {
            if self.poisoned {
                return None;
            }
            self.slot.lock().unwrap().clone()
        }

        fn clear(&self) {
            *self.slot.lock().unwrap() = None;
        }
    }

    #[test]
    fn persistent_session_survives_reopen() {
        let store = Arc::new(MemoryStore::default());

        let mut first = PersistentSession::open(store.clone());
        first.login(agent_user());
        drop(first);

        let second = PersistentSession::open(store);
        assert!(second.is_authenticated());
        assert_eq!(second.token(), Some("tok-123"));
        assert!(second.has_permission(&VIEW_DASHBOARD));
    }

    #[test]
    fn corrupt_slot_hydrates_to_unauthenticated() {
        let store = Arc::new(MemoryStore {
            slot: Mutex::new(None),
            poisoned: true,
        });
        let session = PersistentSession::open(store);
        assert!(!session.is_authenticated());
        assert!(!session.has_permission(&VIEW_DASHBOARD));
    }

    #[test]
    fn logout_clears_the_slot() {
        let store = Arc::new(MemoryStore::default());
        let mut session = PersistentSession::open(store.clone());
        session.login(agent_user());
        session.logout();

        assert!(store.slot.lock().unwrap().is_none());
        let reopened = PersistentSession::open(store);
        assert!(!reopened.is_authenticated());
    }
}

//! Composition root: storage, session, transport and services wired
//! together the way the application shell consumes them.

use std::sync::Arc;

use civiport_auth::PersistentSession;
use civiport_domain::{Appointment, Lead, Notification, RoleRecord, ServiceItem, UserAccount};
use civiport_storage::{PREFERENCES_SLOT, PreferencesStore, SESSION_SLOT, StorageSlot};
use tokio::sync::{RwLock, mpsc};

use crate::config::ClientConfig;
use crate::http::{ApiClient, SharedSession};
use crate::screen::{ListFetcher, ScreenHandle};
use crate::services::{
    AppointmentService, AuthService, CatalogService, DashboardService, LeadService,
    NotificationService, RoleService, SettingsService, UserService,
};
use crate::signals::{SessionSignal, session_channel};

const APP_DIR: &str = "civiport-admin";
const DEFAULT_PAGE_SIZE: u32 = 10;

/// The assembled client.
///
/// Owns the shared session (hydrated from the session slot at startup) and
/// the transport; hands out per-entity services and list-screen handles.
pub struct PortalClient {
    config: ClientConfig,
    session: SharedSession,
    api: Arc<ApiClient>,
}

impl PortalClient {
    /// Open against the platform data directory. The receiver carries the
    /// transport's forced-logout signal; the router must drain it.
    pub fn open(
        config: ClientConfig,
    ) -> anyhow::Result<(Self, mpsc::UnboundedReceiver<SessionSignal>)> {
        civiport_observability::init();
        let slot = StorageSlot::in_app_data(APP_DIR, SESSION_SLOT)?;
        Self::with_session_store(config, Arc::new(slot))
    }

    /// Open with an explicit session store (tests, alternate storage roots).
    pub fn with_session_store(
        config: ClientConfig,
        store: Arc<dyn civiport_auth::SessionStore>,
    ) -> anyhow::Result<(Self, mpsc::UnboundedReceiver<SessionSignal>)> {
        let session: SharedSession = Arc::new(RwLock::new(PersistentSession::open(store)));
        let (signals, receiver) = session_channel();
        let api = Arc::new(ApiClient::new(&config, session.clone(), signals)?);
        Ok((
            Self {
                config,
                session,
                api,
            },
            receiver,
        ))
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    /// UI preferences live in their own slot, independent of the session.
    pub fn preferences(&self) -> anyhow::Result<PreferencesStore> {
        let slot = StorageSlot::in_app_data(APP_DIR, PREFERENCES_SLOT)?;
        Ok(PreferencesStore::open(slot))
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.api.clone())
    }

    pub fn leads(&self) -> LeadService {
        LeadService::new(self.api.clone())
    }

    pub fn appointments(&self) -> AppointmentService {
        AppointmentService::new(self.api.clone())
    }

    pub fn catalog(&self) -> CatalogService {
        CatalogService::new(self.api.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.api.clone())
    }

    pub fn roles(&self) -> RoleService {
        RoleService::new(self.api.clone())
    }

    pub fn notifications(&self) -> NotificationService {
        NotificationService::new(self.api.clone())
    }

    pub fn dashboard(&self) -> DashboardService {
        DashboardService::new(self.api.clone())
    }

    pub fn settings(&self) -> SettingsService {
        SettingsService::new(self.api.clone())
    }

    pub fn lead_screen(&self) -> ScreenHandle<Lead> {
        self.screen(Arc::new(self.leads()))
    }

    pub fn appointment_screen(&self) -> ScreenHandle<Appointment> {
        self.screen(Arc::new(self.appointments()))
    }

    pub fn service_screen(&self) -> ScreenHandle<ServiceItem> {
        self.screen(Arc::new(self.catalog()))
    }

    pub fn user_screen(&self) -> ScreenHandle<UserAccount> {
        self.screen(Arc::new(self.users()))
    }

    pub fn role_screen(&self) -> ScreenHandle<RoleRecord> {
        self.screen(Arc::new(self.roles()))
    }

    pub fn notification_screen(&self) -> ScreenHandle<Notification> {
        self.screen(Arc::new(self.notifications()))
    }

    fn screen<T: Send + 'static>(&self, fetcher: Arc<dyn ListFetcher<T>>) -> ScreenHandle<T> {
        ScreenHandle::new(fetcher, DEFAULT_PAGE_SIZE, self.config.search_debounce)
    }
}

//! `civiport-client` — transport collaborator and screen-side plumbing.
//!
//! [`ApiClient`] issues authenticated HTTP calls, attaches the bearer
//! credential from the shared session, and handles authentication
//! rejections globally. The per-entity services wrap the REST endpoints,
//! and [`screen::ScreenHandle`] drives the list-query contract (debounced
//! search, immediate filter/sort/page fetches, last-write-wins).

pub mod config;
pub mod envelope;
pub mod export;
pub mod http;
pub mod portal;
pub mod screen;
pub mod services;
pub mod signals;

pub use config::ClientConfig;
pub use envelope::{ApiEnvelope, PageEnvelope};
pub use http::{ApiClient, SharedSession};
pub use portal::PortalClient;
pub use screen::{ListFetcher, ScreenHandle, ScreenSnapshot};
pub use signals::{SessionSignal, session_channel};

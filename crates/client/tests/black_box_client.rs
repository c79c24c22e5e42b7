//! Black-box tests: the real transport against an ephemeral stub server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use civiport_auth::{AuthUser, SessionStore};
use civiport_client::{ClientConfig, PortalClient, SessionSignal};
use civiport_core::PortalError;
use civiport_nav::RouteDecision;
use civiport_query::QueryState;
use serde_json::json;

const GOOD_TOKEN: &str = "tok-1";

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let app = axum::Router::new()
            .route("/api/v1/auth/login", post(login))
            .route("/api/v1/admin/leads", get(list_leads))
            .route("/api/v1/admin/dashboard", get(reject_unauthenticated))
            .route("/api/v1/admin/users", get(forbidden))
            .route("/api/v1/admin/services", post(duplicate_service));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/api/v1", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn login(Json(body): Json<serde_json::Value>) -> (StatusCode, Json<serde_json::Value>) {
    if body["password"] == "secret" {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "token": GOOD_TOKEN,
                    "user": {
                        "id": 7,
                        "name": "Asha Patil",
                        "email": body["email"],
                        "role": "Manager",
                        "permissions": ["view_dashboard", "manage_leads"]
                    }
                }
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "message": "Invalid credentials" })),
        )
    }
}

async fn list_leads(headers: HeaderMap) -> (StatusCode, Json<serde_json::Value>) {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {GOOD_TOKEN}"));
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Unauthenticated" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "data": {
                "data": [
                    {
                        "id": 1, "name": "Ravi Kumar", "email": "ravi@example.com",
                        "phone": "9876543210", "source": "Website", "status": "new",
                        "created_at": "2026-08-01T09:30:00Z"
                    },
                    {
                        "id": 2, "name": "Sita Sharma", "email": "sita@example.com",
                        "phone": "9123456780", "source": "Walk-in", "status": "follow_up",
                        "created_at": "2026-08-03T14:00:00Z"
                    }
                ],
                "current_page": 1,
                "last_page": 4,
                "total": 38
            }
        })),
    )
}

async fn reject_unauthenticated() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Token expired" })),
    )
}

async fn forbidden() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "message": "Insufficient permissions" })),
    )
}

async fn duplicate_service() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "success": false, "message": "Service name already exists" })),
    )
}

/// Session store kept in memory so tests never touch the real data dir.
#[derive(Default)]
struct MemoryStore(Mutex<Option<AuthUser>>);

impl SessionStore for MemoryStore {
    fn save(&self, user: &AuthUser) -> anyhow::Result<()> {
        *self.0.lock().unwrap() = Some(user.clone());
        Ok(())
    }

    fn load(&self) -> Option<AuthUser> {
        self.0.lock().unwrap().clone()
    }

    fn clear(&self) {
        *self.0.lock().unwrap() = None;
    }
}

fn client_for(server: &TestServer) -> (PortalClient, tokio::sync::mpsc::UnboundedReceiver<SessionSignal>) {
    let config = ClientConfig {
        base_url: server.base_url.clone(),
        timeout: Duration::from_secs(5),
        search_debounce: Duration::from_millis(400),
    };
    PortalClient::with_session_store(config, Arc::new(MemoryStore::default())).unwrap()
}

#[tokio::test]
async fn login_populates_session_and_bearer_flows_to_list_calls() {
    let server = TestServer::spawn().await;
    let (client, _signals) = client_for(&server);

    let user = client.auth().login("asha@example.gov", "secret").await.unwrap();
    assert_eq!(user.token, GOOD_TOKEN);
    assert!(client.session().read().await.is_authenticated());

    let page = client.leads().list(&QueryState::default()).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].name, "Ravi Kumar");
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.total_items, 38);
}

#[tokio::test]
async fn failed_login_surfaces_error_without_signal_or_session() {
    let server = TestServer::spawn().await;
    let (client, mut signals) = client_for(&server);

    let err = client
        .auth()
        .login("asha@example.gov", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err, PortalError::Authentication("Invalid credentials".into()));

    // No redirect loop: the login screen handles its own failure.
    assert!(signals.try_recv().is_err());
    assert!(!client.session().read().await.is_authenticated());
}

#[tokio::test]
async fn rejected_credential_mid_session_clears_session_and_signals_once() {
    let server = TestServer::spawn().await;
    let (client, mut signals) = client_for(&server);

    client.auth().login("asha@example.gov", "secret").await.unwrap();

    let err = client.dashboard().summary().await.unwrap_err();
    assert_eq!(err, PortalError::Authentication("Token expired".into()));

    assert_eq!(signals.try_recv(), Ok(SessionSignal::Expired));
    assert!(signals.try_recv().is_err());

    let session = client.session().read().await;
    assert!(!session.is_authenticated());

    // The router's next resolution lands on the login entry point.
    assert_eq!(
        civiport_nav::resolve("/leads", session.session()),
        RouteDecision::RedirectToLogin
    );
}

#[tokio::test]
async fn forbidden_maps_to_authorization_error_and_keeps_the_session() {
    let server = TestServer::spawn().await;
    let (client, mut signals) = client_for(&server);

    client.auth().login("asha@example.gov", "secret").await.unwrap();

    let err = client.users().list(&QueryState::default()).await.unwrap_err();
    assert_eq!(
        err,
        PortalError::Authorization("Insufficient permissions".into())
    );

    // Authorization failures go to the no-access view, not to logout.
    assert!(signals.try_recv().is_err());
    assert!(client.session().read().await.is_authenticated());
}

#[tokio::test]
async fn success_false_envelope_surfaces_the_server_message_verbatim() {
    let server = TestServer::spawn().await;
    let (client, _signals) = client_for(&server);
    client.auth().login("asha@example.gov", "secret").await.unwrap();

    let err = client
        .catalog()
        .create(&civiport_client::services::ServiceDraft {
            name: "Water Connection".into(),
            description: None,
            active: true,
        })
        .await
        .unwrap_err();

    assert_eq!(err, PortalError::server(None, "Service name already exists"));
}

//! Authenticated HTTP transport.

use std::sync::Arc;

use civiport_auth::PersistentSession;
use civiport_core::{PortalError, PortalResult};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::{RwLock, mpsc};

use crate::config::ClientConfig;
use crate::signals::SessionSignal;

/// The session is the only cross-screen shared mutable resource; every
/// request reads it and only the auth flows write it.
pub type SharedSession = Arc<RwLock<PersistentSession>>;

/// Relative path of the login endpoint. A 401 from here is a failed login
/// attempt, not an expired session, and must not trigger the global
/// clear-and-redirect (that would loop the login screen into itself).
pub(crate) const LOGIN_PATH: &str = "auth/login";

/// HTTP client for the portal API.
///
/// Attaches the bearer credential from the shared session to every
/// request and applies the global authentication-rejected handling.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: SharedSession,
    signals: mpsc::UnboundedSender<SessionSignal>,
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        session: SharedSession,
        signals: mpsc::UnboundedSender<SessionSignal>,
    ) -> anyhow::Result<Self> {
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url,
            session,
            signals,
        })
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> PortalResult<T> {
        let response = self.execute(Method::GET, path, query, NoBody).await?;
        decode(response).await
    }

    pub async fn get_bytes(&self, path: &str, query: &[(String, String)]) -> PortalResult<Vec<u8>> {
        let response = self.execute(Method::GET, path, query, NoBody).await?;
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        Ok(bytes.to_vec())
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> PortalResult<T> {
        let response = self.execute(Method::POST, path, &[], Json(body)).await?;
        decode(response).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> PortalResult<T> {
        let response = self.execute(Method::PUT, path, &[], Json(body)).await?;
        decode(response).await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> PortalResult<T> {
        let response = self.execute(Method::PATCH, path, &[], Json(body)).await?;
        decode(response).await
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> PortalResult<T> {
        let response = self.execute(Method::DELETE, path, &[], NoBody).await?;
        decode(response).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> PortalResult<T> {
        let response = self.execute(Method::POST, path, &[], Multipart(form)).await?;
        decode(response).await
    }

    async fn execute<B: RequestBody>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: B,
    ) -> PortalResult<reqwest::Response> {
        let url = self
            .base_url
            .join(path)
            .map_err(|err| PortalError::Network(format!("invalid request path {path:?}: {err}")))?;

        let mut request = self.http.request(method, url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let token = self.session.read().await.token().map(str::to_owned);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request = body.apply(request);

        let response = request.send().await.map_err(map_transport_error)?;
        self.check_status(path, response).await
    }

    async fn check_status(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> PortalResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = error_message(response).await;
        match status {
            StatusCode::UNAUTHORIZED => {
                if path != LOGIN_PATH {
                    self.expire_session().await;
                }
                Err(PortalError::Authentication(message))
            }
            StatusCode::FORBIDDEN => Err(PortalError::Authorization(message)),
            _ => Err(PortalError::server(Some(status.as_u16()), message)),
        }
    }

    /// Global 401 handling: clear the session and tell the router to go to
    /// login, regardless of which screen's call tripped it.
    async fn expire_session(&self) {
        tracing::info!("authentication rejected by server; clearing session");
        self.session.write().await.logout();
        let _ = self.signals.send(SessionSignal::Expired);
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> PortalResult<T> {
    response.json().await.map_err(|err| {
        PortalError::Network(format!("failed to decode response body: {err}"))
    })
}

async fn error_message(response: reqwest::Response) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            message: Some(message),
        }) if !message.is_empty() => message,
        _ => "request failed".to_string(),
    }
}

fn map_transport_error(err: reqwest::Error) -> PortalError {
    if err.is_timeout() {
        PortalError::Timeout
    } else {
        PortalError::Network(err.to_string())
    }
}

trait RequestBody {
    fn apply(self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder;
}

struct NoBody;

impl RequestBody for NoBody {
    fn apply(self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
    }
}

struct Json<'a, B: Serialize>(&'a B);

impl<B: Serialize> RequestBody for Json<'_, B> {
    fn apply(self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.json(self.0)
    }
}

struct Multipart(reqwest::multipart::Form);

impl RequestBody for Multipart {
    fn apply(self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.multipart(self.0)
    }
}

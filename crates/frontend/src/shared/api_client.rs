//! HTTP client for the TilesTrack API.
//!
//! Owns the session for the lifetime of the app: restored from localStorage
//! at construction, installed at login, cleared at logout. Components reach
//! it through [`use_api`] instead of looking tokens up ambiently. Every
//! response body is validated against its `contracts` type; failures fold
//! into [`ApiError`] at this boundary.

use gloo_net::http::{Request, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use contracts::system::auth::ErrorResponse;

use crate::shared::storage;

/// Fixed port the API service listens on, next to wherever the UI is
/// served from.
const API_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response carrying the service's `error` field.
    #[error("{0}")]
    Server(String),
    /// Non-2xx response without a readable error body.
    #[error("request failed (HTTP {0})")]
    Status(u16),
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx body that does not match the declared response shape.
    #[error("unexpected response from server: {0}")]
    Decode(String),
}

/// Current login, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub username: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: RwSignal<Session>,
}

impl ApiClient {
    /// Build the client, restoring any persisted session.
    pub fn new() -> Self {
        Self {
            base_url: api_base(),
            session: RwSignal::new(storage::load_session()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reactive: true while a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.token.is_some())
    }

    /// Reactive: username of the current session.
    pub fn username(&self) -> Option<String> {
        self.session.with(|s| s.username.clone())
    }

    /// Install a fresh session and persist it.
    pub fn start_session(&self, token: String, username: String) {
        storage::save_session(&token, &username);
        self.session.set(Session {
            token: Some(token),
            username: Some(username),
        });
    }

    /// Drop the session and its persisted copy.
    pub fn end_session(&self) {
        storage::clear_session();
        self.session.set(Session::default());
    }

    pub async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let mut request = Request::get(&self.url(path));
        if let Some(bearer) = self.bearer() {
            request = request.header("Authorization", &bearer);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let mut request = Request::post(&self.url(path));
        if let Some(bearer) = self.bearer() {
            request = request.header("Authorization", &bearer);
        }
        let response = request
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let mut request = Request::put(&self.url(path));
        if let Some(bearer) = self.bearer() {
            request = request.header("Authorization", &bearer);
        }
        let response = request
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn delete<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let mut request = Request::delete(&self.url(path));
        if let Some(bearer) = self.bearer() {
            request = request.header("Authorization", &bearer);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.token.clone())
            .map(|token| format!("Bearer {token}"))
    }

    async fn decode<T>(response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        if !response.ok() {
            let status = response.status();
            if let Ok(body) = response.json::<ErrorResponse>().await {
                return Err(ApiError::Server(body.error));
            }
            return Err(ApiError::Status(status));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// API base URL derived from the current window location.
fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// The app-wide [`ApiClient`] provided in `App`.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_renders_verbatim() {
        let err = ApiError::Server("Not enough stock".to_string());
        assert_eq!(err.to_string(), "Not enough stock");
    }

    #[test]
    fn status_error_renders_generic_fallback() {
        let err = ApiError::Status(502);
        assert_eq!(err.to_string(), "request failed (HTTP 502)");
    }
}

//! HTTP API client
//!
//! Thin wrappers over the server's JSON endpoints. The server ties requests
//! to a session by cookie, so the client keeps a cookie store and can be
//! seeded with an existing session cookie.

use std::time::Duration;

use parley_core::{Message, Session};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Settings for the HTTP client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the server (e.g. `http://127.0.0.1:5000`)
    pub base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Raw `Cookie` header value identifying the logged-in session
    pub session_cookie: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: Duration::from_secs(10),
            session_cookie: None,
        }
    }
}

#[derive(Deserialize)]
struct UsernameBody {
    username: String,
}

#[derive(Deserialize)]
struct RoomCodeBody {
    room_code: Option<String>,
}

/// Client for the server's HTTP API
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = &config.session_cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| Error::Config(format!("session cookie: {e}")))?;
            headers.insert(COOKIE, value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .cookie_store(true)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET");
        let resp = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(url.clone())
            } else {
                Error::Network(e)
            }
        })?;

        if !resp.status().is_success() {
            return Err(Error::Status {
                status: resp.status().as_u16(),
                url,
            });
        }
        Ok(resp)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let bytes = self.get(path).await?.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| Error::Protocol(format!("{path}: invalid JSON: {e}")))
    }

    /// Identity of the logged-in user (`/api/get_user`)
    pub async fn get_user(&self) -> Result<Session> {
        self.get_json("/api/get_user").await
    }

    /// Username only, from servers predating `/api/get_user`
    pub async fn get_username(&self) -> Result<String> {
        let body: UsernameBody = self.get_json("/api/get_username").await?;
        Ok(body.username)
    }

    /// Room code the server associates with this session
    pub async fn get_room_code(&self) -> Result<String> {
        let body: RoomCodeBody = self.get_json("/api/get_room_code").await?;
        Ok(parley_core::normalize_room_code(
            body.room_code.as_deref().unwrap_or_default(),
        ))
    }

    /// Look up a message by id.
    ///
    /// A 404, an empty object, or a message with empty content is a miss.
    pub async fn get_message_by_id(&self, msg_id: i64) -> Result<Option<Message>> {
        let path = format!("/api/get_message_by_id/{msg_id}");
        let resp = match self.get(&path).await {
            Ok(resp) => resp,
            Err(Error::Status { status: 404, .. }) => return Ok(None),
            Err(e) => return Err(e),
        };
        let bytes = resp.bytes().await?;
        match serde_json::from_slice::<Message>(&bytes) {
            Ok(message) if !message.content.is_empty() => Ok(Some(message)),
            Ok(_) => Ok(None),
            Err(e) => {
                debug!(msg_id, error = %e, "Message lookup returned no message");
                Ok(None)
            }
        }
    }

    /// Switch the session's room, as a page load of `/?room_code=...` would
    pub async fn enter_room(&self, room_code: &str) -> Result<()> {
        let url = format!("{}/", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("room_code", room_code)])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Error::Status {
                status: resp.status().as_u16(),
                url,
            });
        }
        Ok(())
    }
}

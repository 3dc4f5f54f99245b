//! HTTP transport
//!
//! Single reqwest transport shared by the session store and the
//! resource client. Every call carries `Content-Type:
//! application/json` and, once a session exists, `Authorization:
//! Bearer <token>`; the unauthenticated auth endpoints skip the
//! bearer header.

use std::sync::{Arc, RwLock};

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Structured error body returned by the backend.
#[derive(serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Shared HTTP transport with bearer-token injection.
///
/// Cloning is cheap; clones share the same token cell, so a login
/// through the session store authenticates every resource call.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Installs or clears the bearer token for all clones.
    pub fn set_token(&self, token: Option<String>) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn auth_header(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {t}"))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => req.header(reqwest::header::AUTHORIZATION, auth),
            None => req,
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            tracing::debug!(status = status.as_u16(), %message, "request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        // 204 carries no payload; deserialize as JSON null so `()`
        // and `Option<T>` targets still work.
        if status == StatusCode::NO_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(ClientError::from);
        }
        Ok(response.json().await?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.authed(self.client.get(self.url(path)));
        self.handle_response(req.send().await?).await
    }

    pub async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.authed(self.client.post(self.url(path)).json(body));
        self.handle_response(req.send().await?).await
    }

    /// POST without a body (punch-in/punch-out style endpoints).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.authed(self.client.post(self.url(path)));
        self.handle_response(req.send().await?).await
    }

    /// POST without the bearer header, for the auth endpoints.
    pub async fn post_unauth<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.client.post(self.url(path)).json(body);
        self.handle_response(req.send().await?).await
    }

    pub async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.authed(self.client.put(self.url(path)).json(body));
        self.handle_response(req.send().await?).await
    }

    /// PUT without a body (approve/reject/deactivate style endpoints).
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.authed(self.client.put(self.url(path)));
        self.handle_response(req.send().await?).await
    }

    /// PATCH without a body (status toggle endpoint).
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.authed(self.client.patch(self.url(path)));
        self.handle_response(req.send().await?).await
    }

    /// DELETE; tolerates both 204 and bodied success responses.
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let req = self.authed(self.client.delete(self.url(path)));
        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}

//! HTTP client for the remote document store
//!
//! One request per call, no retry and no rate limiting. Non-2xx responses
//! carrying `{error, message}` become [`Error::RemoteApi`] so callers see the
//! store's own `<error>: <message>` text.

use async_trait::async_trait;
use jrnl_common::models::{Document, DocumentPayload, SearchPage};
use jrnl_common::{Error, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use super::{DocumentStore, SearchParams};

const USER_AGENT: &str = concat!("jrnl-api/", env!("CARGO_PKG_VERSION"));

/// Error body returned by the store on failure
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    message: String,
}

/// reqwest-backed [`DocumentStore`]
pub struct HttpDocumentStore {
    http_client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpDocumentStore {
    pub fn new(base_url: &str, api_token: Option<String>, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(remote_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| Error::Parse(e.to_string()))
    }
}

/// Map a failed response to the error taxonomy
fn remote_error(status: StatusCode, body: &str) -> Error {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error, message }) => Error::RemoteApi { error, message },
        Err(_) => Error::RemoteApi {
            error: format!("http_{}", status.as_u16()),
            message: body.trim().to_string(),
        },
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn search(&self, params: &SearchParams) -> Result<SearchPage> {
        tracing::debug!(
            q = %params.query,
            page = params.page,
            per_page = params.per_page,
            sort = %params.sort,
            order = %params.order,
            "Searching remote store"
        );

        let request = self.http_client.get(self.url("/search")).query(&[
            ("q", params.query.clone()),
            ("page", params.page.to_string()),
            ("per_page", params.per_page.to_string()),
            ("sort", params.sort.to_string()),
            ("order", params.order.to_string()),
        ]);

        self.send(request).await
    }

    async fn get(&self, id: u64) -> Result<Document> {
        tracing::debug!(id, "Fetching document");
        let request = self.http_client.get(self.url(&format!("/documents/{}", id)));
        self.send(request).await
    }

    async fn create(&self, payload: &DocumentPayload) -> Result<Document> {
        tracing::debug!(category = %payload.category, "Creating document");
        let request = self.http_client.post(self.url("/documents")).json(payload);
        self.send(request).await
    }

    async fn update(&self, id: u64, payload: &DocumentPayload) -> Result<Document> {
        tracing::debug!(id, category = %payload.category, "Updating document");
        let request = self
            .http_client
            .patch(self.url(&format!("/documents/{}", id)))
            .json(payload);
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let store = HttpDocumentStore::new("https://store.example.com/", None, Duration::from_secs(5));
        assert!(store.is_ok());
        assert_eq!(store.unwrap().base_url, "https://store.example.com");
    }

    #[test]
    fn test_structured_error_body() {
        let err = remote_error(
            StatusCode::NOT_FOUND,
            r#"{"error": "not_found", "message": "Not found"}"#,
        );
        assert_eq!(err.to_string(), "not_found: Not found");
    }

    #[test]
    fn test_unstructured_error_body() {
        let err = remote_error(StatusCode::BAD_GATEWAY, "upstream down\n");
        assert_eq!(err.to_string(), "http_502: upstream down");
    }
}

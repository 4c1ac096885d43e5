//! REST client for the marketplace admin API.

use crate::config::ConsoleConfig;
use crate::table::TableTransport;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use rialto_api::error::{ApiError, ErrorBody};
use rialto_api::ActionRequest;
use rialto_core::{RecordId, RowAction};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The session is no longer valid; the shell must redirect to the
    /// login boundary instead of rendering an in-table error.
    #[error("Session expired")]
    Auth,
    /// Error reported by the API itself, already human readable.
    #[error("{0}")]
    Api(String),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
    #[error("Config error: {0}")]
    Config(String),
}

#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: HeaderMap,
}

impl RestClient {
    pub fn new(config: &ConsoleConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let auth_header = build_auth_headers(&config.auth)?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    /// Fetch a list endpoint, returning the raw JSON envelope.
    ///
    /// Envelope shapes vary by endpoint generation, so decoding into the
    /// normalized page model happens in `table::fetch`, not here.
    pub async fn get_list(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<serde_json::Value, ApiClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(target: "rialto::api", %url, "issuing list fetch");
        let response = self
            .client
            .get(url)
            .headers(self.auth_header.clone())
            .query(query)
            .send()
            .await?;
        self.parse_response(response).await
    }

    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(url)
            .headers(self.auth_header.clone())
            .send()
            .await?;
        self.parse_response(response).await
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(url)
            .headers(self.auth_header.clone())
            .json(body)
            .send()
            .await?;
        self.parse_response(response).await
    }

    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .put(url)
            .headers(self.auth_header.clone())
            .json(body)
            .send()
            .await?;
        self.parse_response(response).await
    }

    /// Issue a state-transition action against one row.
    ///
    /// The API responds with the updated entity; the console refetches the
    /// whole page instead of patching rows in place, so the body is dropped.
    pub async fn post_action(
        &self,
        path: &str,
        body: Option<&ActionRequest>,
    ) -> Result<(), ApiClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(url).headers(self.auth_header.clone());
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        self.parse_empty(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .delete(url)
            .headers(self.auth_header.clone())
            .send()
            .await?;
        self.parse_empty(response).await
    }

    /// Update an entity with attached media using multipart/form-data.
    ///
    /// `fields` are plain text parts; `files` are `(field, file_name, bytes)`.
    pub async fn update_with_media(
        &self,
        path: &str,
        fields: &[(String, String)],
        files: &[(String, String, Vec<u8>)],
    ) -> Result<serde_json::Value, ApiClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut form = Form::new();
        for (name, value) in fields {
            form = form.text(name.clone(), value.clone());
        }
        for (name, file_name, bytes) in files {
            let part = Part::bytes(bytes.clone()).file_name(file_name.clone());
            form = form.part(name.clone(), part);
        }

        let response = self
            .client
            .put(url)
            .headers(self.auth_header.clone())
            .multipart(form)
            .send()
            .await?;
        self.parse_response(response).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        if status.as_u16() == 401 {
            return Err(ApiClientError::Auth);
        }
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let text = response.text().await?;
            Err(decode_error_body(status.as_u16(), &text))
        }
    }

    async fn parse_empty(&self, response: reqwest::Response) -> Result<(), ApiClientError> {
        let status = response.status();
        if status.as_u16() == 401 {
            return Err(ApiClientError::Auth);
        }
        if status.is_success() {
            Ok(())
        } else {
            let text = response.text().await?;
            Err(decode_error_body(status.as_u16(), &text))
        }
    }
}

/// Derive a user-visible error from a failure body.
///
/// Older endpoints answer `{ "error": string }`, newer ones
/// `{ "code", "message" }`; anything else falls back to a generic
/// templated message.
fn decode_error_body(status: u16, text: &str) -> ApiClientError {
    if let Ok(body) = serde_json::from_str::<ErrorBody>(text) {
        return ApiClientError::Api(body.error);
    }
    if let Ok(api_error) = serde_json::from_str::<ApiError>(text) {
        return ApiClientError::Api(format!("{}: {}", api_error.code, api_error.message));
    }
    ApiClientError::InvalidResponse(format!("HTTP {}: {}", status, text))
}

fn build_auth_headers(auth: &crate::config::AuthConfig) -> Result<HeaderMap, ApiClientError> {
    let mut headers = HeaderMap::new();
    if let Some(api_key) = &auth.api_key {
        headers.insert(
            HeaderName::from_static("x-api-key"),
            HeaderValue::from_str(api_key).map_err(|e| ApiClientError::Config(e.to_string()))?,
        );
    }
    if let Some(token) = &auth.bearer_token {
        let value = format!("Bearer {}", token);
        headers.insert(
            HeaderName::from_static("authorization"),
            HeaderValue::from_str(&value).map_err(|e| ApiClientError::Config(e.to_string()))?,
        );
    }
    Ok(headers)
}

#[async_trait]
impl TableTransport for RestClient {
    async fn fetch_list(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<serde_json::Value, ApiClientError> {
        self.get_list(endpoint, query).await
    }

    async fn apply_action(
        &self,
        endpoint: &str,
        id: RecordId,
        action: RowAction,
        body: Option<&ActionRequest>,
    ) -> Result<(), ApiClientError> {
        if action.uses_delete_method() {
            self.delete(&format!("{}/{}", endpoint, id)).await
        } else {
            self.post_action(
                &format!("{}/{}/{}", endpoint, id, action.path_segment()),
                body,
            )
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;

    #[test]
    fn legacy_error_field_wins() {
        let err = decode_error_body(400, r#"{"error":"name is required"}"#);
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn structured_error_is_prefixed_with_code() {
        let err = decode_error_body(409, r#"{"code":"STATE_CONFLICT","message":"already published"}"#);
        assert_eq!(err.to_string(), "STATE_CONFLICT: already published");
    }

    #[test]
    fn unknown_body_falls_back_to_template() {
        let err = decode_error_body(502, "<html>bad gateway</html>");
        assert!(matches!(err, ApiClientError::InvalidResponse(_)));
        assert!(err.to_string().contains("HTTP 502"));
    }

    #[test]
    fn auth_headers_carry_both_credentials() {
        let auth = AuthConfig {
            api_key: Some("key-123".to_string()),
            bearer_token: Some("jwt".to_string()),
        };
        let headers = build_auth_headers(&auth).unwrap();
        assert_eq!(headers.get("x-api-key").unwrap(), "key-123");
        assert_eq!(headers.get("authorization").unwrap(), "Bearer jwt");
    }

    #[test]
    fn auth_headers_reject_control_characters() {
        let auth = AuthConfig {
            api_key: Some("bad\nkey".to_string()),
            bearer_token: None,
        };
        assert!(build_auth_headers(&auth).is_err());
    }
}

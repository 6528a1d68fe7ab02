//! The authenticated GET transport the client talks through.
//!
//! [`Transport`] is the seam between [`HolidaysClient`](crate::HolidaysClient)
//! and the network. [`HttpTransport`] is the reqwest implementation used in
//! production; tests plug in their own.

use std::future::Future;
use std::pin::Pin;

use chrono::Utc;
use reqwest::{Client, StatusCode, header};
use tracing::{debug, trace};
use url::Url;

use crate::auth::AuthCredentials;
use crate::config::TransportConfig;
use crate::error::{ApiError, ApiResult};

/// A boxed future, keeping [`Transport`] object safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A GET request relative to the API base address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRequest {
    /// Absolute endpoint path, e.g. `/v1/holidays/is-holiday`.
    pub path: String,
    /// Query parameters in insertion order.
    pub params: Vec<(String, String)>,
}

impl GetRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Appends a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a query parameter by name.
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A successful response: the HTTP status and the decoded JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub data: serde_json::Value,
}

impl TransportResponse {
    pub fn ok(data: serde_json::Value) -> Self {
        Self { status: 200, data }
    }
}

/// Issues authenticated GET requests against the holidays API.
///
/// Implementations own credentials, signing and headers. Failures are
/// reported as [`ApiError`] and the client forwards them unchanged.
pub trait Transport: Send + Sync {
    fn get(&self, request: GetRequest) -> BoxFuture<'_, ApiResult<TransportResponse>>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn get(&self, request: GetRequest) -> BoxFuture<'_, ApiResult<TransportResponse>> {
        (**self).get(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, request: GetRequest) -> BoxFuture<'_, ApiResult<TransportResponse>> {
        (**self).get(request)
    }
}

/// reqwest-backed [`Transport`].
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    auth: AuthCredentials,
}

impl HttpTransport {
    /// Builds the HTTP client described by `config`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the credentials are empty or the
    /// underlying client cannot be built.
    pub fn new(config: TransportConfig) -> ApiResult<Self> {
        config.auth.validate()?;

        let mut builder = Client::builder().user_agent(config.user_agent());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            ApiError::configuration(format!("failed to create HTTP client: {}", e)).with_source(e)
        })?;

        debug!(
            base_url = %config.base_url,
            auth = config.auth.kind(),
            "created holidays transport"
        );

        Ok(Self {
            client,
            base_url: config.base_url,
            auth: config.auth,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves the request against the base address, including the query string.
    pub fn request_url(&self, request: &GetRequest) -> ApiResult<Url> {
        let mut url = self.base_url.join(&request.path).map_err(|e| {
            ApiError::configuration(format!("invalid request path {:?}: {}", request.path, e))
                .with_source(e)
        })?;
        if !request.params.is_empty() {
            url.query_pairs_mut().extend_pairs(request.params.iter());
        }
        Ok(url)
    }

    async fn execute(&self, request: GetRequest) -> ApiResult<TransportResponse> {
        let url = self.request_url(&request)?;
        let target = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };
        let authorization = self
            .auth
            .authorization("GET", &target, Utc::now().timestamp())?;

        trace!(url = %url, "sending request");

        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, authorization)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    "request timeout".to_string()
                } else if e.is_connect() {
                    format!("connection failed: {}", e)
                } else {
                    format!("request failed: {}", e)
                };
                ApiError::network(message).with_source(e)
            })?;

        let status = response.status();
        debug!(status = %status, target = %target, "received response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, body));
        }

        let body = response.text().await.map_err(|e| {
            ApiError::network(format!("failed to read response: {}", e)).with_source(e)
        })?;
        let data = serde_json::from_str(&body).map_err(|e| {
            ApiError::invalid_response(format!("response is not JSON: {}", e))
                .with_status(status.as_u16())
                .with_source(e)
        })?;

        Ok(TransportResponse {
            status: status.as_u16(),
            data,
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, request: GetRequest) -> BoxFuture<'_, ApiResult<TransportResponse>> {
        Box::pin(self.execute(request))
    }
}

fn error_for_status(status: StatusCode, body: String) -> ApiError {
    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string()
    } else {
        body
    };
    ApiError::from_status(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::ApiErrorCode;

    fn transport(base_url: &str) -> HttpTransport {
        let config = ClientConfig::new(AuthCredentials::bearer("token"))
            .with_base_url(base_url)
            .unwrap()
            .transport_config("Holidays SDK vtest");
        HttpTransport::new(config).unwrap()
    }

    #[test]
    fn request_builder() {
        let request = GetRequest::new("/v1/holidays/")
            .param("startDate", "2024-01-01")
            .param("endDate", "2024-12-31");

        assert_eq!(request.params.len(), 2);
        assert_eq!(request.param_value("startDate"), Some("2024-01-01"));
        assert_eq!(request.param_value("endDate"), Some("2024-12-31"));
        assert_eq!(request.param_value("date"), None);
    }

    #[test]
    fn request_url_with_query() {
        let transport = transport("https://api.example.com");
        let request = GetRequest::new("/v1/holidays/is-holiday").param("date", "2024-01-01");
        let url = transport.request_url(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/holidays/is-holiday?date=2024-01-01"
        );
    }

    #[test]
    fn request_url_without_query_has_no_question_mark() {
        let transport = transport("https://api.example.com");
        let url = transport
            .request_url(&GetRequest::new("/v1/holidays/"))
            .unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/holidays/");
        assert!(url.query().is_none());
    }

    #[test]
    fn empty_credentials_are_rejected() {
        let config = ClientConfig::new(AuthCredentials::bearer("")).transport_config("x");
        let err = HttpTransport::new(config).unwrap_err();
        assert_eq!(err.code(), ApiErrorCode::ConfigurationError);
    }

    #[test]
    fn status_errors_fall_back_to_reason() {
        let err = error_for_status(StatusCode::NOT_FOUND, String::new());
        assert_eq!(err.code(), ApiErrorCode::NotFound);
        assert_eq!(err.message(), "Not Found");

        let err = error_for_status(StatusCode::BAD_REQUEST, "bad date".to_string());
        assert_eq!(err.code(), ApiErrorCode::BadRequest);
        assert_eq!(err.message(), "bad date");
    }
}

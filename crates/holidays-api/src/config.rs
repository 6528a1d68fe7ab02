//! Client and transport configuration.

use std::time::Duration;

use url::Url;

use crate::auth::AuthCredentials;
use crate::error::{ApiError, ApiResult};

/// Production address of the Salling Group API.
pub const DEFAULT_BASE_URL: &str = "https://api.sallinggroup.com";

/// Configuration handed to [`HolidaysClient::new`](crate::HolidaysClient::new).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub auth: AuthCredentials,

    /// Name of the calling application, appended to the User-Agent.
    pub application_name: Option<String>,

    /// Scheme and host of the API; endpoint paths are resolved against its root.
    pub base_url: Url,

    /// Per-request timeout enforced by the transport. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(auth: AuthCredentials) -> Self {
        Self {
            auth,
            application_name: None,
            base_url: default_base_url(),
            timeout: None,
        }
    }

    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// Points the client at another host (staging, a local mock, ...).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse, cannot carry a path, or
    /// has a path other than `/`. Endpoint paths are absolute, so a prefix
    /// such as `/gateway` would be dropped when requests are resolved.
    pub fn with_base_url(mut self, url: impl AsRef<str>) -> ApiResult<Self> {
        self.base_url = parse_base_url(url.as_ref())?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the transport configuration, tagging requests with `base_name`.
    pub fn transport_config(&self, base_name: impl Into<String>) -> TransportConfig {
        TransportConfig {
            auth: self.auth.clone(),
            application_name: self.application_name.clone(),
            base_name: base_name.into(),
            base_url: self.base_url.clone(),
            timeout: self.timeout,
        }
    }
}

/// Everything [`HttpTransport`](crate::HttpTransport) needs to issue requests.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub auth: AuthCredentials,
    pub application_name: Option<String>,
    /// Library identification, e.g. `Holidays SDK v0.1.0`.
    pub base_name: String,
    pub base_url: Url,
    pub timeout: Option<Duration>,
}

impl TransportConfig {
    /// The `User-Agent` header value.
    pub fn user_agent(&self) -> String {
        match self.application_name.as_deref() {
            Some(name) if !name.is_empty() => format!("{} ({})", self.base_name, name),
            _ => self.base_name.clone(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}

fn parse_base_url(url: &str) -> ApiResult<Url> {
    let parsed = Url::parse(url).map_err(|e| {
        ApiError::configuration(format!("invalid base URL {:?}: {}", url, e)).with_source(e)
    })?;
    if parsed.cannot_be_a_base() {
        return Err(ApiError::configuration(format!(
            "base URL {:?} cannot carry a path",
            url
        )));
    }
    if parsed.path() != "/" {
        return Err(ApiError::configuration(format!(
            "base URL {:?} must not have a path, found {:?}",
            url,
            parsed.path()
        )));
    }
    Ok(parsed)
}

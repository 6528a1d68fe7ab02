//! Credentials and request authorization.
//!
//! The API accepts two schemes:
//! - `Bearer <token>` with a static token
//! - `JWT <token>` where the token is an HS256 JWT minted per request, with
//!   claims `iss` (issuer), `mtd` (HTTP method), `iat` (unix seconds) and
//!   `sha` (hex SHA-256 of the request path and query string)

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{ApiError, ApiResult};

type HmacSha256 = Hmac<Sha256>;

/// Pre-encoded `{"alg":"HS256","typ":"JWT"}` header.
const JWT_HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Credentials used to authorize API requests.
///
/// Serialized with a `type` discriminator, e.g.
/// `{"type": "bearer", "token": "..."}`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AuthCredentials {
    /// Signed JWT per request.
    Jwt { issuer: String, secret: String },
    /// Static bearer token.
    Bearer { token: String },
}

impl AuthCredentials {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    pub fn jwt(issuer: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::Jwt {
            issuer: issuer.into(),
            secret: secret.into(),
        }
    }

    /// Short name of the scheme, matching the serialized `type`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Jwt { .. } => "jwt",
            Self::Bearer { .. } => "bearer",
        }
    }

    /// Checks that no credential field is empty.
    pub fn validate(&self) -> ApiResult<()> {
        match self {
            Self::Jwt { issuer, secret } => {
                if issuer.is_empty() {
                    return Err(ApiError::configuration("JWT issuer must not be empty"));
                }
                if secret.is_empty() {
                    return Err(ApiError::configuration("JWT secret must not be empty"));
                }
            }
            Self::Bearer { token } => {
                if token.is_empty() {
                    return Err(ApiError::configuration("bearer token must not be empty"));
                }
            }
        }
        Ok(())
    }

    /// Builds the `Authorization` header value for one request.
    ///
    /// `path_and_query` is the request target as sent on the wire, e.g.
    /// `/v1/holidays/is-holiday?date=2024-01-01`.
    pub fn authorization(
        &self,
        method: &str,
        path_and_query: &str,
        issued_at: i64,
    ) -> ApiResult<String> {
        match self {
            Self::Bearer { token } => Ok(format!("Bearer {}", token)),
            Self::Jwt { issuer, secret } => {
                let claims = serde_json::json!({
                    "iss": issuer,
                    "mtd": method,
                    "iat": issued_at,
                    "sha": sha256_hex(path_and_query),
                });
                let token = sign_jwt(&claims, secret)?;
                Ok(format!("JWT {}", token))
            }
        }
    }
}

impl fmt::Debug for AuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt { issuer, .. } => f
                .debug_struct("Jwt")
                .field("issuer", issuer)
                .field("secret", &"<redacted>")
                .finish(),
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}

/// Encodes and signs `claims` as an HS256 JWT.
fn sign_jwt(claims: &serde_json::Value, secret: &str) -> ApiResult<String> {
    let header = URL_SAFE_NO_PAD.encode(JWT_HEADER);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    let signing_input = format!("{}.{}", header, payload);

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| ApiError::configuration(format!("invalid JWT secret: {}", e)))?;
    mac.update(signing_input.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{}.{}", signing_input, signature))
}

fn sha256_hex(input: &str) -> String {
    format!("{:x}", Sha256::digest(input.as_bytes()))
}

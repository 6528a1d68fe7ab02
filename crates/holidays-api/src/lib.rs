//! Client for the Salling Group Holidays API.
//!
//! - [`HolidaysClient`] - High level operations (`is_holiday`, `next_holiday`, ...)
//! - [`Transport`] - The authenticated GET collaborator the client talks through
//! - [`HttpTransport`] - reqwest implementation of [`Transport`]
//! - [`ApiError`] - Error type shared by transports and the client
//!
//! # Architecture
//!
//! ```text
//! caller ──▶ HolidaysClient ──▶ normalize_date() ──▶ Transport::get ──▶ API
//!                  ▲                                        │
//!                  └──────────── decoded JSON body ◀────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use holidays_api::{AuthCredentials, ClientConfig, HolidaysClient};
//!
//! let client = HolidaysClient::new(
//!     ClientConfig::new(AuthCredentials::bearer("token")).with_application_name("my-app"),
//! )?;
//! if let Some(holiday) = client.next_holiday().await? {
//!     println!("{} is {}", holiday.date(), holiday.name());
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use auth::AuthCredentials;
pub use client::HolidaysClient;
pub use config::{ClientConfig, TransportConfig};
pub use error::{ApiError, ApiErrorCode, ApiResult};
pub use transport::{BoxFuture, GetRequest, HttpTransport, Transport, TransportResponse};

pub use holidays_core::{CalendarDate, Holiday, normalize_date};

/// Version of this library, baked in at build time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client identification sent with every request.
pub fn base_name() -> String {
    format!("Holidays SDK v{}", VERSION)
}

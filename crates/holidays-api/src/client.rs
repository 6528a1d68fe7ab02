//! High level holidays operations.

use serde::de::DeserializeOwned;
use tracing::trace;

use holidays_core::{CalendarDate, Holiday, normalize_date};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::transport::{GetRequest, HttpTransport, Transport};

/// Root of every holidays endpoint.
pub const BASE_PATH: &str = "/v1/holidays/";

/// Endpoint answering whether a single date is a holiday.
pub const IS_HOLIDAY_PATH: &str = "/v1/holidays/is-holiday";

/// Client for the holidays API.
///
/// Every operation normalizes its date arguments, issues exactly one GET and
/// returns the decoded body. Transport errors are returned as-is; nothing is
/// retried or cached. The client holds no mutable state, so a shared
/// reference can drive any number of concurrent requests.
#[derive(Debug)]
pub struct HolidaysClient<T = HttpTransport> {
    transport: T,
}

impl HolidaysClient<HttpTransport> {
    /// Creates a client backed by [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the transport cannot be built.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let transport = HttpTransport::new(config.transport_config(crate::base_name()))?;
        Ok(Self { transport })
    }
}

impl<T: Transport> HolidaysClient<T> {
    /// Creates a client on top of an existing transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns whether `date` is a holiday.
    pub async fn is_holiday(&self, date: impl Into<CalendarDate>) -> ApiResult<bool> {
        let request = GetRequest::new(IS_HOLIDAY_PATH).param("date", normalize_date(date));
        self.fetch(request).await
    }

    /// Returns the holidays between `start_date` and `end_date`.
    pub async fn holidays_in_between(
        &self,
        start_date: impl Into<CalendarDate>,
        end_date: impl Into<CalendarDate>,
    ) -> ApiResult<Vec<Holiday>> {
        let request = GetRequest::new(BASE_PATH)
            .param("startDate", normalize_date(start_date))
            .param("endDate", normalize_date(end_date));
        self.fetch(request).await
    }

    /// Returns the holidays from today (as the server sees it) until `date`.
    pub async fn holidays_until(&self, date: impl Into<CalendarDate>) -> ApiResult<Vec<Holiday>> {
        let request = GetRequest::new(BASE_PATH).param("endDate", normalize_date(date));
        self.fetch(request).await
    }

    /// Returns the holidays in the year starting today.
    pub async fn holidays_within_upcoming_year(&self) -> ApiResult<Vec<Holiday>> {
        self.fetch(GetRequest::new(BASE_PATH)).await
    }

    /// Returns the next upcoming holiday, or `None` if the coming year has none.
    pub async fn next_holiday(&self) -> ApiResult<Option<Holiday>> {
        let holidays = self.holidays_within_upcoming_year().await?;
        Ok(holidays.into_iter().next())
    }

    async fn fetch<R: DeserializeOwned>(&self, request: GetRequest) -> ApiResult<R> {
        trace!(path = %request.path, params = ?request.params, "holidays request");
        let response = self.transport.get(request).await?;
        let status = response.status;
        serde_json::from_value(response.data).map_err(|e| {
            ApiError::invalid_response(format!("unexpected response body: {}", e))
                .with_status(status)
                .with_source(e)
        })
    }
}

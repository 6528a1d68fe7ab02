//! Holiday lookups.

use tracing::debug;

use holidays_api::{HolidaysClient, Transport};

use crate::cli::parse_date_arg;
use crate::error::CliResult;
use crate::output::{self, OutputFormat};

/// `holidays is-holiday <DATE>`
pub async fn is_holiday<T: Transport>(
    client: &HolidaysClient<T>,
    date: &str,
    format: OutputFormat,
) -> CliResult<String> {
    let date = parse_date_arg(date);
    debug!(date = %date, "checking date");
    let answer = client.is_holiday(date.clone()).await?;
    Ok(output::render_is_holiday(&date.normalize(), answer, format)?)
}

/// `holidays between <START> <END>`
pub async fn between<T: Transport>(
    client: &HolidaysClient<T>,
    start: &str,
    end: &str,
    format: OutputFormat,
) -> CliResult<String> {
    let holidays = client
        .holidays_in_between(parse_date_arg(start), parse_date_arg(end))
        .await?;
    Ok(output::render_holidays(&holidays, format)?)
}

/// `holidays until <DATE>`
pub async fn until<T: Transport>(
    client: &HolidaysClient<T>,
    date: &str,
    format: OutputFormat,
) -> CliResult<String> {
    let holidays = client.holidays_until(parse_date_arg(date)).await?;
    Ok(output::render_holidays(&holidays, format)?)
}

/// `holidays upcoming`
pub async fn upcoming<T: Transport>(
    client: &HolidaysClient<T>,
    format: OutputFormat,
) -> CliResult<String> {
    let holidays = client.holidays_within_upcoming_year().await?;
    Ok(output::render_holidays(&holidays, format)?)
}

/// `holidays next`
pub async fn next<T: Transport>(
    client: &HolidaysClient<T>,
    format: OutputFormat,
) -> CliResult<String> {
    let holiday = client.next_holiday().await?;
    Ok(output::render_next(holiday.as_ref(), format)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use holidays_api::{ApiError, ApiResult, BoxFuture, GetRequest, TransportResponse};
    use serde_json::json;

    struct StaticTransport(Option<serde_json::Value>);

    impl Transport for StaticTransport {
        fn get(&self, _request: GetRequest) -> BoxFuture<'_, ApiResult<TransportResponse>> {
            let result = match &self.0 {
                Some(data) => Ok(TransportResponse::ok(data.clone())),
                None => Err(ApiError::from_status(401, "invalid token")),
            };
            Box::pin(async move { result })
        }
    }

    fn client(data: serde_json::Value) -> HolidaysClient<StaticTransport> {
        HolidaysClient::with_transport(StaticTransport(Some(data)))
    }

    #[tokio::test]
    async fn is_holiday_renders_answer() {
        let out = is_holiday(&client(json!(true)), "2024-12-25", OutputFormat::Text)
            .await
            .unwrap();
        assert_eq!(out, "2024-12-25 is a holiday");
    }

    #[tokio::test]
    async fn next_renders_first_entry() {
        let data = json!([
            {"date": "2025-01-01", "name": "Nytårsdag", "nationalHoliday": true},
            {"date": "2025-04-17", "name": "Skærtorsdag", "nationalHoliday": true}
        ]);
        let out = next(&client(data), OutputFormat::Text).await.unwrap();
        assert_eq!(out, "2025-01-01  Nytårsdag (national)");
    }

    #[tokio::test]
    async fn between_renders_empty_list() {
        let out = between(&client(json!([])), "2024-07-01", "today", OutputFormat::Json)
            .await
            .unwrap();
        assert_eq!(out, "[]");
    }

    #[tokio::test]
    async fn api_errors_surface() {
        let client = HolidaysClient::with_transport(StaticTransport(None));
        let err = upcoming(&client, OutputFormat::Text).await.unwrap_err();
        match err {
            CliError::Api(api) => assert_eq!(api.status(), Some(401)),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

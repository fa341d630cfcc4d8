//! Forecast endpoint client

use tracing::debug;

use crate::error::FetchError;
use crate::forecast::ForecastResponse;
use crate::query::ForecastQuery;

/// Where the forecast service listens unless told otherwise
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Single-shot client for `GET /weather/forecast`.
///
/// No timeout and no retry: a request either completes or fails once.
#[derive(Clone, Debug)]
pub struct ForecastClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ForecastClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request URL for a query. The city is percent-encoded, days go as typed.
    pub fn forecast_url(&self, query: &ForecastQuery) -> String {
        format!(
            "{}/weather/forecast?city={}&days={}",
            self.base_url,
            urlencoding::encode(&query.city),
            query.days
        )
    }

    /// Fetch current conditions and the daily forecast for `query`.
    pub async fn fetch_forecast(&self, query: &ForecastQuery) -> Result<ForecastResponse, FetchError> {
        let url = self.forecast_url(query);
        debug!(%url, "requesting forecast");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response.json().await.map_err(FetchError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(city: &str, days: &str) -> ForecastQuery {
        ForecastQuery {
            city: city.into(),
            days: days.into(),
        }
    }

    #[test]
    fn test_forecast_url_encodes_city() {
        let client = ForecastClient::default();
        assert_eq!(
            client.forecast_url(&query("São Paulo", "3")),
            "http://localhost:8080/weather/forecast?city=S%C3%A3o%20Paulo&days=3"
        );
    }

    #[test]
    fn test_forecast_url_trailing_slash() {
        let client = ForecastClient::new("http://example.test:9000/");
        assert_eq!(client.base_url(), "http://example.test:9000");
        assert_eq!(
            client.forecast_url(&query("Rome", "7")),
            "http://example.test:9000/weather/forecast?city=Rome&days=7"
        );
    }
}

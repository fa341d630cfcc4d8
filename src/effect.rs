//! Effects - side effects declared by the reducer

use tracing::{error, info};

use crate::action::Action;
use crate::api::ForecastClient;
use crate::forecast::ForecastReport;
use crate::query::ForecastQuery;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone)]
pub enum Effect {
    /// Fetch current conditions and daily forecast for a validated query
    FetchForecast(ForecastQuery),
}

/// Run one forecast request and turn its outcome into the result action.
///
/// Every failure maps to the same user-facing message; the detail is logged.
pub async fn fetch_forecast_action(client: &ForecastClient, query: ForecastQuery) -> Action {
    match client.fetch_forecast(&query).await {
        Ok(response) => {
            info!(
                city = %query.city,
                days = response.day_temp.len(),
                "forecast loaded"
            );
            Action::ForecastDidLoad(ForecastReport::new(query.city, response))
        }
        Err(err) => {
            error!(city = %query.city, error = %err, detail = ?err, "error fetching weather data");
            Action::ForecastDidError(err.user_message().to_string())
        }
    }
}

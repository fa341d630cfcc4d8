//! Forecast client tests against a wiremock server

use forecast::action::Action;
use forecast::api::ForecastClient;
use forecast::effect::fetch_forecast_action;
use forecast::error::{FETCH_FAILED_MESSAGE, FetchError};
use forecast::query::ForecastQuery;
use pretty_assertions::assert_eq;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample forecast service response
fn sample_forecast_response() -> serde_json::Value {
    serde_json::json!({
        "weatherResponse": {
            "city": "New York",
            "region": "New York",
            "country": "United States of America",
            "condition": "Partly cloudy",
            "temperature": 21.5
        },
        "dayTemp": [
            { "date": "2024-01-15", "avgTemp": 3.4, "minTemp": -1.5, "maxTemp": 7.5 },
            { "date": "2024-01-16", "avgTemp": 2.1, "minTemp": -3.0, "maxTemp": 5.9 },
            { "date": "2024-01-17", "avgTemp": 4.8, "minTemp": 0.2, "maxTemp": 9.1 }
        ]
    })
}

fn query(city: &str, days: &str) -> ForecastQuery {
    ForecastQuery {
        city: city.into(),
        days: days.into(),
    }
}

/// Nothing listens on port 1
fn unreachable_client() -> ForecastClient {
    ForecastClient::new("http://127.0.0.1:1")
}

async fn setup_forecast_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather/forecast"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_fetch_forecast_sends_city_and_days() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather/forecast"))
        .and(query_param("city", "New York"))
        .and(query_param("days", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ForecastClient::new(mock_server.uri());
    let response = client
        .fetch_forecast(&query("New York", "3"))
        .await
        .unwrap();

    assert_eq!(response.weather_response.city, "New York");
    assert_eq!(response.weather_response.region.as_deref(), Some("New York"));
    assert_eq!(response.weather_response.temperature, 21.5);
    let dates: Vec<_> = response.day_temp.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, ["2024-01-15", "2024-01-16", "2024-01-17"]);
}

#[tokio::test]
async fn test_fetch_forecast_without_region() {
    let mock_server = MockServer::start().await;
    let body = serde_json::json!({
        "weatherResponse": {
            "city": "Reykjavik",
            "country": "Iceland",
            "condition": "Light snow",
            "temperature": -2.5
        },
        "dayTemp": []
    });
    setup_forecast_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = ForecastClient::new(mock_server.uri());
    let response = client
        .fetch_forecast(&query("Reykjavik", "1"))
        .await
        .unwrap();

    assert_eq!(response.weather_response.region, None);
    assert_eq!(response.weather_response.location_line(), "Reykjavik, Iceland");
    assert!(response.day_temp.is_empty());
}

#[tokio::test]
async fn test_loaded_action_keeps_typed_city() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = ForecastClient::new(mock_server.uri());
    let action = fetch_forecast_action(&client, query("nyc", "3")).await;

    let Action::ForecastDidLoad(report) = action else {
        panic!("expected ForecastDidLoad, got {action:?}");
    };
    assert_eq!(report.city, "nyc");
    assert_eq!(report.weather.city, "New York");
    assert_eq!(report.days.len(), 3);
}

// ============================================================================
// Failure scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_is_status_error() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(&mock_server, ResponseTemplate::new(500)).await;

    let client = ForecastClient::new(mock_server.uri());
    let err = client
        .fetch_forecast(&query("Paris", "3"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn test_not_found_is_status_error() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(&mock_server, ResponseTemplate::new(404)).await;

    let client = ForecastClient::new(mock_server.uri());
    let err = client
        .fetch_forecast(&query("Atlantis", "3"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 404));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not json"),
    )
    .await;

    let client = ForecastClient::new(mock_server.uri());
    let err = client
        .fetch_forecast(&query("Paris", "3"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let err = unreachable_client()
        .fetch_forecast(&query("Paris", "3"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn test_server_error_and_network_failure_show_same_message() {
    let mock_server = MockServer::start().await;
    setup_forecast_mock(&mock_server, ResponseTemplate::new(500)).await;

    let server_error =
        fetch_forecast_action(&ForecastClient::new(mock_server.uri()), query("Paris", "3")).await;
    let network_error = fetch_forecast_action(&unreachable_client(), query("Paris", "3")).await;

    assert_eq!(
        server_error,
        Action::ForecastDidError(FETCH_FAILED_MESSAGE.into())
    );
    assert_eq!(server_error, network_error);
}

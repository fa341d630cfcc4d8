//! Error kinds surfaced by the forecast front end

/// Text shown for every fetch failure. Details only go to the log.
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch weather data. Please check if the API server is running and try again.";

/// Rejected form input, handled before any request is made
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a city name")]
    EmptyCity,
}

/// Any failure between issuing the request and decoding the body
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Status(reqwest::StatusCode),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("response parse error: {0}")]
    Decode(#[source] reqwest::Error),
}

impl FetchError {
    /// The message the user sees, identical for every variant.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

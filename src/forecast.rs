//! Forecast endpoint payload and display formatting

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Current conditions as returned by the endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentWeather {
    pub city: String,
    #[serde(default)]
    pub region: Option<String>,
    pub country: String,
    pub condition: String,
    pub temperature: f64,
}

impl CurrentWeather {
    /// "City, Region, Country", region left out when absent or blank.
    pub fn location_line(&self) -> String {
        match self.region.as_deref().filter(|r| !r.is_empty()) {
            Some(region) => format!("{}, {}, {}", self.city, region, self.country),
            None => format!("{}, {}", self.city, self.country),
        }
    }
}

/// One day of the multi-day forecast
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayTemp {
    /// ISO date, `yyyy-mm-dd`
    pub date: String,
    pub avg_temp: f64,
    pub min_temp: f64,
    pub max_temp: f64,
}

impl DayTemp {
    /// Long en-US form, e.g. "Monday, Jan 15". Unparseable dates pass through.
    pub fn display_date(&self) -> String {
        match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            Ok(date) => date.format("%A, %b %-d").to_string(),
            Err(_) => self.date.clone(),
        }
    }
}

/// Body of `GET /weather/forecast`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub weather_response: CurrentWeather,
    pub day_temp: Vec<DayTemp>,
}

/// What the view renders after a successful fetch
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastReport {
    /// City exactly as the user submitted it (trimmed)
    pub city: String,
    pub weather: CurrentWeather,
    /// Response order, never re-sorted
    pub days: Vec<DayTemp>,
}

impl ForecastReport {
    pub fn new(city: impl Into<String>, response: ForecastResponse) -> Self {
        Self {
            city: city.into(),
            weather: response.weather_response,
            days: response.day_temp,
        }
    }
}

/// Round to the nearest whole degree, halves toward positive infinity.
pub fn round_temp(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Whole-degree Celsius label, e.g. "22°C"
pub fn format_celsius(value: f64) -> String {
    format!("{}°C", round_temp(value))
}

/// Bare whole-degree label, e.g. "22°"
pub fn format_degrees(value: f64) -> String {
    format!("{}°", round_temp(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn current(region: Option<&str>) -> CurrentWeather {
        CurrentWeather {
            city: "Porto".into(),
            region: region.map(Into::into),
            country: "Portugal".into(),
            condition: "Sunny".into(),
            temperature: 21.5,
        }
    }

    #[test]
    fn test_round_temp_halves_up() {
        assert_eq!(round_temp(21.5), 22);
        assert_eq!(round_temp(21.4), 21);
        assert_eq!(round_temp(-21.5), -21);
        assert_eq!(round_temp(-21.6), -22);
        assert_eq!(round_temp(-0.4), 0);
    }

    #[test]
    fn test_temperature_labels() {
        assert_eq!(format_celsius(21.5), "22°C");
        assert_eq!(format_degrees(-3.2), "-3°");
    }

    #[test]
    fn test_location_line_with_region() {
        assert_eq!(current(Some("Norte")).location_line(), "Porto, Norte, Portugal");
    }

    #[test]
    fn test_location_line_without_region() {
        assert_eq!(current(None).location_line(), "Porto, Portugal");
        assert_eq!(current(Some("")).location_line(), "Porto, Portugal");
    }

    #[test]
    fn test_display_date() {
        let day = DayTemp {
            date: "2024-01-15".into(),
            ..Default::default()
        };
        assert_eq!(day.display_date(), "Monday, Jan 15");

        let day = DayTemp {
            date: "2024-03-01".into(),
            ..Default::default()
        };
        assert_eq!(day.display_date(), "Friday, Mar 1");
    }

    #[test]
    fn test_display_date_passes_through_garbage() {
        let day = DayTemp {
            date: "tomorrow".into(),
            ..Default::default()
        };
        assert_eq!(day.display_date(), "tomorrow");
    }

    #[test]
    fn test_response_field_names() {
        let json = serde_json::json!({
            "weatherResponse": {
                "city": "Porto",
                "region": null,
                "country": "Portugal",
                "condition": "Light rain",
                "temperature": 14.2
            },
            "dayTemp": [
                { "date": "2024-01-15", "avgTemp": 13.1, "minTemp": 9.0, "maxTemp": 16.4 }
            ]
        });
        let response: ForecastResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.weather_response.region, None);
        assert_eq!(response.day_temp.len(), 1);
        assert_eq!(response.day_temp[0].max_temp, 16.4);
    }
}

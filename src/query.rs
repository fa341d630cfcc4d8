//! Forecast query built from the form inputs

use crate::error::ValidationError;

/// One request's worth of input. Lives only as long as the fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForecastQuery {
    /// Trimmed, never empty
    pub city: String,
    /// Passed through to the endpoint as typed
    pub days: String,
}

impl ForecastQuery {
    /// Validate raw form values. Only the city is checked.
    pub fn from_input(city: &str, days: &str) -> Result<Self, ValidationError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ValidationError::EmptyCity);
        }
        Ok(Self {
            city: city.to_string(),
            days: days.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_is_trimmed() {
        let query = ForecastQuery::from_input("  Lisbon \t", "5").unwrap();
        assert_eq!(query.city, "Lisbon");
        assert_eq!(query.days, "5");
    }

    #[test]
    fn test_empty_and_blank_city_rejected() {
        assert_eq!(
            ForecastQuery::from_input("", "3"),
            Err(ValidationError::EmptyCity)
        );
        assert_eq!(
            ForecastQuery::from_input("   \n", "3"),
            Err(ValidationError::EmptyCity)
        );
    }

    #[test]
    fn test_days_not_validated() {
        let query = ForecastQuery::from_input("Oslo", "lots").unwrap();
        assert_eq!(query.days, "lots");
    }
}

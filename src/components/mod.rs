pub mod current_conditions;
pub mod forecast_display;
pub mod forecast_grid;
pub mod search_form;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use current_conditions::{CurrentConditions, CurrentConditionsProps};
pub use forecast_display::{ERROR_ICON, ForecastDisplay, ForecastDisplayProps};
pub use forecast_grid::{ForecastGrid, ForecastGridProps};
pub use search_form::{SearchForm, SearchFormProps};

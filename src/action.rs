//! Actions: user intents, async results, and UI housekeeping

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::forecast::ForecastReport;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Forecast category =====
    /// Intent: submit the form (validates, then triggers the fetch task)
    ForecastSubmit,

    /// Result: forecast loaded for the submitted city
    ForecastDidLoad(ForecastReport),

    /// Result: fetch failed, carries the user-facing message
    ForecastDidError(String),

    // ===== Form category =====
    /// City input text changed
    FormCityChange(String),

    /// Days input text changed
    FormDaysChange(String),

    /// Move focus to the other input
    FormFocusNext,

    // ===== UI category =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}

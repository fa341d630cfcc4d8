//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::forecast::ForecastReport;

/// Forecast length pre-filled in the form
pub const DEFAULT_DAYS: &str = "3";

/// Spinner timing while a request is in flight
pub const LOADING_ANIM_TICK_MS: u64 = 80;
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Submit control labels
pub const SUBMIT_LABEL: &str = "Get Weather";
pub const SUBMIT_LABEL_LOADING: &str = "Loading...";

/// Which form input receives typed characters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum InputField {
    #[default]
    City,
    Days,
}

impl InputField {
    pub fn next(self) -> Self {
        match self {
            InputField::City => InputField::Days,
            InputField::Days => InputField::City,
        }
    }
}

/// What the card area shows. Exactly one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Nothing submitted yet
    Idle,
    /// Request in flight, submit disabled
    Loading,
    /// Last request succeeded
    Content,
    /// Validation or fetch failure banner
    Error,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Form ---
    /// City input as typed (untrimmed)
    #[debug(section = "Form", label = "City")]
    pub city_input: String,

    /// Days input as typed, never validated
    #[debug(section = "Form", label = "Days")]
    pub days_input: String,

    /// Focused input
    #[debug(section = "Form", label = "Focus", debug_fmt)]
    pub focus: InputField,

    // --- Result ---
    /// Forecast lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Forecast", label = "Data", debug_fmt)]
    pub forecast: DataResource<ForecastReport>,

    // --- Animation internals (skipped) ---
    /// Spinner frame counter
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    /// Create state with the form pre-filled
    pub fn new(city: impl Into<String>, days: impl Into<String>) -> Self {
        Self {
            city_input: city.into(),
            days_input: days.into(),
            focus: InputField::default(),
            forecast: DataResource::Empty,
            tick_count: 0,
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        match &self.forecast {
            DataResource::Empty => ViewMode::Idle,
            DataResource::Loading => ViewMode::Loading,
            DataResource::Loaded(_) => ViewMode::Content,
            DataResource::Failed(_) => ViewMode::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.forecast.is_loading()
    }

    /// Submit is disabled for the duration of one request
    pub fn submit_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            SUBMIT_LABEL_LOADING
        } else {
            SUBMIT_LABEL
        }
    }

    /// Value of the input that currently has focus
    pub fn focused_value(&self) -> &str {
        match self.focus {
            InputField::City => &self.city_input,
            InputField::Days => &self.days_input,
        }
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick_count as usize % SPINNER_FRAMES.len()]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_DAYS)
    }
}

//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::query::ForecastQuery;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Forecast actions =====
        Action::ForecastSubmit => {
            // Submit control is disabled while a request is in flight
            if state.is_loading() {
                return DispatchResult::unchanged();
            }

            match ForecastQuery::from_input(&state.city_input, &state.days_input) {
                Ok(query) => {
                    state.forecast = DataResource::Loading;
                    state.tick_count = 0;
                    DispatchResult::changed_with(Effect::FetchForecast(query))
                }
                Err(err) => {
                    state.forecast = DataResource::Failed(err.to_string());
                    DispatchResult::changed()
                }
            }
        }

        Action::ForecastDidLoad(report) => {
            state.forecast = DataResource::Loaded(report);
            DispatchResult::changed()
        }

        Action::ForecastDidError(msg) => {
            state.forecast = DataResource::Failed(msg);
            DispatchResult::changed()
        }

        // ===== Form actions =====
        Action::FormCityChange(value) => {
            state.city_input = value;
            DispatchResult::changed()
        }

        Action::FormDaysChange(value) => {
            state.days_input = value;
            DispatchResult::changed()
        }

        Action::FormFocusNext => {
            state.focus = state.focus.next();
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

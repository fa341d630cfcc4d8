//! Forecast TUI - city forecast front end built on tui-dispatch
//!
//! This library exposes the application's modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod error;
pub mod forecast;
pub mod icons;
pub mod logging;
pub mod query;
pub mod reducer;
pub mod state;

//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::state::DisplayWeather;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Search field text changed
    SearchQueryChange(String),

    /// Intent: look up the given city (Enter or search glyph click)
    SearchSubmit(String),

    /// Result: the search with this id resolved with weather
    SearchDidLoad { request_id: u64, weather: DisplayWeather },

    /// Result: the search with this id failed
    SearchDidError { request_id: u64, error: SearchError },

    // ===== Alert category =====
    /// Close the blocking alert
    AlertClose,

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Exit the application
    Quit,
}

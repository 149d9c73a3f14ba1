//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::icons::WeatherIcon;

/// Display-ready weather, built in one piece from a provider response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DisplayWeather {
    /// °C, floored
    pub temperature: i32,
    /// °C, floored
    pub feels_like: i32,
    /// Relative humidity, percent
    pub humidity: u8,
    /// Passed through from the provider
    pub wind_speed: f64,
    /// Kilometres, rounded to one decimal
    pub visibility: f64,
    pub sunrise: String,
    pub sunset: String,
    pub location: String,
    pub icon: WeatherIcon,
}

impl DisplayWeather {
    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature)
    }

    pub fn feels_like_label(&self) -> String {
        format!("{}°C", self.feels_like)
    }

    pub fn humidity_label(&self) -> String {
        format!("{} %", self.humidity)
    }

    pub fn wind_label(&self) -> String {
        format!("{} km/h", self.wind_speed)
    }

    /// Always one decimal, `8` km renders as `8.0`
    pub fn visibility_value(&self) -> String {
        format!("{:.1}", self.visibility)
    }

    pub fn visibility_label(&self) -> String {
        format!("{} km", self.visibility_value())
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Absent until a search succeeds, cleared on any failure
    #[debug(section = "Weather", label = "Data", debug_fmt)]
    pub weather: Option<DisplayWeather>,

    /// Searches issued but not yet resolved
    #[debug(section = "Weather", label = "In flight")]
    pub in_flight: u32,

    /// Id handed to the next issued search
    #[debug(section = "Weather", label = "Next request")]
    pub next_request_id: u64,

    /// Current contents of the search field
    #[debug(section = "Search", label = "Query")]
    pub query: String,

    /// Blocking alert; swallows all input while set
    #[debug(section = "Search", label = "Alert", debug_fmt)]
    pub alert: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight > 0
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }
}

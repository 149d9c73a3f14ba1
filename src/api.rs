//! OpenWeather current-weather client

use serde::Deserialize;
use tracing::{debug, error, instrument, warn};

use crate::clock::format_clock;
use crate::config::PanelConfig;
use crate::error::SearchError;
use crate::icons::WeatherIcon;
use crate::state::DisplayWeather;

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct OwCondition {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

/// Current-weather response; only the fields the panel shows
#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    weather: Vec<OwCondition>,
    timezone: i64,
    main: OwMain,
    wind: OwWind,
    visibility: f64,
    sys: OwSys,
    name: String,
}

/// Error body; only the message is shown
#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

// ============================================================================
// Mapping
// ============================================================================

/// Halves round away from zero: 6.55 km becomes 6.6.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn to_display(data: OwCurrentResponse) -> Result<DisplayWeather, SearchError> {
    let code = data
        .weather
        .first()
        .map(|c| c.icon.as_str())
        .ok_or_else(|| SearchError::Transport("response has no weather conditions".into()))?;

    let clock = |epoch: i64| {
        format_clock(epoch, data.timezone)
            .ok_or_else(|| SearchError::Transport(format!("timestamp {epoch} out of range")))
    };

    Ok(DisplayWeather {
        temperature: data.main.temp.floor() as i32,
        feels_like: data.main.feels_like.floor() as i32,
        humidity: data.main.humidity,
        wind_speed: data.wind.speed,
        visibility: round_one_decimal(data.visibility / 1000.0),
        sunrise: clock(data.sys.sunrise)?,
        sunset: clock(data.sys.sunset)?,
        location: data.name.clone(),
        icon: WeatherIcon::from_code(code),
    })
}

/// Decode a provider answer into display weather or a classified failure.
///
/// A non-success status with a JSON body is a provider error carrying the
/// body's `message`; anything that is not JSON is a transport error.
pub fn interpret_response(
    status: reqwest::StatusCode,
    body: &str,
) -> Result<DisplayWeather, SearchError> {
    if !status.is_success() {
        let parsed: OwErrorBody = serde_json::from_str(body)?;
        let message = parsed.message.unwrap_or_else(|| status.to_string());
        return Err(SearchError::Provider(message));
    }

    let data: OwCurrentResponse = serde_json::from_str(body)?;
    to_display(data)
}

// ============================================================================
// Client
// ============================================================================

/// HTTP client bound to one configuration
#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: PanelConfig,
}

impl WeatherClient {
    pub fn new(config: PanelConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Fetch and map current weather for `city`.
    ///
    /// Rejects blank input without touching the network. Every failure is
    /// logged here; callers only decide how to present it.
    #[instrument(skip(self))]
    pub async fn current_weather(&self, city: &str) -> Result<DisplayWeather, SearchError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(SearchError::Validation);
        }

        let result = self.fetch(city).await;
        match &result {
            Ok(weather) => debug!(location = %weather.location, "weather loaded"),
            Err(SearchError::Provider(message)) => warn!(%message, "provider rejected request"),
            Err(SearchError::Transport(reason)) => error!(%reason, "error fetching weather data"),
            Err(SearchError::Validation) => {}
        }
        result
    }

    async fn fetch(&self, city: &str) -> Result<DisplayWeather, SearchError> {
        let response = self.http.get(self.config.weather_url(city)).send().await?;
        let status = response.status();
        let body = response.text().await?;
        interpret_response(status, &body)
    }
}

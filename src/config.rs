//! Panel configuration, injected at construction

use serde::Deserialize;

/// Provider endpoint used when no override is given
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// City looked up on startup
pub const DEFAULT_CITY: &str = "Patna";

/// Environment variable holding the OpenWeather API key
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Everything the panel needs from the outside world.
///
/// The API key is not validated here: a missing or wrong key shows up as a
/// provider error on the first request.
#[derive(Clone, Deserialize)]
pub struct PanelConfig {
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_city")]
    pub default_city: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

impl PanelConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            default_city: default_city(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_default_city(mut self, city: impl Into<String>) -> Self {
        self.default_city = city.into();
        self
    }

    /// Current-weather endpoint for `city`, metric units.
    pub fn weather_url(&self, city: &str) -> String {
        format!(
            "{}/data/2.5/weather?q={}&units=metric&appid={}",
            self.base_url,
            urlencoding::encode(city),
            urlencoding::encode(&self.api_key)
        )
    }
}

// Keep the key out of logs and debug dumps.
impl std::fmt::Debug for PanelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("default_city", &self.default_city)
            .finish()
    }
}

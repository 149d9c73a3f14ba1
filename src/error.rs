//! Search failure taxonomy

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Why a search produced no weather.
///
/// Each variant maps to one presentation: `Validation` and `Provider` raise a
/// blocking alert, `Transport` is only logged.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum SearchError {
    /// The search field was empty
    #[error("Enter City Name")]
    Validation,

    /// The provider answered with a non-success status
    #[error("{0}")]
    Provider(String),

    /// The request never produced a usable response
    #[error("transport error: {0}")]
    Transport(String),
}

impl SearchError {
    /// Text for the blocking alert, or `None` when the failure stays silent.
    pub fn alert_text(&self) -> Option<String> {
        match self {
            SearchError::Validation | SearchError::Provider(_) => Some(self.to_string()),
            SearchError::Transport(_) => None,
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Transport(format!("malformed response: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_text_per_variant() {
        assert_eq!(
            SearchError::Validation.alert_text().as_deref(),
            Some("Enter City Name")
        );
        assert_eq!(
            SearchError::Provider("city not found".into())
                .alert_text()
                .as_deref(),
            Some("city not found")
        );
        assert_eq!(SearchError::Transport("boom".into()).alert_text(), None);
    }
}

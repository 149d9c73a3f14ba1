//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::error::SearchError;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchQueryChange(query) => {
            if state.query == query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        Action::SearchSubmit(city) => {
            let city = city.trim();
            if city.is_empty() {
                state.alert = SearchError::Validation.alert_text();
                return DispatchResult::changed();
            }

            let request_id = state.next_request_id;
            state.next_request_id += 1;
            state.in_flight += 1;
            DispatchResult::changed_with(Effect::FetchWeather {
                request_id,
                city: city.to_string(),
            })
        }

        // Results apply in arrival order: the last search to resolve wins.
        Action::SearchDidLoad { weather, .. } => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.weather = Some(weather);
            DispatchResult::changed()
        }

        Action::SearchDidError { error, .. } => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.weather = None;
            if let Some(text) = error.alert_text() {
                state.alert = Some(text);
            }
            DispatchResult::changed()
        }

        // ===== Alert actions =====
        Action::AlertClose => {
            if state.alert.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),
        Action::Quit => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::WeatherIcon;
    use crate::state::DisplayWeather;

    fn weather_for(location: &str) -> DisplayWeather {
        DisplayWeather {
            temperature: 23,
            feels_like: 22,
            humidity: 80,
            wind_speed: 5.0,
            visibility: 8.0,
            sunrise: "5:58 AM".into(),
            sunset: "5:12 PM".into(),
            location: location.into(),
            icon: WeatherIcon::Rain,
        }
    }

    #[test]
    fn test_submit_issues_fetch() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::SearchSubmit("  Patna ".into()));

        assert!(result.changed);
        assert_eq!(state.in_flight, 1);
        assert_eq!(state.next_request_id, 1);
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                request_id: 0,
                city: "Patna".into()
            }]
        );
    }

    #[test]
    fn test_blank_submit_alerts_without_fetch() {
        for input in ["", "   ", "\t\n"] {
            let mut state = AppState {
                weather: Some(weather_for("Patna")),
                ..Default::default()
            };

            let result = reducer(&mut state, Action::SearchSubmit(input.into()));

            assert!(result.effects.is_empty(), "{input:?} must not fetch");
            assert_eq!(state.alert.as_deref(), Some("Enter City Name"));
            assert_eq!(state.in_flight, 0);
            assert_eq!(state.weather, Some(weather_for("Patna")));
        }
    }

    #[test]
    fn test_each_submit_gets_new_request_id() {
        let mut state = AppState::default();
        let a = reducer(&mut state, Action::SearchSubmit("A".into()));
        let b = reducer(&mut state, Action::SearchSubmit("B".into()));

        let ids: Vec<u64> = a
            .effects
            .iter()
            .chain(b.effects.iter())
            .map(|Effect::FetchWeather { request_id, .. }| *request_id)
            .collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(state.in_flight, 2);
    }

    #[test]
    fn test_did_load_replaces_weather() {
        let mut state = AppState {
            weather: Some(weather_for("Old")),
            in_flight: 1,
            ..Default::default()
        };

        let result = reducer(
            &mut state,
            Action::SearchDidLoad {
                request_id: 0,
                weather: weather_for("New"),
            },
        );

        assert!(result.changed);
        assert_eq!(state.weather, Some(weather_for("New")));
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_provider_failure_alerts_and_clears() {
        let mut state = AppState {
            weather: Some(weather_for("Patna")),
            in_flight: 1,
            ..Default::default()
        };

        reducer(
            &mut state,
            Action::SearchDidError {
                request_id: 0,
                error: SearchError::Provider("city not found".into()),
            },
        );

        assert_eq!(state.weather, None);
        assert_eq!(state.alert.as_deref(), Some("city not found"));
    }

    #[test]
    fn test_transport_failure_clears_silently() {
        let mut state = AppState {
            weather: Some(weather_for("Patna")),
            in_flight: 1,
            ..Default::default()
        };

        reducer(
            &mut state,
            Action::SearchDidError {
                request_id: 0,
                error: SearchError::Transport("connection refused".into()),
            },
        );

        assert_eq!(state.weather, None);
        assert_eq!(state.alert, None);
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_dismiss_alert() {
        let mut state = AppState {
            alert: Some("city not found".into()),
            ..Default::default()
        };

        assert!(reducer(&mut state, Action::AlertClose).changed);
        assert_eq!(state.alert, None);
        assert!(!reducer(&mut state, Action::AlertClose).changed);
    }

    #[test]
    fn test_query_change() {
        let mut state = AppState::default();
        assert!(reducer(&mut state, Action::SearchQueryChange("Lon".into())).changed);
        assert_eq!(state.query, "Lon");
        assert!(!reducer(&mut state, Action::SearchQueryChange("Lon".into())).changed);
    }

    #[test]
    fn test_in_flight_never_underflows() {
        let mut state = AppState::default();
        reducer(
            &mut state,
            Action::SearchDidLoad {
                request_id: 7,
                weather: weather_for("Stray"),
            },
        );
        assert_eq!(state.in_flight, 0);
    }
}

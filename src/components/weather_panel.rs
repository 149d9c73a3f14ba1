use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::search_bar::SEARCH_BAR_HEIGHT;
use super::{
    AlertModal, AlertModalProps, Component, SearchBar, SearchBarProps, WeatherBody,
    WeatherBodyProps,
};
use crate::action::Action;
use crate::state::AppState;

/// Props for WeatherPanel - read-only view of state
pub struct WeatherPanelProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Root component: search bar, weather body when present, alert on top
#[derive(Default)]
pub struct WeatherPanel {
    search: SearchBar,
    alert: AlertModal,
}

impl WeatherPanel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let state = props.state;

        // The alert is modal: nothing reaches the search bar while it is up.
        if let Some(message) = state.alert.as_deref() {
            return self
                .alert
                .handle_event(
                    event,
                    AlertModalProps {
                        message,
                        is_focused: props.is_focused,
                    },
                )
                .into_iter()
                .collect::<Vec<_>>();
        }

        self.search
            .handle_event(
                event,
                SearchBarProps {
                    query: &state.query,
                    is_searching: state.is_searching(),
                    is_focused: props.is_focused,
                },
            )
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherPanelProps<'_>) {
        let state = props.state;
        let chunks = Layout::vertical([
            Constraint::Length(SEARCH_BAR_HEIGHT), // Search bar
            Constraint::Min(1),                    // Weather
            Constraint::Length(1),                 // Help bar
        ])
        .split(area);

        self.search.render(
            frame,
            chunks[0],
            SearchBarProps {
                query: &state.query,
                is_searching: state.is_searching(),
                is_focused: props.is_focused && !state.has_alert(),
            },
        );

        if let Some(weather) = &state.weather {
            let mut body = WeatherBody;
            body.render(frame, chunks[1], WeatherBodyProps { weather });
        }

        let hints = if state.has_alert() {
            vec![StatusBarHint::new("enter", "dismiss")]
        } else {
            vec![
                StatusBarHint::new("enter", "search"),
                StatusBarHint::new("esc", "quit"),
            ]
        };
        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&hints),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );

        if let Some(message) = state.alert.as_deref() {
            self.alert.render(
                frame,
                area,
                AlertModalProps {
                    message,
                    is_focused: props.is_focused,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    #[test]
    fn test_enter_submits_query() {
        let mut panel = WeatherPanel::new();
        let state = AppState {
            query: "Paris".into(),
            ..Default::default()
        };

        let actions: Vec<_> = panel
            .handle_event(
                &EventKind::Key(key("enter")),
                WeatherPanelProps {
                    state: &state,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::SearchSubmit("Paris".into()));
    }

    #[test]
    fn test_alert_blocks_search() {
        let mut panel = WeatherPanel::new();
        let state = AppState {
            query: "Paris".into(),
            alert: Some("city not found".into()),
            ..Default::default()
        };

        let actions: Vec<_> = panel
            .handle_event(
                &EventKind::Key(key("enter")),
                WeatherPanelProps {
                    state: &state,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect();
        actions.assert_first(Action::AlertClose);
    }

    #[test]
    fn test_render_absent_shows_only_search_bar() {
        let mut render = RenderHarness::new(60, 24);
        let mut panel = WeatherPanel::new();
        let state = AppState::default();

        let output = render.render_to_string_plain(|frame| {
            let props = WeatherPanelProps {
                state: &state,
                is_focused: true,
            };
            panel.render(frame, frame.area(), props);
        });

        assert!(output.contains("Search city"));
        assert!(!output.contains("Humidity"));
    }
}

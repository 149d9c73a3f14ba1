use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position},
    prelude::{Frame, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;
use crate::icons::SEARCH_GLYPH;

pub const SEARCH_PLACEHOLDER: &str = "Search city...";

/// Rows taken by the bar, borders included
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Text field plus a clickable search glyph.
///
/// The field's value lives in state; submitting reads whatever it holds at
/// that moment.
pub struct SearchBar {
    input: TextInput,
    glyph_area: Rect,
}

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub is_searching: bool,
    pub is_focused: bool,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            glyph_area: Rect::default(),
        }
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the search glyph was last drawn
    pub fn glyph_area(&self) -> Rect {
        self.glyph_area
    }
}

/// The bordered bar leaves a single inner row; padding must stay horizontal.
fn input_style() -> TextInputStyle {
    TextInputStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: None,
            fg: None,
        },
        placeholder_style: None,
        cursor_style: None,
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        match event {
            EventKind::Mouse(mouse) => {
                let clicked = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                    && self
                        .glyph_area
                        .contains(Position::new(mouse.column, mouse.row));
                if clicked {
                    vec![Action::SearchSubmit(props.query.to_string())]
                } else {
                    Vec::new()
                }
            }
            EventKind::Key(key) => match key.code {
                KeyCode::Esc => vec![Action::Quit],
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    vec![Action::Quit]
                }
                KeyCode::Enter => vec![Action::SearchSubmit(props.query.to_string())],
                _ => {
                    let input_props = TextInputProps {
                        value: props.query,
                        placeholder: SEARCH_PLACEHOLDER,
                        is_focused: true,
                        style: input_style(),
                        on_change: Action::SearchQueryChange,
                        on_submit: Action::SearchSubmit,
                        on_cursor_move: Some(|_| Action::Render),
                    };
                    self.input
                        .handle_event(event, input_props)
                        .into_iter()
                        .collect()
                }
            },
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border_color = if props.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::horizontal([
            Constraint::Min(10),    // Input
            Constraint::Length(12), // Searching hint
            Constraint::Length(4),  // Glyph
        ])
        .split(inner);

        let input_props = TextInputProps {
            value: props.query,
            placeholder: SEARCH_PLACEHOLDER,
            is_focused: props.is_focused,
            style: input_style(),
            on_change: Action::SearchQueryChange,
            on_submit: Action::SearchSubmit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, chunks[0], input_props);

        if props.is_searching {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    "searching…",
                    Style::default().fg(Color::DarkGray),
                )),
                chunks[1],
            );
        }

        self.glyph_area = chunks[2];
        frame.render_widget(Paragraph::new(Line::from(SEARCH_GLYPH).centered()), chunks[2]);
    }
}

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding, centered_rect,
};

use super::Component;
use crate::action::Action;

pub const ALERT_ICON: &str = "\u{26a0}\u{fe0f}";

/// Blocking notification; nothing else receives input while it is open
pub struct AlertModal {
    modal: Modal,
}

pub struct AlertModalProps<'a> {
    pub message: &'a str,
    pub is_focused: bool,
}

impl Default for AlertModal {
    fn default() -> Self {
        Self {
            modal: Modal::new(),
        }
    }
}

impl AlertModal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for AlertModal {
    type Props<'a> = AlertModalProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::AlertClose),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let modal_area = centered_rect(50, 7, area);
        let message = props.message.to_string();
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let chunks = Layout::vertical([
                Constraint::Length(1), // Icon + title
                Constraint::Min(1),    // Message
                Constraint::Length(1), // Hint
            ])
            .flex(Flex::Center)
            .split(content_area);

            frame.render_widget(
                Paragraph::new(
                    Line::from(vec![
                        Span::raw(format!("{ALERT_ICON} ")),
                        Span::styled("Alert", Style::default().fg(Color::Yellow).bold()),
                    ])
                    .centered(),
                ),
                chunks[0],
            );
            frame.render_widget(
                Paragraph::new(Line::from(message.clone()).centered()).wrap(Wrap { trim: true }),
                chunks[1],
            );
            frame.render_widget(
                Paragraph::new(
                    Line::from(vec![
                        Span::styled("enter", Style::default().fg(Color::Cyan).bold()),
                        Span::styled(" OK", Style::default().fg(Color::DarkGray)),
                    ])
                    .centered(),
                ),
                chunks[2],
            );
        };

        self.modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area,
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(Color::Rgb(45, 35, 35)),
                        padding: Padding::all(1),
                        border: None,
                        fg: None,
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: || Action::AlertClose,
                render_content: &mut render_content,
            },
        );
    }
}

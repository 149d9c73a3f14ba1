use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::stat_grid::STAT_GRID_HEIGHT;
use super::{Component, StatGrid, StatGridProps};
use crate::action::Action;
use crate::icons::SPRITE_HEIGHT;
use crate::state::DisplayWeather;

/// Icon, big temperature, location and the stat grid
pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub weather: &'a DisplayWeather,
}

/// Fixed rows: blank + location + blank + grid.
const LAYOUT_FIXED: u16 = 3 + STAT_GRID_HEIGHT;

/// Temperature caps, largest first: terminus(6), miniwi(4), plain(1).
const TEMP_TIERS: [u16; 3] = [6, 4, 1];

fn font_stack() -> Vec<artbox::Font> {
    fonts::stack(&["terminus", "miniwi"])
}

struct LayoutSizing {
    /// Draw the ASCII sprite; otherwise fall back to the emoji
    sprite: bool,
    icon_h: u16,
    temp_cap: u16,
}

/// Keep the sprite as long as any temperature tier leaves room for it.
fn compute_layout(area_height: u16) -> LayoutSizing {
    for tcap in TEMP_TIERS {
        if area_height >= SPRITE_HEIGHT + tcap + LAYOUT_FIXED {
            return LayoutSizing {
                sprite: true,
                icon_h: SPRITE_HEIGHT,
                temp_cap: tcap,
            };
        }
    }
    let temp_cap = TEMP_TIERS
        .into_iter()
        .find(|tcap| area_height >= 1 + tcap + LAYOUT_FIXED)
        .unwrap_or(1);
    LayoutSizing {
        sprite: false,
        icon_h: 1,
        temp_cap,
    }
}

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let weather = props.weather;
        let sizing = compute_layout(area.height);

        let chunks = Layout::vertical([
            Constraint::Length(sizing.icon_h),
            Constraint::Length(1),
            Constraint::Max(sizing.temp_cap),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(STAT_GRID_HEIGHT),
        ])
        .flex(Flex::Center)
        .split(area);

        // Icon
        if sizing.sprite {
            frame.render_widget(
                Paragraph::new(weather.icon.sprite()).alignment(Alignment::Center),
                chunks[0],
            );
        } else {
            frame.render_widget(
                Paragraph::new(Line::from(weather.icon.emoji()).centered()),
                chunks[0],
            );
        }

        // Temperature
        let temp_text = weather.temperature_label();
        let renderer = Renderer::new(font_stack())
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_gradient(weather.temperature));
        frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[2]);

        // Location
        let location = Line::from(vec![Span::styled(
            weather.location.clone(),
            Style::default().fg(Color::White).bold(),
        )])
        .centered();
        frame.render_widget(Paragraph::new(location), chunks[3]);

        let mut grid = StatGrid;
        grid.render(frame, chunks[5], StatGridProps { weather });
    }
}

fn temperature_gradient(celsius: i32) -> Fill {
    let (start, end) = match celsius {
        t if t < 0 => (
            ArtColor::rgb(150, 200, 255),
            ArtColor::rgb(200, 230, 255),
        ),
        t if t < 15 => (
            ArtColor::rgb(100, 180, 255),
            ArtColor::rgb(150, 220, 200),
        ),
        t if t < 25 => (
            ArtColor::rgb(100, 200, 150),
            ArtColor::rgb(255, 220, 100),
        ),
        t if t < 35 => (
            ArtColor::rgb(255, 180, 80),
            ArtColor::rgb(255, 120, 80),
        ),
        _ => (
            ArtColor::rgb(255, 100, 80),
            ArtColor::rgb(255, 60, 60),
        ),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}

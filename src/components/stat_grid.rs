use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::icons::{HUMIDITY_GLYPH, WIND_GLYPH};
use crate::state::DisplayWeather;

/// Rows: three rows of two-line cells
pub const STAT_GRID_HEIGHT: u16 = 6;

/// One labelled value in the grid
#[derive(Clone, Debug, PartialEq)]
pub struct StatCell {
    pub glyph: Option<&'static str>,
    pub value: String,
    pub label: &'static str,
}

/// The six cells in display order
pub fn stat_cells(weather: &DisplayWeather) -> [StatCell; 6] {
    [
        StatCell {
            glyph: Some(HUMIDITY_GLYPH),
            value: weather.humidity_label(),
            label: "Humidity",
        },
        StatCell {
            glyph: Some(WIND_GLYPH),
            value: weather.wind_label(),
            label: "Wind Speed",
        },
        StatCell {
            glyph: None,
            value: weather.feels_like_label(),
            label: "Feels Like",
        },
        StatCell {
            glyph: None,
            value: weather.visibility_label(),
            label: "Visibility",
        },
        StatCell {
            glyph: None,
            value: weather.sunrise.clone(),
            label: "Sunrise",
        },
        StatCell {
            glyph: None,
            value: weather.sunset.clone(),
            label: "Sunset",
        },
    ]
}

pub struct StatGrid;

pub struct StatGridProps<'a> {
    pub weather: &'a DisplayWeather,
}

fn cell_text(cell: &StatCell) -> Text<'static> {
    let mut value = Vec::with_capacity(2);
    if let Some(glyph) = cell.glyph {
        value.push(Span::raw(format!("{glyph} ")));
    }
    value.push(Span::styled(cell.value.clone(), Style::default().bold()));

    Text::from(vec![
        Line::from(value).centered(),
        Line::from(Span::styled(cell.label, Style::default().fg(Color::DarkGray))).centered(),
    ])
}

impl Component<Action> for StatGrid {
    type Props<'a> = StatGridProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let rows = Layout::vertical([Constraint::Length(2); 3]).split(area);
        let cells = stat_cells(props.weather);

        for (row_idx, pair) in cells.chunks(2).enumerate() {
            let cols = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(rows[row_idx]);
            for (col_idx, cell) in pair.iter().enumerate() {
                frame.render_widget(Paragraph::new(cell_text(cell)), cols[col_idx]);
            }
        }
    }
}

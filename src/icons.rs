//! Condition icons: provider code table, layered ASCII sprites, emoji fallback
//!
//! Sprites are stored inline as line arrays. Each icon is built from one or
//! more colored layers; spaces are transparent when layers are composited.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Sprite data
// ============================================================================

mod sprite_data {
    pub const SUN: &[&str] = &[
        r"    \   /    ",
        r"     .-.     ",
        r"  - (   ) -  ",
        r"     `-'     ",
        r"    /   \    ",
    ];

    /// Cloud centred vertically, for the plain cloud icon
    pub const CLOUD_MID: &[&str] = &[
        "",
        "     .--.    ",
        "  .-(    ).  ",
        " (___.__)__) ",
        "",
    ];

    /// Cloud raised to leave room for precipitation below
    pub const CLOUD_HIGH: &[&str] = &[
        "     .--.    ",
        "  .-(    ).  ",
        " (___.__)__) ",
        "",
        "",
    ];

    pub const DRIZZLE: &[&str] = &["", "", "", "   '   '   ' ", "  '   '   '  "];

    pub const RAIN: &[&str] = &["", "", "", "   / / / /   ", "  / / / /    "];

    pub const SNOW: &[&str] = &["", "", "", "   *  *  *   ", "  *  *  *    "];
}

/// Height of every sprite, in rows
pub const SPRITE_HEIGHT: u16 = 5;

/// Fixed glyph shown next to the humidity cell
pub const HUMIDITY_GLYPH: &str = "\u{1f4a7}";
/// Fixed glyph shown next to the wind cell
pub const WIND_GLYPH: &str = "\u{1f32c}\u{fe0f}";
/// Clickable search affordance in the search bar
pub const SEARCH_GLYPH: &str = "\u{1f50d}";

// ============================================================================
// Layer compositing
// ============================================================================

struct SpriteLayer {
    content: &'static [&'static str],
    color: Color,
}

/// Composite layers into Text; later layers draw over earlier ones
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    if layers.is_empty() {
        return Text::default();
    }

    let max_lines = layers.iter().map(|l| l.content.len()).max().unwrap_or(0);
    let max_width = layers
        .iter()
        .flat_map(|l| l.content.iter())
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let mut result_lines = Vec::with_capacity(max_lines);

    for line_idx in 0..max_lines {
        let mut spans = Vec::with_capacity(max_width);

        for col_idx in 0..max_width {
            let mut found_char = ' ';
            let mut found_color = Color::Reset;

            for layer in layers.iter().rev() {
                let ch = layer
                    .content
                    .get(line_idx)
                    .and_then(|line| line.chars().nth(col_idx));
                if let Some(ch) = ch.filter(|ch| *ch != ' ') {
                    found_char = ch;
                    found_color = layer.color;
                    break;
                }
            }

            spans.push(Span::styled(
                found_char.to_string(),
                Style::default().fg(found_color),
            ));
        }

        result_lines.push(Line::from(spans));
    }

    Text::from(result_lines)
}

// ============================================================================
// Types
// ============================================================================

/// Visual icon a provider code resolves to.
///
/// Day and night variants of a code collapse to the same icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum WeatherIcon {
    #[default]
    Clear,
    Cloud,
    Drizzle,
    Rain,
    Snow,
}

/// Every code the table knows about, day and night
pub const ICON_TABLE: &[(&str, WeatherIcon)] = &[
    ("01d", WeatherIcon::Clear),
    ("01n", WeatherIcon::Clear),
    ("02d", WeatherIcon::Cloud),
    ("02n", WeatherIcon::Cloud),
    ("03d", WeatherIcon::Cloud),
    ("03n", WeatherIcon::Cloud),
    ("04d", WeatherIcon::Drizzle),
    ("04n", WeatherIcon::Drizzle),
    ("09d", WeatherIcon::Rain),
    ("09n", WeatherIcon::Rain),
    ("10d", WeatherIcon::Rain),
    ("10n", WeatherIcon::Rain),
    ("11d", WeatherIcon::Rain),
    ("11n", WeatherIcon::Rain),
    ("13d", WeatherIcon::Snow),
    ("13n", WeatherIcon::Snow),
    ("50d", WeatherIcon::Cloud),
    ("50n", WeatherIcon::Cloud),
];

impl WeatherIcon {
    /// Table entry for `code`, if there is one
    pub fn lookup(code: &str) -> Option<Self> {
        ICON_TABLE
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, icon)| *icon)
    }

    /// Resolve a provider code, falling back to [`WeatherIcon::Clear`]
    pub fn from_code(code: &str) -> Self {
        Self::lookup(code).unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            WeatherIcon::Clear => "Clear",
            WeatherIcon::Cloud => "Cloudy",
            WeatherIcon::Drizzle => "Drizzle",
            WeatherIcon::Rain => "Rain",
            WeatherIcon::Snow => "Snow",
        }
    }

    /// Emoji used when the sprite does not fit
    pub fn emoji(self) -> &'static str {
        match self {
            WeatherIcon::Clear => "\u{2600}\u{fe0f}",
            WeatherIcon::Cloud => "\u{2601}\u{fe0f}",
            WeatherIcon::Drizzle => "\u{1f326}\u{fe0f}",
            WeatherIcon::Rain => "\u{1f327}\u{fe0f}",
            WeatherIcon::Snow => "\u{2744}\u{fe0f}",
        }
    }

    pub fn sprite(self) -> Text<'static> {
        let cloud = Color::Rgb(170, 170, 185);
        let layers: Vec<SpriteLayer> = match self {
            WeatherIcon::Clear => vec![SpriteLayer {
                content: sprite_data::SUN,
                color: Color::Yellow,
            }],
            WeatherIcon::Cloud => vec![SpriteLayer {
                content: sprite_data::CLOUD_MID,
                color: cloud,
            }],
            WeatherIcon::Drizzle => vec![
                SpriteLayer {
                    content: sprite_data::CLOUD_HIGH,
                    color: cloud,
                },
                SpriteLayer {
                    content: sprite_data::DRIZZLE,
                    color: Color::Rgb(130, 170, 200),
                },
            ],
            WeatherIcon::Rain => vec![
                SpriteLayer {
                    content: sprite_data::CLOUD_HIGH,
                    color: Color::Rgb(140, 140, 155),
                },
                SpriteLayer {
                    content: sprite_data::RAIN,
                    color: Color::Rgb(80, 140, 200),
                },
            ],
            WeatherIcon::Snow => vec![
                SpriteLayer {
                    content: sprite_data::CLOUD_HIGH,
                    color: cloud,
                },
                SpriteLayer {
                    content: sprite_data::SNOW,
                    color: Color::Rgb(200, 220, 255),
                },
            ],
        };

        composite_layers(&layers)
    }
}

//! Weather icons: condition classification and layered sprite art
//!
//! Each icon is drawn from one or more colored layers. Spaces in a layer are
//! transparent, so a later (foreground) layer only covers the cells it draws.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Rows every sprite occupies
pub const SPRITE_HEIGHT: u16 = 5;

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

    pub const SUN_PEEK: &[&str] = &[
        r"   \  /      ",
        r#" _ /""       "#,
        r"   \_        ",
        r"   /         ",
        r"             ",
    ];

    pub const CLOUD_BEHIND_SUN: &[&str] = &[
        r"             ",
        r"      .-.    ",
        r"     (   ).  ",
        r"    (___(__) ",
        r"             ",
    ];

    pub const CLOUD_BACK: &[&str] = &[
        r"             ",
        r"     .--.    ",
        r"  .-(    ).  ",
        r"             ",
        r"             ",
    ];

    pub const CLOUD_FRONT: &[&str] = &[
        r"             ",
        r"             ",
        r"             ",
        r" (___.__)__) ",
        r"             ",
    ];

    pub const CLOUD_HIGH: &[&str] = &[
        r"     .-.     ",
        r"    (   ).   ",
        r"   (___(__)  ",
        r"             ",
        r"             ",
    ];

    pub const RAIN: &[&str] = &[
        r"             ",
        r"             ",
        r"             ",
        r"    ' ' ' '  ",
        r"   ' ' ' '   ",
    ];

    pub const SNOW: &[&str] = &[
        r"             ",
        r"             ",
        r"             ",
        r"    *  *  *  ",
        r"   *  *  *   ",
    ];

    pub const LIGHTNING: &[&str] = &[
        r"             ",
        r"             ",
        r"             ",
        r"    /_   /_  ",
        r"     /    /  ",
    ];
}

// ============================================================================
// Layer compositing
// ============================================================================

/// A single sprite layer with its content and color
struct SpriteLayer {
    rows: &'static [&'static str],
    color: Color,
}

/// Composite layers into Text, treating spaces as transparent
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    if layers.is_empty() {
        return Text::default();
    }

    let layer_rows: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|l| l.rows.iter().map(|row| row.chars().collect()).collect())
        .collect();

    let max_rows = layer_rows.iter().map(|rows| rows.len()).max().unwrap_or(0);
    let max_width = layer_rows
        .iter()
        .flat_map(|rows| rows.iter())
        .map(|row| row.len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(max_rows);
    for row_idx in 0..max_rows {
        let mut spans = Vec::with_capacity(max_width);
        for col_idx in 0..max_width {
            // Last layer is the foreground
            let cell = layers
                .iter()
                .zip(&layer_rows)
                .rev()
                .find_map(|(layer, rows)| {
                    rows.get(row_idx)
                        .and_then(|row| row.get(col_idx))
                        .filter(|ch| **ch != ' ')
                        .map(|ch| (*ch, layer.color))
                });
            let (ch, color) = cell.unwrap_or((' ', Color::Reset));
            spans.push(Span::styled(ch.to_string(), Style::default().fg(color)));
        }
        lines.push(Line::from(spans));
    }

    Text::from(lines)
}

// ============================================================================
// Types
// ============================================================================

/// Icon shown for a weather condition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum WeatherIcon {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Snowy,
    Thunderstorm,
}

impl WeatherIcon {
    pub const ALL: [WeatherIcon; 6] = [
        WeatherIcon::Sunny,
        WeatherIcon::PartlyCloudy,
        WeatherIcon::Cloudy,
        WeatherIcon::Rainy,
        WeatherIcon::Snowy,
        WeatherIcon::Thunderstorm,
    ];

    /// Pick an icon from a free-text condition.
    ///
    /// Case-insensitive substring rules, checked in order, first hit wins:
    /// sunny/clear, partly+cloud, cloud, rain/shower, snow, thunder/storm.
    /// Anything else falls back to partly cloudy.
    pub fn classify(condition: &str) -> Self {
        let condition = condition.to_lowercase();
        let has = |needle: &str| condition.contains(needle);

        if has("sunny") || has("clear") {
            WeatherIcon::Sunny
        } else if has("cloud") {
            if has("partly") {
                WeatherIcon::PartlyCloudy
            } else {
                WeatherIcon::Cloudy
            }
        } else if has("rain") || has("shower") {
            WeatherIcon::Rainy
        } else if has("snow") {
            WeatherIcon::Snowy
        } else if has("thunder") || has("storm") {
            WeatherIcon::Thunderstorm
        } else {
            WeatherIcon::PartlyCloudy
        }
    }

    /// Stable symbol identifier
    pub fn id(self) -> &'static str {
        match self {
            WeatherIcon::Sunny => "sunny",
            WeatherIcon::PartlyCloudy => "partly-cloudy",
            WeatherIcon::Cloudy => "cloudy",
            WeatherIcon::Rainy => "rainy",
            WeatherIcon::Snowy => "snowy",
            WeatherIcon::Thunderstorm => "thunderstorm",
        }
    }

    /// Emoji representation for when sprites don't fit
    pub fn emoji(self) -> &'static str {
        match self {
            WeatherIcon::Sunny => "\u{2600}\u{fe0f}",
            WeatherIcon::PartlyCloudy => "\u{26c5}",
            WeatherIcon::Cloudy => "\u{2601}\u{fe0f}",
            WeatherIcon::Rainy => "\u{1f327}\u{fe0f}",
            WeatherIcon::Snowy => "\u{2744}\u{fe0f}",
            WeatherIcon::Thunderstorm => "\u{26c8}\u{fe0f}",
        }
    }

    /// Layered sprite art for this icon
    pub fn sprite(self) -> Text<'static> {
        let cloud = Color::Rgb(120, 120, 140);
        let layers = match self {
            WeatherIcon::Sunny => vec![SpriteLayer {
                rows: sprite_data::SUN,
                color: Color::Yellow,
            }],
            WeatherIcon::PartlyCloudy => vec![
                SpriteLayer {
                    rows: sprite_data::SUN_PEEK,
                    color: Color::Yellow,
                },
                SpriteLayer {
                    rows: sprite_data::CLOUD_BEHIND_SUN,
                    color: Color::Rgb(200, 200, 210),
                },
            ],
            WeatherIcon::Cloudy => vec![
                SpriteLayer {
                    rows: sprite_data::CLOUD_BACK,
                    color: cloud,
                },
                SpriteLayer {
                    rows: sprite_data::CLOUD_FRONT,
                    color: Color::Rgb(170, 170, 185),
                },
            ],
            WeatherIcon::Rainy => vec![
                SpriteLayer {
                    rows: sprite_data::CLOUD_HIGH,
                    color: cloud,
                },
                SpriteLayer {
                    rows: sprite_data::RAIN,
                    color: Color::Rgb(90, 150, 255),
                },
            ],
            WeatherIcon::Snowy => vec![
                SpriteLayer {
                    rows: sprite_data::CLOUD_HIGH,
                    color: cloud,
                },
                SpriteLayer {
                    rows: sprite_data::SNOW,
                    color: Color::White,
                },
            ],
            WeatherIcon::Thunderstorm => vec![
                SpriteLayer {
                    rows: sprite_data::CLOUD_HIGH,
                    color: cloud,
                },
                SpriteLayer {
                    rows: sprite_data::LIGHTNING,
                    color: Color::Yellow,
                },
            ],
        };

        composite_layers(&layers)
    }
}

/// Sprite if `available_height` rows fit it, `None` otherwise.
pub fn icon_sprite(icon: WeatherIcon, available_height: u16) -> Option<Text<'static>> {
    (available_height >= SPRITE_HEIGHT).then(|| icon.sprite())
}

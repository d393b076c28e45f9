use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ColorToken – the fixed curve palette
// ---------------------------------------------------------------------------

/// One of the seven single-letter plot colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Blue,
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Black,
}

impl ColorToken {
    /// The whole palette, in code order `b g r c m y k`.
    pub const ALL: [ColorToken; 7] = [
        ColorToken::Blue,
        ColorToken::Green,
        ColorToken::Red,
        ColorToken::Cyan,
        ColorToken::Magenta,
        ColorToken::Yellow,
        ColorToken::Black,
    ];

    /// Single-letter code.
    pub fn code(self) -> char {
        match self {
            ColorToken::Blue => 'b',
            ColorToken::Green => 'g',
            ColorToken::Red => 'r',
            ColorToken::Cyan => 'c',
            ColorToken::Magenta => 'm',
            ColorToken::Yellow => 'y',
            ColorToken::Black => 'k',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Blue => "blue",
            ColorToken::Green => "green",
            ColorToken::Red => "red",
            ColorToken::Cyan => "cyan",
            ColorToken::Magenta => "magenta",
            ColorToken::Yellow => "yellow",
            ColorToken::Black => "black",
        }
    }

    /// Screen color. Green and the secondary colors use the 0.5 / 0.75
    /// channel levels of the classic single-letter palette.
    pub fn color32(self) -> Color32 {
        match self {
            ColorToken::Blue => Color32::from_rgb(0, 0, 255),
            ColorToken::Green => Color32::from_rgb(0, 128, 0),
            ColorToken::Red => Color32::from_rgb(255, 0, 0),
            ColorToken::Cyan => Color32::from_rgb(0, 191, 191),
            ColorToken::Magenta => Color32::from_rgb(191, 0, 191),
            ColorToken::Yellow => Color32::from_rgb(191, 191, 0),
            ColorToken::Black => Color32::BLACK,
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color '{0}'")]
pub struct ParseColorError(String);

impl FromStr for ColorToken {
    type Err = ParseColorError;

    /// Accepts either the code (`"b"`) or the name (`"blue"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorToken::ALL
            .into_iter()
            .find(|c| s.len() == 1 && s.starts_with(c.code()) || s.eq_ignore_ascii_case(c.name()))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// Uniform over [`ColorToken::ALL`].
impl Distribution<ColorToken> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ColorToken {
        ColorToken::ALL[rng.gen_range(0..ColorToken::ALL.len())]
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: column name → Color32
// ---------------------------------------------------------------------------

/// Assigns each dataset column a distinct colour for the line view.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map over the given column names, in order.
    pub fn new<'a>(columns: impl IntoIterator<Item = &'a str>) -> Self {
        let columns: Vec<&str> = columns.into_iter().collect();
        let palette = generate_palette(columns.len());
        let mapping = columns
            .into_iter()
            .zip(palette)
            .map(|(name, c)| (name.to_string(), c))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a column.
    pub fn color_for(&self, column: &str) -> Color32 {
        self.mapping
            .get(column)
            .copied()
            .unwrap_or(self.default_color)
    }
}

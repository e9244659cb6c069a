use anyhow::Result;
use serde::Serialize;

use crate::color::{hex_to_hsl, Color};

/// Overall light/dark classification of a color or an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Light iff HSL lightness is strictly above one half.
    pub fn from_lightness(l: f64) -> Self {
        if l > 0.5 {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn of_color(color: Color) -> Self {
        let (_, _, l) = color.to_hsl();
        Self::from_lightness(l)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a hex color as light or dark by its HSL lightness.
pub fn is_color_dark_or_light(hex: &str) -> Result<Theme> {
    let (_, _, l) = hex_to_hsl(hex)?;
    Ok(Theme::from_lightness(l))
}

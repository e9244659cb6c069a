use std::collections::hash_map::Entry;
use std::collections::HashMap;

use anyhow::Result;
use image::DynamicImage;
use serde::Serialize;
use tracing::debug;

use crate::color::Color;
use crate::names::{ColorModel, NamedColor};
use crate::pipeline::downsample::downsample;
use crate::pipeline::matcher::find_closest_color;
use crate::theme::Theme;

/// A named color observed in the image, with how much of it there is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorInfo {
    pub name: &'static str,
    pub hex: &'static str,
    /// Number of sampled pixels matched to this color.
    pub counter: u32,
    /// Percentage of all sampled pixels, in [0, 100].
    pub proportion: f64,
    pub theme: Theme,
}

impl ColorInfo {
    /// The color's components, decoded from `hex`.
    pub fn color(&self) -> Result<Color> {
        Color::from_hex(self.hex)
    }

    fn first_match(named: &'static NamedColor) -> Self {
        Self {
            name: named.name,
            hex: named.hex,
            counter: 1,
            proportion: 0.0,
            theme: Theme::of_color(named.color),
        }
    }
}

/// Dominant colors sorted by pixel count, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColorInfoList(Vec<ColorInfo>);

impl ColorInfoList {
    /// Light if light colors cover strictly more of the image than dark ones,
    /// dark otherwise (an exact tie is dark).
    pub fn theme(&self) -> Theme {
        let (light, dark) = self
            .0
            .iter()
            .fold((0.0, 0.0), |(light, dark), info| match info.theme {
                Theme::Light => (light + info.proportion, dark),
                Theme::Dark => (light, dark + info.proportion),
            });
        if light > dark {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

impl std::ops::Deref for ColorInfoList {
    type Target = [ColorInfo];

    fn deref(&self) -> &[ColorInfo] {
        &self.0
    }
}

impl From<Vec<ColorInfo>> for ColorInfoList {
    fn from(colors: Vec<ColorInfo>) -> Self {
        Self(colors)
    }
}

impl IntoIterator for ColorInfoList {
    type Item = ColorInfo;
    type IntoIter = std::vec::IntoIter<ColorInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ColorInfoList {
    type Item = &'a ColorInfo;
    type IntoIter = std::slice::Iter<'a, ColorInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// List the `limit` most frequent base colors in `image`.
pub fn list_dominant_colors(image: &DynamicImage, limit: usize) -> ColorInfoList {
    list_dominant_colors_with_mode(image, limit, ColorModel::default())
}

/// List the `limit` most frequent colors of `mode`'s name table in `image`.
///
/// The image is resampled to a 100-pixel-wide grid, every grid pixel is
/// snapped to its closest named color and the names are tallied. Proportions
/// are relative to the whole grid, so they sum to less than 100 when colors
/// are cut by `limit`. Equal counts keep the order in which the colors were
/// first seen, scanning rows top to bottom.
pub fn list_dominant_colors_with_mode(
    image: &DynamicImage,
    limit: usize,
    mode: ColorModel,
) -> ColorInfoList {
    let sample = downsample(image);
    let total = sample.width() as u64 * sample.height() as u64;

    let mut colors: Vec<ColorInfo> = Vec::new();
    let mut seen: HashMap<&'static str, usize> = HashMap::new();
    for pixel in sample.pixels() {
        let named = find_closest_color(Color::from(*pixel), mode);
        match seen.entry(named.name) {
            Entry::Occupied(slot) => colors[*slot.get()].counter += 1,
            Entry::Vacant(slot) => {
                slot.insert(colors.len());
                colors.push(ColorInfo::first_match(named));
            }
        }
    }
    debug!(
        width = sample.width(),
        height = sample.height(),
        distinct = colors.len(),
        %mode,
        "matched sampled pixels"
    );

    colors.sort_by(|a, b| b.counter.cmp(&a.counter));
    colors.truncate(limit);
    for info in &mut colors {
        info.proportion = 100.0 * info.counter as f64 / total as f64;
    }

    ColorInfoList(colors)
}

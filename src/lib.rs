//! Dominant named colors of an image, and whether the image reads light or dark.
//!
//! Every pixel of a downsampled copy of the image is snapped to the closest
//! entry of a fixed table of color keywords; the keywords are tallied and the
//! most frequent ones reported with their share of the image.

pub mod cli;
pub mod color;
pub mod logging;
pub mod names;
pub mod pipeline;
pub mod report;
pub mod theme;

pub use color::{hex_to_hsl, Color};
pub use names::{ColorModel, NamedColor};
pub use pipeline::dominant::{
    list_dominant_colors, list_dominant_colors_with_mode, ColorInfo, ColorInfoList,
};
pub use pipeline::matcher::find_closest_color;
pub use theme::{is_color_dark_or_light, Theme};

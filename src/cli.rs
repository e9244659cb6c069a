use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::names::ColorModel;

/// List the dominant named colors of an image and whether it reads light or dark.
#[derive(Parser, Debug)]
#[command(name = "colorweave", version, about)]
pub struct Args {
    /// Path to the input image
    pub image: PathBuf,

    /// Maximum number of colors to list
    #[arg(short = 'n', long, default_value_t = 5)]
    pub limit: usize,

    /// Color names to match against: css21 (base colors) or css3 (shades)
    #[arg(short, long, value_enum, default_value_t = ColorModel::Css21)]
    pub palette: ColorModel,

    /// Print a JSON document instead of text
    #[arg(long)]
    pub json: bool,

    /// Draw a colored swatch next to each color
    #[arg(long, conflicts_with = "json")]
    pub preview: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

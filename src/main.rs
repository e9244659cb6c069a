use anyhow::Result;
use clap::Parser;
use tracing::debug;

use colorweave::cli::Args;
use colorweave::pipeline::load::load_image;
use colorweave::{list_dominant_colors_with_mode, logging, report};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;
    debug!(?args, "parsed arguments");

    let image = load_image(&args.image)?;
    let colors = list_dominant_colors_with_mode(&image, args.limit, args.palette);

    let output = if args.json {
        report::render_json(&colors, args.palette)?
    } else {
        report::render_text(&colors, args.preview)?
    };
    print!("{output}");
    Ok(())
}

//! Rendering of dominant-color results for the terminal.

use anyhow::{Context, Result};
use crossterm::style::{Color as TermColor, Stylize};
use serde::Serialize;

use crate::color::Color;
use crate::names::ColorModel;
use crate::pipeline::dominant::{ColorInfo, ColorInfoList};
use crate::theme::Theme;

#[derive(Serialize)]
struct Report<'a> {
    theme: Theme,
    palette: ColorModel,
    colors: &'a [ColorInfo],
}

/// One `theme: ...` header line, then `<theme> <hex> <name> <pct>%` per color.
pub fn render_text(colors: &ColorInfoList, preview: bool) -> Result<String> {
    let mut out = format!("theme: {}\n", colors.theme());
    for info in colors {
        if preview {
            let color = info
                .color()
                .with_context(|| format!("cannot draw swatch for {}", info.name))?;
            out.push_str(&format!("{} ", swatch(color)));
        }
        out.push_str(&format!(
            "{} {} {} {:.2}%\n",
            info.theme, info.hex, info.name, info.proportion
        ));
    }
    Ok(out)
}

/// Pretty-printed `{ "theme": ..., "palette": ..., "colors": [...] }` document.
pub fn render_json(colors: &ColorInfoList, palette: ColorModel) -> Result<String> {
    let report = Report {
        theme: colors.theme(),
        palette,
        colors: &colors[..],
    };
    let mut out = serde_json::to_string_pretty(&report).context("failed to encode report")?;
    out.push('\n');
    Ok(out)
}

fn swatch(color: Color) -> String {
    "    "
        .on(TermColor::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        })
        .to_string()
}

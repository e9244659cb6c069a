//! Named color tables used as the matching vocabulary.

use serde::Serialize;

use crate::color::Color;

/// Which name table to match pixels against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    /// The 16 base colors (HTML 4 / CSS 2.1 keywords)
    #[default]
    #[value(alias = "base")]
    Css21,
    /// The 147 CSS3 keywords, covering many shades of each hue
    #[value(alias = "shades")]
    Css3,
}

impl ColorModel {
    pub fn names(self) -> &'static [NamedColor] {
        match self {
            ColorModel::Css21 => &CSS21_NAMES,
            ColorModel::Css3 => &CSS3_NAMES,
        }
    }
}

impl std::fmt::Display for ColorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorModel::Css21 => f.write_str("css21"),
            ColorModel::Css3 => f.write_str("css3"),
        }
    }
}

/// A color keyword with its hex spelling and decoded components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub hex: &'static str,
    pub color: Color,
}

impl NamedColor {
    const fn new(name: &'static str, hex: &'static str) -> Self {
        Self {
            name,
            hex,
            color: Color::from_hex_literal(hex),
        }
    }
}

/// The 16 HTML 4 color keywords, sorted by name.
pub static CSS21_NAMES: [NamedColor; 16] = [
    NamedColor::new("aqua", "#00ffff"),
    NamedColor::new("black", "#000000"),
    NamedColor::new("blue", "#0000ff"),
    NamedColor::new("fuchsia", "#ff00ff"),
    NamedColor::new("gray", "#808080"),
    NamedColor::new("green", "#008000"),
    NamedColor::new("lime", "#00ff00"),
    NamedColor::new("maroon", "#800000"),
    NamedColor::new("navy", "#000080"),
    NamedColor::new("olive", "#808000"),
    NamedColor::new("purple", "#800080"),
    NamedColor::new("red", "#ff0000"),
    NamedColor::new("silver", "#c0c0c0"),
    NamedColor::new("teal", "#008080"),
    NamedColor::new("white", "#ffffff"),
    NamedColor::new("yellow", "#ffff00"),
];

/// The 147 CSS3 extended color keywords, sorted by name.
pub static CSS3_NAMES: [NamedColor; 147] = [
    NamedColor::new("aliceblue", "#f0f8ff"),
    NamedColor::new("antiquewhite", "#faebd7"),
    NamedColor::new("aqua", "#00ffff"),
    NamedColor::new("aquamarine", "#7fffd4"),
    NamedColor::new("azure", "#f0ffff"),
    NamedColor::new("beige", "#f5f5dc"),
    NamedColor::new("bisque", "#ffe4c4"),
    NamedColor::new("black", "#000000"),
    NamedColor::new("blanchedalmond", "#ffebcd"),
    NamedColor::new("blue", "#0000ff"),
    NamedColor::new("blueviolet", "#8a2be2"),
    NamedColor::new("brown", "#a52a2a"),
    NamedColor::new("burlywood", "#deb887"),
    NamedColor::new("cadetblue", "#5f9ea0"),
    NamedColor::new("chartreuse", "#7fff00"),
    NamedColor::new("chocolate", "#d2691e"),
    NamedColor::new("coral", "#ff7f50"),
    NamedColor::new("cornflowerblue", "#6495ed"),
    NamedColor::new("cornsilk", "#fff8dc"),
    NamedColor::new("crimson", "#dc143c"),
    NamedColor::new("cyan", "#00ffff"),
    NamedColor::new("darkblue", "#00008b"),
    NamedColor::new("darkcyan", "#008b8b"),
    NamedColor::new("darkgoldenrod", "#b8860b"),
    NamedColor::new("darkgray", "#a9a9a9"),
    NamedColor::new("darkgreen", "#006400"),
    NamedColor::new("darkgrey", "#a9a9a9"),
    NamedColor::new("darkkhaki", "#bdb76b"),
    NamedColor::new("darkmagenta", "#8b008b"),
    NamedColor::new("darkolivegreen", "#556b2f"),
    NamedColor::new("darkorange", "#ff8c00"),
    NamedColor::new("darkorchid", "#9932cc"),
    NamedColor::new("darkred", "#8b0000"),
    NamedColor::new("darksalmon", "#e9967a"),
    NamedColor::new("darkseagreen", "#8fbc8f"),
    NamedColor::new("darkslateblue", "#483d8b"),
    NamedColor::new("darkslategray", "#2f4f4f"),
    NamedColor::new("darkslategrey", "#2f4f4f"),
    NamedColor::new("darkturquoise", "#00ced1"),
    NamedColor::new("darkviolet", "#9400d3"),
    NamedColor::new("deeppink", "#ff1493"),
    NamedColor::new("deepskyblue", "#00bfff"),
    NamedColor::new("dimgray", "#696969"),
    NamedColor::new("dimgrey", "#696969"),
    NamedColor::new("dodgerblue", "#1e90ff"),
    NamedColor::new("firebrick", "#b22222"),
    NamedColor::new("floralwhite", "#fffaf0"),
    NamedColor::new("forestgreen", "#228b22"),
    NamedColor::new("fuchsia", "#ff00ff"),
    NamedColor::new("gainsboro", "#dcdcdc"),
    NamedColor::new("ghostwhite", "#f8f8ff"),
    NamedColor::new("gold", "#ffd700"),
    NamedColor::new("goldenrod", "#daa520"),
    NamedColor::new("gray", "#808080"),
    NamedColor::new("green", "#008000"),
    NamedColor::new("greenyellow", "#adff2f"),
    NamedColor::new("grey", "#808080"),
    NamedColor::new("honeydew", "#f0fff0"),
    NamedColor::new("hotpink", "#ff69b4"),
    NamedColor::new("indianred", "#cd5c5c"),
    NamedColor::new("indigo", "#4b0082"),
    NamedColor::new("ivory", "#fffff0"),
    NamedColor::new("khaki", "#f0e68c"),
    NamedColor::new("lavender", "#e6e6fa"),
    NamedColor::new("lavenderblush", "#fff0f5"),
    NamedColor::new("lawngreen", "#7cfc00"),
    NamedColor::new("lemonchiffon", "#fffacd"),
    NamedColor::new("lightblue", "#add8e6"),
    NamedColor::new("lightcoral", "#f08080"),
    NamedColor::new("lightcyan", "#e0ffff"),
    NamedColor::new("lightgoldenrodyellow", "#fafad2"),
    NamedColor::new("lightgray", "#d3d3d3"),
    NamedColor::new("lightgreen", "#90ee90"),
    NamedColor::new("lightgrey", "#d3d3d3"),
    NamedColor::new("lightpink", "#ffb6c1"),
    NamedColor::new("lightsalmon", "#ffa07a"),
    NamedColor::new("lightseagreen", "#20b2aa"),
    NamedColor::new("lightskyblue", "#87cefa"),
    NamedColor::new("lightslategray", "#778899"),
    NamedColor::new("lightslategrey", "#778899"),
    NamedColor::new("lightsteelblue", "#b0c4de"),
    NamedColor::new("lightyellow", "#ffffe0"),
    NamedColor::new("lime", "#00ff00"),
    NamedColor::new("limegreen", "#32cd32"),
    NamedColor::new("linen", "#faf0e6"),
    NamedColor::new("magenta", "#ff00ff"),
    NamedColor::new("maroon", "#800000"),
    NamedColor::new("mediumaquamarine", "#66cdaa"),
    NamedColor::new("mediumblue", "#0000cd"),
    NamedColor::new("mediumorchid", "#ba55d3"),
    NamedColor::new("mediumpurple", "#9370db"),
    NamedColor::new("mediumseagreen", "#3cb371"),
    NamedColor::new("mediumslateblue", "#7b68ee"),
    NamedColor::new("mediumspringgreen", "#00fa9a"),
    NamedColor::new("mediumturquoise", "#48d1cc"),
    NamedColor::new("mediumvioletred", "#c71585"),
    NamedColor::new("midnightblue", "#191970"),
    NamedColor::new("mintcream", "#f5fffa"),
    NamedColor::new("mistyrose", "#ffe4e1"),
    NamedColor::new("moccasin", "#ffe4b5"),
    NamedColor::new("navajowhite", "#ffdead"),
    NamedColor::new("navy", "#000080"),
    NamedColor::new("oldlace", "#fdf5e6"),
    NamedColor::new("olive", "#808000"),
    NamedColor::new("olivedrab", "#6b8e23"),
    NamedColor::new("orange", "#ffa500"),
    NamedColor::new("orangered", "#ff4500"),
    NamedColor::new("orchid", "#da70d6"),
    NamedColor::new("palegoldenrod", "#eee8aa"),
    NamedColor::new("palegreen", "#98fb98"),
    NamedColor::new("paleturquoise", "#afeeee"),
    NamedColor::new("palevioletred", "#db7093"),
    NamedColor::new("papayawhip", "#ffefd5"),
    NamedColor::new("peachpuff", "#ffdab9"),
    NamedColor::new("peru", "#cd853f"),
    NamedColor::new("pink", "#ffc0cb"),
    NamedColor::new("plum", "#dda0dd"),
    NamedColor::new("powderblue", "#b0e0e6"),
    NamedColor::new("purple", "#800080"),
    NamedColor::new("red", "#ff0000"),
    NamedColor::new("rosybrown", "#bc8f8f"),
    NamedColor::new("royalblue", "#4169e1"),
    NamedColor::new("saddlebrown", "#8b4513"),
    NamedColor::new("salmon", "#fa8072"),
    NamedColor::new("sandybrown", "#f4a460"),
    NamedColor::new("seagreen", "#2e8b57"),
    NamedColor::new("seashell", "#fff5ee"),
    NamedColor::new("sienna", "#a0522d"),
    NamedColor::new("silver", "#c0c0c0"),
    NamedColor::new("skyblue", "#87ceeb"),
    NamedColor::new("slateblue", "#6a5acd"),
    NamedColor::new("slategray", "#708090"),
    NamedColor::new("slategrey", "#708090"),
    NamedColor::new("snow", "#fffafa"),
    NamedColor::new("springgreen", "#00ff7f"),
    NamedColor::new("steelblue", "#4682b4"),
    NamedColor::new("tan", "#d2b48c"),
    NamedColor::new("teal", "#008080"),
    NamedColor::new("thistle", "#d8bfd8"),
    NamedColor::new("tomato", "#ff6347"),
    NamedColor::new("turquoise", "#40e0d0"),
    NamedColor::new("violet", "#ee82ee"),
    NamedColor::new("wheat", "#f5deb3"),
    NamedColor::new("white", "#ffffff"),
    NamedColor::new("whitesmoke", "#f5f5f5"),
    NamedColor::new("yellow", "#ffff00"),
    NamedColor::new("yellowgreen", "#9acd32"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_and_unique(names: &[NamedColor]) {
        for pair in names.windows(2) {
            assert!(
                pair[0].name < pair[1].name,
                "table not strictly sorted: {} before {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn tables_are_sorted_by_name() {
        assert_sorted_and_unique(&CSS21_NAMES);
        assert_sorted_and_unique(&CSS3_NAMES);
    }

    #[test]
    fn decoded_components_match_hex() {
        for named in CSS21_NAMES.iter().chain(CSS3_NAMES.iter()) {
            assert_eq!(named.color.to_hex(), named.hex, "{}", named.name);
        }
    }

    #[test]
    fn base_colors_are_a_subset_of_shades() {
        for base in &CSS21_NAMES {
            assert!(
                CSS3_NAMES.iter().any(|c| c.name == base.name && c.hex == base.hex),
                "{} missing from css3 table",
                base.name
            );
        }
    }

    #[test]
    fn default_model_is_base_palette() {
        assert_eq!(ColorModel::default(), ColorModel::Css21);
        assert_eq!(ColorModel::default().names().len(), 16);
        assert_eq!(ColorModel::Css3.names().len(), 147);
    }

    #[test]
    fn model_parses_aliases() {
        use clap::ValueEnum;
        assert_eq!(ColorModel::from_str("base", true), Ok(ColorModel::Css21));
        assert_eq!(ColorModel::from_str("shades", true), Ok(ColorModel::Css3));
        assert_eq!(ColorModel::from_str("css3", true), Ok(ColorModel::Css3));
    }

    #[test]
    fn serializes_as_lowercase_name() {
        assert_eq!(serde_json::to_string(&ColorModel::Css21).unwrap(), "\"css21\"");
        assert_eq!(serde_json::to_string(&ColorModel::Css3).unwrap(), "\"css3\"");
        assert_eq!(ColorModel::Css3.to_string(), "css3");
    }
}

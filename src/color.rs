use anyhow::{anyhow, bail, Result};
use palette::{encoding, Hsl, IntoColor, Srgb};

/// Core color type used throughout the pipeline.
/// Wraps sRGB u8 components; hue, saturation and lightness are derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800` or `#FF8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            bail!(
                "invalid hex color: expected 6 hex digits, got {}",
                digits.len()
            );
        }
        let srgb: Srgb<u8> = digits
            .parse()
            .map_err(|e| anyhow!("invalid hex color {hex:?}: {e}"))?;
        Ok(Self::from_srgb_u8(srgb))
    }

    /// Decode a `#rrggbb` literal at compile time. Used for the static name tables.
    pub(crate) const fn from_hex_literal(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        assert!(
            bytes.len() == 7 && bytes[0] == b'#',
            "hex literal must look like #rrggbb"
        );
        Self {
            r: hex_digit(bytes[1]) * 16 + hex_digit(bytes[2]),
            g: hex_digit(bytes[3]) * 16 + hex_digit(bytes[4]),
            b: hex_digit(bytes[5]) * 16 + hex_digit(bytes[6]),
        }
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Create from `palette::Srgb<u8>`.
    pub fn from_srgb_u8(srgb: Srgb<u8>) -> Self {
        Self {
            r: srgb.red,
            g: srgb.green,
            b: srgb.blue,
        }
    }

    /// Squared Euclidean distance in RGB space. No square root: only the
    /// ordering matters to callers.
    pub fn distance_sq(self, other: Color) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Convert to HSL with every component normalized to [0, 1].
    ///
    /// Achromatic colors (r == g == b) have hue and saturation 0.
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let srgb: Srgb<f64> = self.to_srgb_u8().into_format();
        let hsl: Hsl<encoding::Srgb, f64> = srgb.into_color();
        let (hue, saturation, lightness) = hsl.into_components();
        if self.r == self.g && self.g == self.b {
            return (0.0, 0.0, lightness);
        }
        (hue.into_positive_degrees() / 360.0, saturation, lightness)
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self { r, g, b }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Decode a hex color and convert it to HSL, each component in [0, 1].
pub fn hex_to_hsl(hex: &str) -> Result<(f64, f64, f64)> {
    Ok(Color::from_hex(hex)?.to_hsl())
}

const fn hex_digit(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => panic!("invalid hex digit in color literal"),
    }
}

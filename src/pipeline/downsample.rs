use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

/// Width every image is resampled to before matching.
pub const TARGET_WIDTH: u32 = 100;

/// Dimensions of the sampling grid for a `width` x `height` source.
///
/// The width is always [`TARGET_WIDTH`]; the height keeps the aspect ratio,
/// biased up by 0.7 before truncation and never less than one row.
/// Returns `None` for an empty source.
pub fn target_dimensions(width: u32, height: u32) -> Option<(u32, u32)> {
    if width == 0 || height == 0 {
        return None;
    }
    let scaled = 0.7 + height as f64 * TARGET_WIDTH as f64 / width as f64;
    Some((TARGET_WIDTH, (scaled as u32).max(1)))
}

/// Drop alpha and resample the image onto the sampling grid with bilinear
/// filtering. Small images are scaled up, large ones down.
pub fn downsample(image: &DynamicImage) -> RgbImage {
    let rgb = image.to_rgb8();
    match target_dimensions(rgb.width(), rgb.height()) {
        Some((width, height)) => imageops::resize(&rgb, width, height, FilterType::Triangle),
        None => RgbImage::new(0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_image_becomes_100x100() {
        assert_eq!(target_dimensions(512, 512), Some((100, 100)));
        assert_eq!(target_dimensions(4, 4), Some((100, 100)));
    }

    #[test]
    fn aspect_ratio_is_preserved() {
        assert_eq!(target_dimensions(400, 200), Some((100, 50)));
        assert_eq!(target_dimensions(200, 400), Some((100, 200)));
        // 75.0 + 0.7 truncates to 75, 33.33 + 0.7 to 34
        assert_eq!(target_dimensions(40, 30), Some((100, 75)));
        assert_eq!(target_dimensions(300, 100), Some((100, 34)));
    }

    #[test]
    fn very_wide_image_keeps_one_row() {
        assert_eq!(target_dimensions(10_000, 1), Some((100, 1)));
    }

    #[test]
    fn empty_image_has_no_grid() {
        assert_eq!(target_dimensions(0, 10), None);
        assert_eq!(target_dimensions(10, 0), None);
        let sample = downsample(&DynamicImage::new_rgb8(0, 0));
        assert_eq!(sample.dimensions(), (0, 0));
    }

    #[test]
    fn downsample_produces_grid_dimensions() {
        let image = DynamicImage::new_rgb8(640, 480);
        assert_eq!(downsample(&image).dimensions(), (100, 75));
    }

    #[test]
    fn downsample_drops_alpha() {
        let rgba = image::RgbaImage::from_pixel(8, 8, image::Rgba([10, 20, 30, 0]));
        let sample = downsample(&DynamicImage::ImageRgba8(rgba));
        for pixel in sample.pixels() {
            assert_eq!(pixel.0, [10, 20, 30]);
        }
    }
}

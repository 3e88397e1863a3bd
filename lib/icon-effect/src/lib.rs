pub mod colour_space;
pub mod luminance;
pub mod palette;
pub mod quantize;

use image::{ImageReader, Rgba, RgbaImage};
use std::path::Path;

pub use luminance::LuminanceConfig;
pub use palette::Palette;
pub use quantize::{MinimalistConfig, PosterizeConfig};

pub type IconEffectResult<T> = Result<T, IconEffectError>;

#[derive(thiserror::Error, Debug)]
pub enum IconEffectError {
    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),
    #[error("Palette generation failed: {0}")]
    PaletteGenerationFailed(String),
    #[error("Unsupported or corrupt image: {0}")]
    UnsupportedOrCorruptImage(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Per-pixel recoloring decision shared by both styles.
pub trait Quantizer {
    /// Maps one pixel's smoothed luminance and original alpha to an output
    /// color. A pixel with zero alpha never receives color.
    fn classify(&self, luminance: u8, alpha: u8) -> Rgba<u8>;
}

#[derive(Debug, Clone)]
pub enum RecolorStyle {
    Minimalist(quantize::MinimalistConfig),
    Posterize(quantize::PosterizeConfig),
}

impl Quantizer for RecolorStyle {
    fn classify(&self, luminance: u8, alpha: u8) -> Rgba<u8> {
        match self {
            RecolorStyle::Minimalist(config) => config.classify(luminance, alpha),
            RecolorStyle::Posterize(config) => config.classify(luminance, alpha),
        }
    }
}

/// Runs the full recoloring pipeline on one decoded image: luminance
/// extraction with optional smoothing, then per-pixel quantization against
/// the original alpha mask. Output dimensions always match the input.
pub fn recolor(image: &RgbaImage, style: &RecolorStyle, luminance: &LuminanceConfig) -> RgbaImage {
    let map = luminance.extract(image);
    let mut output = RgbaImage::new(image.width(), image.height());

    for (x, y, pixel) in image.enumerate_pixels() {
        let luma = map.get_pixel(x, y)[0];
        output.put_pixel(x, y, style.classify(luma, pixel[3]));
    }

    output
}

/// Decodes a source file into RGBA. Undecodable input is reported as
/// `UnsupportedOrCorruptImage` so a batch can skip it and keep going.
pub fn load_rgba(path: impl AsRef<Path>) -> IconEffectResult<RgbaImage> {
    let reader = ImageReader::open(path.as_ref())?.with_guessed_format()?;

    match reader.decode() {
        Ok(image) => Ok(image.to_rgba8()),
        Err(e) => Err(IconEffectError::UnsupportedOrCorruptImage(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn test_image() -> RgbaImage {
        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, Rgba([255, 255, 255, 255])); // bright, opaque
        image.put_pixel(1, 0, Rgba([0, 0, 0, 255])); // dark, opaque
        image.put_pixel(0, 1, Rgba([255, 255, 255, 0])); // bright, transparent
        image.put_pixel(1, 1, Rgba([200, 200, 200, 128])); // bright, soft edge
        image
    }

    #[test]
    fn test_recolor_preserves_dimensions() {
        let image = test_image();
        let style = RecolorStyle::Minimalist(MinimalistConfig::new());

        let output = recolor(&image, &style, &LuminanceConfig::new());
        assert_eq!(output.dimensions(), image.dimensions());
    }

    #[test]
    fn test_recolor_preserves_transparency() {
        let image = test_image();
        let target = Rgba([115, 222, 227, 255]);

        let styles = [
            RecolorStyle::Minimalist(MinimalistConfig::new().with_target(target)),
            RecolorStyle::Posterize(PosterizeConfig::from_palette(
                Palette::generate(target, 4).unwrap(),
            )),
        ];

        for style in styles {
            let output = recolor(&image, &style, &LuminanceConfig::new());
            assert_eq!(*output.get_pixel(0, 1), Rgba([0, 0, 0, 0]));
            assert_eq!(output.get_pixel(0, 0)[3], 255);
            assert_eq!(output.get_pixel(1, 1)[3], 128);
        }
    }

    #[test]
    fn test_recolor_is_deterministic() {
        let image = test_image();
        let style = RecolorStyle::Posterize(PosterizeConfig::from_palette(
            Palette::generate(Rgba([115, 222, 227, 255]), 3).unwrap(),
        ));
        let luminance = LuminanceConfig::new().with_blur_radius(1.0);

        let first = recolor(&image, &style, &luminance);
        let second = recolor(&image, &style, &luminance);
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn test_load_rgba_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("not_an_image.png");
        fs::write(&path, b"definitely not pixels").unwrap();

        match load_rgba(&path) {
            Err(IconEffectError::UnsupportedOrCorruptImage(_)) => (),
            other => panic!("expected UnsupportedOrCorruptImage, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rgba_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.png");
        test_image().save(&path).unwrap();

        let loaded = load_rgba(&path).unwrap();
        assert_eq!(loaded.as_raw(), test_image().as_raw());
    }
}

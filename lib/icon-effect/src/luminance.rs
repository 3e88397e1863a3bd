use derivative::Derivative;
use derive_setters::Setters;
use image::{GrayImage, Luma, RgbaImage};

/// Luminance extraction configuration.
///
/// Derives a single-channel brightness map from RGBA input, optionally
/// smoothed with a gaussian blur. Smoothing softens binarization edges in
/// the minimalist style and spreads bucket boundaries in the posterize
/// style, giving softer transitions between palette bands.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct LuminanceConfig {
    #[derivative(Default(value = "0.0"))]
    blur_radius: f32,
}

impl LuminanceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the brightness map for `image`. Output dimensions always
    /// match the input; a non-positive blur radius leaves the map unblurred.
    pub fn extract(&self, image: &RgbaImage) -> GrayImage {
        let mut map = GrayImage::new(image.width(), image.height());

        for (x, y, pixel) in image.enumerate_pixels() {
            // Human perception: 0.299*R + 0.587*G + 0.114*B
            let luma = (0.299 * pixel[0] as f32
                + 0.587 * pixel[1] as f32
                + 0.114 * pixel[2] as f32) as u8;
            map.put_pixel(x, y, Luma([luma]));
        }

        if self.blur_radius > 0.0 {
            log::debug!("smoothing luminance map, radius: {}", self.blur_radius);
            map = imageproc::filter::gaussian_blur_f32(&map, self.blur_radius);
        }

        map
    }
}

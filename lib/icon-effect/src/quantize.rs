use crate::{Quantizer, palette::Palette};
use derivative::Derivative;
use derive_setters::Setters;
use image::Rgba;

/// Fully transparent black, the output for every masked-out pixel.
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Binary threshold style: bright pixels take the target color, dark pixels
/// drop out entirely.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct MinimalistConfig {
    #[derivative(Default(value = "Rgba([255, 255, 255, 255])"))]
    target: Rgba<u8>,
    #[derivative(Default(value = "128"))]
    threshold: u8,
}

impl MinimalistConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Quantizer for MinimalistConfig {
    fn classify(&self, luminance: u8, alpha: u8) -> Rgba<u8> {
        if alpha == 0 || luminance <= self.threshold {
            return TRANSPARENT;
        }

        // Original alpha keeps anti-aliased edges soft.
        Rgba([self.target[0], self.target[1], self.target[2], alpha])
    }
}

/// N-way posterize style: luminance bands map onto palette entries, darkest
/// band to darkest entry.
#[derive(Debug, Clone)]
pub struct PosterizeConfig {
    palette: Palette,
}

impl PosterizeConfig {
    pub fn from_palette(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Counts how many cut points the luminance strictly exceeds. A value
    /// landing exactly on a cut belongs to the darker band.
    fn bucket(&self, luminance: u8) -> usize {
        let count = self.palette.len();
        let mut index = 0;

        for i in 0..count - 1 {
            let cut = (i + 1) as f32 * 256.0 / count as f32;
            if luminance as f32 > cut {
                index += 1;
            } else {
                break;
            }
        }

        index
    }
}

impl Quantizer for PosterizeConfig {
    fn classify(&self, luminance: u8, alpha: u8) -> Rgba<u8> {
        if alpha == 0 {
            return TRANSPARENT;
        }

        let color = self.palette.colors()[self.bucket(luminance)];
        Rgba([color[0], color[1], color[2], alpha])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: Rgba<u8> = Rgba([115, 222, 227, 255]);

    fn posterize(count: usize) -> PosterizeConfig {
        let colors = (0..count)
            .map(|i| Rgba([i as u8, i as u8, i as u8, 255]))
            .collect();
        PosterizeConfig::from_palette(Palette::new(colors).unwrap())
    }

    #[test]
    fn test_minimalist_above_threshold() {
        let config = MinimalistConfig::new()
            .with_target(TARGET)
            .with_threshold(130);

        assert_eq!(config.classify(131, 255), Rgba([115, 222, 227, 255]));
        assert_eq!(config.classify(255, 90), Rgba([115, 222, 227, 90]));
    }

    #[test]
    fn test_minimalist_at_or_below_threshold() {
        let config = MinimalistConfig::new()
            .with_target(TARGET)
            .with_threshold(130);

        assert_eq!(config.classify(130, 255), TRANSPARENT);
        assert_eq!(config.classify(0, 255), TRANSPARENT);
    }

    #[test]
    fn test_minimalist_zero_alpha_never_colored() {
        let config = MinimalistConfig::new().with_target(TARGET).with_threshold(0);
        assert_eq!(config.classify(255, 0), TRANSPARENT);
    }

    #[test]
    fn test_posterize_three_band_buckets() {
        // Cut points for three bands sit at 85.33 and 170.67.
        let config = posterize(3);

        assert_eq!(config.bucket(50), 0);
        assert_eq!(config.bucket(85), 0);
        assert_eq!(config.bucket(86), 1);
        assert_eq!(config.bucket(100), 1);
        assert_eq!(config.bucket(170), 1);
        assert_eq!(config.bucket(171), 2);
        assert_eq!(config.bucket(200), 2);
        assert_eq!(config.bucket(255), 2);
    }

    #[test]
    fn test_posterize_exact_cut_falls_into_darker_band() {
        // Four bands put an integer cut at exactly 64.
        let config = posterize(4);

        assert_eq!(config.bucket(64), 0);
        assert_eq!(config.bucket(65), 1);
        assert_eq!(config.bucket(128), 1);
        assert_eq!(config.bucket(129), 2);
    }

    #[test]
    fn test_posterize_single_entry_always_bucket_zero() {
        let config = posterize(1);

        for luminance in [0u8, 64, 128, 255] {
            assert_eq!(config.bucket(luminance), 0);
        }
    }

    #[test]
    fn test_posterize_preserves_alpha() {
        let config = posterize(3);

        assert_eq!(config.classify(200, 255), Rgba([2, 2, 2, 255]));
        assert_eq!(config.classify(200, 42)[3], 42);
        assert_eq!(config.classify(200, 0), TRANSPARENT);
    }

    #[test]
    fn test_posterize_bucket_is_monotonic() {
        let config = posterize(5);
        let mut last = 0;

        for luminance in 0u8..=255 {
            let bucket = config.bucket(luminance);
            assert!(bucket >= last);
            assert!(bucket < 5);
            last = bucket;
        }
    }
}

use crate::{IconEffectError, IconEffectResult, colour_space};
use image::Rgba;

/// Lowest lightness level a generated palette may contain.
pub const LIGHTNESS_FLOOR: f32 = 0.25;

/// Highest lightness level a generated palette may contain.
pub const LIGHTNESS_CEILING: f32 = 0.85;

/// Ordered set of target colors spanning a lightness range, darkest first.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgba<u8>>,
}

impl Palette {
    /// Wraps an explicit color list in the caller's ordering. An empty list
    /// is rejected.
    pub fn new(colors: Vec<Rgba<u8>>) -> IconEffectResult<Self> {
        if colors.is_empty() {
            return Err(IconEffectError::PaletteGenerationFailed(
                "palette must contain at least one color".to_string(),
            ));
        }

        Ok(Self { colors })
    }

    /// Builds `count` colors anchored at `base`: evenly spaced lightness
    /// levels between [`LIGHTNESS_FLOOR`] and [`LIGHTNESS_CEILING`], with
    /// the level closest to the base lightness snapped to it exactly so the
    /// seed color stays reproducible. Hue and saturation are kept unchanged.
    ///
    /// `count == 1` yields a single entry at the base color's own lightness;
    /// any other value is clamped to a minimum of 2.
    pub fn generate(base: Rgba<u8>, count: usize) -> IconEffectResult<Self> {
        let (hue, lightness, saturation) = colour_space::rgb_to_hls(
            base[0] as f32 / 255.0,
            base[1] as f32 / 255.0,
            base[2] as f32 / 255.0,
        );

        if !(hue.is_finite() && lightness.is_finite() && saturation.is_finite()) {
            log::warn!("HLS conversion went non-finite, falling back to the raw base color");
            return Self::new(vec![base]);
        }

        let levels = if count == 1 {
            vec![lightness]
        } else {
            let count = count.max(2);
            let step = (LIGHTNESS_CEILING - LIGHTNESS_FLOOR) / (count - 1) as f32;
            let mut levels: Vec<f32> = (0..count)
                .map(|i| LIGHTNESS_FLOOR + i as f32 * step)
                .collect();

            let mut closest = 0;
            for (i, level) in levels.iter().enumerate() {
                if (level - lightness).abs() < (levels[closest] - lightness).abs() {
                    closest = i;
                }
            }
            levels[closest] = lightness;
            levels.sort_by(|a, b| a.total_cmp(b));

            levels
        };

        let mut colors = Vec::with_capacity(levels.len());
        for level in levels {
            let (r, g, b) = colour_space::hls_to_rgb(hue, level, saturation);

            if !(r.is_finite() && g.is_finite() && b.is_finite()) {
                log::warn!(
                    "color reconstruction went non-finite at lightness {level}, falling back to the raw base color"
                );
                return Self::new(vec![base]);
            }

            colors.push(colour_space::normalized_rgb_to_rgba(r, g, b, 255));
        }

        Self::new(colors)
    }

    pub fn colors(&self) -> &[Rgba<u8>] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

use crate::{IconEffectError, IconEffectResult};
use image::Rgba;

/// Parses a HEX color string into an opaque RGBA color.
///
/// Accepts `#rrggbb`, `rrggbb`, `#rgb` and `rgb`. The 3-digit form expands
/// each nibble, so `#fa0` parses like `#ffaa00`.
pub fn hex_to_rgba(hex: &str) -> IconEffectResult<Rgba<u8>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(IconEffectError::InvalidColorFormat(hex.to_string()));
    }

    let channel = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| IconEffectError::InvalidColorFormat(hex.to_string()))
    };

    let (r, g, b) = match digits.len() {
        6 => (
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ),
        3 => (
            channel(&digits[0..1])? * 17,
            channel(&digits[1..2])? * 17,
            channel(&digits[2..3])? * 17,
        ),
        _ => return Err(IconEffectError::InvalidColorFormat(hex.to_string())),
    };

    Ok(Rgba([r, g, b, 255]))
}

/// Same parsing as [`hex_to_rgba`], scaled into [0.0, 1.0] per channel.
pub fn hex_to_normalized_rgb(hex: &str) -> IconEffectResult<(f32, f32, f32)> {
    let rgba = hex_to_rgba(hex)?;

    Ok((
        rgba[0] as f32 / 255.0,
        rgba[1] as f32 / 255.0,
        rgba[2] as f32 / 255.0,
    ))
}

/// Rebuilds an 8-bit color from normalized channels, rounding half-up and
/// clamping so floating point error cannot overflow a channel.
pub fn normalized_rgb_to_rgba(r: f32, g: f32, b: f32, alpha: u8) -> Rgba<u8> {
    let channel = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;

    Rgba([channel(r), channel(g), channel(b), alpha])
}

/// Converts normalized RGB to HLS, every channel in [0.0, 1.0].
pub fn rgb_to_hls(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let lightness = (minc + maxc) / 2.0;

    if maxc == minc {
        return (0.0, lightness, 0.0);
    }

    let delta = maxc - minc;
    let saturation = if lightness <= 0.5 {
        delta / (maxc + minc)
    } else {
        delta / (2.0 - maxc - minc)
    };

    let rc = (maxc - r) / delta;
    let gc = (maxc - g) / delta;
    let bc = (maxc - b) / delta;

    let hue = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    (((hue / 6.0) % 1.0 + 1.0) % 1.0, lightness, saturation)
}

/// Converts HLS back to normalized RGB.
pub fn hls_to_rgb(hue: f32, lightness: f32, saturation: f32) -> (f32, f32, f32) {
    if saturation == 0.0 {
        return (lightness, lightness, lightness);
    }

    let m2 = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let m1 = 2.0 * lightness - m2;

    (
        hls_component(m1, m2, hue + 1.0 / 3.0),
        hls_component(m1, m2, hue),
        hls_component(m1, m2, hue - 1.0 / 3.0),
    )
}

fn hls_component(m1: f32, m2: f32, hue: f32) -> f32 {
    let hue = (hue % 1.0 + 1.0) % 1.0;

    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

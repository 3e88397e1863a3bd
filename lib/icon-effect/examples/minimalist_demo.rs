/// Minimalist recoloring demo
/// Demonstrates binary thresholding at different threshold values

use icon_effect::{LuminanceConfig, MinimalistConfig, RecolorStyle, colour_space, recolor};
use image::{Rgba, RgbaImage};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    // Radial gradient with a transparent ring, stands in for a real icon
    let img = RgbaImage::from_fn(128, 128, |x, y| {
        let dx = x as f32 - 64.0;
        let dy = y as f32 - 64.0;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist > 60.0 {
            Rgba([0, 0, 0, 0])
        } else {
            let v = (255.0 * (1.0 - dist / 60.0)) as u8;
            Rgba([v, v, v, 255])
        }
    });

    let target = colour_space::hex_to_rgba("#73dee3")?;
    let luminance = LuminanceConfig::new().with_blur_radius(1.0);

    // Test different threshold levels
    let thresholds = [64, 96, 128, 160, 192];

    for threshold in thresholds {
        let style = RecolorStyle::Minimalist(
            MinimalistConfig::new()
                .with_target(target)
                .with_threshold(threshold),
        );

        let result = recolor(&img, &style, &luminance);

        let filename = format!("minimalist_t{}.png", threshold);
        result.save(output_dir.join(&filename))?;
        println!("✓ Generated {}", filename);
    }

    println!("\n✓ All minimalist recolorings applied successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}

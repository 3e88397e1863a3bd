/// Posterize recoloring demo
/// Demonstrates palette generation and N-way luminance banding

use anyhow::Result;
use icon_effect::{LuminanceConfig, Palette, PosterizeConfig, RecolorStyle, colour_space, recolor};
use image::{Rgba, RgbaImage};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    // Horizontal brightness ramp with a transparent border
    let img = RgbaImage::from_fn(256, 64, |x, y| {
        if y < 8 || y >= 56 {
            Rgba([0, 0, 0, 0])
        } else {
            let v = x as u8;
            Rgba([v, v, v, 255])
        }
    });

    let base = colour_space::hex_to_rgba("#73dee3")?;
    let luminance = LuminanceConfig::new().with_blur_radius(1.5);

    // Test different palette sizes
    let sizes = [2, 3, 4, 6, 8];

    for size in sizes {
        let palette = Palette::generate(base, size)?;
        let style = RecolorStyle::Posterize(PosterizeConfig::from_palette(palette));

        let result = recolor(&img, &style, &luminance);

        let filename = format!("posterize_n{}.png", size);
        result.save(output_dir.join(&filename))?;
        println!("✓ Generated {}", filename);
    }

    println!("\n✓ All posterize recolorings applied successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}

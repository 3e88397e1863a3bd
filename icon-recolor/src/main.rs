use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use icon_effect::{
    LuminanceConfig, MinimalistConfig, Palette, PosterizeConfig, RecolorStyle, colour_space,
};
use std::path::PathBuf;

mod batch;

use batch::BatchConfig;

#[derive(Parser, Debug)]
#[command(version, about = "Batch recolor icon images into stylized palette variants")]
struct Args {
    /// Directory containing the source icons
    #[arg(short, long)]
    input: PathBuf,

    /// Directory the recolored icons are written to, created if missing
    #[arg(short, long)]
    output: PathBuf,

    /// Seed color as a HEX string, e.g. "#73dee3"
    #[arg(short, long, default_value = "#73dee3")]
    color: String,

    /// Recoloring style
    #[arg(short, long, value_enum, default_value = "minimalist")]
    style: Style,

    /// Luminance threshold for the minimalist style (0-255)
    #[arg(short, long, default_value_t = 130)]
    threshold: u8,

    /// Palette size for the posterize style
    #[arg(short, long, default_value_t = 4)]
    palette_size: usize,

    /// Gaussian blur radius applied to the luminance map, 0 disables
    #[arg(short, long, default_value_t = 1.0)]
    blur_radius: f32,

    /// Source file suffix to match, ignoring case
    #[arg(long, default_value = "webp")]
    suffix: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Style {
    /// Binary threshold against a single target color
    Minimalist,
    /// N-way luminance bands mapped onto a generated palette
    Posterize,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let target = colour_space::hex_to_rgba(&args.color)
        .with_context(|| format!("invalid seed color: {}", args.color))?;
    log::info!("target color: {} -> RGBA {:?}", args.color, target.0);

    let style = match args.style {
        Style::Minimalist => {
            log::info!("style: minimalist, threshold: {}", args.threshold);
            RecolorStyle::Minimalist(
                MinimalistConfig::new()
                    .with_target(target)
                    .with_threshold(args.threshold),
            )
        }
        Style::Posterize => {
            log::info!("style: posterize, palette size: {}", args.palette_size);
            let palette = Palette::generate(target, args.palette_size)
                .with_context(|| format!("generate palette from {}", args.color))?;
            RecolorStyle::Posterize(PosterizeConfig::from_palette(palette))
        }
    };

    let config = BatchConfig {
        input_dir: args.input,
        output_dir: args.output,
        suffix: args.suffix,
        style,
        luminance: LuminanceConfig::new().with_blur_radius(args.blur_radius),
    };

    let summary = batch::run(&config)?;
    summary.print(&config.output_dir);

    Ok(())
}

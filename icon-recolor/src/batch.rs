use anyhow::{Context, Result, bail};
use icon_effect::{
    IconEffectError, IconEffectResult, LuminanceConfig, RecolorStyle, load_rgba, recolor,
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Immutable per-run configuration shared by every file in the batch.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub suffix: String,
    pub style: RecolorStyle,
    pub luminance: LuminanceConfig,
}

/// Per-run counters reported after the batch finishes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub found: usize,
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl Summary {
    pub fn print(&self, output_dir: &Path) {
        println!("\n--- results ---");

        if self.found == 0 {
            println!("no matching files found in the input directory");
            return;
        }

        println!("found {} matching files", self.found);
        println!("processed: {}", self.processed);
        if self.skipped > 0 {
            println!("skipped (non-file or unreadable): {}", self.skipped);
        }
        if self.errors > 0 {
            println!("errors: {}", self.errors);
        }
        println!("recolored icons saved to: {}", output_dir.display());
    }
}

/// Runs the whole batch sequentially: each file is decoded, recolored and
/// written before the next starts. Per-file failures never abort siblings.
pub fn run(config: &BatchConfig) -> Result<Summary> {
    if !config.input_dir.is_dir() {
        bail!("input directory not found: {}", config.input_dir.display());
    }

    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("create output directory {}", config.output_dir.display()))?;

    log::info!("input directory: {}", config.input_dir.display());
    log::info!("output directory: {}", config.output_dir.display());

    let suffix = format!(".{}", config.suffix.trim_start_matches('.').to_lowercase());
    let mut summary = Summary::default();

    for entry in WalkDir::new(&config.input_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("unreadable directory entry: {e}");
                summary.errors += 1;
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().to_string();
        if !name.to_lowercase().ends_with(&suffix) {
            continue;
        }

        summary.found += 1;

        if !entry.file_type().is_file() {
            log::info!("skipping, not a file: {name}");
            summary.skipped += 1;
            continue;
        }

        let output_path = config.output_dir.join(&name).with_extension("png");

        match process_file(entry.path(), &output_path, config) {
            Ok(()) => {
                log::info!("processed: {} -> {}", name, output_path.display());
                summary.processed += 1;
            }
            Err(IconEffectError::UnsupportedOrCorruptImage(e)) => {
                log::warn!("skipping unsupported or corrupt image {name}: {e}");
                summary.skipped += 1;
            }
            Err(e) => {
                log::warn!("failed to process {name}: {e}");
                summary.errors += 1;
            }
        }
    }

    Ok(summary)
}

fn process_file(input: &Path, output: &Path, config: &BatchConfig) -> IconEffectResult<()> {
    let image = load_rgba(input)?;
    let recolored = recolor(&image, &config.style, &config.luminance);
    recolored.save(output)?;

    Ok(())
}

//! kage: batch-convert transparent sprites into polygon hitbox overrides.
//!
//! Scans a directory of numbered sprite images (`00.png`, `01.png`,
//! ...), derives a simplified polygon silhouette from each sprite's
//! alpha channel, and prints the collected hitboxes to stdout as a JS
//! `const overrides = {...}` literal ready to paste into the
//! renderer's source. Sprites that cannot be converted are skipped
//! with a note on stderr.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin kage -- [OPTIONS] <SPRITE_DIR>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use kage_pipeline::{HitboxConfig, NormalizeMode};

mod batch;

/// Batch-convert transparent sprites into polygon hitbox overrides.
///
/// Discovers numbered `.png` sprites in the given directory, runs the
/// silhouette pipeline on each, and writes the combined overrides
/// literal to stdout.
#[derive(Parser)]
#[command(name = "kage", version)]
struct Cli {
    /// Directory containing numbered sprite images (00.png, 01.png, ...).
    sprite_dir: PathBuf,

    /// Alpha threshold: pixels with alpha above this count as opaque.
    #[arg(long, default_value_t = HitboxConfig::DEFAULT_ALPHA_THRESHOLD)]
    threshold: u8,

    /// Simplification tolerance as a fraction of the boundary perimeter.
    #[arg(long, default_value_t = HitboxConfig::DEFAULT_TOLERANCE_RATIO)]
    tolerance_ratio: f64,

    /// Coordinate normalization convention.
    #[arg(long, value_enum, default_value_t = Normalize::PerAxis)]
    normalize: Normalize,

    /// Full hitbox config as a JSON string.
    ///
    /// When provided, all other pipeline parameter flags are ignored.
    /// The JSON must be a valid `HitboxConfig` serialization.
    #[arg(long)]
    config_json: Option<String>,
}

/// Normalization convention selection.
#[derive(Clone, Copy, ValueEnum)]
enum Normalize {
    /// Divide each axis by its own dimension (legacy renderer math).
    PerAxis,
    /// Divide both axes by max(width, height) (uniform scale).
    MaxDim,
}

/// Build a [`HitboxConfig`] from CLI arguments.
///
/// If `--config-json` is provided, the JSON is parsed directly and all
/// individual parameter flags are ignored. Otherwise, a config is
/// assembled from the individual flags.
fn config_from_cli(cli: &Cli) -> Result<HitboxConfig, String> {
    if let Some(ref json) = cli.config_json {
        return serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"));
    }

    Ok(HitboxConfig {
        alpha_threshold: cli.threshold,
        tolerance_ratio: cli.tolerance_ratio,
        normalize_mode: match cli.normalize {
            Normalize::PerAxis => NormalizeMode::PerAxis,
            Normalize::MaxDim => NormalizeMode::MaxDim,
        },
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config_from_cli(&cli) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let sprites = match batch::discover_sprites(&cli.sprite_dir) {
        Ok(sprites) => sprites,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.sprite_dir.display());
            return ExitCode::FAILURE;
        }
    };

    if sprites.is_empty() {
        eprintln!(
            "No numbered .png sprites found in {}",
            cli.sprite_dir.display(),
        );
    }

    let entries = batch::convert_all(&sprites, &config);
    eprintln!("Converted {}/{} sprites", entries.len(), sprites.len());

    print!("{}", kage_export::to_overrides(&entries));

    ExitCode::SUCCESS
}

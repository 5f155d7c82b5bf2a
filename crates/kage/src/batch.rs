//! Sprite discovery and batch conversion.
//!
//! Sprites follow the numbered-filename convention: `<digits>.png`
//! inside a single directory, where the stem (e.g. `07`) doubles as
//! the override key. Discovery globs the directory instead of
//! iterating a fixed index range, so batches of any size work and
//! gaps in the numbering are simply absent from the output.
//!
//! Every per-sprite failure is a skip, not an abort: the batch result
//! contains entries only for sprites that decoded, had an alpha
//! channel, and produced a non-empty silhouette. Skips are reported
//! on stderr; stdout stays reserved for the emitted literal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use kage_export::OverrideEntry;
use kage_pipeline::HitboxConfig;

/// A discovered sprite file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteFile {
    /// Override key: the file's numeric stem, verbatim.
    pub key: String,
    /// Full path to the image file.
    pub path: PathBuf,
}

/// Discover numbered sprite files in `dir`, sorted ascending by key.
///
/// A file qualifies when its extension is `png` (case-insensitive)
/// and its stem is one or more ASCII digits. Keys sort
/// lexicographically, which matches numeric order under the
/// zero-padded naming convention (`00.png` .. `14.png`).
///
/// # Errors
///
/// Returns an error if `dir` cannot be read. Individual unreadable
/// directory entries propagate as errors too; everything else is
/// filtered, not failed.
pub fn discover_sprites(dir: &Path) -> io::Result<Vec<SpriteFile>> {
    let mut sprites = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !ext.eq_ignore_ascii_case("png") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        sprites.push(SpriteFile {
            key: stem.to_owned(),
            path,
        });
    }

    sprites.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(sprites)
}

/// Convert discovered sprites, skipping any that fail.
///
/// Returns one [`OverrideEntry`] per successfully converted sprite,
/// preserving the discovery order. Skipped sprites (unreadable file,
/// undecodable image, no alpha channel, no opaque region) get a
/// one-line note on stderr and no entry.
pub fn convert_all(sprites: &[SpriteFile], config: &HitboxConfig) -> Vec<OverrideEntry> {
    let mut entries = Vec::with_capacity(sprites.len());

    for sprite in sprites {
        let bytes = match fs::read(&sprite.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Skipping {}: {e}", sprite.path.display());
                continue;
            }
        };

        match kage_pipeline::process(&bytes, config) {
            Ok(hitbox) => entries.push(OverrideEntry {
                key: sprite.key.clone(),
                outline: hitbox.outline,
            }),
            Err(e) => eprintln!("Skipping {}: {e}", sprite.path.display()),
        }
    }

    entries
}

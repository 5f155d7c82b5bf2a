//! Pixel-to-normalized coordinate transform.
//!
//! Maps pixel-space silhouette vertices into a coordinate frame
//! centered at the image center, with each axis roughly in
//! `[-0.5, 0.5]`, and rounds every coordinate to 3 decimal digits.
//!
//! Two conventions are supported (see [`NormalizeMode`]):
//!
//! ```text
//! PerAxis:  x = px / w - 0.5            y = py / h - 0.5
//! MaxDim:   x = (px - w/2) / max(w, h)  y = (py - h/2) / max(w, h)
//! ```
//!
//! `PerAxis` reproduces the hitbox data the legacy renderer ships,
//! even though that renderer scales sprites uniformly against
//! `max(width, height)` -- for non-square sprites the two conventions
//! disagree. The mode is configuration precisely so that discrepancy
//! stays visible rather than being papered over here.
//!
//! Y is not flipped: the output stays in image-space orientation
//! (+Y downward), which is what the consuming canvas expects.

use crate::types::{Dimensions, NormalizeMode, NormalizedPoint, Polygon};

/// Normalize a pixel-space silhouette into the center-origin frame.
///
/// Output order and count match the input vertices exactly: no
/// deduplication and no re-closing. Every coordinate is rounded to 3
/// decimal digits, so values may land just outside `[-0.5, 0.5]` by
/// rounding only.
#[must_use]
pub fn normalize_outline(
    polygon: &Polygon,
    dimensions: Dimensions,
    mode: NormalizeMode,
) -> Vec<NormalizedPoint> {
    let w = f64::from(dimensions.width);
    let h = f64::from(dimensions.height);

    polygon
        .points()
        .iter()
        .map(|p| {
            let (x, y) = match mode {
                NormalizeMode::PerAxis => (p.x / w - 0.5, p.y / h - 0.5),
                NormalizeMode::MaxDim => {
                    let max_dim = dimensions.max_dim();
                    ((p.x - w / 2.0) / max_dim, (p.y - h / 2.0) / max_dim)
                }
            };
            NormalizedPoint::new(round3(x), round3(y))
        })
        .collect()
}

/// Round to 3 decimal digits, half away from zero.
fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

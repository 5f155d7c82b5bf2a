//! kage-pipeline: Pure sprite-to-hitbox pipeline (sans-IO).
//!
//! Converts a transparent sprite image into a simplified polygon
//! outline through: alpha extraction -> thresholding -> outer
//! boundary tracing -> closed-ring simplification -> coordinate
//! normalization.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and returns structured data. File discovery, reading,
//! and stdout emission live in the `kage` binary.

pub mod alpha;
pub mod contour;
pub mod mask;
pub mod normalize;
pub mod simplify;
pub mod types;

pub use types::{
    Dimensions, Hitbox, HitboxConfig, NormalizeMode, NormalizedPoint, PipelineError, Point,
    Polygon,
};

/// Run the full hitbox extraction pipeline on one sprite.
///
/// Takes raw image bytes and a configuration, then produces a
/// [`Hitbox`] containing the normalized silhouette outline and the
/// source dimensions.
///
/// # Pipeline steps
///
/// 1. Decode image and extract the alpha channel
/// 2. Threshold alpha into an opaque/transparent mask
/// 3. Trace external boundaries, keep the largest opaque region
/// 4. Simplify the boundary (Ramer-Douglas-Peucker, perimeter-relative
///    tolerance)
/// 5. Normalize vertices into the center-origin `[-0.5, 0.5]` frame
///    and round to 3 decimal digits
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `image_bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image format is unrecognized.
/// Returns [`PipelineError::NoAlphaChannel`] if the image has no alpha channel.
/// Returns [`PipelineError::NoOpaqueRegion`] if thresholding leaves nothing
/// to trace.
pub fn process(image_bytes: &[u8], config: &HitboxConfig) -> Result<Hitbox, PipelineError> {
    // 1. Decode and extract the alpha channel.
    let alpha = alpha::decode_alpha(image_bytes)?;
    let dimensions = Dimensions {
        width: alpha.width(),
        height: alpha.height(),
    };

    // 2. Threshold alpha into a binary silhouette mask.
    let silhouette = mask::binarize(&alpha, config.alpha_threshold);

    // 3. Trace external boundaries; the largest opaque region wins.
    let boundaries = contour::outer_boundaries(&silhouette);
    let boundary = contour::largest_boundary(boundaries).ok_or(PipelineError::NoOpaqueRegion)?;

    // 4. Perimeter-relative closed-ring simplification.
    let simplified = simplify::simplify_boundary(&boundary, config.tolerance_ratio);

    // 5. Normalize into the center-origin frame.
    let outline = normalize::normalize_outline(&simplified, dimensions, config.normalize_mode);

    Ok(Hitbox {
        outline,
        dimensions,
    })
}

//! Image decoding and alpha channel extraction.
//!
//! Accepts raw image bytes and produces the per-pixel transparency
//! channel as a single-channel image. The silhouette is derived from
//! transparency alone; color channels are discarded here.
//!
//! This is the first step in the pipeline: raw bytes in, alpha
//! `GrayImage` out.

use image::GrayImage;

use crate::types::PipelineError;

/// Decode raw image bytes and extract the alpha channel.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
/// Returns [`PipelineError::NoAlphaChannel`] if the decoded image has
/// no alpha channel (e.g. plain RGB or grayscale) -- such sprites have
/// no transparency to silhouette against.
#[must_use = "returns the extracted alpha channel"]
pub fn decode_alpha(bytes: &[u8]) -> Result<GrayImage, PipelineError> {
    if bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let img = image::load_from_memory(bytes)?;
    if !img.color().has_alpha() {
        return Err(PipelineError::NoAlphaChannel);
    }

    let rgba = img.to_rgba8();
    Ok(GrayImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        image::Luma([rgba.get_pixel(x, y).0[3]])
    }))
}

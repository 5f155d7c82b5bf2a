//! Alpha thresholding: derive an opaque/transparent silhouette mask.
//!
//! Binarizes the alpha channel at a fixed cutoff so that partially
//! transparent anti-aliasing fringes do not inflate the silhouette.
//! White pixels (255) are opaque, black pixels (0) are transparent.

use image::GrayImage;

/// Threshold an alpha channel into a binary silhouette mask.
///
/// Pixels with alpha strictly above `threshold` become 255 (opaque);
/// everything else becomes 0 (transparent).
#[must_use = "returns the binary silhouette mask"]
pub fn binarize(alpha: &GrayImage, threshold: u8) -> GrayImage {
    GrayImage::from_fn(alpha.width(), alpha.height(), |x, y| {
        if alpha.get_pixel(x, y).0[0] > threshold {
            image::Luma([255])
        } else {
            image::Luma([0])
        }
    })
}

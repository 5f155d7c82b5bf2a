//! Shared types for the kage hitbox pipeline.

use serde::{Deserialize, Serialize};

/// Re-export `GrayImage` so downstream crates can reference
/// intermediate raster data without depending on `image` directly.
pub use image::GrayImage;

/// A 2D point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (pixels from left edge).
    pub x: f64,
    /// Vertical position (pixels from top edge).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Avoids the square root for comparison purposes.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

/// An ordered ring of vertices describing a closed region boundary.
///
/// The closing edge from the last vertex back to the first is implied;
/// the first vertex is never repeated at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon(Vec<Point>);

impl Polygon {
    /// Create a new polygon from a vector of vertices.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of vertices in the polygon.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a slice of all vertices.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consumes the polygon and returns the underlying vertex vector.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }

    /// Total boundary length, including the implied closing edge.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        if self.0.len() < 2 {
            return 0.0;
        }
        self.0
            .iter()
            .zip(self.0.iter().cycle().skip(1))
            .take(self.0.len())
            .map(|(a, b)| a.distance(*b))
            .sum()
    }

    /// Enclosed area via the shoelace formula (always non-negative).
    ///
    /// Degenerate polygons (fewer than 3 vertices) have zero area.
    #[must_use]
    pub fn area(&self) -> f64 {
        if self.0.len() < 3 {
            return 0.0;
        }
        let mut twice_area = 0.0;
        for i in 0..self.0.len() {
            let a = self.0[i];
            let b = self.0[(i + 1) % self.0.len()];
            twice_area += a.x.mul_add(b.y, -(b.x * a.y));
        }
        (twice_area / 2.0).abs()
    }
}

/// A point in the normalized center-origin coordinate frame.
///
/// Both axes lie approximately in `[-0.5, 0.5]` (not clamped) and are
/// rounded to 3 decimal digits by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    /// Horizontal position, 0.0 at the image center.
    pub x: f64,
    /// Vertical position, 0.0 at the image center.
    pub y: f64,
}

impl NormalizedPoint {
    /// Create a new normalized point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// The larger of width and height, as a float.
    #[must_use]
    pub fn max_dim(&self) -> f64 {
        f64::from(self.width.max(self.height))
    }
}

/// Which coordinate normalization convention to apply.
///
/// The legacy renderer scales sprites against `max(width, height)` of
/// its canvas, yet the hitbox data it ships divides each axis by that
/// axis's own dimension. Both conventions are kept selectable so the
/// mismatch can be resolved downstream instead of silently here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NormalizeMode {
    /// Divide x by width and y by height independently.
    ///
    /// Non-square images get non-uniformly scaled axes. This replicates
    /// the renderer's shipped hitbox data byte-for-byte.
    #[default]
    PerAxis,

    /// Divide both axes by `max(width, height)`.
    ///
    /// Uniform scale matching the renderer's own canvas scaling, so
    /// polygon shape is preserved for non-square images.
    MaxDim,
}

/// Configuration for the hitbox pipeline.
///
/// All parameters have defaults matching the shipped hitbox data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitboxConfig {
    /// Alpha threshold: pixels with alpha strictly above this value
    /// count as opaque.
    pub alpha_threshold: u8,

    /// Simplification tolerance as a fraction of the traced boundary's
    /// perimeter. Higher values remove more vertices.
    pub tolerance_ratio: f64,

    /// Which coordinate normalization convention to apply.
    pub normalize_mode: NormalizeMode,
}

impl HitboxConfig {
    /// Default alpha threshold (out of 255).
    pub const DEFAULT_ALPHA_THRESHOLD: u8 = 50;

    /// Default simplification tolerance, 1.2% of the boundary
    /// perimeter. Tuned to land silhouettes in the 15-30 vertex range
    /// for typical sprites; not an enforced bound.
    pub const DEFAULT_TOLERANCE_RATIO: f64 = 0.012;
}

impl Default for HitboxConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: Self::DEFAULT_ALPHA_THRESHOLD,
            tolerance_ratio: Self::DEFAULT_TOLERANCE_RATIO,
            normalize_mode: NormalizeMode::default(),
        }
    }
}

/// Result of running the hitbox pipeline on one sprite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    /// The simplified, normalized silhouette outline.
    pub outline: Vec<NormalizedPoint>,

    /// Dimensions of the source image in pixels.
    ///
    /// Kept alongside the outline so serializers and callers can relate
    /// normalized coordinates back to the source raster.
    pub dimensions: Dimensions,
}

/// Errors that can occur during hitbox extraction.
///
/// Every variant is a per-sprite skip condition for the batch driver;
/// none is fatal to a batch run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// The decoded image carries no alpha channel to silhouette against.
    #[error("image has no alpha channel")]
    NoAlphaChannel,

    /// Thresholding left no opaque pixels to trace.
    #[error("no opaque region found in the image")]
    NoOpaqueRegion,
}

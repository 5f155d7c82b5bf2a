//! Boundary tracing: extract the outer silhouette from a binary mask.
//!
//! Wraps Suzuki-Abe border following via
//! [`imageproc::contours::find_contours`] and keeps only external
//! boundaries -- holes and anything nested inside a hole are dropped.
//! Among multiple disjoint opaque regions (stray opaque specks are
//! common in sprite sheets), the region enclosing the largest area
//! wins.

use image::GrayImage;
use imageproc::contours::BorderType;

use crate::types::{Point, Polygon};

/// Trace the external boundaries of all top-level opaque regions.
///
/// Input: a binary silhouette mask (white = opaque, black = transparent).
/// Output: one closed polygon per top-level region, in `imageproc`
/// traversal order. Hole borders and regions nested inside holes are
/// excluded.
///
/// `find_contours` ignores foreground pixels on the image border, which
/// would drop any region touching the canvas edge (sprites routinely
/// fill their canvas). Tracing runs on a copy padded with a 1-pixel
/// transparent frame, and the traced points are shifted back into the
/// original coordinate system, clamped to the mask bounds.
#[must_use = "returns the traced boundaries"]
pub fn outer_boundaries(mask: &GrayImage) -> Vec<Polygon> {
    let padded = pad_with_transparent_frame(mask);
    let contours: Vec<imageproc::contours::Contour<u32>> =
        imageproc::contours::find_contours(&padded);

    let max_x = f64::from(mask.width().saturating_sub(1));
    let max_y = f64::from(mask.height().saturating_sub(1));

    contours
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .filter(|c| !c.points.is_empty())
        .map(|c| {
            let points = c
                .points
                .into_iter()
                .map(|p| {
                    Point::new(
                        (f64::from(p.x) - 1.0).clamp(0.0, max_x),
                        (f64::from(p.y) - 1.0).clamp(0.0, max_y),
                    )
                })
                .collect();
            Polygon::new(points)
        })
        .collect()
}

/// Copy `mask` into an image grown by one transparent pixel on every
/// side, so border-touching regions get a traceable background frame.
fn pad_with_transparent_frame(mask: &GrayImage) -> GrayImage {
    GrayImage::from_fn(mask.width() + 2, mask.height() + 2, |x, y| {
        if x == 0 || y == 0 || x > mask.width() || y > mask.height() {
            image::Luma([0])
        } else {
            *mask.get_pixel(x - 1, y - 1)
        }
    })
}

/// Select the boundary enclosing the largest area.
///
/// Returns `None` when `boundaries` is empty (fully transparent mask).
#[must_use]
pub fn largest_boundary(boundaries: Vec<Polygon>) -> Option<Polygon> {
    boundaries
        .into_iter()
        .max_by(|a, b| a.area().total_cmp(&b.area()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Draw a filled white rectangle on a black mask.
    fn fill_rect(mask: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32) {
        for y in y0..y1 {
            for x in x0..x1 {
                mask.put_pixel(x, y, image::Luma([255]));
            }
        }
    }

    #[test]
    fn empty_mask_produces_no_boundaries() {
        let mask = GrayImage::new(10, 10); // all black
        assert!(outer_boundaries(&mask).is_empty());
    }

    #[test]
    fn rectangle_produces_one_boundary() {
        let mut mask = GrayImage::new(20, 20);
        fill_rect(&mut mask, 5, 5, 15, 15);

        let boundaries = outer_boundaries(&mask);
        assert_eq!(boundaries.len(), 1, "expected a single external boundary");
        assert!(
            boundaries[0].len() >= 4,
            "rectangle boundary should have at least 4 points"
        );
    }

    #[test]
    fn hole_border_is_excluded() {
        // A ring: 12x12 opaque square with a 4x4 transparent hole.
        let mut mask = GrayImage::new(20, 20);
        fill_rect(&mut mask, 4, 4, 16, 16);
        for y in 8..12 {
            for x in 8..12 {
                mask.put_pixel(x, y, image::Luma([0]));
            }
        }

        let boundaries = outer_boundaries(&mask);
        assert_eq!(
            boundaries.len(),
            1,
            "hole border must not appear alongside the external boundary"
        );
    }

    #[test]
    fn boundary_points_lie_on_the_region_edge() {
        let mut mask = GrayImage::new(20, 20);
        fill_rect(&mut mask, 5, 5, 15, 15);

        let boundaries = outer_boundaries(&mask);
        for p in boundaries[0].points() {
            assert!(
                (5.0..15.0).contains(&p.x) && (5.0..15.0).contains(&p.y),
                "boundary point ({}, {}) lies outside the opaque region",
                p.x,
                p.y,
            );
        }
    }

    #[test]
    fn largest_of_two_regions_wins() {
        let mut mask = GrayImage::new(40, 20);
        fill_rect(&mut mask, 2, 2, 6, 6); // small: 4x4
        fill_rect(&mut mask, 10, 2, 30, 18); // large: 20x16

        let boundaries = outer_boundaries(&mask);
        assert_eq!(boundaries.len(), 2);

        let largest = largest_boundary(boundaries).unwrap();
        // The winner must contain points from the large region only.
        assert!(
            largest.points().iter().all(|p| p.x >= 10.0),
            "largest boundary should come from the larger region"
        );
    }

    #[test]
    fn fully_opaque_mask_is_traced_to_the_canvas_edge() {
        // A region covering the whole canvas has no background frame
        // for the tracer; the internal padding must supply one.
        let mask = GrayImage::from_fn(10, 10, |_, _| image::Luma([255]));

        let boundaries = outer_boundaries(&mask);
        assert_eq!(boundaries.len(), 1, "expected one external boundary");

        let boundary = &boundaries[0];
        for corner in [
            Point::new(0.0, 0.0),
            Point::new(9.0, 0.0),
            Point::new(9.0, 9.0),
            Point::new(0.0, 9.0),
        ] {
            assert!(
                boundary.points().contains(&corner),
                "missing canvas corner {corner:?}",
            );
        }
    }

    #[test]
    fn border_touching_region_stays_inside_mask_bounds() {
        // Region flush against the top and left edges.
        let mut mask = GrayImage::new(20, 20);
        fill_rect(&mut mask, 0, 0, 12, 12);

        let boundaries = outer_boundaries(&mask);
        assert_eq!(boundaries.len(), 1);
        for p in boundaries[0].points() {
            assert!(
                (0.0..12.0).contains(&p.x) && (0.0..12.0).contains(&p.y),
                "boundary point ({}, {}) escaped the region",
                p.x,
                p.y,
            );
        }
        // The flush edges must be traced at coordinate 0, not lost.
        assert!(
            boundaries[0].points().contains(&Point::new(0.0, 0.0)),
            "flush corner (0, 0) should survive the padding round-trip"
        );
    }

    #[test]
    fn padding_does_not_shift_interior_regions() {
        // Same rectangle as `rectangle_produces_one_boundary`: points
        // must come back in original mask coordinates.
        let mut mask = GrayImage::new(20, 20);
        fill_rect(&mut mask, 5, 5, 15, 15);

        let boundaries = outer_boundaries(&mask);
        let min_x = boundaries[0]
            .points()
            .iter()
            .map(|p| p.x)
            .fold(f64::MAX, f64::min);
        let max_x = boundaries[0]
            .points()
            .iter()
            .map(|p| p.x)
            .fold(f64::MIN, f64::max);
        assert!((min_x - 5.0).abs() < f64::EPSILON);
        assert!((max_x - 14.0).abs() < f64::EPSILON);
    }

    #[test]
    fn largest_of_empty_is_none() {
        assert!(largest_boundary(vec![]).is_none());
    }
}

//! Closed-ring simplification using the Ramer-Douglas-Peucker algorithm.
//!
//! Reduces a dense traced boundary to a sparse polygon by removing
//! vertices within a perpendicular-distance tolerance of the simplified
//! edges. RDP needs fixed anchor endpoints, so a closed ring is split
//! at the vertex farthest from vertex 0, each arc is simplified
//! independently, and the halves are re-merged. Traversal order is
//! preserved.
//!
//! The tolerance is expressed relative to the ring's perimeter: big
//! sprites and small sprites simplify to comparable vertex counts.

use crate::types::{Point, Polygon};

/// Simplify a closed boundary with a perimeter-relative tolerance.
///
/// The absolute RDP tolerance is `tolerance_ratio` times the ring's
/// perimeter (closing edge included). The default ratio of 1.2% lands
/// typical sprite silhouettes around 15-30 vertices.
#[must_use = "returns the simplified polygon"]
pub fn simplify_boundary(polygon: &Polygon, tolerance_ratio: f64) -> Polygon {
    simplify_closed(polygon, tolerance_ratio * polygon.perimeter())
}

/// Simplify a closed ring with an absolute tolerance in pixels.
///
/// Vertices within `tolerance` of the line between their surviving
/// neighbors are removed. Rings with fewer than 4 vertices are
/// returned unchanged (nothing to simplify). The first vertex is
/// always retained, so the result starts where the input started.
#[must_use = "returns the simplified polygon"]
pub fn simplify_closed(polygon: &Polygon, tolerance: f64) -> Polygon {
    let points = polygon.points();
    if points.len() < 4 {
        return polygon.clone();
    }

    // Anchor the ring at vertex 0 and the vertex farthest from it,
    // guaranteeing both arcs span real geometry.
    let split = farthest_from(points, points[0]);

    // First arc: 0..=split. Second arc: split..end, closing back to 0.
    let first_arc = &points[..=split];
    let mut second_arc = points[split..].to_vec();
    second_arc.push(points[0]);

    let first = rdp_chain(first_arc, tolerance);
    let second = rdp_chain(&second_arc, tolerance);

    // Merge, dropping the second arc's shared anchors (split vertex at
    // its front, vertex 0 at its back).
    let mut merged = first;
    merged.extend_from_slice(&second[1..second.len() - 1]);

    Polygon::new(merged)
}

/// Index of the vertex farthest from `origin`.
fn farthest_from(points: &[Point], origin: Point) -> usize {
    let mut best_idx = 0;
    let mut best_dist = 0.0;
    for (i, p) in points.iter().enumerate() {
        let d = p.distance_squared(origin);
        if d > best_dist {
            best_dist = d;
            best_idx = i;
        }
    }
    best_idx
}

/// Apply RDP to an open chain, keeping both endpoints.
fn rdp_chain(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut kept = vec![false; points.len()];
    kept[0] = true;
    kept[points.len() - 1] = true;

    rdp_recurse(points, 0, points.len() - 1, tolerance, &mut kept);

    points
        .iter()
        .zip(&kept)
        .filter(|&(_, k)| *k)
        .map(|(&p, _)| p)
        .collect()
}

/// Recursive step of the Ramer-Douglas-Peucker algorithm.
///
/// Finds the point between `start` and `end` that is farthest from the
/// line segment between them. If that distance exceeds `tolerance`, the
/// point is kept and both sub-segments are processed recursively.
fn rdp_recurse(points: &[Point], start: usize, end: usize, tolerance: f64, kept: &mut [bool]) {
    if end <= start + 1 {
        return;
    }

    let mut max_dist = 0.0;
    let mut max_idx = start;

    for i in (start + 1)..end {
        let d = perpendicular_distance(points[i], points[start], points[end]);
        if d > max_dist {
            max_dist = d;
            max_idx = i;
        }
    }

    if max_dist > tolerance {
        kept[max_idx] = true;
        rdp_recurse(points, start, max_idx, tolerance, kept);
        rdp_recurse(points, max_idx, end, tolerance, kept);
    }
}

/// Perpendicular distance from point `p` to the line defined by `a` and `b`.
///
/// Uses the formula: |cross(b-a, p-a)| / |b-a|.
/// When `a` and `b` coincide, returns the distance from `p` to `a`.
fn perpendicular_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length_sq = dx.mul_add(dx, dy * dy);

    if length_sq == 0.0 {
        // a and b are the same point.
        return p.distance(a);
    }

    // |cross product| / |line length|
    let cross = dx.mul_add(a.y - p.y, -(dy * (a.x - p.x)));
    cross.abs() / length_sq.sqrt()
}

#[cfg(test)]
#[allow(clippy::cast_precision_loss)]
mod tests {
    use super::*;

    /// A dense axis-aligned square ring: every boundary pixel of a
    /// `size` x `size` square anchored at (0, 0), in traversal order.
    fn dense_square(size: usize) -> Polygon {
        let s = size - 1;
        let f = |v: usize| v as f64;
        let mut ring = Vec::new();
        for x in 0..s {
            ring.push(Point::new(f(x), 0.0));
        }
        for y in 0..s {
            ring.push(Point::new(f(s), f(y)));
        }
        for x in (1..=s).rev() {
            ring.push(Point::new(f(x), f(s)));
        }
        for y in (1..=s).rev() {
            ring.push(Point::new(0.0, f(y)));
        }
        Polygon::new(ring)
    }

    #[test]
    fn triangle_is_unchanged() {
        let poly = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 8.0),
        ]);
        let result = simplify_closed(&poly, 2.0);
        assert_eq!(result, poly);
    }

    #[test]
    fn empty_polygon_is_unchanged() {
        let poly = Polygon::new(vec![]);
        let result = simplify_boundary(&poly, 0.012);
        assert!(result.is_empty());
    }

    #[test]
    fn dense_square_collapses_to_corners() {
        let poly = dense_square(20);
        let result = simplify_closed(&poly, 1.0);
        assert_eq!(result.len(), 4, "square should reduce to its 4 corners");

        // All four corners must survive.
        for corner in [
            Point::new(0.0, 0.0),
            Point::new(19.0, 0.0),
            Point::new(19.0, 19.0),
            Point::new(0.0, 19.0),
        ] {
            assert!(
                result.points().contains(&corner),
                "missing corner {corner:?} in {:?}",
                result.points(),
            );
        }
    }

    #[test]
    fn first_vertex_survives() {
        let poly = dense_square(12);
        let result = simplify_closed(&poly, 1.0);
        assert_eq!(result.points()[0], poly.points()[0]);
    }

    #[test]
    fn traversal_order_is_preserved() {
        let poly = dense_square(12);
        let simplified = simplify_closed(&poly, 1.0);

        // Surviving vertices must appear in the same relative order as
        // in the input ring.
        let original = poly.points();
        let mut cursor = 0;
        for p in simplified.points() {
            let pos = original[cursor..].iter().position(|q| q == p);
            assert!(pos.is_some(), "vertex {p:?} out of order or missing");
            if let Some(off) = pos {
                cursor += off;
            }
        }
    }

    #[test]
    fn zero_tolerance_keeps_noncollinear_vertices() {
        let poly = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 1.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, -8.0),
        ]);
        let result = simplify_closed(&poly, 0.0);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn perimeter_relative_tolerance_scales_with_size() {
        // The same shape at 2x scale should simplify to the same
        // vertex count when the tolerance is perimeter-relative.
        let small = dense_square(16);
        let large = dense_square(32);
        let small_result = simplify_boundary(&small, 0.012);
        let large_result = simplify_boundary(&large, 0.012);
        assert_eq!(small_result.len(), large_result.len());
    }

    #[test]
    fn perpendicular_distance_on_axis() {
        // Point (1, 3) is 3 units from the line y=0 (from (0,0) to (2,0)).
        let d = perpendicular_distance(
            Point::new(1.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
        );
        assert!((d - 3.0).abs() < 1e-10);
    }

    #[test]
    fn perpendicular_distance_coincident_endpoints() {
        // When a and b are the same point, distance should be point-to-point.
        let d = perpendicular_distance(
            Point::new(3.0, 4.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
        );
        assert!((d - 5.0).abs() < 1e-10);
    }

    #[test]
    fn farthest_from_picks_opposite_corner() {
        let poly = dense_square(10);
        let idx = farthest_from(poly.points(), poly.points()[0]);
        assert_eq!(poly.points()[idx], Point::new(9.0, 9.0));
    }
}

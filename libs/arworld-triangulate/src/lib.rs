//! # ARWorld Triangulate
//!
//! Ear-clipping triangulation for the boundary polygons of detected planes.
//!
//! ## Contract
//!
//! Input is an ordered sequence of 2D points describing a simple (possibly
//! non-convex) polygon, implicitly closed. Either winding order is accepted;
//! emitted triangles keep the input orientation. Output is a flat index list,
//! three indices per triangle, exactly `3 * (n - 2)` entries for a valid
//! simple polygon.
//!
//! ## Algorithm
//!
//! Classic ear clipping. The polygon's overall orientation is decided once
//! from its signed area; a vertex is an ear candidate when its corner is
//! convex with respect to that orientation and no other remaining vertex
//! lies strictly inside the corner triangle. Vertices exactly on the
//! candidate's boundary do not block it, which keeps near-collinear points
//! from real-world plane detection from stalling the scan.
//!
//! ## Usage
//!
//! ```rust
//! use arworld_triangulate::triangulate;
//! use glam::DVec2;
//!
//! let square = [
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(1.0, 0.0),
//!     DVec2::new(1.0, 1.0),
//!     DVec2::new(0.0, 1.0),
//! ];
//! let indices = triangulate(&square)?;
//! assert_eq!(indices.len(), 6);
//! # Ok::<(), arworld_triangulate::TriangulationError>(())
//! ```

pub mod error;

pub use error::TriangulationError;

use config::constants::EPSILON;
use glam::DVec2;

/// Computes twice the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise winding, negative for clockwise.
/// The factor of two is irrelevant to every caller here, which only
/// inspects the sign.
pub fn signed_area_doubled(points: &[DVec2]) -> f64 {
    let n = points.len();
    let mut area = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        area += a.x * b.y - b.x * a.y;
    }
    area
}

/// Cross product of the edges `a->b` and `a->c`.
///
/// Positive when `c` lies to the left of `a->b`.
#[inline]
fn cross(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - a)
}

/// Returns true when `p` lies strictly inside triangle `(a, b, c)`.
///
/// `orientation` is the sign of the triangle's winding (+1.0 CCW, -1.0 CW).
/// Points on or within [`EPSILON`] of an edge are treated as outside, so
/// collinear boundary points never block an ear they sit on the edge of.
#[inline]
fn strictly_inside(p: DVec2, a: DVec2, b: DVec2, c: DVec2, orientation: f64) -> bool {
    orientation * cross(a, b, p) > EPSILON
        && orientation * cross(b, c, p) > EPSILON
        && orientation * cross(c, a, p) > EPSILON
}

/// Triangulates a simple polygon by ear clipping.
///
/// # Arguments
///
/// * `points` - Ordered boundary points, implicitly closed, either winding
///
/// # Returns
///
/// A flat triangle index list into `points`, `3 * (n - 2)` entries, with
/// every triangle wound in the input orientation.
///
/// # Errors
///
/// * [`TriangulationError::TooFewVertices`] for fewer than three points
/// * [`TriangulationError::NoEarFound`] when a full pass over the remaining
///   ring clips nothing (degenerate or self-intersecting input). The scan
///   never loops forever.
pub fn triangulate(points: &[DVec2]) -> Result<Vec<u32>, TriangulationError> {
    let n = points.len();
    if n < 3 {
        return Err(TriangulationError::TooFewVertices { count: n });
    }

    // Decide convexity against the polygon's own winding.
    let orientation = if signed_area_doubled(points) >= 0.0 {
        1.0
    } else {
        -1.0
    };

    let mut indices: Vec<u32> = Vec::with_capacity(3 * (n - 2));
    let mut ring: Vec<u32> = (0..n as u32).collect();

    while ring.len() > 3 {
        let m = ring.len();
        let mut clipped = false;

        for i in 0..m {
            let prev = ring[(i + m - 1) % m];
            let curr = ring[i];
            let next = ring[(i + 1) % m];

            let a = points[prev as usize];
            let b = points[curr as usize];
            let c = points[next as usize];

            // Reflex or collinear corners cannot be ears.
            if orientation * cross(a, b, c) <= EPSILON {
                continue;
            }

            let blocked = ring.iter().any(|&j| {
                j != prev
                    && j != curr
                    && j != next
                    && strictly_inside(points[j as usize], a, b, c, orientation)
            });
            if blocked {
                continue;
            }

            indices.extend_from_slice(&[prev, curr, next]);
            ring.remove(i);
            clipped = true;
            break;
        }

        if !clipped {
            return Err(TriangulationError::NoEarFound {
                remaining: ring.len(),
            });
        }
    }

    // Final triangle, still in ring order. A collinear remainder is not a
    // valid ear either.
    let a = points[ring[0] as usize];
    let b = points[ring[1] as usize];
    let c = points[ring[2] as usize];
    if cross(a, b, c).abs() <= EPSILON {
        return Err(TriangulationError::NoEarFound { remaining: 3 });
    }
    indices.extend_from_slice(&ring);
    Ok(indices)
}

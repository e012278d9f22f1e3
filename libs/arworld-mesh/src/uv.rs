//! # Planar UV Projection
//!
//! Derives per-vertex UV coordinates from the dominant axis of each vertex
//! normal, giving a seamless planar projection per face orientation.

use config::constants::UV_DOMINANT_AXIS_THRESHOLD;
use glam::{DVec2, DVec3};

/// Derives UVs for each vertex from its normal's dominant axis.
///
/// Top-facing vertices (`|n.y|` dominant) project from `(x, z)`,
/// side-facing (`|n.x|` dominant) from `(z, y)`, the rest from `(x, y)`.
///
/// # Panics
///
/// Debug-asserts that `vertices` and `normals` have equal length; in
/// release the shorter slice bounds the output.
pub fn planar_uvs(vertices: &[DVec3], normals: &[DVec3]) -> Vec<DVec2> {
    debug_assert_eq!(vertices.len(), normals.len());

    vertices
        .iter()
        .zip(normals.iter())
        .map(|(v, n)| {
            if n.y.abs() > UV_DOMINANT_AXIS_THRESHOLD {
                // normal points along the vertical axis
                DVec2::new(v.x, v.z)
            } else if n.x.abs() > UV_DOMINANT_AXIS_THRESHOLD {
                DVec2::new(v.z, v.y)
            } else {
                DVec2::new(v.x, v.y)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_facing_projects_xz() {
        let vertices = [DVec3::new(1.0, 5.0, 2.0)];
        let normals = [DVec3::Y];
        assert_eq!(planar_uvs(&vertices, &normals), vec![DVec2::new(1.0, 2.0)]);
    }

    #[test]
    fn test_down_facing_projects_xz() {
        let vertices = [DVec3::new(1.0, 5.0, 2.0)];
        let normals = [DVec3::NEG_Y];
        assert_eq!(planar_uvs(&vertices, &normals), vec![DVec2::new(1.0, 2.0)]);
    }

    #[test]
    fn test_side_facing_projects_zy() {
        let vertices = [DVec3::new(1.0, 5.0, 2.0)];
        let normals = [DVec3::X];
        assert_eq!(planar_uvs(&vertices, &normals), vec![DVec2::new(2.0, 5.0)]);
    }

    #[test]
    fn test_forward_facing_projects_xy() {
        let vertices = [DVec3::new(1.0, 5.0, 2.0)];
        let normals = [DVec3::Z];
        assert_eq!(planar_uvs(&vertices, &normals), vec![DVec2::new(1.0, 5.0)]);
    }

    #[test]
    fn test_tilted_normal_uses_dominant_axis() {
        // Mostly vertical normal still counts as top-facing.
        let n = DVec3::new(0.3, 0.9, 0.3).normalize();
        let vertices = [DVec3::new(4.0, 1.0, 7.0)];
        assert_eq!(planar_uvs(&vertices, &[n]), vec![DVec2::new(4.0, 7.0)]);
    }
}

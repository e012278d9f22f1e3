//! # Wall Segments
//!
//! One vertical quad per boundary edge of a non-ground platform,
//! connecting that edge down to ground height.

use glam::{DVec2, DVec3};

use crate::mesh::Mesh;

/// Mesh vertex order within a wall quad: top edge first, then the two
/// vertices projected to ground height.
const TOP_LEFT: u32 = 0;
const TOP_RIGHT: u32 = 1;
const BOTTOM_LEFT: u32 = 2;
const BOTTOM_RIGHT: u32 = 3;

/// A vertical quad hanging from one boundary edge down to ground level.
#[derive(Debug, Clone, Default)]
pub struct WallSegment {
    mesh: Mesh,
}

impl WallSegment {
    /// Builds a wall quad for the boundary edge `v1 -> v2`.
    ///
    /// `ground_y` is the elected ground platform's center height; the
    /// bottom vertices are the top vertices projected onto it. The quad's
    /// winding is flipped after assembly so it faces outward from the
    /// platform interior, and UVs span the unit square.
    pub fn build(v1: DVec3, v2: DVec3, ground_y: f64, color: [f32; 4]) -> Self {
        let mut wall = Self::default();
        wall.rebuild(v1, v2, ground_y, color);
        wall
    }

    /// Rebuilds the quad in place, reusing the mesh buffers.
    pub fn rebuild(&mut self, v1: DVec3, v2: DVec3, ground_y: f64, color: [f32; 4]) {
        self.mesh.clear();

        self.mesh.add_vertex(v1);
        self.mesh.add_vertex(v2);
        self.mesh.add_vertex(DVec3::new(v1.x, ground_y, v1.z));
        self.mesh.add_vertex(DVec3::new(v2.x, ground_y, v2.z));

        // Two triangles sharing the diagonal between top-right and
        // bottom-left.
        self.mesh.add_triangle(TOP_LEFT, TOP_RIGHT, BOTTOM_LEFT);
        self.mesh.add_triangle(BOTTOM_LEFT, TOP_RIGHT, BOTTOM_RIGHT);

        // Face outward from the platform interior.
        self.mesh.flip_normals();

        self.mesh.set_colors(vec![color; 4]);
        self.mesh.compute_normals();
        self.mesh.recompute_bounds();
        self.mesh.set_uvs(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 1.0),
        ]);
    }

    /// Re-projects the bottom vertices to a drifted ground height without a
    /// full rebuild, then refreshes normals and bounds.
    pub fn correct_ground_height(&mut self, ground_y: f64) {
        for index in [BOTTOM_LEFT, BOTTOM_RIGHT] {
            let mut v = self.mesh.vertex(index);
            v.y = ground_y;
            self.mesh.set_vertex(index, v);
        }
        self.mesh.compute_normals();
        self.mesh.recompute_bounds();
    }

    /// The quad mesh handed to the render layer.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Top edge of the quad on the platform plane.
    pub fn top_edge(&self) -> (DVec3, DVec3) {
        (self.mesh.vertex(TOP_LEFT), self.mesh.vertex(TOP_RIGHT))
    }

    /// Bottom edge of the quad at ground height.
    pub fn bottom_edge(&self) -> (DVec3, DVec3) {
        (self.mesh.vertex(BOTTOM_LEFT), self.mesh.vertex(BOTTOM_RIGHT))
    }
}

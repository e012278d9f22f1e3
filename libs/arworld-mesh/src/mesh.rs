//! # Mesh Data Structure
//!
//! Core mesh representation with vertices, triangles, and optional
//! per-vertex colors, normals, and UV coordinates.

use config::constants::DEGENERATE_AREA_EPSILON;
use glam::{DVec2, DVec3};

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally; colors stay f32 since they
/// head straight to the render layer. Buffers are reused across rebuilds:
/// [`Mesh::clear`] keeps vertex and triangle capacity.
///
/// # Example
///
/// ```rust
/// use arworld_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex colors (RGBA, f32 for GPU)
    colors: Option<Vec<[f32; 4]>>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
    /// Optional vertex UV coordinates
    uvs: Option<Vec<DVec2>>,
    /// Cached axis-aligned bounds, refreshed by `recompute_bounds`
    bounds: Option<(DVec3, DVec3)>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Clears all mesh data, keeping vertex and triangle capacity.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
        self.colors = None;
        self.normals = None;
        self.uvs = None;
        self.bounds = None;
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Overwrites the vertex at the given index.
    pub fn set_vertex(&mut self, index: u32, position: DVec3) {
        self.vertices[index as usize] = position;
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Sets vertex colors.
    pub fn set_colors(&mut self, colors: Vec<[f32; 4]>) {
        self.colors = Some(colors);
    }

    /// Sets a uniform color for all vertices.
    pub fn set_uniform_color(&mut self, color: [f32; 4]) {
        self.colors = Some(vec![color; self.vertices.len()]);
    }

    /// Returns the vertex colors.
    pub fn colors(&self) -> Option<&[[f32; 4]]> {
        self.colors.as_deref()
    }

    /// Sets vertex UV coordinates.
    pub fn set_uvs(&mut self, uvs: Vec<DVec2>) {
        self.uvs = Some(uvs);
    }

    /// Returns the vertex UV coordinates.
    pub fn uvs(&self) -> Option<&[DVec2]> {
        self.uvs.as_deref()
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes and sets area-weighted vertex normals from triangle faces.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let edge1 = v1 - v0;
            let edge2 = v2 - v0;
            let normal = edge1.cross(edge2);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        // Normalize
        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            }
        }

        self.normals = Some(normals);
    }

    /// Reverses triangle winding, negating any existing normals and
    /// mirroring any existing UVs horizontally.
    ///
    /// Used to turn wall quads outward from the platform interior.
    pub fn flip_normals(&mut self) {
        for tri in &mut self.triangles {
            tri.reverse();
        }
        if let Some(normals) = &mut self.normals {
            for n in normals {
                *n = -*n;
            }
        }
        if let Some(uvs) = &mut self.uvs {
            for uv in uvs {
                uv.x = 1.0 - uv.x;
            }
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Refreshes the cached bounds from the current vertices.
    pub fn recompute_bounds(&mut self) {
        self.bounds = Some(self.bounding_box());
    }

    /// Returns the cached bounds, if `recompute_bounds` has run since the
    /// last clear.
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        self.bounds
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for tri in &self.triangles {
            // Check indices are valid
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }

            // Check for degenerate triangles
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            // Check for zero-area triangles
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < DEGENERATE_AREA_EPSILON {
                return false;
            }
        }

        true
    }
}

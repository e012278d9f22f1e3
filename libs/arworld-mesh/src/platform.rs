//! # Platform Mesh Builder
//!
//! Per-platform state machine owning the visual representation of one
//! tracked plane: the flat boundary mesh and the skirt of wall quads down
//! to ground height.
//!
//! ## Update policy
//!
//! Rebuilding a mesh is expensive and boundaries are frequently stable
//! between ticks, so the current boundary is compared against the cached
//! previous-frame boundary first; on an exact match the tick does no
//! geometry work. Triangulation failures degrade to the previous mesh
//! rather than faulting.

use config::constants::{HEIGHT_CHANGE_THRESHOLD, PLATFORM_VERTEX_COLOR};
use glam::{DVec2, DVec3};

use arworld_triangulate::triangulate;

use crate::material::MaterialConfig;
use crate::mesh::Mesh;
use crate::registry::PlatformRegistry;
use crate::tracking::{PlaneId, PlaneObservation, TrackingState};
use crate::uv::planar_uvs;
use crate::wall::WallSegment;

/// Lifecycle state of a platform.
///
/// `Uninitialized -> Tracking -> (Subsumed | Lost)`; the terminal states
/// release the platform's wall resources and registry membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformState {
    /// Created but not yet bound to a boundary source
    Uninitialized,
    /// Live; boundary updates arrive every tick
    Tracking,
    /// Merged into another plane and discarded (terminal)
    Subsumed,
    /// Tracking lost long enough for the source to discard it (terminal)
    Lost,
}

/// What one platform did with one tick's observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The platform released its resources and must be dropped by the owner
    Destroyed,
    /// Not currently tracking; visibility toggled off, geometry untouched
    Hidden,
    /// Boundary identical to last frame; no geometry work performed
    Unchanged,
    /// Boundary changed and the mesh plus walls were rebuilt
    Rebuilt,
    /// Boundary changed but triangulation failed; previous geometry kept
    RebuildSkipped,
}

/// True when a ground-height drift is large enough to warrant rewriting
/// the bottom row of every wall quad.
pub fn height_changed_significantly(old: f64, new: f64) -> bool {
    (new - old).abs() >= HEIGHT_CHANGE_THRESHOLD
}

/// One tracked plane's visual representation.
#[derive(Debug, Clone)]
pub struct Platform {
    id: PlaneId,
    state: PlatformState,
    visible: bool,
    /// Previous-frame boundary, the change-detection cache
    cached_boundary: Vec<DVec3>,
    /// Scratch buffer for the 2D projection fed to the triangulator
    boundary_2d: Vec<DVec2>,
    center: DVec3,
    height_from_ground: f64,
    mesh: Mesh,
    walls: Vec<WallSegment>,
    material: MaterialConfig,
    world_color: [f32; 4],
    opacity: f32,
    rebuilds: u64,
}

impl Platform {
    /// Creates an uninitialized platform for a tracked plane.
    ///
    /// `world_color` and `opacity` configure the material built during
    /// [`Platform::initialize`].
    pub fn new(id: PlaneId, world_color: [f32; 4], opacity: f32) -> Self {
        Self {
            id,
            state: PlatformState::Uninitialized,
            visible: false,
            cached_boundary: Vec::new(),
            boundary_2d: Vec::new(),
            center: DVec3::ZERO,
            height_from_ground: 0.0,
            mesh: Mesh::new(),
            walls: Vec::new(),
            material: MaterialConfig::new(world_color, opacity, false),
            world_color,
            opacity,
            rebuilds: 0,
        }
    }

    /// Binds the platform to its boundary source: registers with the
    /// registry, decides the material role from the current ground
    /// election, and runs the first update.
    pub fn initialize(
        &mut self,
        observation: &PlaneObservation,
        registry: &mut PlatformRegistry,
    ) -> TickOutcome {
        registry.register(self.id, observation.center.y);
        self.center = observation.center;
        self.state = PlatformState::Tracking;

        let is_ground = self.is_ground(registry);
        self.material = MaterialConfig::new(self.world_color, self.opacity, is_ground);

        self.update(observation, registry)
    }

    /// Consumes one tick's observation.
    ///
    /// Subsumed planes release their resources and report
    /// [`TickOutcome::Destroyed`]; planes not currently tracking only
    /// toggle visibility. Otherwise the mesh is rebuilt when the boundary
    /// changed, and wall heights are corrected against ground drift.
    pub fn update(
        &mut self,
        observation: &PlaneObservation,
        registry: &mut PlatformRegistry,
    ) -> TickOutcome {
        if observation.subsumed_by.is_some() {
            self.release(registry);
            self.state = PlatformState::Subsumed;
            return TickOutcome::Destroyed;
        }

        if observation.state != TrackingState::Tracking {
            self.visible = false;
            return TickOutcome::Hidden;
        }

        self.visible = true;
        let outcome = self.rebuild_mesh_if_needed(observation, registry);
        self.update_height(registry);
        outcome
    }

    /// Destroys a platform whose plane the tracking source stopped
    /// reporting. Terminal.
    pub fn destroy(&mut self, registry: &mut PlatformRegistry) {
        self.release(registry);
        self.state = PlatformState::Lost;
    }

    /// Releases wall resources and registry membership.
    fn release(&mut self, registry: &mut PlatformRegistry) {
        self.walls.clear();
        self.mesh.clear();
        self.visible = false;
        registry.deregister(self.id);
    }

    /// Rebuilds the flat mesh and walls when the boundary changed since the
    /// previous frame.
    fn rebuild_mesh_if_needed(
        &mut self,
        observation: &PlaneObservation,
        registry: &mut PlatformRegistry,
    ) -> TickOutcome {
        if boundaries_equal(&self.cached_boundary, &observation.boundary) {
            return TickOutcome::Unchanged;
        }

        // Triangulate before committing any state: a failure must leave the
        // cached boundary, mesh, and walls exactly as they were.
        self.boundary_2d.clear();
        self.boundary_2d
            .extend(observation.boundary.iter().map(|v| DVec2::new(v.x, v.z)));

        let indices = match triangulate(&self.boundary_2d) {
            Ok(indices) => indices,
            Err(err) => {
                log::warn!(
                    "plane {:?}: skipping mesh rebuild, keeping previous geometry: {err}",
                    self.id
                );
                return TickOutcome::RebuildSkipped;
            }
        };

        self.cached_boundary.clear();
        self.cached_boundary.extend_from_slice(&observation.boundary);

        self.center = observation.center;
        registry.update_center(self.id, self.center.y);

        // Flat polygon mesh over the boundary.
        self.mesh.clear();
        for v in &observation.boundary {
            self.mesh.add_vertex(*v);
        }
        for tri in indices.chunks_exact(3) {
            self.mesh.add_triangle(tri[0], tri[1], tri[2]);
        }
        self.mesh.set_uniform_color(PLATFORM_VERTEX_COLOR);
        self.mesh.compute_normals();
        self.mesh.recompute_bounds();
        if let Some(normals) = self.mesh.normals() {
            let uvs = planar_uvs(self.mesh.vertices(), normals);
            self.mesh.set_uvs(uvs);
        }
        self.rebuilds += 1;

        // Height above ground, then the wall skirt.
        self.height_from_ground = 0.0;
        let ground = registry.ground_platform();
        let ground_y = match ground {
            Some(g) if g.id != self.id => {
                self.height_from_ground = self.center.y - g.center_y;
                g.center_y
            }
            // This platform is ground, or no ground exists yet: no walls.
            _ => {
                self.walls.clear();
                return TickOutcome::Rebuilt;
            }
        };

        self.reconcile_walls(&observation.boundary, ground_y);
        TickOutcome::Rebuilt
    }

    /// Matches the wall list to the boundary edge count, one quad per edge
    /// with the closing edge wrapping last to first.
    fn reconcile_walls(&mut self, boundary: &[DVec3], ground_y: f64) {
        let edge_count = boundary.len();
        let wall_color = [1.0, 1.0, 1.0, self.opacity];

        self.walls.truncate(edge_count);

        for i in 0..edge_count {
            let v1 = boundary[i];
            let v2 = boundary[(i + 1) % edge_count];

            if let Some(wall) = self.walls.get_mut(i) {
                wall.rebuild(v1, v2, ground_y, wall_color);
            } else {
                self.walls.push(WallSegment::build(v1, v2, ground_y, wall_color));
            }
        }
    }

    /// Recomputes the height above ground and, when the drift since the
    /// previous tick is significant, re-projects every wall's bottom row to
    /// the new ground height. Ground platforms shed their walls here.
    fn update_height(&mut self, registry: &PlatformRegistry) {
        match registry.ground_platform() {
            Some(ground) if ground.id != self.id => {
                let height = self.center.y - ground.center_y;
                let previous = self.height_from_ground;
                self.height_from_ground = height;

                if height_changed_significantly(previous, height) {
                    let ground_y = self.center.y - height;
                    for wall in &mut self.walls {
                        wall.correct_ground_height(ground_y);
                    }
                }
            }
            // Elected ground (or nothing to measure against): height is
            // zero and ground carries no walls.
            _ => {
                self.height_from_ground = 0.0;
                self.walls.clear();
            }
        }
    }

    /// True when this platform is the current ground election, or when no
    /// ground exists at all.
    pub fn is_ground(&self, registry: &PlatformRegistry) -> bool {
        registry.ground_platform().map_or(true, |g| g.id == self.id)
    }

    /// Stable platform id (the tracked plane's id).
    pub fn id(&self) -> PlaneId {
        self.id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlatformState {
        self.state
    }

    /// Render visibility of the mesh and all walls.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Plane center position from the latest committed observation.
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Signed height above the current ground platform; zero for ground
    /// itself or while no ground exists.
    pub fn height_from_ground(&self) -> f64 {
        self.height_from_ground
    }

    /// The flat polygon mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Wall quads, one per boundary edge on a non-ground platform.
    pub fn walls(&self) -> &[WallSegment] {
        &self.walls
    }

    /// Number of wall segments.
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Material handed to the render layer for this platform and its walls.
    pub fn material(&self) -> &MaterialConfig {
        &self.material
    }

    /// Number of times the flat mesh has been rebuilt.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}

/// Exact positional equality: same length, same order, bit-equal points.
fn boundaries_equal(previous: &[DVec3], current: &[DVec3]) -> bool {
    previous.len() == current.len() && previous.iter().zip(current.iter()).all(|(a, b)| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_boundary(y: f64) -> Vec<DVec3> {
        vec![
            DVec3::new(0.0, y, 0.0),
            DVec3::new(1.0, y, 0.0),
            DVec3::new(1.0, y, 1.0),
            DVec3::new(0.0, y, 1.0),
        ]
    }

    fn tracked(id: u64, y: f64) -> PlaneObservation {
        PlaneObservation::tracking(PlaneId(id), square_boundary(y), DVec3::new(0.5, y, 0.5))
    }

    #[test]
    fn test_initialize_builds_mesh() {
        let mut registry = PlatformRegistry::new();
        let mut platform = Platform::new(PlaneId(1), [0.0, 0.0, 1.0, 1.0], 0.75);

        let outcome = platform.initialize(&tracked(1, 0.0), &mut registry);
        assert_eq!(outcome, TickOutcome::Rebuilt);
        assert_eq!(platform.state(), PlatformState::Tracking);
        assert_eq!(platform.mesh().vertex_count(), 4);
        assert_eq!(platform.mesh().triangle_count(), 2);
        assert!(platform.mesh().uvs().is_some());
        assert!(platform.is_ground(&registry));
        assert_eq!(platform.wall_count(), 0);
        assert_eq!(platform.rebuild_count(), 1);
    }

    #[test]
    fn test_unchanged_boundary_skips_rebuild() {
        let mut registry = PlatformRegistry::new();
        let mut platform = Platform::new(PlaneId(1), [0.0, 0.0, 1.0, 1.0], 0.75);
        platform.initialize(&tracked(1, 0.0), &mut registry);

        let outcome = platform.update(&tracked(1, 0.0), &mut registry);
        assert_eq!(outcome, TickOutcome::Unchanged);
        assert_eq!(platform.rebuild_count(), 1);
    }

    #[test]
    fn test_changed_boundary_rebuilds() {
        let mut registry = PlatformRegistry::new();
        let mut platform = Platform::new(PlaneId(1), [0.0, 0.0, 1.0, 1.0], 0.75);
        platform.initialize(&tracked(1, 0.0), &mut registry);

        let mut obs = tracked(1, 0.0);
        obs.boundary[1] = DVec3::new(2.0, 0.0, 0.0);
        let outcome = platform.update(&obs, &mut registry);
        assert_eq!(outcome, TickOutcome::Rebuilt);
        assert_eq!(platform.rebuild_count(), 2);
    }

    #[test]
    fn test_non_ground_platform_grows_walls() {
        let mut registry = PlatformRegistry::new();
        let mut ground = Platform::new(PlaneId(1), [0.0, 0.0, 1.0, 1.0], 0.75);
        ground.initialize(&tracked(1, 0.0), &mut registry);

        let mut table = Platform::new(PlaneId(2), [0.0, 0.0, 1.0, 1.0], 0.75);
        table.initialize(&tracked(2, 1.0), &mut registry);

        assert!(!table.is_ground(&registry));
        assert_eq!(table.wall_count(), 4);
        assert_eq!(table.height_from_ground(), 1.0);

        // Walls drop to the ground platform's center height.
        let (bottom_left, _) = table.walls()[0].bottom_edge();
        assert_eq!(bottom_left.y, 0.0);

        // The ground platform itself never carries walls.
        assert_eq!(ground.wall_count(), 0);
        assert_eq!(ground.height_from_ground(), 0.0);
    }

    #[test]
    fn test_paused_plane_hides_without_rebuild() {
        let mut registry = PlatformRegistry::new();
        let mut platform = Platform::new(PlaneId(1), [0.0, 0.0, 1.0, 1.0], 0.75);
        platform.initialize(&tracked(1, 0.0), &mut registry);
        assert!(platform.is_visible());

        let mut obs = tracked(1, 0.0);
        obs.state = TrackingState::Paused;
        // Even with a changed boundary, a paused plane does no geometry work.
        obs.boundary[0] = DVec3::new(-1.0, 0.0, 0.0);

        let outcome = platform.update(&obs, &mut registry);
        assert_eq!(outcome, TickOutcome::Hidden);
        assert!(!platform.is_visible());
        assert_eq!(platform.rebuild_count(), 1);
    }

    #[test]
    fn test_subsumed_plane_is_destroyed() {
        let mut registry = PlatformRegistry::new();
        let mut platform = Platform::new(PlaneId(1), [0.0, 0.0, 1.0, 1.0], 0.75);
        platform.initialize(&tracked(1, 0.0), &mut registry);
        assert!(registry.contains(PlaneId(1)));

        let mut obs = tracked(1, 0.0);
        obs.subsumed_by = Some(PlaneId(9));

        let outcome = platform.update(&obs, &mut registry);
        assert_eq!(outcome, TickOutcome::Destroyed);
        assert_eq!(platform.state(), PlatformState::Subsumed);
        assert_eq!(platform.wall_count(), 0);
        assert!(!registry.contains(PlaneId(1)));
    }

    #[test]
    fn test_degenerate_boundary_keeps_previous_geometry() {
        let mut registry = PlatformRegistry::new();
        let mut ground = Platform::new(PlaneId(1), [0.0, 0.0, 1.0, 1.0], 0.75);
        ground.initialize(&tracked(1, 0.0), &mut registry);

        let mut table = Platform::new(PlaneId(2), [0.0, 0.0, 1.0, 1.0], 0.75);
        table.initialize(&tracked(2, 1.0), &mut registry);
        assert_eq!(table.wall_count(), 4);

        // All boundary points collinear in the (x, z) projection: no ear.
        let degenerate = PlaneObservation::tracking(
            PlaneId(2),
            vec![
                DVec3::new(0.0, 1.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::new(2.0, 1.0, 0.0),
                DVec3::new(3.0, 1.0, 0.0),
            ],
            DVec3::new(1.5, 1.0, 0.0),
        );

        let outcome = table.update(&degenerate, &mut registry);
        assert_eq!(outcome, TickOutcome::RebuildSkipped);
        assert_eq!(table.rebuild_count(), 1);
        assert_eq!(table.mesh().vertex_count(), 4);
        assert_eq!(table.wall_count(), 4);

        // The old boundary still counts as current, so re-sending it is a
        // no-op rather than a rebuild.
        assert_eq!(
            table.update(&tracked(2, 1.0), &mut registry),
            TickOutcome::Unchanged
        );
    }

    #[test]
    fn test_ground_drift_corrects_wall_heights() {
        let mut registry = PlatformRegistry::new();
        let mut ground = Platform::new(PlaneId(1), [0.0, 0.0, 1.0, 1.0], 0.75);
        ground.initialize(&tracked(1, 0.0), &mut registry);

        let mut table = Platform::new(PlaneId(2), [0.0, 0.0, 1.0, 1.0], 0.75);
        table.initialize(&tracked(2, 1.0), &mut registry);
        let (bottom, _) = table.walls()[0].bottom_edge();
        assert_eq!(bottom.y, 0.0);

        // Ground sinks by more than the threshold; the table's boundary is
        // unchanged, so only the wall bottom rows move.
        registry.update_center(PlaneId(1), -0.2);
        let outcome = table.update(&tracked(2, 1.0), &mut registry);
        assert_eq!(outcome, TickOutcome::Unchanged);
        assert_eq!(table.height_from_ground(), 1.2);
        let (bottom, _) = table.walls()[0].bottom_edge();
        assert_eq!(bottom.y, -0.2);
    }

    #[test]
    fn test_small_ground_drift_ignored() {
        let mut registry = PlatformRegistry::new();
        let mut ground = Platform::new(PlaneId(1), [0.0, 0.0, 1.0, 1.0], 0.75);
        ground.initialize(&tracked(1, 0.0), &mut registry);

        let mut table = Platform::new(PlaneId(2), [0.0, 0.0, 1.0, 1.0], 0.75);
        table.initialize(&tracked(2, 1.0), &mut registry);

        registry.update_center(PlaneId(1), -0.02);
        table.update(&tracked(2, 1.0), &mut registry);

        // Height tracks the drift, wall vertices do not.
        assert_eq!(table.height_from_ground(), 1.02);
        let (bottom, _) = table.walls()[0].bottom_edge();
        assert_eq!(bottom.y, 0.0);
    }

    #[test]
    fn test_height_changed_significantly_threshold() {
        assert!(!height_changed_significantly(1.0, 1.04));
        assert!(height_changed_significantly(1.0, 1.05));
        assert!(height_changed_significantly(1.0, 0.9));
    }

    #[test]
    fn test_boundaries_equal_exact() {
        let a = square_boundary(0.0);
        let mut b = square_boundary(0.0);
        assert!(boundaries_equal(&a, &b));

        b[2].x += 1e-9;
        assert!(!boundaries_equal(&a, &b));
        assert!(!boundaries_equal(&a, &b[..3]));
    }
}

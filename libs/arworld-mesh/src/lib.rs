//! # ARWorld Mesh
//!
//! Incremental platform and wall mesh synthesis for tracked AR planes.
//! Consumes per-tick boundary observations from an external plane tracking
//! source and maintains, per plane, a flat colored polygon mesh plus a
//! skirt of vertical wall quads down to the elected ground height.
//!
//! ## Architecture
//!
//! ```text
//! PlaneObservation (tracking source)
//!       ↓
//! World::tick ── PlatformRegistry (ground election)
//!       ↓
//! Platform (change detection, rebuild, wall reconcile)
//!       ↓
//! arworld-triangulate (ear clipping)
//!       ↓
//! Mesh output (vertices, indices, colors, normals, UVs)
//! ```
//!
//! ## Update policy
//!
//! A platform rebuilds its geometry only when the boundary polygon changed
//! since the previous tick; ground-height drift corrects wall vertices in
//! place without a rebuild; triangulation failures keep the last good
//! geometry.

pub mod material;
pub mod mesh;
pub mod platform;
pub mod registry;
pub mod tracking;
pub mod uv;
pub mod wall;
pub mod world;

pub use material::MaterialConfig;
pub use mesh::Mesh;
pub use platform::{height_changed_significantly, Platform, PlatformState, TickOutcome};
pub use registry::{GroundPlatform, PlatformRegistry};
pub use tracking::{PlaneId, PlaneObservation, TrackingState};
pub use wall::WallSegment;
pub use world::{World, WorldSettings};

//! # Tracking Input Types
//!
//! Plain-data observations supplied once per tick by an external plane
//! tracking source. The mesh layer never talks to the tracker directly;
//! it only consumes these snapshots.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Stable identifier of a tracked plane. Doubles as the platform id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlaneId(pub u64);

/// Tracking state reported by the plane tracking source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingState {
    /// The plane is actively tracked; boundary and center are current.
    Tracking,
    /// Tracking is temporarily interrupted; last geometry is still valid.
    Paused,
    /// Tracking stopped; the plane may be discarded soon.
    Stopped,
}

/// One tracked plane's per-tick snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneObservation {
    /// Stable plane identifier
    pub id: PlaneId,
    /// Ordered boundary polygon in world space; y varies only slightly
    /// around the plane height
    pub boundary: Vec<DVec3>,
    /// Center pose position of the plane
    pub center: DVec3,
    /// Current tracking state
    pub state: TrackingState,
    /// Set when the tracker merged this plane into another; the owner
    /// should discard it
    pub subsumed_by: Option<PlaneId>,
}

impl PlaneObservation {
    /// Convenience constructor for an actively tracked plane.
    pub fn tracking(id: PlaneId, boundary: Vec<DVec3>, center: DVec3) -> Self {
        Self {
            id,
            boundary,
            center,
            state: TrackingState::Tracking,
            subsumed_by: None,
        }
    }
}

//! # Platform Registry
//!
//! Membership list of all live platforms. The registry owns no geometry;
//! it answers "which platform is ground" on demand from the center heights
//! platforms report to it.

use crate::tracking::PlaneId;

/// The currently elected ground platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlatform {
    /// Id of the ground platform
    pub id: PlaneId,
    /// Its center height, the reference for every other platform
    pub center_y: f64,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: PlaneId,
    center_y: f64,
}

/// Registry of live platforms, ordered by registration.
///
/// Ground election is recomputed on every query rather than cached: a
/// strict-minimum scan in registration order, so the earliest registered
/// platform wins height ties. Mutation happens only through platform
/// creation, destruction, and center updates, all within the same
/// single-threaded tick.
#[derive(Debug, Clone, Default)]
pub struct PlatformRegistry {
    entries: Vec<Entry>,
}

impl PlatformRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a platform with its current center height.
    /// Re-registering an id updates its height instead.
    pub fn register(&mut self, id: PlaneId, center_y: f64) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.center_y = center_y;
        } else {
            self.entries.push(Entry { id, center_y });
        }
    }

    /// Removes a platform from the registry. Unknown ids are ignored.
    pub fn deregister(&mut self, id: PlaneId) {
        self.entries.retain(|e| e.id != id);
    }

    /// Updates the stored center height of a registered platform.
    /// Unknown ids are ignored.
    pub fn update_center(&mut self, id: PlaneId, center_y: f64) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.center_y = center_y;
        }
    }

    /// Returns true when the platform is registered.
    pub fn contains(&self, id: PlaneId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Returns the number of live platforms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no platform is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Elects the ground platform: the live platform with minimum center
    /// height, or `None` while the registry is empty.
    pub fn ground_platform(&self) -> Option<GroundPlatform> {
        let mut ground: Option<GroundPlatform> = None;
        for entry in &self.entries {
            let lower = match ground {
                None => true,
                Some(g) => entry.center_y < g.center_y,
            };
            if lower {
                ground = Some(GroundPlatform {
                    id: entry.id,
                    center_y: entry.center_y,
                });
            }
        }
        ground
    }
}

//! # World Driver
//!
//! Tick loop over all tracked planes: creates platforms for newly tracked
//! planes, feeds each live platform its observation, and drops platforms
//! the tracking source discarded.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use config::constants::{DEFAULT_WORLD_COLOR, DEFAULT_WORLD_OPACITY};
use serde::{Deserialize, Serialize};

use crate::platform::{Platform, PlatformState, TickOutcome};
use crate::registry::PlatformRegistry;
use crate::tracking::{PlaneId, PlaneObservation};

/// Visual configuration shared by every platform in the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldSettings {
    /// Base color of the generated world (RGBA)
    pub color: [f32; 4],
    /// Opacity of platform and wall surfaces
    pub opacity: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            color: DEFAULT_WORLD_COLOR,
            opacity: DEFAULT_WORLD_OPACITY,
        }
    }
}

/// Owns the registry and every live platform; driven once per render frame
/// by the host loop.
#[derive(Debug, Default)]
pub struct World {
    settings: WorldSettings,
    registry: PlatformRegistry,
    platforms: BTreeMap<PlaneId, Platform>,
}

impl World {
    /// Creates an empty world with the given visual settings.
    pub fn new(settings: WorldSettings) -> Self {
        Self {
            settings,
            registry: PlatformRegistry::new(),
            platforms: BTreeMap::new(),
        }
    }

    /// Consumes one tick of plane observations.
    ///
    /// Membership settles first: platforms are created and registered for
    /// new plane ids, and platforms absent from this tick's observations
    /// are dropped and deregistered. Only then does each platform consume
    /// its observation, so every ground-height query within the tick sees
    /// the full set of registrations and removals.
    pub fn tick(&mut self, observations: &[PlaneObservation]) {
        // Phase 1: settle registry membership.
        for observation in observations {
            if observation.subsumed_by.is_none() && !self.platforms.contains_key(&observation.id)
            {
                let platform = Platform::new(
                    observation.id,
                    self.settings.color,
                    self.settings.opacity,
                );
                self.registry.register(observation.id, observation.center.y);
                self.platforms.insert(observation.id, platform);
            }
        }

        // Planes the source stopped reporting have been discarded upstream.
        let seen: BTreeSet<PlaneId> = observations.iter().map(|o| o.id).collect();
        let registry = &mut self.registry;
        self.platforms.retain(|id, platform| {
            let keep = seen.contains(id);
            if !keep {
                platform.destroy(registry);
            }
            keep
        });

        // Phase 2: every platform consumes its observation.
        for observation in observations {
            let Some(platform) = self.platforms.get_mut(&observation.id) else {
                continue;
            };
            let outcome = if platform.state() == PlatformState::Uninitialized {
                platform.initialize(observation, &mut self.registry)
            } else {
                platform.update(observation, &mut self.registry)
            };
            if outcome == TickOutcome::Destroyed {
                self.platforms.remove(&observation.id);
            }
        }
    }

    /// The per-platform height and wall-count readout consumed by the
    /// UI/debug layer.
    pub fn summary(&self) -> String {
        let mut text = String::new();
        for platform in self.platforms.values() {
            let _ = writeln!(
                text,
                "Platform height: {} Walls: {}",
                platform.height_from_ground(),
                platform.wall_count()
            );
        }
        text
    }

    /// Shared registry of live platforms.
    pub fn registry(&self) -> &PlatformRegistry {
        &self.registry
    }

    /// Looks up a live platform by plane id.
    pub fn platform(&self, id: PlaneId) -> Option<&Platform> {
        self.platforms.get(&id)
    }

    /// Number of live platforms.
    pub fn platform_count(&self) -> usize {
        self.platforms.len()
    }

    /// Iterates over live platforms in id order.
    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.values()
    }
}

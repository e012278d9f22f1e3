//! # Material Configuration
//!
//! Enumerated render configuration decided once at platform build time and
//! handed to the render collaborator, replacing mutation of string-keyed
//! shader properties.

use serde::{Deserialize, Serialize};

/// Render configuration for one platform and its walls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialConfig {
    /// Base surface color (RGBA); alpha carries the configured opacity
    pub base_color: [f32; 4],
    /// Emissive glow color (RGBA, fully opaque)
    pub glow_color: [f32; 4],
    /// World opacity applied to base color and wall vertex tints
    pub opacity: f32,
    /// True when the platform was elected ground at build time; selects
    /// the ground material in the render layer
    pub is_ground: bool,
}

impl MaterialConfig {
    /// Builds the config from the world color and opacity.
    pub fn new(color: [f32; 4], opacity: f32, is_ground: bool) -> Self {
        let mut base_color = color;
        base_color[3] = opacity;
        Self {
            base_color,
            glow_color: color,
            opacity,
            is_ground,
        }
    }
}

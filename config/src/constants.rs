//! # Configuration Constants
//!
//! Centralized constants for the AR world pipeline. All geometry tolerances,
//! visual defaults, and update thresholds are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Update Thresholds**: When incremental geometry corrections fire
//! - **Visual Defaults**: World color, opacity, vertex tinting
//! - **Projection**: UV planar-projection parameters

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, and by the triangulator to classify near-zero
/// cross products as collinear.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for degenerate-triangle detection during mesh validation.
///
/// Triangles whose area falls below this value are considered degenerate.
/// Slightly larger than [`EPSILON`] to absorb numerical noise in boundary
/// polygons coming from real-world plane detection.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-8;

// =============================================================================
// UPDATE THRESHOLDS
// =============================================================================

/// Minimum ground-height drift that triggers a wall vertex correction.
///
/// A platform's height above ground is recomputed every tick; when the
/// absolute change since the previous tick reaches this threshold, the
/// bottom row of every wall quad is re-projected to the new ground height.
/// Smaller drifts are ignored to avoid churning wall geometry on sensor
/// noise.
///
/// # Example
///
/// ```rust
/// use config::constants::HEIGHT_CHANGE_THRESHOLD;
///
/// let old = 1.20_f64;
/// let new = 1.22_f64;
/// assert!((new - old).abs() < HEIGHT_CHANGE_THRESHOLD); // no correction
/// ```
pub const HEIGHT_CHANGE_THRESHOLD: f64 = 0.05;

// =============================================================================
// VISUAL DEFAULTS
// =============================================================================

/// Default opacity for the generated world (platforms and walls).
pub const DEFAULT_WORLD_OPACITY: f32 = 0.75;

/// Default base color of the generated world (RGBA, opaque blue).
pub const DEFAULT_WORLD_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Per-vertex tint applied to platform meshes (translucent white).
///
/// The material carries the world color; vertices are tinted uniformly so
/// the surface reads as a single flat sheet.
pub const PLATFORM_VERTEX_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.75];

// =============================================================================
// PROJECTION CONSTANTS
// =============================================================================

/// Dominant-axis threshold for planar UV projection.
///
/// A vertex normal component with absolute value above this threshold
/// selects the projection plane: `|n.y|` dominant maps UVs from `(x, z)`,
/// `|n.x|` dominant from `(z, y)`, otherwise `(x, y)`.
pub const UV_DOMINANT_AXIS_THRESHOLD: f64 = 0.5;

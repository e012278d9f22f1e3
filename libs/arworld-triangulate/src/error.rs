//! # Triangulation Errors
//!
//! Error types for polygon triangulation.

use thiserror::Error;

/// Errors that can occur during polygon triangulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// Fewer than three input points
    #[error("polygon needs at least 3 points, got {count}")]
    TooFewVertices {
        /// Number of points supplied
        count: usize,
    },

    /// A full pass over the remaining ring found no clippable ear.
    /// The input is numerically degenerate or self-intersecting.
    #[error("no ear found with {remaining} vertices remaining")]
    NoEarFound {
        /// Ring size when the scan stalled
        remaining: usize,
    },
}

//! Error types for rope, cloth and registry operations.

use thiserror::Error;

/// Errors that can occur while building simulations or using rope handles.
///
/// Degenerate geometry (zero-length springs or segments) and an unconverged
/// catenary solve are not errors; they degrade to no-ops and approximate
/// results respectively.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhysicsError {
    /// A rope needs at least two segments.
    #[error("rope needs at least 2 segments, got {0}")]
    InsufficientSegments(usize),
    /// Cloth grid dimensions must be at least 2x2.
    #[error("cloth grid must be at least 2x2, got {width}x{height}")]
    InvalidGridDimensions { width: usize, height: usize },
    /// Every registry slot is occupied.
    #[error("rope pool exhausted: all {capacity} slots are in use")]
    PoolExhausted { capacity: usize },
    /// The handle's slot was released (and possibly reused) since it was issued.
    #[error("rope handle {index} (generation {generation}) no longer refers to a live rope")]
    StaleHandle { index: usize, generation: u32 },
    /// The handle points past the end of the registry it was used with.
    #[error("rope handle index {index} out of bounds (capacity: {capacity})")]
    HandleOutOfBounds { index: usize, capacity: usize },
}

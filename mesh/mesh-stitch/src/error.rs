//! Error types for contour stitching.

use thiserror::Error;

/// Result type for stitching operations.
pub type StitchResult<T> = std::result::Result<T, StitchError>;

/// Errors that can occur while stitching two contours.
///
/// All failures are reported before any mesh is built; a failed stitch
/// never returns a partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StitchError {
    /// A contour has too few points to form a bridge.
    #[error("insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        actual: usize,
    },

    /// No mutually-nearest anchor pair exists between the two contours.
    #[error("no mutual nearest-neighbor pair found between contours")]
    NoCorrespondence,

    /// A mesh did not expose the expected number of boundary loops.
    #[error("expected {expected} boundary loops, found {found}")]
    UnexpectedLoopCount {
        /// Number of loops the operation requires.
        expected: usize,
        /// Number of loops actually detected.
        found: usize,
    },
}

impl StitchError {
    /// Create an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, actual: usize) -> Self {
        Self::InsufficientPoints { required, actual }
    }

    /// Create an unexpected loop count error.
    #[must_use]
    pub fn unexpected_loop_count(expected: usize, found: usize) -> Self {
        Self::UnexpectedLoopCount { expected, found }
    }

    /// Check if this is an insufficient points error.
    #[must_use]
    pub fn is_insufficient_points(&self) -> bool {
        matches!(self, Self::InsufficientPoints { .. })
    }

    /// Check if this is a missing correspondence error.
    #[must_use]
    pub fn is_no_correspondence(&self) -> bool {
        matches!(self, Self::NoCorrespondence)
    }

    /// Check if this is an unexpected loop count error.
    #[must_use]
    pub fn is_unexpected_loop_count(&self) -> bool {
        matches!(self, Self::UnexpectedLoopCount { .. })
    }
}

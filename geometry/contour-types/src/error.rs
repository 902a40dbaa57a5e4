//! Error types for contour operations.

use thiserror::Error;

/// Errors that can occur when constructing contour geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContourError {
    /// Radius must be positive and finite.
    #[error("invalid radius: {0} (must be positive)")]
    InvalidRadius(f64),

    /// Degenerate geometry (e.g., zero-length normal).
    #[error("degenerate geometry: {reason}")]
    Degenerate {
        /// Description of the degeneracy.
        reason: String,
    },
}

impl ContourError {
    /// Create a degenerate geometry error.
    #[must_use]
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::Degenerate {
            reason: reason.into(),
        }
    }

    /// Check if this is an invalid radius error.
    #[must_use]
    pub fn is_invalid_radius(&self) -> bool {
        matches!(self, Self::InvalidRadius(_))
    }

    /// Check if this is a degenerate geometry error.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContourError::InvalidRadius(-2.0);
        assert!(err.to_string().contains("-2"));
        assert!(err.to_string().contains("positive"));

        let err = ContourError::degenerate("zero-length normal");
        assert!(err.to_string().contains("zero-length normal"));
    }

    #[test]
    fn test_error_predicates() {
        let err = ContourError::InvalidRadius(0.0);
        assert!(err.is_invalid_radius());
        assert!(!err.is_degenerate());

        let err = ContourError::degenerate("collapsed");
        assert!(err.is_degenerate());
        assert!(!err.is_invalid_radius());
    }
}

//! Error types for marga.

use thiserror::Error;

use crate::core::Point2D;

/// Planning error type.
///
/// Every pipeline stage either returns a valid immutable result or fails
/// with one of these variants. All stages are pure functions of their
/// inputs, so nothing is retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Field size, obstacle geometry, or configuration is invalid.
    #[error("invalid field: {0}")]
    InvalidField(String),

    /// Start or goal point lies inside an obstacle or outside the field.
    #[error("point {point:?} is not in free space")]
    UnreachablePoint {
        /// The offending endpoint.
        point: Point2D,
    },

    /// Free space between start and goal is disconnected.
    ///
    /// This is an expected negative outcome for fully enclosed endpoints,
    /// not a bug.
    #[error("no traversable route between start and goal")]
    NoPath,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlanError>;

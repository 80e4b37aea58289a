//! Configuration errors.
//!
//! The layout engine itself never fails: missing results are `None`. These
//! errors are raised only by the validating constructors, so that malformed
//! thresholds and size limits are rejected before they reach the engine.

use thiserror::Error;

/// Errors raised while building engine configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Snap distance must be finite and non-negative, got {0}")]
    InvalidSnapDistance(f64),
    #[error("Snap margin must be finite and non-negative, got {0}")]
    InvalidSnapMargin(f64),
    #[error("Minimum {axis} must be finite and non-negative, got {value}")]
    InvalidMinimum { axis: &'static str, value: f64 },
    #[error("Minimum {axis} {min} exceeds maximum {max}")]
    InvertedLimits {
        axis: &'static str,
        min: f64,
        max: f64,
    },
    #[error("Border thickness must be finite and non-negative, got {0}")]
    InvalidBorderThickness(f64),
    #[error("Deceleration must be finite and positive, got {0}")]
    InvalidDeceleration(f64),
    #[error("Damping must be finite and non-negative, got {0}")]
    InvalidDamping(f64),
    #[error("Staleness window must be longer than zero")]
    EmptyStalenessWindow,
}

/// Result type for configuration construction.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Check that a threshold is a usable non-negative number.
pub(crate) fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

//! Error type shared by every validating constructor and append.

use crate::point::Point;

/// Errors raised when an input breaks a contract.
///
/// Operations are atomic: when one of these is returned, no existing value
/// has been changed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("heading is undefined between coincident points at {point}")]
    UndefinedHeading { point: Point },
}

impl GeoError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GeoError::InvalidInput {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;

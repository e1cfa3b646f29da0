//! Input validation errors.
//!
//! Every malformed input this workspace can see (bad coordinate text,
//! odd or empty coordinate lists, unusable frame dimensions) is reported
//! through [`InvalidInputError`]. There is no other domain error.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for model construction and parsing.
pub type ModelResult<T> = Result<T, InvalidInputError>;

/// A reference frame axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

/// Malformed coordinate data or reference frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("Coordinate list is empty")]
    EmptyCoordinates,

    #[error("Coordinate list has {0} values; expected alternating x,y pairs")]
    OddCoordinateCount(usize),

    #[error("Invalid coordinate token '{token}' at position {position}")]
    InvalidToken { position: usize, token: String },

    #[error("Reference frame {axis} must be positive, got {value}")]
    NonPositiveDimension { axis: Axis, value: i64 },

    #[error("Reference frame {axis} is too large: {value}")]
    DimensionTooLarge { axis: Axis, value: i64 },
}

impl InvalidInputError {
    pub fn invalid_token(position: usize, token: impl Into<String>) -> Self {
        Self::InvalidToken {
            position,
            token: token.into(),
        }
    }
}

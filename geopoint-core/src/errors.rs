//! Error types for geopoint construction and computation.
//!
//! | Variant | Raised by | Geopoint failure? |
//! |---------|-----------|-------------------|
//! | [`MalformedCoordinate`](GeopointError::MalformedCoordinate) | construction, derivation, projection | yes |
//! | [`Computation`](GeopointError::Computation) | distance, tolerant equality | yes |
//! | [`Parse`](GeopointError::Parse) | text parser | no |
//! | [`UnknownFormat`](GeopointError::UnknownFormat) | format key lookup | no |
//!
//! A malformed coordinate is a special case of a geopoint failure: code that
//! only cares whether the geodesic layer failed checks
//! [`GeopointError::is_geopoint_failure`] and handles both variants together.
//! Parse and format errors belong to the text collaborators and are passed
//! through unchanged.

use thiserror::Error;

use crate::validate::Axis;

/// Coarse classification of a [`GeopointError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedCoordinate,
    Computation,
    Parse,
    UnknownFormat,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeopointError {
    /// A latitude or longitude outside its valid range.
    #[error("malformed {axis}: {value}")]
    MalformedCoordinate { axis: Axis, value: f64 },

    /// A derived numeric result is NaN or otherwise unusable.
    #[error("Error in {operation}: {message}")]
    Computation { operation: String, message: String },

    /// Text could not be interpreted as a coordinate.
    #[error("cannot parse {axis} from '{input}': {message}")]
    Parse {
        axis: Axis,
        input: String,
        message: String,
    },

    #[error("unknown coordinate format: {key}")]
    UnknownFormat { key: String },
}

pub type GeopointResult<T> = Result<T, GeopointError>;

impl GeopointError {
    pub fn malformed(axis: Axis, value: f64) -> Self {
        Self::MalformedCoordinate { axis, value }
    }

    pub fn computation(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Computation {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn parse(axis: Axis, input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            axis,
            input: input.into(),
            message: message.into(),
        }
    }

    pub fn unknown_format(key: impl Into<String>) -> Self {
        Self::UnknownFormat { key: key.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedCoordinate { .. } => ErrorKind::MalformedCoordinate,
            Self::Computation { .. } => ErrorKind::Computation,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::UnknownFormat { .. } => ErrorKind::UnknownFormat,
        }
    }

    /// Returns `true` for failures of the geodesic layer itself.
    ///
    /// Malformed coordinates count as geopoint failures; parser and formatter
    /// errors do not.
    pub fn is_geopoint_failure(&self) -> bool {
        matches!(
            self,
            Self::MalformedCoordinate { .. } | Self::Computation { .. }
        )
    }
}

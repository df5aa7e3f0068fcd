use core::fmt;

use log::debug;

use crate::constants::{MAX_LATITUDE_DEG, MAX_LONGITUDE_DEG};
use crate::errors::{GeopointError, GeopointResult};

/// The two coordinate axes of a [`Geopoint`](crate::Geopoint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Inclusive bound of the axis in degrees.
    pub fn limit(self) -> f64 {
        match self {
            Axis::Latitude => MAX_LATITUDE_DEG,
            Axis::Longitude => MAX_LONGITUDE_DEG,
        }
    }

    /// Checks `degrees` against `[-limit, limit]`.
    ///
    /// NaN fails the range test and is reported as malformed, like any other
    /// out-of-range value. Nothing is clamped or wrapped.
    pub fn validate(self, degrees: f64) -> GeopointResult<f64> {
        let limit = self.limit();
        if (-limit..=limit).contains(&degrees) {
            return Ok(degrees);
        }

        debug!("rejected {} {} outside [-{}, {}]", self, degrees, limit, limit);
        Err(GeopointError::malformed(self, degrees))
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

pub fn validate_latitude(degrees: f64) -> GeopointResult<f64> {
    Axis::Latitude.validate(degrees)
}

pub fn validate_longitude(degrees: f64) -> GeopointResult<f64> {
    Axis::Longitude.validate(degrees)
}

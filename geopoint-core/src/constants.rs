//! Fixed constants of the spherical Earth model.
//!
//! The radius is the mean Earth radius and is not configurable. All distances
//! produced by this crate are in kilometers; callers that need miles multiply
//! by [`KM_IN_MILES`].

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Miles per kilometer.
pub const KM_IN_MILES: f64 = 1.0 / 1.609344;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Latitude bound in degrees (inclusive, both signs).
pub const MAX_LATITUDE_DEG: f64 = 90.0;

/// Longitude bound in degrees (inclusive, both signs).
pub const MAX_LONGITUDE_DEG: f64 = 180.0;

pub const MICRODEGREES_PER_DEGREE: f64 = 1e6;

pub const DEGREES_PER_MICRODEGREE: f64 = 1e-6;

/// Resolution of the grid used by bearing to decide whether two coordinates
/// are "the same" (1/100 arcsecond).
pub const BEARING_GRID_PER_DEGREE: f64 = 360_000.0;

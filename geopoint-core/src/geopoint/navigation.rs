//! Great-circle navigation on a spherical Earth.
//!
//! All formulas use the fixed mean radius [`EARTH_RADIUS_KM`]; there is no
//! ellipsoidal correction. Distances are kilometers, bearings are degrees
//! clockwise from north.
//!
//! # Degenerate inputs
//!
//! The distance kernel is the spherical law of cosines without clamping.
//! Failures are part of the contract:
//!
//! - Identical points are an error rather than `0.0`. They are rejected
//!   before the kernel runs, since `sin² + cos²` often rounds one ulp below 1
//!   and would otherwise yield a distance of about 1e-4 km.
//! - A distance that is NaN or not strictly positive is an error.
//! - Rounding that pushes the cosine slightly past ±1 yields NaN inside `acos`
//!   and is reported through the same error.
//!
//! [`Geopoint::project`] does not wrap the resulting longitude. Crossing the
//! antimeridian produces a longitude outside [-180, 180] and the projection
//! fails with `MalformedCoordinate`.
//!
//! # Example
//!
//! ```
//! use geopoint_core::Geopoint;
//!
//! let origin = Geopoint::from_degrees(0.0, 0.0)?;
//! let east = Geopoint::from_degrees(0.0, 1.0)?;
//!
//! let d = origin.distance_to(&east)?;
//! assert!((d - 111.19).abs() < 0.01);
//! assert_eq!(origin.bearing_to(&east), 90.0);
//! # Ok::<(), geopoint_core::GeopointError>(())
//! ```

use log::{debug, trace};

use crate::constants::{BEARING_GRID_PER_DEGREE, DEG_TO_RAD, EARTH_RADIUS_KM, RAD_TO_DEG};
use crate::errors::{GeopointError, GeopointResult};

use super::Geopoint;

/// Java-style rounding (half up toward positive infinity).
#[inline]
fn round_half_up(x: f64) -> i64 {
    libm::floor(x + 0.5) as i64
}

/// Index of `degrees` on the bearing comparison grid.
#[inline]
fn grid_index(degrees: f64) -> i64 {
    round_half_up(0.5 + degrees * BEARING_GRID_PER_DEGREE)
}

impl Geopoint {
    /// Great-circle distance to `other` in kilometers.
    ///
    /// # Errors
    ///
    /// [`Computation`](GeopointError::Computation) if the distance is NaN or not
    /// strictly positive, and always when `self == other`.
    pub fn distance_to(&self, other: &Geopoint) -> GeopointResult<f64> {
        if self == other {
            debug!("distance from {:?} to itself", self);
            return Err(GeopointError::computation(
                "distance calculation",
                "points are coincident",
            ));
        }

        let lat1 = DEG_TO_RAD * self.latitude();
        let lon1 = DEG_TO_RAD * self.longitude();
        let lat2 = DEG_TO_RAD * other.latitude();
        let lon2 = DEG_TO_RAD * other.longitude();

        let (sin_lat1, cos_lat1) = libm::sincos(lat1);
        let (sin_lat2, cos_lat2) = libm::sincos(lat2);

        let d = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * libm::cos(lon1 - lon2);
        let distance = EARTH_RADIUS_KM * libm::acos(d);

        if !distance.is_nan() && distance > 0.0 {
            return Ok(distance);
        }

        debug!(
            "distance from {:?} to {:?} is {} (cosine {})",
            self, other, distance, d
        );
        Err(GeopointError::computation(
            "distance calculation",
            format!("distance {} is not a positive number", distance),
        ))
    }

    /// Initial bearing to `other` in degrees, 0 = north, 90 = east.
    ///
    /// Coordinates are first compared on a 1/360000 degree grid. Coincident
    /// points give 0, points on the same parallel give 90 or 270, points on
    /// the same meridian give 0 or 180. Everything else goes through the
    /// spherical law of sines with a quadrant correction:
    ///
    /// | Latitude | Longitude | Bearing |
    /// |----------|-----------|---------|
    /// | increases | increases | `A` |
    /// | decreases | decreases | `180 - A` |
    /// | decreases | increases | `180 - A` |
    /// | increases | decreases | `A + 360` |
    ///
    /// where `A = asin(cos(lat2)·sin(Δlon) / sin(c))` in degrees and `c` is
    /// the central angle.
    ///
    /// ```
    /// use geopoint_core::Geopoint;
    ///
    /// let origin = Geopoint::default();
    /// let north_west = Geopoint::from_degrees(1.0, -1.0)?;
    /// assert!((origin.bearing_to(&north_west) - 315.0).abs() < 0.01);
    /// # Ok::<(), geopoint_core::GeopointError>(())
    /// ```
    pub fn bearing_to(&self, other: &Geopoint) -> f64 {
        let ilat1 = grid_index(self.latitude());
        let ilon1 = grid_index(self.longitude());
        let ilat2 = grid_index(other.latitude());
        let ilon2 = grid_index(other.longitude());

        if ilat1 == ilat2 && ilon1 == ilon2 {
            return 0.0;
        }
        if ilat1 == ilat2 {
            return if ilon1 > ilon2 { 270.0 } else { 90.0 };
        }
        if ilon1 == ilon2 {
            return if ilat1 > ilat2 { 180.0 } else { 0.0 };
        }

        let lat1 = DEG_TO_RAD * self.latitude();
        let lon1 = DEG_TO_RAD * self.longitude();
        let lat2 = DEG_TO_RAD * other.latitude();
        let lon2 = DEG_TO_RAD * other.longitude();

        let (sin_lat1, cos_lat1) = libm::sincos(lat1);
        let (sin_lat2, cos_lat2) = libm::sincos(lat2);
        let delta_lon = lon2 - lon1;

        let c = libm::acos(sin_lat2 * sin_lat1 + cos_lat2 * cos_lat1 * libm::cos(delta_lon));
        let a = libm::asin(cos_lat2 * libm::sin(delta_lon) / libm::sin(c));
        let candidate = a * RAD_TO_DEG;

        match (ilat2 > ilat1, ilon2 > ilon1) {
            (true, true) => candidate,
            (false, false) => 180.0 - candidate,
            (false, true) => 180.0 - candidate,
            (true, false) => candidate + 360.0,
        }
    }

    /// Destination reached from `self` after `distance` km on `bearing` degrees.
    ///
    /// ```
    /// use geopoint_core::Geopoint;
    ///
    /// let start = Geopoint::from_degrees(52.0, 10.0)?;
    /// let target = start.project(90.0, 50.0)?;
    /// assert!(target.longitude() > 10.7 && target.longitude() < 10.8);
    ///
    /// // Crossing the antimeridian is not wrapped.
    /// let edge = Geopoint::from_degrees(0.0, 179.5)?;
    /// assert!(edge.project(90.0, 200.0).is_err());
    /// # Ok::<(), geopoint_core::GeopointError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`MalformedCoordinate`](GeopointError::MalformedCoordinate) if the
    /// computed longitude leaves [-180, 180] or the inputs are not finite.
    pub fn project(&self, bearing: f64, distance: f64) -> GeopointResult<Geopoint> {
        trace!(
            "projecting {:?} by {} km on bearing {}",
            self,
            distance,
            bearing
        );

        let rlat1 = self.latitude() * DEG_TO_RAD;
        let rlon1 = self.longitude() * DEG_TO_RAD;
        let rbearing = bearing * DEG_TO_RAD;
        let rdistance = distance / EARTH_RADIUS_KM;

        let (sin_lat1, cos_lat1) = libm::sincos(rlat1);
        let (sin_dist, cos_dist) = libm::sincos(rdistance);
        let (sin_bearing, cos_bearing) = libm::sincos(rbearing);

        let rlat = libm::asin(sin_lat1 * cos_dist + cos_lat1 * sin_dist * cos_bearing);
        let rlon = rlon1
            + libm::atan2(
                sin_bearing * sin_dist * cos_lat1,
                cos_dist - sin_lat1 * libm::sin(rlat),
            );

        Geopoint::from_degrees(rlat * RAD_TO_DEG, rlon * RAD_TO_DEG)
    }

    /// Returns `true` if `other` lies within `tolerance` km of `self`.
    ///
    /// # Errors
    ///
    /// Propagates the failure of [`distance_to`](Self::distance_to), so two
    /// coincident points are an error rather than `true`.
    pub fn is_equal_to_within(&self, other: &Geopoint, tolerance: f64) -> GeopointResult<bool> {
        Ok(self.distance_to(other)? <= tolerance)
    }
}

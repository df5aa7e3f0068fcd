//! The [`Geopoint`] value type.
//!
//! A `Geopoint` is a latitude/longitude pair in degrees. Every value that
//! exists has passed range validation:
//!
//! - **Latitude**: north positive, [-90, 90]
//! - **Longitude**: east positive, [-180, 180]
//!
//! The type is immutable. Instead of setters, the `with_*` methods derive a
//! new validated point and leave the receiver untouched, so a point can be
//! shared freely between threads.
//!
//! # Example
//!
//! ```
//! use geopoint_core::Geopoint;
//!
//! let start = Geopoint::from_degrees(52.5, 9.75)?;
//! assert_eq!(start.latitude_e6(), 52_500_000);
//!
//! let moved = start.with_latitude(52.0)?;
//! assert_eq!(start.latitude(), 52.5);
//! assert_eq!(moved.latitude(), 52.0);
//! # Ok::<(), geopoint_core::GeopointError>(())
//! ```

use crate::constants::{DEGREES_PER_MICRODEGREE, MICRODEGREES_PER_DEGREE};
use crate::errors::GeopointResult;
use crate::text::{CoordinateFormatter, CoordinateParser, GeopointFormat, GeopointParser};
use crate::validate::{validate_latitude, validate_longitude};

/// A validated point on Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeopoint"))]
pub struct Geopoint {
    latitude: f64,
    longitude: f64,
}

impl Geopoint {
    /// Creates a point from latitude and longitude in degrees.
    ///
    /// # Errors
    ///
    /// [`MalformedCoordinate`](crate::GeopointError::MalformedCoordinate) if
    /// `lat` is outside [-90, 90] or `lon` is outside [-180, 180]. No point
    /// is created when either value is invalid.
    pub fn from_degrees(lat: f64, lon: f64) -> GeopointResult<Self> {
        let latitude = validate_latitude(lat)?;
        let longitude = validate_longitude(lon)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Creates a point from microdegrees (degrees × 1e6).
    ///
    /// ```
    /// use geopoint_core::Geopoint;
    ///
    /// let p = Geopoint::from_microdegrees(52_374_500, -9_738_500)?;
    /// assert!((p.longitude() + 9.7385).abs() < 1e-9);
    /// # Ok::<(), geopoint_core::GeopointError>(())
    /// ```
    pub fn from_microdegrees(lat_e6: i32, lon_e6: i32) -> GeopointResult<Self> {
        Self::from_degrees(
            lat_e6 as f64 * DEGREES_PER_MICRODEGREE,
            lon_e6 as f64 * DEGREES_PER_MICRODEGREE,
        )
    }

    /// Parses a point from free text with the default [`GeopointParser`].
    ///
    /// ```
    /// use geopoint_core::Geopoint;
    ///
    /// let p = Geopoint::from_text("N 52° 36.123 E 010° 03.456")?;
    /// assert!((p.latitude() - 52.60205).abs() < 1e-9);
    /// # Ok::<(), geopoint_core::GeopointError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`Parse`](crate::GeopointError::Parse) if no latitude or longitude can
    /// be found, [`MalformedCoordinate`](crate::GeopointError::MalformedCoordinate)
    /// if a parsed value is out of range.
    pub fn from_text(text: &str) -> GeopointResult<Self> {
        Self::from_text_with(text, &GeopointParser)
    }

    /// Parses a point from free text with a caller-supplied parser.
    ///
    /// Latitude and longitude are extracted independently from the same text.
    pub fn from_text_with<P: CoordinateParser + ?Sized>(
        text: &str,
        parser: &P,
    ) -> GeopointResult<Self> {
        let lat = parser.parse_latitude(text)?;
        let lon = parser.parse_longitude(text)?;
        Self::from_degrees(lat, lon)
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in microdegrees, truncated toward zero.
    #[inline]
    pub fn latitude_e6(&self) -> i32 {
        (self.latitude * MICRODEGREES_PER_DEGREE) as i32
    }

    /// Longitude in microdegrees, truncated toward zero.
    #[inline]
    pub fn longitude_e6(&self) -> i32 {
        (self.longitude * MICRODEGREES_PER_DEGREE) as i32
    }

    /// Returns a copy with the latitude replaced.
    pub fn with_latitude(&self, lat: f64) -> GeopointResult<Self> {
        Ok(Self {
            latitude: validate_latitude(lat)?,
            ..*self
        })
    }

    /// Returns a copy with the longitude replaced.
    pub fn with_longitude(&self, lon: f64) -> GeopointResult<Self> {
        Ok(Self {
            longitude: validate_longitude(lon)?,
            ..*self
        })
    }

    pub fn with_latitude_e6(&self, lat_e6: i32) -> GeopointResult<Self> {
        self.with_latitude(lat_e6 as f64 * DEGREES_PER_MICRODEGREE)
    }

    pub fn with_longitude_e6(&self, lon_e6: i32) -> GeopointResult<Self> {
        self.with_longitude(lon_e6 as f64 * DEGREES_PER_MICRODEGREE)
    }

    /// Returns a copy with the latitude parsed from `text` by the default parser.
    pub fn with_latitude_text(&self, text: &str) -> GeopointResult<Self> {
        self.with_latitude(GeopointParser.parse_latitude(text)?)
    }

    /// Returns a copy with the longitude parsed from `text` by the default parser.
    pub fn with_longitude_text(&self, text: &str) -> GeopointResult<Self> {
        self.with_longitude(GeopointParser.parse_longitude(text)?)
    }

    /// Exact comparison of both coordinates.
    ///
    /// Equivalent to `==`. Use `Option<Geopoint>` where a point may be absent;
    /// `None` is never equal to a point.
    #[inline]
    pub fn is_equal_to(&self, other: &Geopoint) -> bool {
        self == other
    }

    /// Formats the point with one of the built-in formats.
    pub fn format(&self, format: GeopointFormat) -> String {
        format.format(self)
    }

    /// Formats the point with the built-in format named by `key`.
    ///
    /// # Errors
    ///
    /// [`UnknownFormat`](crate::GeopointError::UnknownFormat) if `key` does not
    /// name a [`GeopointFormat`].
    pub fn format_key(&self, key: &str) -> GeopointResult<String> {
        let format: GeopointFormat = key.parse()?;
        Ok(self.format(format))
    }

    /// Formats the point with a caller-supplied formatter.
    pub fn format_with<F: CoordinateFormatter + ?Sized>(&self, formatter: &F) -> String {
        formatter.format(self)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeopoint {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeopoint> for Geopoint {
    type Error = crate::GeopointError;

    fn try_from(raw: RawGeopoint) -> Result<Self, Self::Error> {
        Geopoint::from_degrees(raw.latitude, raw.longitude)
    }
}

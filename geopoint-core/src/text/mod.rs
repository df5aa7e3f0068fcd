//! Text collaborators of [`Geopoint`].
//!
//! The geodesic core only depends on the two traits below. The crate ships
//! one implementation of each:
//!
//! - [`GeopointParser`]: hemisphere notation (`N 52° 36.123 E 010° 03.456`)
//!   and plain decimal degrees
//! - [`GeopointFormat`]: the closed set of named output formats
//!
//! Callers with other notations implement the traits themselves and pass the
//! implementation to [`Geopoint::from_text_with`] or [`Geopoint::format_with`].

pub mod format;
pub mod parse;

pub use format::GeopointFormat;
pub use parse::GeopointParser;

use crate::errors::GeopointResult;
use crate::Geopoint;

/// Extracts latitude and longitude values from free text.
pub trait CoordinateParser {
    /// Returns the latitude in degrees found in `text`.
    ///
    /// The value is not range checked; the caller validates it.
    fn parse_latitude(&self, text: &str) -> GeopointResult<f64>;

    /// Returns the longitude in degrees found in `text`.
    fn parse_longitude(&self, text: &str) -> GeopointResult<f64>;
}

/// Renders a point as text.
pub trait CoordinateFormatter {
    fn format(&self, point: &Geopoint) -> String;
}

impl<F> CoordinateFormatter for F
where
    F: Fn(&Geopoint) -> String,
{
    fn format(&self, point: &Geopoint) -> String {
        self(point)
    }
}

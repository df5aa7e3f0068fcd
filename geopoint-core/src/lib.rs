//! Geographic points on a spherical Earth.
//!
//! [`Geopoint`] is a validated latitude/longitude pair in degrees with
//! great-circle distance, initial bearing, projection by bearing and distance,
//! and exact or tolerance-based equality. Text input and output go through the
//! [`CoordinateParser`] and [`CoordinateFormatter`] traits; the crate provides
//! [`GeopointParser`] and [`GeopointFormat`] as defaults.
//!
//! ```
//! use geopoint_core::{Geopoint, GeopointFormat};
//!
//! let cache = Geopoint::from_text("N 52° 36.123 E 010° 03.456")?;
//! let here = Geopoint::from_degrees(52.5, 10.0)?;
//!
//! let km = here.distance_to(&cache)?;
//! let bearing = here.bearing_to(&cache);
//! assert!(km > 11.5 && km < 12.5);
//! assert!(bearing > 0.0 && bearing < 90.0);
//!
//! assert_eq!(cache.format(GeopointFormat::LatDecMinute), "N 52° 36.123");
//! # Ok::<(), geopoint_core::GeopointError>(())
//! ```

pub mod constants;
pub mod errors;
pub mod geopoint;
pub mod text;
pub mod validate;

pub use constants::{EARTH_RADIUS_KM, KM_IN_MILES};
pub use errors::{ErrorKind, GeopointError, GeopointResult};
pub use geopoint::Geopoint;
pub use text::{CoordinateFormatter, CoordinateParser, GeopointFormat, GeopointParser};
pub use validate::Axis;

//! Geographic point on a spherical Earth.
//!
//! - [`core`]: the [`Geopoint`] value, construction, accessors and exact equality
//! - [`navigation`]: great-circle distance, bearing, projection and tolerant equality

pub mod core;
pub mod navigation;

pub use self::core::Geopoint;

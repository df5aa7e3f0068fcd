//! Default coordinate parser.
//!
//! Two notations are recognized, tried in this order:
//!
//! ```text
//! Hemisphere:  N 52° 36.123 E 010° 03.456
//!              N 52 36.123 E 010 03.456
//!              S 33° 51' 30.5" W 151° 12' 30''
//!              N 52.60205 E 10.0576
//! Decimal:     52.60205 10.0576   or  52.60205,10.0576  or  -33.86; 151.2
//!              52.60205           (a lone value, read for either axis)
//! ```
//!
//! Two integers joined by a bare comma (`52,5`) are rejected: they could be a
//! pair or one value with a decimal comma. Write `52, 5` or `52 5` for a pair.
//!
//! In hemisphere notation the letter carries the sign (`S` and `W` are
//! negative, in either case), the degree sign and minute/second markers are optional except
//! that seconds must be terminated by `"` or `''`, and a decimal comma is
//! accepted. Minutes and seconds must be below 60, and a fractional field
//! may only be the last one given.
//!
//! Values are returned unvalidated; range checks belong to
//! [`Geopoint`](crate::Geopoint) construction.
//!
//! ```
//! use geopoint_core::text::{CoordinateParser, GeopointParser};
//!
//! let lat = GeopointParser.parse_latitude("S 33° 51' 30\" E 151° 12' 30\"").unwrap();
//! assert!((lat + 33.858333).abs() < 1e-6);
//! ```

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::CoordinateParser;
use crate::errors::{GeopointError, GeopointResult};
use crate::validate::Axis;

/// Parser for hemisphere and decimal-degree notation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeopointParser;

static LATITUDE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?xi)
        ([NS])                                      # hemisphere
        \s*
        (\d{1,3}(?:[.,]\d+)?)                       # degrees
        \s*°?
        (?:\s*(\d{1,2}(?:[.,]\d+)?)\s*['′]?)?       # minutes
        (?:\s*(\d{1,2}(?:[.,]\d+)?)\s*(?:"|''|″))?  # seconds, marker required
        "#,
    )
    .unwrap()
});

static LONGITUDE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?xi)
        ([EW])                                      # hemisphere
        \s*
        (\d{1,3}(?:[.,]\d+)?)                       # degrees
        \s*°?
        (?:\s*(\d{1,2}(?:[.,]\d+)?)\s*['′]?)?       # minutes
        (?:\s*(\d{1,2}(?:[.,]\d+)?)\s*(?:"|''|″))?  # seconds, marker required
        "#,
    )
    .unwrap()
});

static DECIMAL_PAIR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^\s*
        ([+-]?\d+(?:\.\d+)?)       # latitude
        (\s*[,;]\s*|\s+)           # separator
        ([+-]?\d+(?:\.\d+)?)       # longitude
        \s*$
        ",
    )
    .unwrap()
});

static DECIMAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+(?:\.\d+)?)\s*$").unwrap());

impl CoordinateParser for GeopointParser {
    fn parse_latitude(&self, text: &str) -> GeopointResult<f64> {
        parse_axis(text, Axis::Latitude, &LATITUDE_REGEX)
    }

    fn parse_longitude(&self, text: &str) -> GeopointResult<f64> {
        parse_axis(text, Axis::Longitude, &LONGITUDE_REGEX)
    }
}

fn parse_axis(text: &str, axis: Axis, hemisphere: &Regex) -> GeopointResult<f64> {
    if let Some(caps) = hemisphere.captures(text) {
        return hemisphere_value(&caps, axis, text);
    }

    if let Some(caps) = DECIMAL_PAIR_REGEX.captures(text) {
        // "52,5" reads as a single value with a decimal comma
        if &caps[2] == "," && !caps[1].contains('.') && !caps[3].contains('.') {
            return Err(GeopointError::parse(axis, text, "ambiguous decimal comma"));
        }
        let field = match axis {
            Axis::Latitude => &caps[1],
            Axis::Longitude => &caps[3],
        };
        return number(field, axis, text);
    }

    if let Some(caps) = DECIMAL_REGEX.captures(text) {
        return number(&caps[1], axis, text);
    }

    Err(GeopointError::parse(
        axis,
        text,
        format!("no {} found", axis),
    ))
}

fn hemisphere_value(caps: &Captures, axis: Axis, text: &str) -> GeopointResult<f64> {
    let sign = match &caps[1] {
        "S" | "s" | "W" | "w" => -1.0,
        _ => 1.0,
    };
    let degrees = number(&caps[2], axis, text)?;
    let minutes = caps
        .get(3)
        .map(|m| number(m.as_str(), axis, text))
        .transpose()?;
    let seconds = caps
        .get(4)
        .map(|m| number(m.as_str(), axis, text))
        .transpose()?;

    if minutes.is_some() && degrees.fract() != 0.0 {
        return Err(GeopointError::parse(
            axis,
            text,
            "fractional degrees followed by minutes",
        ));
    }
    if let Some(min) = minutes {
        if min >= 60.0 {
            return Err(GeopointError::parse(axis, text, "minutes must be below 60"));
        }
        if seconds.is_some() && min.fract() != 0.0 {
            return Err(GeopointError::parse(
                axis,
                text,
                "fractional minutes followed by seconds",
            ));
        }
    }
    if let Some(sec) = seconds {
        if sec >= 60.0 {
            return Err(GeopointError::parse(axis, text, "seconds must be below 60"));
        }
    }

    Ok(sign * (degrees + minutes.unwrap_or(0.0) / 60.0 + seconds.unwrap_or(0.0) / 3600.0))
}

fn number(field: &str, axis: Axis, text: &str) -> GeopointResult<f64> {
    field
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| GeopointError::parse(axis, text, format!("cannot read '{}' as a number", field)))
}

//! Named output formats for [`Geopoint`].
//!
//! | Format | Key | Example |
//! |--------|-----|---------|
//! | [`LatLonDecDegree`](GeopointFormat::LatLonDecDegree) | `LAT_LON_DECDEGREE` | `52.602050 10.057600` |
//! | [`LatLonDecDegreeComma`](GeopointFormat::LatLonDecDegreeComma) | `LAT_LON_DECDEGREE_COMMA` | `52.602050,10.057600` |
//! | [`LatLonDecMinute`](GeopointFormat::LatLonDecMinute) | `LAT_LON_DECMINUTE` | `N 52° 36.123 E 010° 03.456` |
//! | [`LatLonDecMinuteRaw`](GeopointFormat::LatLonDecMinuteRaw) | `LAT_LON_DECMINUTE_RAW` | `N 52 36.123 E 010 03.456` |
//! | [`LatLonDecSecond`](GeopointFormat::LatLonDecSecond) | `LAT_LON_DECSECOND` | `N 52° 36' 07.380" E 010° 03' 27.360"` |
//! | [`LatDecDegreeRaw`](GeopointFormat::LatDecDegreeRaw) | `LAT_DECDEGREE_RAW` | `52.602050` |
//! | [`LatDecMinute`](GeopointFormat::LatDecMinute) | `LAT_DECMINUTE` | `N 52° 36.123` |
//! | [`LonDecDegreeRaw`](GeopointFormat::LonDecDegreeRaw) | `LON_DECDEGREE_RAW` | `10.057600` |
//! | [`LonDecMinute`](GeopointFormat::LonDecMinute) | `LON_DECMINUTE` | `E 010° 03.456` |
//!
//! Sexagesimal fields are derived from an integer count of thousandths of the
//! smallest unit, so rounding carries upward: 59.9996 minutes prints as the
//! next whole degree with `00.000` minutes, never as `60.000`.
//!
//! The default `Display` of a [`Geopoint`] is `LAT_LON_DECMINUTE`.

use core::fmt;
use core::str::FromStr;

use super::CoordinateFormatter;
use crate::errors::GeopointError;
use crate::Geopoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeopointFormat {
    LatLonDecDegree,
    LatLonDecDegreeComma,
    LatLonDecMinute,
    LatLonDecMinuteRaw,
    LatLonDecSecond,
    LatDecDegreeRaw,
    LatDecMinute,
    LonDecDegreeRaw,
    LonDecMinute,
}

impl GeopointFormat {
    pub const ALL: [GeopointFormat; 9] = [
        GeopointFormat::LatLonDecDegree,
        GeopointFormat::LatLonDecDegreeComma,
        GeopointFormat::LatLonDecMinute,
        GeopointFormat::LatLonDecMinuteRaw,
        GeopointFormat::LatLonDecSecond,
        GeopointFormat::LatDecDegreeRaw,
        GeopointFormat::LatDecMinute,
        GeopointFormat::LonDecDegreeRaw,
        GeopointFormat::LonDecMinute,
    ];

    /// The string key that names this format.
    pub fn key(self) -> &'static str {
        match self {
            GeopointFormat::LatLonDecDegree => "LAT_LON_DECDEGREE",
            GeopointFormat::LatLonDecDegreeComma => "LAT_LON_DECDEGREE_COMMA",
            GeopointFormat::LatLonDecMinute => "LAT_LON_DECMINUTE",
            GeopointFormat::LatLonDecMinuteRaw => "LAT_LON_DECMINUTE_RAW",
            GeopointFormat::LatLonDecSecond => "LAT_LON_DECSECOND",
            GeopointFormat::LatDecDegreeRaw => "LAT_DECDEGREE_RAW",
            GeopointFormat::LatDecMinute => "LAT_DECMINUTE",
            GeopointFormat::LonDecDegreeRaw => "LON_DECDEGREE_RAW",
            GeopointFormat::LonDecMinute => "LON_DECMINUTE",
        }
    }
}

impl FromStr for GeopointFormat {
    type Err = GeopointError;

    /// Looks a format up by key, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| GeopointError::unknown_format(s))
    }
}

impl fmt::Display for GeopointFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl CoordinateFormatter for GeopointFormat {
    fn format(&self, point: &Geopoint) -> String {
        let lat = point.latitude();
        let lon = point.longitude();
        match self {
            GeopointFormat::LatLonDecDegree => format!("{:.6} {:.6}", lat, lon),
            GeopointFormat::LatLonDecDegreeComma => format!("{:.6},{:.6}", lat, lon),
            GeopointFormat::LatLonDecMinute => format!(
                "{} {}",
                DecMinutes::latitude(lat).marked(),
                DecMinutes::longitude(lon).marked()
            ),
            GeopointFormat::LatLonDecMinuteRaw => format!(
                "{} {}",
                DecMinutes::latitude(lat).raw(),
                DecMinutes::longitude(lon).raw()
            ),
            GeopointFormat::LatLonDecSecond => format!(
                "{} {}",
                DecSeconds::latitude(lat),
                DecSeconds::longitude(lon)
            ),
            GeopointFormat::LatDecDegreeRaw => format!("{:.6}", lat),
            GeopointFormat::LatDecMinute => DecMinutes::latitude(lat).marked(),
            GeopointFormat::LonDecDegreeRaw => format!("{:.6}", lon),
            GeopointFormat::LonDecMinute => DecMinutes::longitude(lon).marked(),
        }
    }
}

impl fmt::Display for Geopoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&GeopointFormat::LatLonDecMinute.format(self))
    }
}

fn hemisphere(value: f64, positive: char, negative: char) -> char {
    if value < 0.0 {
        negative
    } else {
        positive
    }
}

/// Degrees and decimal minutes with three minute decimals.
struct DecMinutes {
    hemisphere: char,
    degree_width: usize,
    degrees: i64,
    minutes: i64,
    thousandths: i64,
}

impl DecMinutes {
    fn latitude(value: f64) -> Self {
        Self::split(value, hemisphere(value, 'N', 'S'), 2)
    }

    fn longitude(value: f64) -> Self {
        Self::split(value, hemisphere(value, 'E', 'W'), 3)
    }

    fn split(value: f64, hemisphere: char, degree_width: usize) -> Self {
        let total = (value.abs() * 60_000.0).round() as i64;
        let rest = total % 60_000;
        Self {
            hemisphere,
            degree_width,
            degrees: total / 60_000,
            minutes: rest / 1000,
            thousandths: rest % 1000,
        }
    }

    fn marked(&self) -> String {
        format!(
            "{} {:0width$}° {:02}.{:03}",
            self.hemisphere,
            self.degrees,
            self.minutes,
            self.thousandths,
            width = self.degree_width
        )
    }

    fn raw(&self) -> String {
        format!(
            "{} {:0width$} {:02}.{:03}",
            self.hemisphere,
            self.degrees,
            self.minutes,
            self.thousandths,
            width = self.degree_width
        )
    }
}

/// Degrees, minutes and decimal seconds with three second decimals.
struct DecSeconds {
    hemisphere: char,
    degree_width: usize,
    degrees: i64,
    minutes: i64,
    seconds: i64,
    thousandths: i64,
}

impl DecSeconds {
    fn latitude(value: f64) -> Self {
        Self::split(value, hemisphere(value, 'N', 'S'), 2)
    }

    fn longitude(value: f64) -> Self {
        Self::split(value, hemisphere(value, 'E', 'W'), 3)
    }

    fn split(value: f64, hemisphere: char, degree_width: usize) -> Self {
        let total = (value.abs() * 3_600_000.0).round() as i64;
        let rest = total % 3_600_000;
        let second_rest = rest % 60_000;
        Self {
            hemisphere,
            degree_width,
            degrees: total / 3_600_000,
            minutes: rest / 60_000,
            seconds: second_rest / 1000,
            thousandths: second_rest % 1000,
        }
    }
}

impl fmt::Display for DecSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:0width$}° {:02}' {:02}.{:03}\"",
            self.hemisphere,
            self.degrees,
            self.minutes,
            self.seconds,
            self.thousandths,
            width = self.degree_width
        )
    }
}

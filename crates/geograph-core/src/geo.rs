//! Geographic coordinates attached to graph nodes.
//!
//! Points always use the GIS `(x, y)` convention: `x` is longitude and `y`
//! is latitude, both in degrees. Split coordinate fields are mapped onto
//! that convention through an [`AxisOrder`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude (x).
    pub lon: f64,
    /// Latitude (y).
    pub lat: f64,
}

impl GeoPoint {
    /// Creates a point from longitude and latitude.
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Creates a point from latitude and longitude, in that order.
    #[must_use]
    pub const fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self { lon, lat }
    }

    /// Returns the x coordinate (longitude).
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.lon
    }

    /// Returns the y coordinate (latitude).
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.lat
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}

/// How a pair of unnamed coordinates maps onto longitude and latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrder {
    /// First coordinate is longitude (x), second is latitude (y).
    #[default]
    LonLat,
    /// First coordinate is latitude, second is longitude.
    LatLon,
}

impl AxisOrder {
    /// Builds a point from two coordinates given in this order.
    #[must_use]
    pub const fn point(self, first: f64, second: f64) -> GeoPoint {
        match self {
            Self::LonLat => GeoPoint::new(first, second),
            Self::LatLon => GeoPoint::from_lat_lon(first, second),
        }
    }
}

/// Where a node's position came from, resolved once when the node is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoordinateSource {
    /// A single point, from a `coords` field or named `lat`/`long` fields.
    Combined(GeoPoint),
    /// Separate `coord1`/`coord2` fields and an optional third coordinate.
    Split {
        /// First coordinate.
        coord1: f64,
        /// Second coordinate.
        coord2: f64,
        /// Optional third coordinate (e.g. altitude). Not used for distance.
        coord3: Option<f64>,
    },
}

impl CoordinateSource {
    /// Returns the surface point for this position.
    ///
    /// `axis` only matters for [`CoordinateSource::Split`].
    #[must_use]
    pub const fn point(&self, axis: AxisOrder) -> GeoPoint {
        match *self {
            Self::Combined(p) => p,
            Self::Split { coord1, coord2, .. } => axis.point(coord1, coord2),
        }
    }

    /// Returns the third coordinate, if any.
    #[must_use]
    pub const fn coord3(&self) -> Option<f64> {
        match *self {
            Self::Combined(_) => None,
            Self::Split { coord3, .. } => coord3,
        }
    }
}

impl fmt::Display for CoordinateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Combined(p) => write!(f, "coords={p}"),
            Self::Split {
                coord1,
                coord2,
                coord3: Some(c3),
            } => write!(f, "coord1={coord1}, coord2={coord2}, coord3={c3}"),
            Self::Split { coord1, coord2, .. } => write!(f, "coord1={coord1}, coord2={coord2}"),
        }
    }
}

/// Parses a combined `coords` cell into its numeric components.
///
/// Accepts a JSON array (`[x, y]`) or a comma / whitespace separated list
/// (`x, y` or `x y`). Returns `None` when any component is not a finite
/// number.
#[must_use]
pub fn parse_coords(s: &str) -> Option<Vec<f64>> {
    let s = s.trim();
    let values: Option<Vec<f64>> = if s.starts_with('[') {
        serde_json::from_str(s).ok()
    } else {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|v| !v.is_empty())
            .map(|v| v.parse::<f64>().ok())
            .collect()
    };
    values.filter(|v| v.iter().all(|c| c.is_finite()))
}

//! Destination model shared by the catalog, the router and the default maps
//! launcher.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A validated latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting NaN, infinities and out-of-range values.
    ///
    /// Negative zero is stored as zero so it never renders as `-0`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let latitude_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let longitude_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        if !latitude_ok || !longitude_ok {
            return Err(Error::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        // -0.0 + 0.0 == +0.0
        Ok(Self {
            latitude: latitude + 0.0,
            longitude: longitude + 0.0,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Render as `<lat>,<lon>` using the shortest representation that
    /// round-trips each value. Never rounds and never switches to exponent
    /// notation.
    pub fn to_query_pair(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = Error;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Which grammar a destination needs from a navigation app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationKind {
    Coordinate,
    Address,
}

impl fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            DestinationKind::Coordinate => "coordinate",
            DestinationKind::Address => "address",
        };
        f.write_str(value)
    }
}

/// Where a routing request should take the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Destination {
    /// A point, optionally labelled with a place name.
    Coordinate {
        coordinate: Coordinate,
        label: Option<String>,
    },
    /// Free-text postal address.
    Address { address: String },
}

impl Destination {
    pub fn place(coordinate: Coordinate, label: Option<String>) -> Self {
        Destination::Coordinate { coordinate, label }
    }

    pub fn address(address: impl Into<String>) -> Self {
        Destination::Address {
            address: address.into(),
        }
    }

    pub fn kind(&self) -> DestinationKind {
        match self {
            Destination::Coordinate { .. } => DestinationKind::Coordinate,
            Destination::Address { .. } => DestinationKind::Address,
        }
    }
}

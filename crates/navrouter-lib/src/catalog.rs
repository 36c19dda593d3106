//! Fixed catalog of supported third-party navigation apps.
//!
//! Each entry knows its display name, its URL scheme and how to phrase a
//! routing request for a coordinate or, where supported, a free-text
//! address. The catalog order is the order apps appear in the selection
//! sheet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::destination::{Coordinate, Destination, DestinationKind};
use crate::encoding::encode_address;
use crate::error::{BuildError, Error};
use crate::platform::SchemeProbe;

/// Identifier of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationAppId {
    GoogleMaps,
    Waze,
    Citymapper,
}

impl NavigationAppId {
    /// Stable slug used on the command line and in configuration.
    pub fn slug(self) -> &'static str {
        match self {
            NavigationAppId::GoogleMaps => "google-maps",
            NavigationAppId::Waze => "waze",
            NavigationAppId::Citymapper => "citymapper",
        }
    }

    /// The catalog entry for this identifier.
    pub fn descriptor(self) -> &'static NavigationApp {
        match self {
            NavigationAppId::GoogleMaps => &CATALOG[0],
            NavigationAppId::Waze => &CATALOG[1],
            NavigationAppId::Citymapper => &CATALOG[2],
        }
    }
}

impl fmt::Display for NavigationAppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for NavigationAppId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        CATALOG
            .iter()
            .map(|app| app.id)
            .find(|id| id.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::UnknownApp { id: s.to_string() })
    }
}

/// Query grammar for routing to a coordinate: `prefix<lat>,<lon>suffix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateGrammar {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl CoordinateGrammar {
    pub fn params(&self, coordinate: &Coordinate) -> String {
        format!("{}{}{}", self.prefix, coordinate.to_query_pair(), self.suffix)
    }
}

/// Query grammar for searching a free-text address: `prefix<encoded>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressGrammar {
    pub prefix: &'static str,
    /// Join address words with `+` instead of escaping spaces as `%20`.
    pub use_plus_sign: bool,
}

impl AddressGrammar {
    pub fn params(&self, address: &str) -> String {
        format!(
            "{}{}",
            self.prefix,
            encode_address(address, self.use_plus_sign)
        )
    }
}

/// A supported third-party navigation app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationApp {
    pub id: NavigationAppId,
    pub display_name: &'static str,
    pub url_scheme: &'static str,
    pub coordinate: CoordinateGrammar,
    /// `None` when the app cannot search by address.
    pub address: Option<AddressGrammar>,
}

impl NavigationApp {
    /// Whether this app has a grammar for the given destination kind.
    pub fn supports(&self, kind: DestinationKind) -> bool {
        match kind {
            DestinationKind::Coordinate => true,
            DestinationKind::Address => self.address.is_some(),
        }
    }

    /// Build the deep link routing this app to `destination`.
    pub fn build_url(&self, destination: &Destination) -> Result<Url, BuildError> {
        let params = match destination {
            Destination::Coordinate { coordinate, .. } => self.coordinate.params(coordinate),
            Destination::Address { address } => {
                let grammar = self
                    .address
                    .ok_or(BuildError::UnsupportedDestinationKind {
                        app: self.id,
                        kind: DestinationKind::Address,
                    })?;
                grammar.params(address)
            }
        };

        let raw = format!("{}{}", self.url_scheme, params);
        Url::parse(&raw).map_err(|err| BuildError::InvalidScheme {
            url: raw.clone(),
            reason: err.to_string(),
        })
    }
}

static CATALOG: [NavigationApp; 3] = [
    NavigationApp {
        id: NavigationAppId::GoogleMaps,
        display_name: "Google Maps",
        url_scheme: "comgooglemaps://",
        coordinate: CoordinateGrammar {
            prefix: "?daddr=",
            suffix: "&directionsmode=driving",
        },
        address: Some(AddressGrammar {
            prefix: "?q=",
            use_plus_sign: true,
        }),
    },
    NavigationApp {
        id: NavigationAppId::Waze,
        display_name: "Waze",
        url_scheme: "waze://",
        coordinate: CoordinateGrammar {
            prefix: "?ll=",
            suffix: "&navigate=yes",
        },
        address: Some(AddressGrammar {
            prefix: "?q=",
            use_plus_sign: false,
        }),
    },
    NavigationApp {
        id: NavigationAppId::Citymapper,
        display_name: "Citymapper",
        url_scheme: "citymapper://",
        coordinate: CoordinateGrammar {
            prefix: "directions?endcoord=",
            suffix: "",
        },
        address: None,
    },
];

/// Every supported app, in presentation order.
pub fn list_all() -> &'static [NavigationApp] {
    &CATALOG
}

/// Catalog entries whose scheme the probe can open, in catalog order.
///
/// The probe is consulted exactly once per entry. A failing probe counts as
/// "not installed".
pub fn list_installed<P>(probe: &P) -> Vec<&'static NavigationApp>
where
    P: SchemeProbe + ?Sized,
{
    list_all()
        .iter()
        .filter(|app| match probe.can_open(app.url_scheme) {
            Ok(installed) => {
                tracing::debug!(app = %app.id, installed, "probed navigation app");
                installed
            }
            Err(err) => {
                tracing::debug!(app = %app.id, error = %err, "probe failed; treating as not installed");
                false
            }
        })
        .collect()
}

/// Build the deep link routing `app` to `destination`.
pub fn build_url(app: &NavigationApp, destination: &Destination) -> Result<Url, BuildError> {
    app.build_url(destination)
}

//! Deep links for the platform's built-in maps application.
//!
//! The default maps target never goes through the third-party catalog: it is
//! always offered first and is the fallback when nothing else is installed.

use url::Url;

use crate::destination::Destination;
use crate::encoding::encode_address;
use crate::error::BuildError;

/// Base URL used when the configuration does not override it.
pub const DEFAULT_MAPS_BASE_URL: &str = "http://maps.apple.com/";

/// Build the built-in maps URL for `destination`.
///
/// Coordinates request driving directions from the current location
/// (`daddr=<lat>,<lon>&dirflg=d`), adding the label as `q` when present.
/// Addresses are searched with `address=`, words joined by `+`.
pub fn default_maps_url(base_url: &str, destination: &Destination) -> Result<Url, BuildError> {
    let query = match destination {
        Destination::Coordinate { coordinate, label } => {
            let mut query = format!("daddr={}&dirflg=d", coordinate.to_query_pair());
            if let Some(label) = label.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
                query.push_str("&q=");
                query.push_str(&encode_address(label, false));
            }
            query
        }
        Destination::Address { address } => {
            format!("address={}", encode_address(address, true))
        }
    };

    let raw = format!("{}?{}", base_url, query);
    Url::parse(&raw).map_err(|err| BuildError::InvalidScheme {
        url: raw.clone(),
        reason: err.to_string(),
    })
}

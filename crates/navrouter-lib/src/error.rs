use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::NavigationAppId;
use crate::destination::DestinationKind;

/// Convenient result alias for the navigation router library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a latitude/longitude pair is outside geographic bounds.
    #[error("invalid coordinate ({latitude}, {longitude}); expected latitude in -90..=90 and longitude in -180..=180")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Raised when an app identifier does not match any catalog entry.
    #[error("unknown navigation app: {id}{}", format_known_apps())]
    UnknownApp { id: String },

    /// Raised when the configuration file could not be read or parsed.
    #[error("invalid configuration at {path}: {message}")]
    Config { path: PathBuf, message: String },
}

/// Failure to assemble a deep link for a specific app.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The app has no grammar for this kind of destination.
    #[error("{app} cannot route to a destination given as {kind}")]
    UnsupportedDestinationKind {
        app: NavigationAppId,
        kind: DestinationKind,
    },

    /// The assembled string was not a well-formed URL.
    #[error("assembled deep link {url:?} is not a valid URL: {reason}")]
    InvalidScheme { url: String, reason: String },
}

/// Guard failures raised on router entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Address routing was requested with empty or whitespace-only text.
    #[error("address is empty")]
    EmptyAddress,
}

/// A scheme probe could not answer. Treated as "not installed".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("probe for scheme {scheme} failed: {message}")]
pub struct ProbeError {
    pub scheme: String,
    pub message: String,
}

/// The reverse geocoder could not resolve a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("reverse geocoding failed: {message}")]
pub struct GeocodeError {
    pub message: String,
}

fn format_known_apps() -> String {
    let ids = crate::catalog::list_all()
        .iter()
        .map(|app| format!("'{}'", app.id))
        .collect::<Vec<_>>();
    format!(". Known apps: {}", ids.join(", "))
}

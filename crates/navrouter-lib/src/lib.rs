//! Navigation app router library entry points.
//!
//! This crate knows the supported third-party navigation apps, probes which
//! of them are installed, builds their deep links for a coordinate or an
//! address, and drives the "pick an app, then launch it" flow with the
//! built-in maps application as the fallback. Platform access (scheme
//! probing, URL opening, presenting a choice, reverse geocoding) is injected
//! by the host through the traits in [`platform`] and [`geocode`].
//!

#![deny(warnings)]

pub mod catalog;
pub mod config;
pub mod default_maps;
pub mod destination;
pub mod encoding;
pub mod error;
pub mod geocode;
pub mod platform;
pub mod router;

pub use catalog::{build_url, list_all, list_installed, NavigationApp, NavigationAppId};
pub use config::{default_config_path, RouterConfig, CONFIG_ENV};
pub use default_maps::{default_maps_url, DEFAULT_MAPS_BASE_URL};
pub use destination::{Coordinate, Destination, DestinationKind};
pub use error::{BuildError, Error, GeocodeError, ProbeError, Result, RouteError};
pub use geocode::{
    place_destination, route_to_geocoded_place, Placemark, ReverseGeocoder, StaticGeocoder,
};
pub use platform::{
    ChoicePresenter, CommandOpener, RecordingOpener, SchemeProbe, StaticProbe, UrlOpener,
};
pub use router::{
    ChoiceId, ChoiceOption, ChoiceRole, ChoiceSheet, Launch, LaunchTarget, NavigationAppRouter,
    PendingSelection, RouteOutcome,
};
pub use url::Url;

//! Reverse-geocoding hand-off.
//!
//! Geocoding is owned by the host and completes asynchronously. Hosts await
//! [`place_destination`] (or [`route_to_geocoded_place`]) and the router runs
//! once the future resolves, on whichever context awaited it.

use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::destination::{Coordinate, Destination};
use crate::error::GeocodeError;
use crate::platform::ChoicePresenter;
use crate::router::{NavigationAppRouter, RouteOutcome};

/// A geocoded place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placemark {
    pub coordinate: Coordinate,
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Resolves a coordinate to the nearest known place.
pub trait ReverseGeocoder {
    fn reverse_geocode(
        &self,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<Option<Placemark>, GeocodeError>> + Send;
}

/// Turn a tapped coordinate into a labelled place destination.
///
/// Returns `None` when the geocoder finds nothing or fails; the request is
/// then dropped without routing.
pub async fn place_destination<G>(geocoder: &G, coordinate: Coordinate) -> Option<Destination>
where
    G: ReverseGeocoder + ?Sized,
{
    match geocoder.reverse_geocode(coordinate).await {
        Ok(Some(placemark)) => {
            let label = placemark.name.or(placemark.address);
            debug!(%coordinate, label = ?label, "reverse geocoded destination");
            Some(Destination::place(placemark.coordinate, label))
        }
        Ok(None) => {
            debug!(%coordinate, "no placemark for coordinate");
            None
        }
        Err(err) => {
            warn!(%coordinate, error = %err, "reverse geocoding failed");
            None
        }
    }
}

/// Geocode `coordinate`, then route to the resulting place.
pub async fn route_to_geocoded_place<G, P>(
    router: &NavigationAppRouter,
    geocoder: &G,
    coordinate: Coordinate,
    presenter: &P,
) -> Option<RouteOutcome>
where
    G: ReverseGeocoder + ?Sized,
    P: ChoicePresenter + ?Sized,
{
    let destination = place_destination(geocoder, coordinate).await?;
    Some(router.route(destination, presenter))
}

/// Table-driven geocoder returning the closest known placemark.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticGeocoder {
    placemarks: Vec<Placemark>,
    /// Largest accepted distance, in degrees on either axis.
    tolerance: f64,
}

impl StaticGeocoder {
    pub fn new(placemarks: Vec<Placemark>, tolerance: f64) -> Self {
        Self {
            placemarks,
            tolerance,
        }
    }

    fn nearest(&self, coordinate: Coordinate) -> Option<Placemark> {
        self.placemarks
            .iter()
            .map(|placemark| {
                let dlat = (placemark.coordinate.latitude() - coordinate.latitude()).abs();
                let dlon = (placemark.coordinate.longitude() - coordinate.longitude()).abs();
                (placemark, dlat.max(dlon))
            })
            .filter(|(_, distance)| *distance <= self.tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(placemark, _)| placemark.clone())
    }
}

impl ReverseGeocoder for StaticGeocoder {
    fn reverse_geocode(
        &self,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<Option<Placemark>, GeocodeError>> + Send {
        let found = self.nearest(coordinate);
        async move { Ok(found) }
    }
}

//! Destination arguments shared by the `url` and `route` subcommands.

use anyhow::{Context, Result};
use clap::Args;

use navrouter_lib::{Coordinate, Destination};

#[derive(Args, Debug, Clone)]
pub struct DestinationArgs {
    /// Destination latitude in decimal degrees.
    #[arg(
        long,
        allow_negative_numbers = true,
        requires = "lon",
        required_unless_present = "address"
    )]
    pub lat: Option<f64>,
    /// Destination longitude in decimal degrees.
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    pub lon: Option<f64>,
    /// Place name attached to a coordinate destination.
    #[arg(long, requires = "lat")]
    pub label: Option<String>,
    /// Free-text address instead of a coordinate.
    #[arg(long, conflicts_with_all = ["lat", "lon", "label"])]
    pub address: Option<String>,
}

impl DestinationArgs {
    /// The coordinate, when the destination was given as one.
    pub fn coordinate(&self) -> Result<Option<Coordinate>> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Coordinate::new(lat, lon)
                .map(Some)
                .context("invalid --lat/--lon"),
            _ => Ok(None),
        }
    }

    pub fn to_destination(&self) -> Result<Destination> {
        if let Some(address) = &self.address {
            return Ok(Destination::address(address.clone()));
        }
        let coordinate = self
            .coordinate()?
            .context("either --address or both --lat and --lon are required")?;
        Ok(Destination::place(coordinate, self.label.clone()))
    }
}

//! Route command handler driving the full selection flow.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use navrouter_cli::output::describe_outcome;
use navrouter_cli::presenter::TerminalPresenter;
use navrouter_cli::terminal::ColorPalette;
use navrouter_lib::{
    route_to_geocoded_place, NavigationAppRouter, RouteOutcome, StaticGeocoder, Url, UrlOpener,
};

use super::destination::DestinationArgs;

/// Opener used with `--dry-run`: accepts every URL without launching it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunOpener;

impl UrlOpener for DryRunOpener {
    fn open(&self, url: &Url) -> bool {
        tracing::debug!(%url, "dry run; not opening");
        true
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub destination: DestinationArgs,
    /// Placemark table used to reverse geocode a coordinate first.
    pub places: Option<PathBuf>,
    /// Print "would open" instead of "opened".
    pub dry_run: bool,
    pub palette: ColorPalette,
}

/// Handle the route subcommand.
pub fn handle_route(
    router: &NavigationAppRouter,
    presenter: &TerminalPresenter,
    args: &RouteCommandArgs,
) -> Result<()> {
    let outcome = match (&args.places, args.destination.coordinate()?) {
        (Some(places), Some(coordinate)) => {
            let geocoder = load_places(places)?;
            let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
            let routed = runtime.block_on(route_to_geocoded_place(
                router, &geocoder, coordinate, presenter,
            ));
            match routed {
                Some(outcome) => outcome,
                None => {
                    eprintln!("No place found near {coordinate}; nothing to route.");
                    return Ok(());
                }
            }
        }
        _ => router.route(args.destination.to_destination()?, presenter),
    };

    report(&outcome, args);
    Ok(())
}

fn report(outcome: &RouteOutcome, args: &RouteCommandArgs) {
    let line = describe_outcome(outcome, args.dry_run, &args.palette);
    match outcome {
        RouteOutcome::Launched(_) | RouteOutcome::Cancelled | RouteOutcome::AwaitingSelection => {
            println!("{line}")
        }
        RouteOutcome::Failed(_) | RouteOutcome::Rejected(_) => eprintln!("{line}"),
    }
}

fn load_places(path: &Path) -> Result<StaticGeocoder> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read places from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse places from {}", path.display()))
}

//! Url command handler for printing a single app's deep link.

use anyhow::{Context, Result};

use navrouter_lib::{build_url, NavigationAppId};

use super::destination::DestinationArgs;

/// Handle the url subcommand.
pub fn handle_url(app: NavigationAppId, destination: &DestinationArgs) -> Result<()> {
    let destination = destination.to_destination()?;
    let url = build_url(app.descriptor(), &destination)
        .with_context(|| format!("failed to build deep link for {}", app))?;
    println!("{url}");
    Ok(())
}

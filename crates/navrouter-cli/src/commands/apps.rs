//! Apps command handler for listing the navigation app catalog.

use anyhow::Result;

use navrouter_lib::{list_all, list_installed, SchemeProbe};
use navrouter_cli::output::render_app_table;
use navrouter_cli::terminal::ColorPalette;

/// Handle the apps subcommand.
///
/// Prints every supported app and whether the probe reports it installed.
pub fn handle_apps(probe: &dyn SchemeProbe, palette: &ColorPalette) -> Result<()> {
    let installed = list_installed(probe);
    println!("Supported navigation apps ({}):", list_all().len());
    print!(
        "{}",
        render_app_table(
            list_all(),
            |app| installed.iter().any(|candidate| candidate.id == app.id),
            palette
        )
    );
    Ok(())
}

//! Output formatting for the app catalog, the selection sheet and routing
//! outcomes.

use navrouter_lib::{ChoiceRole, ChoiceSheet, LaunchTarget, NavigationApp, RouteOutcome};

use crate::terminal::ColorPalette;

/// Render the catalog as a table, marking installed apps.
pub fn render_app_table(
    apps: &[NavigationApp],
    is_installed: impl Fn(&NavigationApp) -> bool,
    palette: &ColorPalette,
) -> String {
    let mut out = format!(
        "{:<12} {:<12} {:<18} {:<8} {}\n",
        "Id", "Name", "Scheme", "Address", "Installed"
    );
    for app in apps {
        let address = if app.address.is_some() { "yes" } else { "no" };
        let installed = if is_installed(app) {
            format!("{}yes{}", palette.green, palette.reset)
        } else {
            "no".to_string()
        };
        out.push_str(&format!(
            "{:<12} {}{:<12}{} {}{:<18}{} {:<8} {}\n",
            app.id.slug(),
            palette.white_bold,
            app.display_name,
            palette.reset,
            palette.gray,
            app.url_scheme,
            palette.reset,
            address,
            installed
        ));
    }
    out
}

/// Render the selection sheet with 1-based indices.
pub fn render_sheet(sheet: &ChoiceSheet, palette: &ColorPalette) -> String {
    let mut out = format!("{}{}{}\n", palette.white_bold, sheet.title, palette.reset);
    for (index, option) in sheet.options.iter().enumerate() {
        let color = match option.role {
            ChoiceRole::Cancel => palette.red,
            ChoiceRole::Default => "",
        };
        out.push_str(&format!(
            "  {}{}.{} {}{}{} {}({}){}\n",
            palette.gray,
            index + 1,
            palette.reset,
            color,
            option.label,
            palette.reset,
            palette.gray,
            option.id,
            palette.reset
        ));
    }
    out
}

/// One-line summary of a routing outcome.
pub fn describe_outcome(outcome: &RouteOutcome, dry_run: bool, palette: &ColorPalette) -> String {
    match outcome {
        RouteOutcome::Launched(launch) => {
            let target = match launch.target {
                LaunchTarget::DefaultMaps => "built-in maps".to_string(),
                LaunchTarget::App(id) => id.descriptor().display_name.to_string(),
            };
            let verb = if dry_run {
                "Would open"
            } else if launch.opened {
                "Opened"
            } else {
                "Failed to open"
            };
            format!(
                "{verb} {target}: {}{}{}",
                palette.cyan, launch.url, palette.reset
            )
        }
        RouteOutcome::AwaitingSelection => "Waiting for a selection".to_string(),
        RouteOutcome::Cancelled => "Cancelled".to_string(),
        RouteOutcome::Failed(err) => format!("Could not build navigation URL: {err}"),
        RouteOutcome::Rejected(err) => format!("Nothing to route: {err}"),
    }
}

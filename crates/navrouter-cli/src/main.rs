mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use navrouter_cli::presenter::{parse_choice, TerminalPresenter};
use navrouter_cli::terminal::ColorPalette;
use navrouter_lib::{
    ChoiceId, CommandOpener, NavigationAppId, NavigationAppRouter, RouterConfig, StaticProbe,
    UrlOpener,
};

use commands::destination::DestinationArgs;
use commands::route::{DryRunOpener, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Route a destination to an installed navigation app")]
struct Cli {
    /// Configuration file (labels, built-in maps URL).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Apps to report as installed, comma separated (e.g. `waze,google-maps`).
    #[arg(
        long,
        global = true,
        value_delimiter = ',',
        env = "NAVROUTER_INSTALLED"
    )]
    installed: Vec<NavigationAppId>,

    /// Print the URL that would be opened instead of launching it.
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported navigation apps and which ones are installed.
    Apps,
    /// Print the deep link one app would receive.
    Url {
        /// App id (`google-maps`, `waze`, `citymapper`).
        #[arg(long)]
        app: NavigationAppId,
        #[command(flatten)]
        destination: DestinationArgs,
    },
    /// Offer the installed apps and launch the chosen one.
    Route {
        #[command(flatten)]
        destination: DestinationArgs,
        /// Answer the sheet without prompting (`default`, `cancel` or an app id).
        #[arg(long, value_parser = parse_choice)]
        choice: Option<ChoiceId>,
        /// JSON placemark table used to reverse geocode --lat/--lon first.
        #[arg(long, conflicts_with = "address")]
        places: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let palette = ColorPalette::detect();
    let probe = StaticProbe::with_apps(cli.installed.iter().copied());

    match cli.command {
        Command::Apps => commands::apps::handle_apps(&probe, &palette),
        Command::Url { app, destination } => commands::url::handle_url(app, &destination),
        Command::Route {
            destination,
            choice,
            places,
        } => {
            let config = RouterConfig::load(cli.config.as_deref())
                .context("failed to load configuration")?;
            let opener: Arc<dyn UrlOpener> = if cli.dry_run {
                Arc::new(DryRunOpener)
            } else {
                Arc::new(CommandOpener)
            };
            let router = NavigationAppRouter::new(Arc::new(probe), opener).with_config(config);
            let presenter = TerminalPresenter::new(choice, palette);
            let args = RouteCommandArgs {
                destination,
                places,
                dry_run: cli.dry_run,
                palette,
            };
            commands::route::handle_route(&router, &presenter, &args)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

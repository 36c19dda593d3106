//! Routing orchestration: probe, present, launch.
//!
//! A request flows through at most two steps:
//!
//! - **Start**: probe the catalog. With no usable third-party app installed
//!   the built-in maps application is launched straight away.
//! - **Awaiting selection**: otherwise the host's [`ChoicePresenter`]
//!   receives a [`ChoiceSheet`] (built-in maps first, then installed apps in
//!   catalog order, then cancel) together with a [`PendingSelection`]. The
//!   request is suspended until the presenter resolves it.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use navrouter_lib::{
//!     ChoiceId, ChoicePresenter, ChoiceSheet, Coordinate, NavigationAppId, NavigationAppRouter,
//!     PendingSelection, RecordingOpener, RouteOutcome, StaticProbe,
//! };
//!
//! struct PickWaze;
//!
//! impl ChoicePresenter for PickWaze {
//!     fn present(&self, _sheet: ChoiceSheet, selection: PendingSelection) {
//!         selection.select(ChoiceId::App(NavigationAppId::Waze));
//!     }
//! }
//!
//! let opener = Arc::new(RecordingOpener::new());
//! let router = NavigationAppRouter::new(
//!     Arc::new(StaticProbe::with_apps([NavigationAppId::Waze])),
//!     opener.clone(),
//! );
//! let coordinate = Coordinate::new(45.5017, -73.5673).unwrap();
//! let outcome = router.route_to_place(coordinate, None, &PickWaze);
//!
//! assert!(matches!(outcome, RouteOutcome::Launched(_)));
//! assert_eq!(opener.opened()[0].as_str(), "waze://?ll=45.5017,-73.5673&navigate=yes");
//! ```

use std::fmt;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

use crate::catalog::{list_installed, NavigationAppId};
use crate::config::RouterConfig;
use crate::default_maps::default_maps_url;
use crate::destination::{Coordinate, Destination};
use crate::error::{BuildError, RouteError};
use crate::platform::{ChoicePresenter, SchemeProbe, UrlOpener};

/// Identifier of an entry in the selection sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceId {
    DefaultMaps,
    App(NavigationAppId),
    Cancel,
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceId::DefaultMaps => f.write_str("default"),
            ChoiceId::App(id) => write!(f, "{id}"),
            ChoiceId::Cancel => f.write_str("cancel"),
        }
    }
}

/// Presentation role of a sheet entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceRole {
    Default,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub id: ChoiceId,
    pub label: String,
    pub role: ChoiceRole,
}

/// Single-choice sheet shown while a request awaits selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceSheet {
    pub title: String,
    pub options: Vec<ChoiceOption>,
}

impl ChoiceSheet {
    pub fn ids(&self) -> Vec<ChoiceId> {
        self.options.iter().map(|option| option.id).collect()
    }
}

/// What ended up being launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchTarget {
    DefaultMaps,
    App(NavigationAppId),
}

/// A URL handed to the opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    pub target: LaunchTarget,
    pub url: Url,
    /// What the opener reported. Informational only.
    pub opened: bool,
}

/// Result of a routing step.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// A URL was handed to the opener.
    Launched(Launch),
    /// The presenter kept the selection for later.
    AwaitingSelection,
    /// The user cancelled or dismissed the sheet.
    Cancelled,
    /// The chosen app's deep link could not be built; nothing was opened.
    Failed(BuildError),
    /// The request was rejected before probing.
    Rejected(RouteError),
}

impl RouteOutcome {
    pub fn launched_url(&self) -> Option<&Url> {
        match self {
            RouteOutcome::Launched(launch) => Some(&launch.url),
            _ => None,
        }
    }
}

/// Opens the resolved target for a destination.
#[derive(Clone)]
struct Launcher {
    opener: Arc<dyn UrlOpener>,
    default_maps_base_url: String,
}

impl Launcher {
    fn launch_default(&self, destination: &Destination) -> RouteOutcome {
        match default_maps_url(&self.default_maps_base_url, destination) {
            Ok(url) => self.open(LaunchTarget::DefaultMaps, url),
            Err(err) => {
                warn!(error = %err, "could not build built-in maps URL");
                RouteOutcome::Failed(err)
            }
        }
    }

    fn launch_app(&self, id: NavigationAppId, destination: &Destination) -> RouteOutcome {
        match id.descriptor().build_url(destination) {
            Ok(url) => self.open(LaunchTarget::App(id), url),
            Err(err) => {
                warn!(app = %id, error = %err, "could not build deep link");
                RouteOutcome::Failed(err)
            }
        }
    }

    fn open(&self, target: LaunchTarget, url: Url) -> RouteOutcome {
        let opened = self.opener.open(&url);
        if opened {
            info!(?target, %url, "opened navigation URL");
        } else {
            warn!(?target, %url, "opener rejected navigation URL");
        }
        RouteOutcome::Launched(Launch {
            target,
            url,
            opened,
        })
    }
}

/// A request suspended on the user's choice.
///
/// Resolve it with [`select`](Self::select) or [`cancel`](Self::cancel).
/// Dropping it unresolved is treated as a dismissal and opens nothing.
pub struct PendingSelection {
    destination: Destination,
    offered: Vec<NavigationAppId>,
    launcher: Launcher,
    resolved: Arc<Mutex<Option<RouteOutcome>>>,
    settled: bool,
}

impl PendingSelection {
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Third-party apps offered in the sheet, in catalog order.
    pub fn offered_apps(&self) -> &[NavigationAppId] {
        &self.offered
    }

    /// Act on the user's choice and return the terminal outcome.
    ///
    /// An app that was not offered is treated as a cancel.
    pub fn select(mut self, choice: ChoiceId) -> RouteOutcome {
        debug!(%choice, "navigation choice selected");
        let outcome = match choice {
            ChoiceId::DefaultMaps => self.launcher.launch_default(&self.destination),
            ChoiceId::App(id) if self.offered.contains(&id) => {
                self.launcher.launch_app(id, &self.destination)
            }
            ChoiceId::App(id) => {
                warn!(app = %id, "selected app was not offered; cancelling");
                RouteOutcome::Cancelled
            }
            ChoiceId::Cancel => RouteOutcome::Cancelled,
        };
        self.settle(outcome.clone());
        outcome
    }

    pub fn cancel(mut self) -> RouteOutcome {
        debug!("navigation choice cancelled");
        self.settle(RouteOutcome::Cancelled);
        RouteOutcome::Cancelled
    }

    fn settle(&mut self, outcome: RouteOutcome) {
        self.settled = true;
        if let Ok(mut slot) = self.resolved.lock() {
            *slot = Some(outcome);
        }
    }
}

impl Drop for PendingSelection {
    fn drop(&mut self) {
        if !self.settled {
            debug!("navigation choice dismissed");
            self.settle(RouteOutcome::Cancelled);
        }
    }
}

impl fmt::Debug for PendingSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSelection")
            .field("destination", &self.destination)
            .field("offered", &self.offered)
            .field("settled", &self.settled)
            .finish()
    }
}

/// Decides how to fulfil a routing request and drives presentation/launch.
#[derive(Clone)]
pub struct NavigationAppRouter {
    probe: Arc<dyn SchemeProbe>,
    opener: Arc<dyn UrlOpener>,
    config: RouterConfig,
}

impl NavigationAppRouter {
    pub fn new(probe: Arc<dyn SchemeProbe>, opener: Arc<dyn UrlOpener>) -> Self {
        Self {
            probe,
            opener,
            config: RouterConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Route to a point, optionally labelled with a place name.
    pub fn route_to_place<P>(
        &self,
        coordinate: Coordinate,
        label: Option<String>,
        presenter: &P,
    ) -> RouteOutcome
    where
        P: ChoicePresenter + ?Sized,
    {
        self.route(Destination::place(coordinate, label), presenter)
    }

    /// Route to a free-text address. Blank addresses are rejected up front.
    pub fn route_to_address<P>(&self, address: &str, presenter: &P) -> RouteOutcome
    where
        P: ChoicePresenter + ?Sized,
    {
        self.route(Destination::address(address), presenter)
    }

    /// Route to any destination.
    ///
    /// Returns the terminal outcome when the built-in maps were launched
    /// directly or the presenter resolved the selection before returning;
    /// [`RouteOutcome::AwaitingSelection`] when it kept the selection.
    pub fn route<P>(&self, destination: Destination, presenter: &P) -> RouteOutcome
    where
        P: ChoicePresenter + ?Sized,
    {
        if let Destination::Address { address } = &destination {
            if address.trim().is_empty() {
                debug!("ignoring routing request with empty address");
                return RouteOutcome::Rejected(RouteError::EmptyAddress);
            }
        }

        let installed = list_installed(self.probe.as_ref());
        let launcher = Launcher {
            opener: Arc::clone(&self.opener),
            default_maps_base_url: self.config.default_maps_base_url.clone(),
        };

        if installed.is_empty() {
            debug!("no third-party navigation app installed; using built-in maps");
            return launcher.launch_default(&destination);
        }

        // Installed apps that cannot handle this kind of destination are left
        // off the sheet, but the sheet is still shown.
        let kind = destination.kind();
        let offered: Vec<NavigationAppId> = installed
            .into_iter()
            .filter(|app| app.supports(kind))
            .map(|app| app.id)
            .collect();

        let sheet = self.sheet_for(&offered);
        let resolved = Arc::new(Mutex::new(None));
        let selection = PendingSelection {
            destination,
            offered,
            launcher,
            resolved: Arc::clone(&resolved),
            settled: false,
        };

        debug!(options = sheet.options.len(), "presenting navigation choices");
        presenter.present(sheet, selection);

        let outcome = resolved.lock().ok().and_then(|mut slot| slot.take());
        outcome.unwrap_or(RouteOutcome::AwaitingSelection)
    }

    fn sheet_for(&self, offered: &[NavigationAppId]) -> ChoiceSheet {
        let mut options = Vec::with_capacity(offered.len() + 2);
        options.push(ChoiceOption {
            id: ChoiceId::DefaultMaps,
            label: self.config.default_maps_label.clone(),
            role: ChoiceRole::Default,
        });
        options.extend(offered.iter().map(|id| ChoiceOption {
            id: ChoiceId::App(*id),
            label: id.descriptor().display_name.to_string(),
            role: ChoiceRole::Default,
        }));
        options.push(ChoiceOption {
            id: ChoiceId::Cancel,
            label: self.config.cancel_label.clone(),
            role: ChoiceRole::Cancel,
        });
        ChoiceSheet {
            title: self.config.sheet_title.clone(),
            options,
        }
    }
}

impl fmt::Debug for NavigationAppRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationAppRouter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

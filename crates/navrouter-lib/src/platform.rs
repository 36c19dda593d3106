//! Capabilities the router consumes from its host platform.
//!
//! The library never talks to the operating system on its own. Hosts supply:
//!
//! - a [`SchemeProbe`] answering "can this URL scheme be opened?",
//! - a [`UrlOpener`] that launches a URL,
//! - a [`ChoicePresenter`] that shows the app selection sheet.
//!
//! [`StaticProbe`], [`RecordingOpener`] and [`CommandOpener`] are ready-made
//! implementations for terminal hosts and tests.

use std::collections::HashSet;
use std::process::Command;
use std::sync::Mutex;

use url::Url;

use crate::catalog::NavigationAppId;
use crate::error::ProbeError;
use crate::router::{ChoiceSheet, PendingSelection};

/// Answers whether a URL scheme (e.g. `waze://`) can be opened.
pub trait SchemeProbe: Send + Sync {
    fn can_open(&self, scheme: &str) -> Result<bool, ProbeError>;
}

impl<F> SchemeProbe for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn can_open(&self, scheme: &str) -> Result<bool, ProbeError> {
        Ok(self(scheme))
    }
}

/// Probe backed by a fixed set of installed schemes.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    schemes: HashSet<String>,
}

impl StaticProbe {
    /// Probe that reports nothing as installed.
    pub fn none() -> Self {
        Self::default()
    }

    /// Probe that reports the given catalog apps as installed.
    pub fn with_apps(ids: impl IntoIterator<Item = NavigationAppId>) -> Self {
        Self {
            schemes: ids
                .into_iter()
                .map(|id| id.descriptor().url_scheme.to_string())
                .collect(),
        }
    }

    /// Probe that reports arbitrary schemes as installed.
    pub fn with_schemes<S: Into<String>>(schemes: impl IntoIterator<Item = S>) -> Self {
        Self {
            schemes: schemes.into_iter().map(Into::into).collect(),
        }
    }
}

impl SchemeProbe for StaticProbe {
    fn can_open(&self, scheme: &str) -> Result<bool, ProbeError> {
        Ok(self.schemes.contains(scheme))
    }
}

/// Launches a URL. The return value reports whether the platform accepted it.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &Url) -> bool;
}

/// Shows the selection sheet and later resolves the pending selection.
///
/// Implementations may resolve `selection` immediately, or keep it and
/// resolve it once the user acts. Dropping it without resolving counts as
/// a cancel.
pub trait ChoicePresenter {
    fn present(&self, sheet: ChoiceSheet, selection: PendingSelection);
}

/// Opener that records every URL it is asked to open.
#[derive(Debug)]
pub struct RecordingOpener {
    opened: Mutex<Vec<Url>>,
    result: bool,
}

impl RecordingOpener {
    /// Opener that reports every launch as successful.
    pub fn new() -> Self {
        Self::with_result(true)
    }

    /// Opener that reports `result` for every launch.
    pub fn with_result(result: bool) -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            result,
        }
    }

    /// URLs opened so far, oldest first.
    pub fn opened(&self) -> Vec<Url> {
        self.opened
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl Default for RecordingOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &Url) -> bool {
        if let Ok(mut urls) = self.opened.lock() {
            urls.push(url.clone());
        }
        self.result
    }
}

/// Opener that hands URLs to the desktop's URL handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandOpener;

impl UrlOpener for CommandOpener {
    fn open(&self, url: &Url) -> bool {
        let Some(mut command) = open_command(url) else {
            tracing::warn!(%url, "opening URLs is not supported on this platform");
            return false;
        };
        match command.status() {
            Ok(status) if status.success() => true,
            Ok(status) => {
                tracing::warn!(%url, %status, "URL handler exited unsuccessfully");
                false
            }
            Err(err) => {
                tracing::warn!(%url, error = %err, "failed to run URL handler");
                false
            }
        }
    }
}

#[cfg(target_os = "macos")]
fn open_command(url: &Url) -> Option<Command> {
    let mut command = Command::new("open");
    command.arg(url.as_str());
    Some(command)
}

#[cfg(target_os = "linux")]
fn open_command(url: &Url) -> Option<Command> {
    let mut command = Command::new("xdg-open");
    command.arg(url.as_str());
    Some(command)
}

#[cfg(target_os = "windows")]
fn open_command(url: &Url) -> Option<Command> {
    let mut command = Command::new("cmd");
    command.arg("/C").arg("start").arg("").arg(url.as_str());
    Some(command)
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn open_command(_url: &Url) -> Option<Command> {
    None
}

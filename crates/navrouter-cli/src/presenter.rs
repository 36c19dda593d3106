//! Terminal implementation of the selection sheet.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use navrouter_lib::{ChoiceId, ChoicePresenter, ChoiceSheet, NavigationAppId, PendingSelection};

use crate::output::render_sheet;
use crate::terminal::ColorPalette;

/// Parse a `--choice` value: `default`, `cancel` or an app id.
pub fn parse_choice(value: &str) -> Result<ChoiceId> {
    match value.trim().to_ascii_lowercase().as_str() {
        "default" | "maps" => Ok(ChoiceId::DefaultMaps),
        "cancel" => Ok(ChoiceId::Cancel),
        other => Ok(ChoiceId::App(other.parse::<NavigationAppId>()?)),
    }
}

/// Resolve a line typed at the prompt against the sheet.
///
/// Accepts a 1-based index or anything [`parse_choice`] accepts. Returns
/// `None` for input that matches nothing in the sheet.
pub fn resolve_input(input: &str, sheet: &ChoiceSheet) -> Option<ChoiceId> {
    let input = input.trim();
    if let Ok(index) = input.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| sheet.options.get(i))
            .map(|option| option.id);
    }
    parse_choice(input)
        .ok()
        .filter(|choice| sheet.options.iter().any(|option| option.id == *choice))
}

/// Prints the sheet and resolves it from a preset choice or from stdin.
#[derive(Debug, Clone, Default)]
pub struct TerminalPresenter {
    preset: Option<ChoiceId>,
    palette: ColorPalette,
}

impl TerminalPresenter {
    pub fn new(preset: Option<ChoiceId>, palette: ColorPalette) -> Self {
        Self { preset, palette }
    }

    fn read_choice(&self, sheet: &ChoiceSheet) -> Option<ChoiceId> {
        print!("Select an option: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!();
                None
            }
            Ok(_) => resolve_input(&line, sheet),
        }
    }
}

impl ChoicePresenter for TerminalPresenter {
    fn present(&self, sheet: ChoiceSheet, selection: PendingSelection) {
        print!("{}", render_sheet(&sheet, &self.palette));

        let choice = match self.preset {
            Some(choice) => Some(choice),
            None => self.read_choice(&sheet),
        };

        match choice {
            Some(choice) => {
                tracing::debug!(%choice, "terminal selection");
                selection.select(choice);
            }
            None => {
                tracing::debug!("no valid selection; dismissing");
                drop(selection);
            }
        }
    }
}

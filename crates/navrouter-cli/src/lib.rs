//! Navigation router CLI library.
//!
//! Terminal pieces for the `navrouter-cli` host: styling, rendering of the
//! catalog and the selection sheet, and the stdin-backed presenter.

pub mod output;
pub mod presenter;
pub mod terminal;

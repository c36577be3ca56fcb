//! Terminal user interface for the kiosk canned-command widget.
//!
//! This crate draws a single-session fake terminal: a transcript of canned
//! command output above an always-focused input line, with recall on the
//! arrow keys and clickable links in the output. All session semantics live
//! in `kiosk-core`; this crate is the event loop and the projection of that
//! state onto the screen.

pub mod application;
pub mod configuration;
pub mod domain;

pub use application::ui::destruct_terminal_for_panic;
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, Event};
pub use domain::services::{AppState, AppStateProps};

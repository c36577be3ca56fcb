//! Session engine for the kiosk canned-command terminal.
//!
//! This crate holds everything that makes the widget tick without knowing
//! anything about how it is drawn: the command registry, the transcript,
//! the recall state machine, and link segmentation for output lines. The
//! terminal front end in `kiosk-term` is a projection of the [`Session`]
//! state owned here.

pub mod content;
pub mod errors;
pub mod linkify;
pub mod registry;
pub mod session;

pub use content::{CommandEntry, ContentSet};
pub use errors::ContentError;
pub use linkify::Segment;
pub use registry::CommandRegistry;
pub use session::{CommandRecord, RecallCursor, Session, Submission};

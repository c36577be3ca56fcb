//! Core domain logic for the terminal interface.
//!
//! The models describe what can happen (events and actions); the services
//! own the session state, the event source, and the background work.

pub mod models;
pub mod services;

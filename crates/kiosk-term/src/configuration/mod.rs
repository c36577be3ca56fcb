//! Process-wide configuration resolved from defaults, an optional
//! `config.toml`, and command line flags, in that order of precedence.

pub mod config;

pub use config::Config;
pub use config::ConfigKey;

//! Application layer orchestrating the terminal interface.
//!
//! This module handles command-line parsing, content loading, and the main
//! UI loop. It wires the domain services to the terminal.

pub mod cli;
pub mod ui;

use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use kiosk_core::ContentSet;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::services::ActionsService;
use crate::domain::services::AppStateProps;
use crate::domain::services::SystemOpener;

pub async fn start() -> Result<()> {
    let content = load_content()?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    tokio::spawn(async move {
        let _ = ActionsService::start(Box::new(SystemOpener {}), &mut action_rx).await;
    });

    let props = AppStateProps {
        content,
        prompt: Config::get(ConfigKey::Prompt),
    };

    return ui::start(props, action_tx).await;
}

fn load_content() -> Result<ContentSet> {
    let path = Config::get(ConfigKey::ContentFile);
    if path.is_empty() {
        return Ok(ContentSet::default());
    }

    let content = ContentSet::load(Path::new(&path))
        .with_context(|| format!("loading content set from '{path}'"))?;
    tracing::debug!(path, commands = content.commands.len(), "loaded content set");
    return Ok(content);
}

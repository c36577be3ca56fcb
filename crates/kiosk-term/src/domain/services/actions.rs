use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;

/// Seam for opening a link outside the TUI, so the service can be exercised
/// in tests without launching a browser.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

pub struct SystemOpener {}

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        webbrowser::open(url)?;
        return Ok(());
    }
}

pub struct ActionsService {}

impl ActionsService {
    /// Drains the action channel for the lifetime of the UI. Failures are
    /// logged and never surface in the transcript.
    pub async fn start(
        opener: Box<dyn LinkOpener>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        loop {
            if let Some(action) = rx.recv().await {
                match action {
                    Action::OpenLink(url) => {
                        tracing::debug!(url = url.as_str(), "opening link");
                        if let Err(err) = opener.open(&url) {
                            tracing::warn!(url = url.as_str(), error = ?err, "failed to open link");
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    struct MockOpener {
        opened_tx: mpsc::UnboundedSender<String>,
    }

    impl LinkOpener for MockOpener {
        fn open(&self, url: &str) -> Result<()> {
            self.opened_tx.send(url.to_string()).unwrap();
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_start_opens_requested_links_in_order() {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
        let (opened_tx, mut opened_rx) = mpsc::unbounded_channel::<String>();

        tokio::spawn(async move {
            ActionsService::start(Box::new(MockOpener { opened_tx }), &mut action_rx)
                .await
                .unwrap();
        });

        action_tx
            .send(Action::OpenLink("https://example.com".to_string()))
            .unwrap();
        action_tx
            .send(Action::OpenLink("mailto:hello@example.com".to_string()))
            .unwrap();

        assert_eq!(opened_rx.recv().await.unwrap(), "https://example.com");
        assert_eq!(opened_rx.recv().await.unwrap(), "mailto:hello@example.com");
    }
}

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use kiosk_core::ContentSet;
use kiosk_core::Session;
use kiosk_core::Submission;
use ratatui::layout::Position;
use ratatui::prelude::Rect;

use super::Scroll;
use super::TranscriptList;

pub struct AppStateProps {
    pub content: ContentSet,
    pub prompt: String,
}

/// Everything the render pass reads: the session itself plus the rendered
/// transcript lines and the scroll offset derived from it. All derived state
/// is refreshed by the same code path that mutates the session, never by the
/// render pass.
pub struct AppState {
    pub session: Session,
    pub transcript_list: TranscriptList,
    pub scroll: Scroll,
    pub last_known_width: usize,
    pub last_known_height: usize,
    pub prompt: String,
    transcript_area: Rect,
}

impl AppState {
    pub fn new(props: AppStateProps) -> AppState {
        let mut app_state = AppState {
            session: Session::new(&props.content),
            transcript_list: TranscriptList::default(),
            scroll: Scroll::default(),
            last_known_width: 0,
            last_known_height: 0,
            prompt: props.prompt,
            transcript_area: Rect::default(),
        };

        app_state.sync_dependants();
        return app_state;
    }

    /// Called on every render with the transcript viewport so scroll bounds
    /// and pointer hit-testing track the current terminal size.
    pub fn set_rect(&mut self, rect: Rect) {
        self.transcript_area = rect;
        self.last_known_width = rect.width.into();
        self.last_known_height = rect.height.into();
        self.sync_dependants();
    }

    /// Mirrors the input widget into the session buffer.
    pub fn set_input_buffer(&mut self, text: String) {
        self.session.set_buffer(text);
    }

    /// Submits the session buffer and, when the transcript changed, snaps
    /// the view to its end.
    pub fn submit(&mut self) -> Submission {
        let outcome = self.session.submit();
        if outcome != Submission::Ignored {
            self.sync_dependants();
            self.scroll.last();
        }

        return outcome;
    }

    pub fn recall_previous(&mut self) -> bool {
        return self.session.recall_previous();
    }

    pub fn recall_next(&mut self) -> bool {
        return self.session.recall_next();
    }

    /// Resolves a pointer position in screen coordinates to the link under
    /// it, if the click landed on one.
    pub fn link_at_screen(&self, column: u16, row: u16) -> Option<&str> {
        if !self.transcript_area.contains(Position { x: column, y: row }) {
            return None;
        }

        let list_row = self.scroll.position + usize::from(row - self.transcript_area.y);
        let list_column = usize::from(column - self.transcript_area.x);
        return self.transcript_list.link_at(list_row, list_column);
    }

    fn sync_dependants(&mut self) {
        self.transcript_list.set_records(
            self.session.transcript(),
            &self.prompt,
            self.last_known_width,
        );

        let was_at_last = self.scroll.is_position_at_last();
        self.scroll
            .set_state(self.transcript_list.len(), self.last_known_height);
        if was_at_last {
            self.scroll.last();
        }
    }
}

#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

use ratatui::widgets::ScrollbarState;

/// Vertical offset of the transcript view plus the scrollbar it drives.
/// Positions are line offsets into the rendered transcript.
#[derive(Default)]
pub struct Scroll {
    pub position: usize,
    pub scrollbar_state: ScrollbarState,
    list_length: usize,
    viewport_length: usize,
}

impl Scroll {
    pub fn set_state(&mut self, list_length: usize, viewport_length: usize) {
        self.list_length = list_length;
        self.viewport_length = viewport_length;
        let max = self.max_position();
        if self.position > max {
            self.position = max;
        }
        self.sync_scrollbar();
    }

    pub fn is_position_at_last(&self) -> bool {
        return self.position >= self.max_position();
    }

    pub fn last(&mut self) {
        self.position = self.max_position();
        self.sync_scrollbar();
    }

    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
        self.sync_scrollbar();
    }

    pub fn down(&mut self) {
        self.position = (self.position + 1).min(self.max_position());
        self.sync_scrollbar();
    }

    pub fn page_up(&mut self) {
        self.position = self.position.saturating_sub(self.viewport_length.max(1));
        self.sync_scrollbar();
    }

    pub fn page_down(&mut self) {
        self.position =
            (self.position + self.viewport_length.max(1)).min(self.max_position());
        self.sync_scrollbar();
    }

    fn max_position(&self) -> usize {
        // Paragraph scroll offsets are u16; positions past that are not
        // renderable.
        return self
            .list_length
            .saturating_sub(self.viewport_length)
            .min(usize::from(u16::MAX));
    }

    fn sync_scrollbar(&mut self) {
        self.scrollbar_state = ScrollbarState::new(self.max_position()).position(self.position);
    }
}

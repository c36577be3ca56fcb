#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use crate::content::ContentSet;
use crate::registry::CommandRegistry;

/// One executed command: the raw input as typed, plus the lines it produced.
/// Immutable once appended to the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandRecord {
    pub input: String,
    pub output: Vec<String>,
}

/// Position of the Up/Down traversal through previously submitted strings.
/// `Recalling(i)` always satisfies `i < recall list length`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecallCursor {
    Idle,
    Recalling(usize),
}

/// What a submission did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Empty or whitespace-only buffer; nothing changed.
    Ignored,
    /// The input was `clear`; the transcript was reset.
    Cleared,
    /// A record was appended to the transcript.
    Executed,
}

/// The entire state of one widget session.
///
/// Every mutation goes through the operations below; the presentation layer
/// re-reads this struct after each one and never mutates it directly.
pub struct Session {
    registry: CommandRegistry,
    transcript: Vec<CommandRecord>,
    recall: Vec<String>,
    cursor: RecallCursor,
    buffer: String,
}

impl Session {
    /// Starts a session seeded with a single synthetic banner record.
    pub fn new(content: &ContentSet) -> Session {
        Session {
            registry: CommandRegistry::new(content),
            transcript: vec![CommandRecord {
                input: String::new(),
                output: content.banner.clone(),
            }],
            recall: Vec::new(),
            cursor: RecallCursor::Idle,
            buffer: String::new(),
        }
    }

    pub fn transcript(&self) -> &[CommandRecord] {
        &self.transcript
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Mirrors an edit of the input field. Typing never moves the recall
    /// cursor; only a submission resets it.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn recall_cursor(&self) -> RecallCursor {
        self.cursor
    }

    /// Submits the current buffer. Total over all buffer contents: every
    /// input is ignored, clears the transcript, or appends exactly one
    /// record. Never signals an error.
    pub fn submit(&mut self) -> Submission {
        let raw = self.buffer.clone();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Submission::Ignored;
        }

        self.recall.push(raw.clone());
        self.cursor = RecallCursor::Idle;
        self.buffer.clear();

        let key = trimmed.to_lowercase();
        if key == "clear" {
            self.transcript.clear();
            return Submission::Cleared;
        }

        let output = match self.registry.resolve(&key) {
            Some(lines) => lines.to_vec(),
            None => CommandRegistry::not_found(&raw),
        };
        self.transcript.push(CommandRecord { input: raw, output });
        Submission::Executed
    }

    /// Up: moves towards older submissions, clamped at the oldest. Returns
    /// true when the buffer was overwritten.
    pub fn recall_previous(&mut self) -> bool {
        if self.recall.is_empty() {
            return false;
        }

        let index = match self.cursor {
            RecallCursor::Idle => self.recall.len() - 1,
            RecallCursor::Recalling(i) => i.saturating_sub(1),
        };
        self.cursor = RecallCursor::Recalling(index);
        self.buffer = self.recall[index].clone();
        true
    }

    /// Down: moves towards newer submissions; stepping past the newest
    /// returns to `Idle` with an empty buffer. Returns true when the buffer
    /// was overwritten.
    pub fn recall_next(&mut self) -> bool {
        let i = match self.cursor {
            RecallCursor::Idle => return false,
            RecallCursor::Recalling(i) => i,
        };

        if i + 1 < self.recall.len() {
            self.cursor = RecallCursor::Recalling(i + 1);
            self.buffer = self.recall[i + 1].clone();
        } else {
            self.cursor = RecallCursor::Idle;
            self.buffer.clear();
        }
        true
    }
}

#[cfg(test)]
#[path = "transcript_list_test.rs"]
mod tests;

use std::ops::Range;

use kiosk_core::linkify;
use kiosk_core::CommandRecord;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;

const OUTPUT_INDENT: &str = "  ";

#[derive(Clone, Copy, PartialEq, Eq)]
enum PieceKind {
    Prompt,
    Text,
    Link,
}

struct LinkHit {
    row: usize,
    columns: Range<usize>,
    url: String,
}

/// The transcript rendered to styled lines, rebuilt with the viewport width
/// after every transcript mutation. Rows wrap at display-width boundaries so
/// narrow terminals never clip content, and the screen ranges of link
/// segments are kept per wrapped row so pointer clicks can be hit-tested
/// against them.
#[derive(Default)]
pub struct TranscriptList {
    lines: Vec<Line<'static>>,
    links: Vec<LinkHit>,
}

impl TranscriptList {
    /// Rebuilds the rendered lines. A `width` of zero means the viewport is
    /// not known yet and disables wrapping.
    pub fn set_records(&mut self, records: &[CommandRecord], prompt: &str, width: usize) {
        self.lines.clear();
        self.links.clear();
        let limit = if width == 0 { usize::MAX } else { width };

        for record in records {
            // The banner record has no input and gets no prompt echo.
            if !record.input.is_empty() {
                self.push_wrapped(
                    vec![
                        (format!("{prompt} "), PieceKind::Prompt),
                        (record.input.clone(), PieceKind::Text),
                    ],
                    limit,
                );
            }

            for line in &record.output {
                let mut pieces = vec![(OUTPUT_INDENT.to_string(), PieceKind::Text)];
                for segment in linkify::segments(line) {
                    let kind = if segment.is_link() {
                        PieceKind::Link
                    } else {
                        PieceKind::Text
                    };
                    pieces.push((segment.text().to_string(), kind));
                }
                self.push_wrapped(pieces, limit);
            }
        }
    }

    /// Wraps one logical line into rows of at most `limit` display columns.
    /// A link split by the wrap gets one hit range per row, all resolving to
    /// the full URL.
    fn push_wrapped(&mut self, pieces: Vec<(String, PieceKind)>, limit: usize) {
        let base = self.lines.len();
        let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
        let mut current: Vec<Span<'static>> = Vec::new();
        let mut links: Vec<LinkHit> = Vec::new();
        let mut column = 0usize;

        for (text, kind) in &pieces {
            let mut fragment = String::new();
            let mut fragment_start = column;

            for ch in text.chars() {
                let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if column + char_width > limit && column > 0 {
                    if !fragment.is_empty() {
                        if *kind == PieceKind::Link {
                            links.push(LinkHit {
                                row: base + rows.len(),
                                columns: fragment_start..column,
                                url: text.clone(),
                            });
                        }
                        current.push(styled_span(std::mem::take(&mut fragment), *kind));
                    }
                    rows.push(std::mem::take(&mut current));
                    column = 0;
                    fragment_start = 0;
                }
                fragment.push(ch);
                column += char_width;
            }

            if !fragment.is_empty() {
                if *kind == PieceKind::Link {
                    links.push(LinkHit {
                        row: base + rows.len(),
                        columns: fragment_start..column,
                        url: text.clone(),
                    });
                }
                current.push(styled_span(fragment, *kind));
            }
        }
        rows.push(current);

        for spans in rows {
            self.lines.push(Line::from(spans));
        }
        self.links.extend(links);
    }

    pub fn lines(&self) -> &[Line<'static>] {
        return &self.lines;
    }

    pub fn len(&self) -> usize {
        return self.lines.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.lines.is_empty();
    }

    /// Looks up the link under a transcript coordinate, if any. `row` is an
    /// index into the rendered rows, `column` a display-column offset within
    /// it, matching how the terminal positions the glyphs on screen.
    pub fn link_at(&self, row: usize, column: usize) -> Option<&str> {
        self.links
            .iter()
            .find(|hit| return hit.row == row && hit.columns.contains(&column))
            .map(|hit| return hit.url.as_str())
    }
}

fn styled_span(text: String, kind: PieceKind) -> Span<'static> {
    match kind {
        PieceKind::Prompt => Span::styled(
            text,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        PieceKind::Text => Span::from(text),
        PieceKind::Link => Span::styled(
            text,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
    }
}

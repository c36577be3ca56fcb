#[cfg(test)]
#[path = "linkify_test.rs"]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;

// RFC 3986 characters only; anything else (whitespace, quotes, angle
// brackets, prose punctuation like a trailing `<`) terminates the link so
// surrounding text is never absorbed into it.
static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:https?://|mailto:)[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=%]+")
        .expect("link pattern compiles")
});

/// One renderable piece of an output line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Link(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Text(text) => text,
            Segment::Link(url) => url,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Segment::Link(_))
    }
}

/// Splits one line into plain-text and link segments, left to right and
/// non-overlapping. Concatenating the segment texts reproduces the line
/// exactly; an empty line yields no segments.
pub fn segments(line: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut last = 0;

    for found in LINK_RE.find_iter(line) {
        if found.start() > last {
            out.push(Segment::Text(line[last..found.start()].to_string()));
        }
        out.push(Segment::Link(found.as_str().to_string()));
        last = found.end();
    }

    if last < line.len() {
        out.push(Segment::Text(line[last..].to_string()));
    }
    out
}

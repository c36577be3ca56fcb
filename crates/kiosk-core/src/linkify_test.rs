use super::*;

fn round_trip(line: &str) {
    let joined = segments(line)
        .iter()
        .map(|segment| segment.text())
        .collect::<String>();
    assert_eq!(joined, line);
}

#[test]
fn test_plain_text_is_one_segment() {
    let segs = segments("no links here");
    assert_eq!(segs, vec![Segment::Text("no links here".to_string())]);
}

#[test]
fn test_empty_line_yields_no_segments() {
    assert!(segments("").is_empty());
}

#[test]
fn test_detects_http_https_and_mailto() {
    let segs = segments("see https://example.com or http://old.example.com or mailto:a@b.c");
    let links: Vec<&Segment> = segs.iter().filter(|segment| segment.is_link()).collect();

    assert_eq!(
        links,
        vec![
            &Segment::Link("https://example.com".to_string()),
            &Segment::Link("http://old.example.com".to_string()),
            &Segment::Link("mailto:a@b.c".to_string()),
        ]
    );
}

#[test]
fn test_link_keeps_surrounding_text_intact() {
    let segs = segments("  - Photos: https://photos.example.com/gallery done");
    assert_eq!(
        segs,
        vec![
            Segment::Text("  - Photos: ".to_string()),
            Segment::Link("https://photos.example.com/gallery".to_string()),
            Segment::Text(" done".to_string()),
        ]
    );
}

#[test]
fn test_whitespace_terminates_a_link() {
    let segs = segments("https://example.com next");
    assert_eq!(segs[0], Segment::Link("https://example.com".to_string()));
    assert_eq!(segs[1], Segment::Text(" next".to_string()));
}

#[test]
fn test_quote_and_angle_bracket_terminate_a_link() {
    let segs = segments("\"https://example.com\" and <https://example.com>");
    let links: Vec<&Segment> = segs.iter().filter(|segment| segment.is_link()).collect();

    assert_eq!(links.len(), 2);
    for link in links {
        assert_eq!(link.text(), "https://example.com");
    }
}

#[test]
fn test_url_punctuation_stays_inside_the_link() {
    // Query strings, fragments and parens are all RFC 3986 characters.
    let segs = segments("go to https://example.com/a(b)?q=1&x=2#frag now");
    assert_eq!(
        segs[1],
        Segment::Link("https://example.com/a(b)?q=1&x=2#frag".to_string())
    );
}

#[test]
fn test_bare_scheme_is_not_a_link() {
    let segs = segments("https:// is not a destination");
    assert!(segs.iter().all(|segment| !segment.is_link()));
}

#[test]
fn test_line_starting_and_ending_with_links() {
    let segs = segments("https://a.example mailto:x@y.z");
    assert_eq!(
        segs,
        vec![
            Segment::Link("https://a.example".to_string()),
            Segment::Text(" ".to_string()),
            Segment::Link("mailto:x@y.z".to_string()),
        ]
    );
}

#[test]
fn test_round_trip_reproduces_the_line() {
    for line in [
        "",
        "plain",
        "  indented text with no url",
        "https://example.com",
        "pre https://example.com post",
        "a mailto:one@example.com b http://two.example.com c",
        "\"https://quoted.example.com\", trailing",
        "unicode before link \u{2022} https://example.com/\u{2014}after",
    ] {
        round_trip(line);
    }
}

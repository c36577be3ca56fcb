use kiosk_core::ContentSet;
use kiosk_core::Submission;
use ratatui::prelude::Rect;

use super::*;

fn app_state() -> AppState {
    let mut app_state = AppState::new(AppStateProps {
        content: ContentSet::default(),
        prompt: "$".to_string(),
    });
    app_state.set_rect(Rect::new(0, 0, 80, 10));
    app_state
}

fn submit(app_state: &mut AppState, text: &str) -> Submission {
    app_state.set_input_buffer(text.to_string());
    app_state.submit()
}

#[test]
fn test_starts_with_banner_lines_rendered() {
    let app_state = app_state();

    assert_eq!(
        app_state.transcript_list.len(),
        ContentSet::default().banner.len()
    );
    assert_eq!(app_state.scroll.position, 0);
}

#[test]
fn test_submission_snaps_scroll_to_bottom() {
    let mut app_state = app_state();

    submit(&mut app_state, "help");
    submit(&mut app_state, "about");
    assert!(app_state.transcript_list.len() > 10);
    assert!(app_state.scroll.is_position_at_last());
    assert!(app_state.scroll.position > 0);
}

#[test]
fn test_scrolled_up_view_follows_new_records() {
    let mut app_state = app_state();
    submit(&mut app_state, "help");
    submit(&mut app_state, "interests");

    app_state.scroll.page_up();
    assert!(!app_state.scroll.is_position_at_last());

    submit(&mut app_state, "about");
    assert!(app_state.scroll.is_position_at_last());
}

#[test]
fn test_ignored_submission_changes_nothing() {
    let mut app_state = app_state();
    let lines_before = app_state.transcript_list.len();

    assert_eq!(submit(&mut app_state, "   "), Submission::Ignored);
    assert_eq!(app_state.transcript_list.len(), lines_before);
}

#[test]
fn test_clear_empties_the_rendered_transcript() {
    let mut app_state = app_state();
    submit(&mut app_state, "help");

    assert_eq!(submit(&mut app_state, "clear"), Submission::Cleared);
    assert!(app_state.transcript_list.is_empty());
    assert_eq!(app_state.scroll.position, 0);
}

#[test]
fn test_recall_round_trip_through_app_state() {
    let mut app_state = app_state();
    submit(&mut app_state, "help");
    submit(&mut app_state, "about");

    assert!(app_state.recall_previous());
    assert_eq!(app_state.session.buffer(), "about");
    assert!(app_state.recall_previous());
    assert_eq!(app_state.session.buffer(), "help");
    assert!(app_state.recall_next());
    assert!(app_state.recall_next());
    assert_eq!(app_state.session.buffer(), "");
}

#[test]
fn test_link_hit_testing_in_screen_coordinates() {
    let mut app_state = AppState::new(AppStateProps {
        content: ContentSet::default(),
        prompt: "$".to_string(),
    });
    // Transcript viewport offset from the screen origin.
    app_state.set_rect(Rect::new(2, 1, 78, 30));

    submit(&mut app_state, "clear");
    submit(&mut app_state, "contact");

    // Row 0: echo. Row 1: "Get in touch:". Row 2: "". Row 3 holds the mailto.
    let row = 3;
    let line = "  - Email: ";
    let column = 2 + line.len() as u16 + 2; // screen x = area.x + indent + offset into link
    assert_eq!(
        app_state.link_at_screen(column, 1 + row),
        Some("mailto:hello@example.com")
    );

    // Outside the transcript area nothing matches.
    assert!(app_state.link_at_screen(column, 0).is_none());
    assert!(app_state.link_at_screen(0, 1 + row).is_none());
}

use super::*;

#[test]
fn test_short_list_never_scrolls() {
    let mut scroll = Scroll::default();
    scroll.set_state(5, 10);

    assert_eq!(scroll.position, 0);
    assert!(scroll.is_position_at_last());
    scroll.down();
    assert_eq!(scroll.position, 0);
}

#[test]
fn test_last_jumps_to_the_bottom() {
    let mut scroll = Scroll::default();
    scroll.set_state(30, 10);
    assert!(!scroll.is_position_at_last());

    scroll.last();
    assert_eq!(scroll.position, 20);
    assert!(scroll.is_position_at_last());
}

#[test]
fn test_up_and_down_clamp_at_the_edges() {
    let mut scroll = Scroll::default();
    scroll.set_state(12, 10);

    scroll.up();
    assert_eq!(scroll.position, 0);

    scroll.down();
    scroll.down();
    scroll.down();
    assert_eq!(scroll.position, 2);
}

#[test]
fn test_paging_moves_by_viewport() {
    let mut scroll = Scroll::default();
    scroll.set_state(100, 10);

    scroll.page_down();
    assert_eq!(scroll.position, 10);
    scroll.page_down();
    assert_eq!(scroll.position, 20);
    scroll.page_up();
    assert_eq!(scroll.position, 10);
    scroll.page_up();
    scroll.page_up();
    assert_eq!(scroll.position, 0);
}

#[test]
fn test_position_stays_within_paragraph_scroll_range() {
    let mut scroll = Scroll::default();
    scroll.set_state(100_000, 10);

    scroll.last();
    assert_eq!(scroll.position, usize::from(u16::MAX));
    assert!(scroll.is_position_at_last());
}

#[test]
fn test_shrinking_list_clamps_position() {
    let mut scroll = Scroll::default();
    scroll.set_state(100, 10);
    scroll.last();
    assert_eq!(scroll.position, 90);

    scroll.set_state(20, 10);
    assert_eq!(scroll.position, 10);
    assert!(scroll.is_position_at_last());
}

use tui_textarea::Input;

#[derive(Debug)]
pub enum Event {
    KeyboardCharInput(Input),
    KeyboardCTRLC,
    KeyboardEnter,
    KeyboardPaste(String),
    HistoryPrevious,
    HistoryNext,
    PointerClick { column: u16, row: u16 },
    UITick,
    UIScrollUp,
    UIScrollDown,
    UIScrollPageUp,
    UIScrollPageDown,
}

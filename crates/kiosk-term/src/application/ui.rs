use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use kiosk_core::Submission;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Frame;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::TextArea;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;
use crate::domain::services::EventsService;

/// Best-effort terminal restore used from the panic hook, where no state is
/// available.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(props: AppStateProps, tx: mpsc::UnboundedSender<Action>) -> Result<()> {
    let mut stdout = io::stdout().lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let result = start_loop(&mut terminal, props, tx).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    let _ = crossterm::execute!(io::stdout(), cursor::Show);

    return result;
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    props: AppStateProps,
    tx: mpsc::UnboundedSender<Action>,
) -> Result<()> {
    let mut app_state = AppState::new(props);
    let mut events = EventsService::new();
    let mut textarea = build_textarea();

    loop {
        terminal.draw(|frame| render(frame, &mut app_state, &textarea))?;

        match events.next().await? {
            Event::KeyboardCTRLC => {
                return Ok(());
            }
            Event::KeyboardCharInput(input) => {
                textarea.input(input);
                app_state.set_input_buffer(current_input(&textarea));
            }
            Event::KeyboardPaste(text) => {
                // The input is a single line; pasted newlines become spaces.
                textarea.insert_str(text.replace(['\r', '\n'], " "));
                app_state.set_input_buffer(current_input(&textarea));
            }
            Event::KeyboardEnter => {
                app_state.set_input_buffer(current_input(&textarea));
                if app_state.submit() != Submission::Ignored {
                    set_input_text(&mut textarea, "");
                }
            }
            Event::HistoryPrevious => {
                if app_state.recall_previous() {
                    let recalled = app_state.session.buffer().to_string();
                    set_input_text(&mut textarea, &recalled);
                }
            }
            Event::HistoryNext => {
                if app_state.recall_next() {
                    let recalled = app_state.session.buffer().to_string();
                    set_input_text(&mut textarea, &recalled);
                }
            }
            Event::PointerClick { column, row } => {
                if let Some(url) = app_state.link_at_screen(column, row) {
                    tx.send(Action::OpenLink(url.to_string()))?;
                }
            }
            Event::UIScrollUp => {
                app_state.scroll.up();
            }
            Event::UIScrollDown => {
                app_state.scroll.down();
            }
            Event::UIScrollPageUp => {
                app_state.scroll.page_up();
            }
            Event::UIScrollPageDown => {
                app_state.scroll.page_down();
            }
            Event::UITick => {}
        }
    }
}

fn render(frame: &mut Frame<'_>, app_state: &mut AppState, textarea: &TextArea<'_>) {
    let [transcript_area, input_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
    app_state.set_rect(transcript_area);

    let transcript = Paragraph::new(Text::from(app_state.transcript_list.lines().to_vec()))
        .scroll((u16::try_from(app_state.scroll.position).unwrap_or(u16::MAX), 0));
    frame.render_widget(transcript, transcript_area);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        transcript_area,
        &mut app_state.scroll.scrollbar_state,
    );

    let prompt_width = app_state.prompt.chars().count() as u16 + 1;
    let [prompt_area, field_area] =
        Layout::horizontal([Constraint::Length(prompt_width), Constraint::Min(1)])
            .areas(input_area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{} ", app_state.prompt),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        prompt_area,
    );
    frame.render_widget(textarea, field_area);
}

fn build_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    return textarea;
}

fn current_input(textarea: &TextArea<'_>) -> String {
    return textarea.lines().first().cloned().unwrap_or_default();
}

fn set_input_text(textarea: &mut TextArea<'_>, text: &str) {
    textarea.select_all();
    textarea.cut();
    textarea.insert_str(text);
}

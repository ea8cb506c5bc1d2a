//! Terminal lifecycle and the draw/event loop
//!
//! One iteration per frame: prune expired messages, clamp cursors against
//! the freshly derived page, draw, then handle at most one input event.
//! Gallery state is read straight from the session each frame; nothing is
//! cached between iterations.

use super::error::Result;
use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, Focus, Mode};
use super::theme::Theme;
use super::widgets::{DetailModal, FilterPanel, GalleryGrid, HelpOverlay, SearchBar, StatusBar};
use crate::config::FolioConfig;
use crate::gallery::GallerySession;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Width of the filter panel column
const FILTER_PANEL_WIDTH: u16 = 30;

/// Run the interactive gallery browser until the user quits
///
/// # Errors
///
/// Returns `UiError` if the terminal cannot be configured or drawing fails.
pub fn run(session: &mut GallerySession, config: &FolioConfig) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let theme = Theme::default();
    let mut state = AppState::new();

    let result = run_loop(&mut terminal, session, &mut state, &theme, config);

    cleanup_terminal()?;
    result
}

/// Setup terminal for TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

/// Cleanup terminal after TUI
fn cleanup_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut GallerySession,
    state: &mut AppState,
    theme: &Theme,
    config: &FolioConfig,
) -> Result<()> {
    loop {
        state.prune_messages();
        state.clamp_cursors(
            session.current_page_items().len(),
            session.all_tags().len(),
        );

        terminal.draw(|frame| draw(frame, session, state, theme, config))?;

        match poll_and_handle(state, session, Duration::from_millis(100))? {
            EventResult::Quit => return Ok(()),
            EventResult::Continue | EventResult::Ignored => {}
        }

        if state.should_exit {
            return Ok(());
        }
    }
}

fn draw(
    frame: &mut Frame,
    session: &GallerySession,
    state: &AppState,
    theme: &Theme,
    config: &FolioConfig,
) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
    ])
    .split(frame.area());

    frame.render_widget(
        SearchBar::new(&session.query().search_text, theme)
            .focused(state.focus == Focus::Items && state.mode == Mode::Normal),
        chunks[0],
    );

    let main = Layout::horizontal([
        Constraint::Length(FILTER_PANEL_WIDTH),
        Constraint::Min(20),
    ])
    .split(chunks[1]);

    frame.render_widget(FilterPanel::new(session, state, theme), main[0]);
    frame.render_widget(
        GalleryGrid::new(session, state, theme, &config.brand_name),
        main[1],
    );

    let cli_preview = session.query().to_string();
    frame.render_widget(
        StatusBar::new(state.latest_message(), &cli_preview, theme),
        chunks[2],
    );

    match state.mode {
        Mode::Detail => {
            if let Some(item) = session.selected_item() {
                frame.render_widget(
                    DetailModal::new(item, session.detail().active_image_index(), theme),
                    frame.area(),
                );
            }
        }
        Mode::Help => frame.render_widget(HelpOverlay::new(theme), frame.area()),
        Mode::Normal => {}
    }
}

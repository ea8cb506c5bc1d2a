//! Event handling for the ratatui TUI
//!
//! Maps keyboard events onto gallery-session mutations and UI-state
//! updates. Every event is handled to completion before the next is read;
//! the session applies one mutation per event.

use super::state::{AppState, Focus, MessageLevel, Mode};
use crate::gallery::GallerySession;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Exit the browser
    Quit,
    /// No action taken
    Ignored,
}

/// Handle events in normal browsing mode
fn handle_normal_mode(
    state: &mut AppState,
    session: &mut GallerySession,
    key: KeyEvent,
) -> EventResult {
    let page_len = session.current_page_items().len();
    let tag_count = session.all_tags().len();

    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Quit,

        // Panel focus
        (KeyCode::Tab | KeyCode::BackTab, _) => {
            state.toggle_focus();
            EventResult::Continue
        }

        // Navigation within the focused panel
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.cursor_down(page_len, tag_count);
            EventResult::Continue
        }

        // Paging
        (KeyCode::Left | KeyCode::PageUp, _) => {
            session.prev_page();
            state.cursor = 0;
            EventResult::Continue
        }
        (KeyCode::Right | KeyCode::PageDown, _) => {
            session.next_page();
            state.cursor = 0;
            EventResult::Continue
        }

        // Accept: open detail or toggle the highlighted tag
        (KeyCode::Enter, _) => match state.focus {
            Focus::Items => {
                let id = session
                    .current_page_items()
                    .get(state.cursor)
                    .map(|item| item.id.clone());
                if let Some(id) = id
                    && session.open_detail(&id)
                {
                    state.mode = Mode::Detail;
                }
                EventResult::Continue
            }
            Focus::Tags => {
                let tag = session.all_tags().get(state.tag_cursor).map(ToString::to_string);
                if let Some(tag) = tag {
                    let active = session.toggle_tag(&tag);
                    let verb = if active { "added" } else { "removed" };
                    state.push_message(MessageLevel::Info, format!("Tag '{tag}' {verb}"));
                }
                EventResult::Continue
            }
        },

        // Sort and filter controls
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            let mut sort_key = session.query().sort_key;
            sort_key.cycle();
            session.set_sort_key(sort_key);
            state.push_message(
                MessageLevel::Info,
                format!("Sorting {}", sort_key.description()),
            );
            EventResult::Continue
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            session.reset_filters();
            state.push_message(MessageLevel::Success, "Filters reset");
            EventResult::Continue
        }

        // Year window adjustment; rejected (inverted) ranges mutate nothing
        (KeyCode::F(2), _) => {
            let (lo, hi) = session.query().year_range;
            session.set_year_range(lo - 1, hi);
            EventResult::Continue
        }
        (KeyCode::F(3), _) => {
            let (lo, hi) = session.query().year_range;
            session.set_year_range(lo + 1, hi);
            EventResult::Continue
        }
        (KeyCode::F(4), _) => {
            let (lo, hi) = session.query().year_range;
            session.set_year_range(lo, hi - 1);
            EventResult::Continue
        }
        (KeyCode::F(5), _) => {
            let (lo, hi) = session.query().year_range;
            session.set_year_range(lo, hi + 1);
            EventResult::Continue
        }

        // Help overlay
        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        // Search text editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            let mut text = session.query().search_text.clone();
            text.push(c);
            session.set_search_text(text);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            let mut text = session.query().search_text.clone();
            if text.pop().is_none() {
                return EventResult::Ignored;
            }
            session.set_search_text(text);
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            session.set_search_text("");
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events while the detail overlay is open
fn handle_detail_mode(
    state: &mut AppState,
    session: &mut GallerySession,
    key: KeyEvent,
) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Quit,
        (KeyCode::Esc | KeyCode::Enter, _) => {
            session.close_detail();
            state.mode = Mode::Normal;
            EventResult::Continue
        }
        (KeyCode::Left, _) => {
            session.prev_image();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            session.next_image();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState, _key: KeyEvent) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Handle mouse events
fn handle_mouse(
    state: &mut AppState,
    session: &GallerySession,
    mouse: MouseEvent,
) -> EventResult {
    let page_len = session.current_page_items().len();
    let tag_count = session.all_tags().len();

    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down(page_len, tag_count);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    state: &mut AppState,
    session: &mut GallerySession,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => match state.mode {
            Mode::Normal => handle_normal_mode(state, session, key),
            Mode::Detail => handle_detail_mode(state, session, key),
            Mode::Help => handle_help_mode(state, key),
        },
        Event::Mouse(mouse) => handle_mouse(state, session, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

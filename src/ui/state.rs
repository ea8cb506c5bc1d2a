//! Application state for the ratatui TUI
//!
//! UI-only state: mode, panel focus, cursors, and status messages. All
//! gallery state lives in [`crate::gallery::GallerySession`]; the UI reads
//! its derived values fresh on every frame.

use std::time::{Duration, Instant};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Detail overlay is visible
    Detail,
    /// Help overlay is visible
    Help,
}

/// Which panel receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The gallery grid
    #[default]
    Items,
    /// The tag list in the filter panel
    Tags,
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Mutable UI state for the gallery browser
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode
    pub mode: Mode,
    /// Panel receiving navigation keys
    pub focus: Focus,
    /// Cursor position within the current page
    pub cursor: usize,
    /// Cursor position within the tag list
    pub tag_cursor: usize,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the browser should exit
    pub should_exit: bool,
}

impl AppState {
    /// Create new application state
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: Mode::default(),
            focus: Focus::default(),
            cursor: 0,
            tag_cursor: 0,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(4),
            should_exit: false,
        }
    }

    /// Push a status message
    pub fn push_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text.into()));
    }

    /// Drop expired messages
    pub fn prune_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|msg| !msg.is_expired(ttl));
    }

    /// The most recent live message, if any
    #[must_use]
    pub fn latest_message(&self) -> Option<&StatusMessage> {
        self.messages.last()
    }

    /// Keep both cursors inside their lists after a state change
    ///
    /// Page length and tag count shrink when filters tighten; cursors
    /// clamp rather than dangle.
    pub fn clamp_cursors(&mut self, page_len: usize, tag_count: usize) {
        self.cursor = self.cursor.min(page_len.saturating_sub(1));
        self.tag_cursor = self.tag_cursor.min(tag_count.saturating_sub(1));
    }

    /// Move the focused cursor up
    pub fn cursor_up(&mut self) {
        match self.focus {
            Focus::Items => self.cursor = self.cursor.saturating_sub(1),
            Focus::Tags => self.tag_cursor = self.tag_cursor.saturating_sub(1),
        }
    }

    /// Move the focused cursor down, clamped to the list length
    pub fn cursor_down(&mut self, page_len: usize, tag_count: usize) {
        match self.focus {
            Focus::Items => {
                if self.cursor + 1 < page_len {
                    self.cursor += 1;
                }
            }
            Focus::Tags => {
                if self.tag_cursor + 1 < tag_count {
                    self.tag_cursor += 1;
                }
            }
        }
    }

    /// Toggle focus between the grid and the tag list
    pub const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Items => Focus::Tags,
            Focus::Tags => Focus::Items,
        };
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_movement_clamped() {
        let mut state = AppState::new();

        state.cursor_up();
        assert_eq!(state.cursor, 0);

        state.cursor_down(3, 0);
        state.cursor_down(3, 0);
        state.cursor_down(3, 0);
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_focus_routes_navigation() {
        let mut state = AppState::new();
        state.toggle_focus();
        assert_eq!(state.focus, Focus::Tags);

        state.cursor_down(5, 2);
        assert_eq!(state.tag_cursor, 1);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_clamp_cursors_after_shrink() {
        let mut state = AppState::new();
        state.cursor = 10;
        state.tag_cursor = 4;

        state.clamp_cursors(3, 2);
        assert_eq!(state.cursor, 2);
        assert_eq!(state.tag_cursor, 1);

        state.clamp_cursors(0, 0);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.tag_cursor, 0);
    }

    #[test]
    fn test_message_expiry() {
        let mut state = AppState::new();
        state.message_ttl = Duration::from_secs(1);
        state.push_message(MessageLevel::Info, "hello");

        assert!(state.latest_message().is_some());

        // Simulate an old message
        state.messages[0].created_at = Instant::now() - Duration::from_secs(2);
        state.prune_messages();
        assert!(state.latest_message().is_none());
    }
}

//! Search bar widget for the free-text filter

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with a trailing cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the widget has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, theme: &'a Theme) -> Self {
        Self {
            query,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled("> ", self.theme.dimmed_style())];

        if self.query.is_empty() {
            spans.push(Span::styled(
                "type to filter by title, role, tools, or tags",
                self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
            ));
        } else {
            spans.push(Span::raw(self.query));
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let line = Line::from(spans);
        Paragraph::new(line).render(inner, buf);
    }
}

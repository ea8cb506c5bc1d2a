//! Status bar widget for messages and the CLI preview

use crate::ui::state::{MessageLevel, StatusMessage};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar showing the latest message, or the equivalent CLI invocation
/// when there is nothing to report
pub struct StatusBar<'a> {
    /// Most recent live message, if any
    message: Option<&'a StatusMessage>,
    /// Equivalent `folio list ...` invocation for the current query
    cli_preview: &'a str,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(
        message: Option<&'a StatusMessage>,
        cli_preview: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            message,
            cli_preview,
            theme,
        }
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
        }
    }

    /// Build a color-coded line for the CLI preview
    fn build_cli_preview_line(&self, cmd: &str) -> Line<'static> {
        let mut spans = vec![Span::styled(
            "CLI: ".to_string(),
            self.theme.info_style().add_modifier(Modifier::DIM),
        )];

        for (i, part) in cmd.split_whitespace().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".to_string()));
            }

            let style = if i == 0 {
                self.theme.cursor_style()
            } else if i == 1 {
                self.theme.tag_style()
            } else if part.starts_with('-') {
                self.theme.warning_style()
            } else {
                self.theme.success_style()
            };

            spans.push(Span::styled(part.to_string(), style));
        }

        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(16)])
            .split(inner);

        // Left side: live message wins over the CLI preview
        if let Some(msg) = self.message {
            let style = self.style_for_level(msg.level);
            let prefix = Self::prefix_for_level(msg.level);
            let line = Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(msg.text.clone(), style),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        } else {
            let line = self.build_cli_preview_line(self.cli_preview);
            Paragraph::new(line).render(chunks[0], buf);
        }

        // Right side: help hint
        let hint = Line::styled(
            "F1 help",
            self.theme.dimmed_style().add_modifier(Modifier::DIM),
        );
        Paragraph::new(hint).render(chunks[1], buf);
    }
}

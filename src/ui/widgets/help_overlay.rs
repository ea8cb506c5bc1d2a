//! Help overlay widget for displaying the keybind reference

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            Line::styled(
                "  Navigation",
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ),
            Line::default(),
            Self::help_line("  ↑/↓", "Move cursor in the focused panel"),
            Self::help_line("  ←/→", "Previous/next page"),
            Self::help_line("  TAB", "Switch between grid and tag list"),
            Self::help_line("  Enter", "Open item / toggle tag"),
            Self::help_line("  ESC", "Close overlay / quit"),
            Line::default(),
            Line::styled(
                "  Filters",
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ),
            Line::default(),
            Self::help_line("  Type", "Edit search text"),
            Self::help_line("  Ctrl+U", "Clear search text"),
            Self::help_line("  Ctrl+S", "Cycle sort order"),
            Self::help_line("  Ctrl+R", "Reset tag and year filters"),
            Self::help_line("  F2/F3", "Lower year bound down/up"),
            Self::help_line("  F4/F5", "Upper year bound down/up"),
            Line::default(),
            Line::styled(
                "  Detail view",
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ),
            Line::default(),
            Self::help_line("  ←/→", "Previous/next image"),
            Self::help_line("  ESC", "Close the detail view"),
            Line::default(),
            Line::styled("  Press any key to close", self.theme.dimmed_style()),
            Line::default(),
        ]
    }

    /// Create a help line with key and description
    fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{key:<14}"),
                ratatui::style::Style::default().fg(ratatui::style::Color::Cyan),
            ),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 70, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        let paragraph = Paragraph::new(self.build_content()).block(block);
        paragraph.render(popup_area, buf);
    }
}

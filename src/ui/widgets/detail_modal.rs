//! Detail modal widget for the single-item overlay with image carousel

use crate::Item;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Detail modal rendering one item and its active carousel frame
pub struct DetailModal<'a> {
    /// The open item
    item: &'a Item,
    /// Index of the active image
    image_index: usize,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> DetailModal<'a> {
    /// Create a new detail modal
    #[must_use]
    pub const fn new(item: &'a Item, image_index: usize, theme: &'a Theme) -> Self {
        Self {
            item,
            image_index,
            theme,
        }
    }

    /// Calculate centered area for the modal
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height.min(90)) / 2),
            Constraint::Percentage(height.min(90)),
            Constraint::Percentage((100 - height.min(90)) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width.min(90)) / 2),
            Constraint::Percentage(width.min(90)),
            Constraint::Percentage((100 - width.min(90)) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    /// Build the carousel frame lines
    ///
    /// A single-image item still renders a frame; an imageless item gets a
    /// placeholder.
    fn build_carousel(&self) -> Vec<Line<'static>> {
        let count = self.item.images.len();

        if count == 0 {
            return vec![
                Line::default(),
                Line::styled(
                    "(no images - placeholder frame)",
                    self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
                ),
            ];
        }

        // The index is maintained in-bounds by the session; guard anyway
        // so a stale frame cannot panic the renderer.
        let image = self
            .item
            .images
            .get(self.image_index.min(count - 1))
            .cloned()
            .unwrap_or_default();

        let mut lines = vec![
            Line::default(),
            Line::from(vec![
                Span::styled("◀ ", self.theme.dimmed_style()),
                Span::styled(image, self.theme.cursor_style()),
                Span::styled(" ▶", self.theme.dimmed_style()),
            ]),
        ];
        lines.push(Line::styled(
            format!("image {}/{count}", self.image_index + 1),
            self.theme.dimmed_style(),
        ));
        lines
    }

    /// Build content lines for the modal
    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled(
                self.item.title.clone(),
                self.theme.normal_style().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ({})", self.item.year), self.theme.dimmed_style()),
        ])];
        lines.push(Line::from("─".repeat(60)));

        if !self.item.role.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Role:    ", self.theme.dimmed_style()),
                Span::raw(self.item.role.clone()),
            ]));
        }

        if !self.item.summary.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::raw(self.item.summary.clone())));
        }

        if !self.item.tools.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("Tools:   ", self.theme.dimmed_style()),
                Span::raw(self.item.tools.join(", ")),
            ]));
        }

        lines.push(Line::from(vec![
            Span::styled("Tags:    ", self.theme.dimmed_style()),
            if self.item.tags.is_empty() {
                Span::styled(
                    "(none)",
                    self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
                )
            } else {
                Span::styled(self.item.tags.join(", "), self.theme.tag_style())
            },
        ]));

        lines.extend(self.build_carousel());

        lines.push(Line::default());
        lines.push(Line::from("─".repeat(60)));
        lines.push(Line::styled(
            "←/→ images  ESC close",
            self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
        ));

        lines
    }
}

impl Widget for DetailModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(70, 70, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Detail ")
            .title_alignment(Alignment::Center);

        let paragraph = Paragraph::new(self.build_content())
            .block(block)
            .wrap(Wrap { trim: false });
        paragraph.render(popup_area, buf);
    }
}

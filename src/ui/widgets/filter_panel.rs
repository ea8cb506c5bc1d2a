//! Filter panel widget: sort key, year window, and the tag census

use crate::gallery::GallerySession;
use crate::ui::state::{AppState, Focus};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Filter panel listing the active sort, year window, and toggleable tags
pub struct FilterPanel<'a> {
    session: &'a GallerySession,
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> FilterPanel<'a> {
    /// Create a new filter panel widget
    #[must_use]
    pub const fn new(session: &'a GallerySession, state: &'a AppState, theme: &'a Theme) -> Self {
        Self {
            session,
            state,
            theme,
        }
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let query = self.session.query();
        let (lo, hi) = query.year_range;
        let tags_focused = self.state.focus == Focus::Tags;

        let mut lines = vec![
            Line::from(vec![
                Span::styled("sort:  ", self.theme.dimmed_style()),
                Span::raw(query.sort_key.description().to_string()),
            ]),
            Line::from(vec![
                Span::styled("years: ", self.theme.dimmed_style()),
                Span::raw(format!("{lo} to {hi}")),
            ]),
            Line::default(),
            Line::styled(
                "Tags",
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ),
        ];

        for (idx, (tag, count)) in self.session.catalog().tag_census().iter().enumerate() {
            let is_cursor = tags_focused && idx == self.state.tag_cursor;
            let is_active = query.is_tag_active(tag);

            let cursor_char = if is_cursor { ">" } else { " " };
            let check_char = if is_active { "✓" } else { " " };

            let tag_style = if is_active {
                self.theme.active_tag_style()
            } else if is_cursor {
                self.theme.selected_style()
            } else {
                self.theme.tag_style()
            };

            lines.push(Line::from(vec![
                Span::styled(cursor_char.to_string(), self.theme.cursor_style()),
                Span::styled(format!(" {check_char} "), self.theme.active_tag_style()),
                Span::styled(tag.clone(), tag_style),
                Span::styled(format!(" ({count})"), self.theme.dimmed_style()),
            ]));
        }

        lines
    }
}

impl Widget for FilterPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.state.focus == Focus::Tags {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Filters ");

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        Paragraph::new(self.build_content()).render(inner, buf);
    }
}

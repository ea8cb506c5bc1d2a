//! Gallery grid widget displaying the current page of items

use crate::Item;
use crate::gallery::{GallerySession, PageView};
use crate::ui::state::{AppState, Focus};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// Grid widget that renders the visible page with a cursor row
pub struct GalleryGrid<'a> {
    session: &'a GallerySession,
    state: &'a AppState,
    theme: &'a Theme,
    brand_name: &'a str,
}

impl<'a> GalleryGrid<'a> {
    /// Create a new gallery grid widget
    #[must_use]
    pub const fn new(
        session: &'a GallerySession,
        state: &'a AppState,
        theme: &'a Theme,
        brand_name: &'a str,
    ) -> Self {
        Self {
            session,
            state,
            theme,
            brand_name,
        }
    }

    fn title(&self, view: &PageView, filtered_count: usize) -> String {
        format!(
            " {} - {} item(s), page {}/{} ",
            self.brand_name, filtered_count, view.page, view.total_pages
        )
    }

    /// Render a single item row
    fn render_item(&self, item: &Item, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };

        let mut spans = vec![
            Span::styled(cursor_char.to_string(), self.theme.cursor_style()),
            Span::raw(" "),
        ];

        let text_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        spans.push(Span::styled(item.title.clone(), text_style));
        spans.push(Span::styled(
            format!(" ({})", item.year),
            self.theme.dimmed_style(),
        ));

        if !item.tags.is_empty() {
            spans.push(Span::styled(
                format!("  [{}]", item.tags.join(", ")),
                self.theme.tag_style(),
            ));
        }

        let line = Line::from(spans);
        if is_cursor {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for GalleryGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let page_items = self.session.current_page_items();
        let view = self.session.page_view();
        let filtered_count = self.session.filtered_count();

        let border_style = if self.state.focus == Focus::Items {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title(&view, filtered_count));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        // An empty page renders as an empty grid, not an error state
        if page_items.is_empty() {
            let empty = Paragraph::new(Line::styled(
                "no items match the current filters",
                self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
            ));
            empty.render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = page_items
            .iter()
            .enumerate()
            .map(|(idx, &item)| self.render_item(item, idx == self.state.cursor))
            .collect();

        List::new(items).render(inner, buf);
    }
}

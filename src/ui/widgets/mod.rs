//! Ratatui widgets for the gallery TUI
//!
//! Custom widgets for rendering the browser interface.

mod detail_modal;
mod filter_panel;
mod gallery_grid;
mod help_overlay;
mod search_bar;
mod status_bar;

pub use detail_modal::DetailModal;
pub use filter_panel::FilterPanel;
pub use gallery_grid::GalleryGrid;
pub use help_overlay::HelpOverlay;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;

//! Ratatui rendering collaborator for the gallery session
//!
//! The TUI never owns gallery state: it reads derived values from
//! [`crate::gallery::GallerySession`] each frame and forwards user events
//! to the session's mutators.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              GallerySession                 │
//! │   (catalog, query, pager, detail state)     │
//! └────────────────────┬────────────────────────┘
//!            reads     │     mutates
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  widgets   │ │  app loop │ │  events   │
//! │ (ratatui)  │ │  (draw)   │ │(crossterm)│
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod app;
mod events;
pub mod error;
mod state;
mod theme;
pub mod widgets;

pub use app::run;
pub use error::UiError;
pub use events::EventResult;
pub use state::{AppState, Focus, MessageLevel, Mode, StatusMessage};
pub use theme::Theme;

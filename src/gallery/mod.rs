//! Gallery module - the filter/sort/paginate/selection state machine
//!
//! This module provides the data models and business logic that drive the
//! gallery. It is designed to be UI-agnostic: the CLI and the ratatui
//! front-end both consume the same [`GallerySession`] facade.
//!
//! # Architecture
//!
//! - `query`: user-controlled filter/sort parameters with reset policy
//! - `selector`: pure filter + stable sort over the catalog
//! - `pager`: page count and visible slice derivation
//! - `detail`: the open-item/active-image overlay state
//! - `session`: the facade tying catalog, query, pager, and detail together
//!
//! Derived values are pure functions of current state and are recomputed on
//! every read; there is no cache to go stale.

pub mod detail;
pub mod pager;
pub mod query;
pub mod selector;
pub mod session;

pub use detail::DetailSession;
pub use pager::PageView;
pub use query::{QueryState, SortKey};
pub use selector::select;
pub use session::GallerySession;

//! Testing utilities for folio
//!
//! Fixture builders shared by the unit tests: a small hand-written sample
//! portfolio plus generators for larger catalogs.
//!
//! Only available when compiled with `cfg(test)`.

use crate::Item;
use crate::catalog::Catalog;

/// Build an item with the fields most tests care about
#[must_use]
pub fn item(id: &str, title: &str, year: i32, tags: &[&str]) -> Item {
    let mut item = Item::new(id, title, year);
    item.tags = tags.iter().map(ToString::to_string).collect();
    item
}

/// A six-item sample portfolio spanning 2022-2025
///
/// Deliberately uneven: mixed tag sets, one imageless item, and text that
/// only appears in specific fields ("Flask" in tools, "Sound design" in a
/// role) so the text-match tests can target each field.
#[must_use]
pub fn sample_items() -> Vec<Item> {
    let mut atlas = item("atlas", "Atlas CMS", 2025, &["web", "backend"]);
    atlas.role = "Lead developer".to_string();
    atlas.summary = "Headless content platform for a small publisher.".to_string();
    atlas.tools = vec!["Rust".into(), "Axum".into(), "PostgreSQL".into()];
    atlas.images = vec!["atlas-grid.png".into(), "atlas-editor.png".into()];

    let mut ledger = item("ledger", "Ledger Dashboard", 2024, &["web", "dataviz"]);
    ledger.role = "Full-stack developer".to_string();
    ledger.summary = "Expense analytics with drill-down charts.".to_string();
    ledger.tools = vec!["Python".into(), "Flask".into(), "D3.js".into()];
    ledger.images = vec!["ledger-overview.png".into()];

    let mut drift = item("drift", "Drift EP", 2023, &["audio"]);
    drift.role = "Sound design".to_string();
    drift.summary = "Four-track ambient release.".to_string();
    drift.tools = vec!["Ableton Live".into()];
    drift.images = vec!["drift-cover.png".into()];

    let mut mural = item("mural", "Mural Generator", 2023, &["art", "cli"]);
    mural.role = "Creative coder".to_string();
    mural.summary = "Procedural wall-art sketches from seed words.".to_string();
    mural.tools = vec!["Rust".into()];
    mural.images = vec![
        "mural-01.png".into(),
        "mural-02.png".into(),
        "mural-03.png".into(),
    ];

    let mut beacon = item("beacon", "Beacon", 2022, &["embedded"]);
    beacon.role = "Hardware engineer".to_string();
    beacon.summary = "Solar-powered trail marker.".to_string();
    beacon.tools = vec!["C".into(), "KiCad".into()];
    beacon.images = vec!["beacon-board.png".into()];

    let mut quarry = item("quarry", "Quarry Site", 2024, &["web"]);
    quarry.role = "Frontend developer".to_string();
    quarry.summary = "Marketing site for a climbing gym.".to_string();
    quarry.tools = vec!["TypeScript".into(), "React".into()];
    // No images: exercises the placeholder path

    vec![atlas, ledger, drift, mural, beacon, quarry]
}

/// Catalog over [`sample_items`]
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_items())
}

/// A generated catalog of `n` uniform "Project NN" items
///
/// Years cycle 2022-2025, every item is tagged "web"; useful for paging
/// tests where the exact content does not matter.
#[must_use]
pub fn spanning_catalog(n: usize) -> Catalog {
    let items = (1..=n)
        .map(|i| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let year = 2022 + (i as i32 % 4);
            let mut item = item(
                &format!("p{i:02}"),
                &format!("Project {i:02}"),
                year,
                &["web"],
            );
            item.tools = vec!["Rust".into()];
            item.images = vec![format!("p{i:02}-shot.png")];
            item
        })
        .collect();
    Catalog::new(items)
}

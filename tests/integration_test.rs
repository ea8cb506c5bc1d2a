//! Integration tests for the folio gallery session
//!
//! These tests verify the end-to-end behavior of the filter/sort/paginate/
//! detail state machine through the same facade the CLI and TUI consume,
//! plus the data-file loading path.

use folio::Item;
use folio::catalog::{Catalog, load_items};
use folio::gallery::{GallerySession, SortKey};
use std::fs;
use std::io::Write;

/// Helper to build an item with the fields the tests exercise
fn make_item(id: &str, title: &str, year: i32, tags: &[&str], tools: &[&str]) -> Item {
    let mut item = Item::new(id, title, year);
    item.tags = tags.iter().map(ToString::to_string).collect();
    item.tools = tools.iter().map(ToString::to_string).collect();
    item.images = vec![format!("{id}-1.png"), format!("{id}-2.png")];
    item
}

/// A fixed catalog: 14 items spanning 2022-2025, five of them tagged "web",
/// two tagged both "web" and "backend"
fn build_catalog() -> Catalog {
    let items = vec![
        make_item("p01", "Archive Viewer", 2025, &["web", "backend"], &["Rust"]),
        make_item("p02", "Bloom Tracker", 2025, &["mobile"], &["Kotlin"]),
        make_item("p03", "Cairn", 2024, &["web"], &["TypeScript"]),
        make_item("p04", "Dockside", 2024, &["backend"], &["Go"]),
        make_item("p05", "Expense Lens", 2024, &["web", "backend"], &["Python", "Flask"]),
        make_item("p06", "Fieldnotes", 2023, &["cli"], &["Rust"]),
        make_item("p07", "Glasshouse", 2023, &["art"], &["Processing"]),
        make_item("p08", "Harbor Map", 2023, &["web"], &["Svelte"]),
        make_item("p09", "Inkwell", 2023, &["cli", "art"], &["Rust"]),
        make_item("p10", "Juniper", 2022, &["embedded"], &["C"]),
        make_item("p11", "Kiln Log", 2022, &["mobile"], &["Swift"]),
        make_item("p12", "Lantern", 2022, &["web"], &["Vue"]),
        make_item("p13", "Meadow", 2022, &["art"], &["Blender"]),
        make_item("p14", "Nightjar", 2025, &["audio"], &["SuperCollider"]),
    ];
    Catalog::new(items)
}

fn session() -> GallerySession {
    GallerySession::new(build_catalog(), 12)
}

fn current_ids(session: &GallerySession) -> Vec<String> {
    session
        .filtered_items()
        .iter()
        .map(|item| item.id.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Property: adding a tag never grows the result (filter monotonicity)
// ---------------------------------------------------------------------------

#[test]
fn test_adding_tags_never_increases_results() {
    let mut session = session();
    let tags: Vec<String> = session.all_tags().iter().map(ToString::to_string).collect();

    let mut previous = session.filtered_count();
    for tag in tags {
        session.toggle_tag(&tag);
        let count = session.filtered_count();
        assert!(
            count <= previous,
            "activating '{tag}' grew the result: {previous} -> {count}"
        );
        previous = count;
    }
}

// ---------------------------------------------------------------------------
// Property: empty search text equals no text constraint
// ---------------------------------------------------------------------------

#[test]
fn test_empty_search_text_is_no_constraint() {
    let mut session = session();
    let unfiltered = current_ids(&session);

    session.set_search_text("");
    assert_eq!(current_ids(&session), unfiltered);

    session.set_search_text("   ");
    assert_eq!(current_ids(&session), unfiltered);
}

// ---------------------------------------------------------------------------
// Property: stable sort preserves catalog order for equal keys
// ---------------------------------------------------------------------------

#[test]
fn test_sort_stability_for_equal_years() {
    let session = session();
    let newest = current_ids(&session);

    // 2023 items appear in catalog order p06..p09 under NEWEST
    let year_2023: Vec<&str> = newest
        .iter()
        .filter(|id| ["p06", "p07", "p08", "p09"].contains(&id.as_str()))
        .map(String::as_str)
        .collect();
    assert_eq!(year_2023, vec!["p06", "p07", "p08", "p09"]);
}

// ---------------------------------------------------------------------------
// Property: concatenating all pages reproduces the filtered list exactly
// ---------------------------------------------------------------------------

#[test]
fn test_pages_cover_filtered_sequence_exactly_once() {
    let mut session = GallerySession::new(build_catalog(), 5);
    let all = current_ids(&session);

    let mut collected = Vec::new();
    session.set_page(1);
    loop {
        collected.extend(
            session
                .current_page_items()
                .iter()
                .map(|item| item.id.clone()),
        );
        if session.page_view().is_last() {
            break;
        }
        session.next_page();
    }

    assert_eq!(collected, all);
}

// ---------------------------------------------------------------------------
// Property: filter and sort changes reset the page
// ---------------------------------------------------------------------------

#[test]
fn test_filter_and_sort_changes_reset_page() {
    let mut session = GallerySession::new(build_catalog(), 5);

    session.set_page(2);
    session.set_search_text("a");
    assert_eq!(session.current_page(), 1);

    session.set_page(2);
    session.toggle_tag("web");
    assert_eq!(session.current_page(), 1);
    session.toggle_tag("web");

    session.set_page(2);
    session.set_year_range(2022, 2024);
    assert_eq!(session.current_page(), 1);

    session.set_page(2);
    session.set_sort_key(SortKey::TitleAsc);
    assert_eq!(session.current_page(), 1);
}

// ---------------------------------------------------------------------------
// Property: page requests clamp into range
// ---------------------------------------------------------------------------

#[test]
fn test_page_clamping() {
    let mut session = session();
    let total = session.total_pages();

    session.set_page(0);
    assert_eq!(session.current_page(), 1);

    session.set_page(total + 5);
    assert_eq!(session.current_page(), total);
}

// ---------------------------------------------------------------------------
// Scenario: 14 items, page size 12, no filters
// ---------------------------------------------------------------------------

#[test]
fn test_fourteen_items_two_pages_newest_first() {
    let mut session = session();

    assert_eq!(session.total_pages(), 2);

    let page1 = session.current_page_items();
    assert_eq!(page1.len(), 12);
    let years: Vec<i32> = page1.iter().map(|item| item.year).collect();
    let mut sorted = years.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(years, sorted);

    session.next_page();
    assert_eq!(session.current_page_items().len(), 2);
}

// ---------------------------------------------------------------------------
// Scenario: one active tag
// ---------------------------------------------------------------------------

#[test]
fn test_single_tag_filter() {
    let mut session = session();
    session.toggle_tag("web");

    let selected = session.filtered_items();
    assert_eq!(selected.len(), 5);
    assert!(selected.iter().all(|item| item.has_tag("web")));
}

// ---------------------------------------------------------------------------
// Scenario: text matches inside tools, case-insensitively
// ---------------------------------------------------------------------------

#[test]
fn test_search_matches_tools_field() {
    let mut session = session();
    session.set_search_text("flask");

    let ids = current_ids(&session);
    assert_eq!(ids, vec!["p05"]);
}

// ---------------------------------------------------------------------------
// Scenario: single-year window
// ---------------------------------------------------------------------------

#[test]
fn test_single_year_window() {
    let mut session = session();
    assert!(session.set_year_range(2023, 2023));

    let selected = session.filtered_items();
    assert_eq!(selected.len(), 4);
    assert!(selected.iter().all(|item| item.year == 2023));
}

// ---------------------------------------------------------------------------
// Scenario: two active tags require both (AND semantics)
// ---------------------------------------------------------------------------

#[test]
fn test_two_tags_require_both() {
    let mut session = session();
    session.toggle_tag("web");
    session.toggle_tag("backend");

    let ids = current_ids(&session);
    assert_eq!(ids, vec!["p01", "p05"]);
}

// ---------------------------------------------------------------------------
// Scenario: detail carousel accepts valid indices, ignores invalid ones
// ---------------------------------------------------------------------------

#[test]
fn test_detail_carousel_flow() {
    let mut session = session();

    assert!(session.open_detail("p03"));
    assert!(session.set_active_image(1));
    assert_eq!(session.detail().active_image_index(), 1);

    // p03 has two images; index 5 is rejected without mutation
    assert!(!session.set_active_image(5));
    assert_eq!(session.detail().active_image_index(), 1);
}

// ---------------------------------------------------------------------------
// Detail session lifecycle through the facade
// ---------------------------------------------------------------------------

#[test]
fn test_detail_survives_query_changes() {
    let mut session = session();
    session.open_detail("p12");

    // Filtering p12 out of view does not disturb the open overlay
    session.set_search_text("archive");
    assert!(session.detail().is_open());
    assert_eq!(session.selected_item().map(|i| i.id.as_str()), Some("p12"));

    session.close_detail();
    assert!(!session.detail().is_open());
    // Selection retained for the closing frame
    assert_eq!(session.selected_item().map(|i| i.id.as_str()), Some("p12"));
}

// ---------------------------------------------------------------------------
// Reset scope
// ---------------------------------------------------------------------------

#[test]
fn test_reset_filters_keeps_search_and_sort() {
    let mut session = session();
    session.set_search_text("lantern");
    session.set_sort_key(SortKey::Oldest);
    session.toggle_tag("web");
    session.set_year_range(2023, 2024);

    session.reset_filters();

    assert!(session.query().active_tags.is_empty());
    assert_eq!(session.query().year_range, session.year_bounds());
    assert_eq!(session.query().search_text, "lantern");
    assert_eq!(session.query().sort_key, SortKey::Oldest);
}

// ---------------------------------------------------------------------------
// CLI preview string
// ---------------------------------------------------------------------------

#[test]
fn test_query_cli_preview() {
    let mut session = session();
    session.toggle_tag("web");
    session.set_search_text("lantern");
    session.set_sort_key(SortKey::Oldest);

    let preview = session.query().to_string();
    assert!(preview.starts_with("folio list"));
    assert!(preview.contains("-t web"));
    assert!(preview.contains("--query lantern"));
    assert!(preview.contains("--sort oldest"));
}

// ---------------------------------------------------------------------------
// Data file to session, end to end
// ---------------------------------------------------------------------------

#[test]
fn test_load_data_file_into_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(
        br#"[
            {"id": "one", "title": "One", "year": 2024,
             "tags": ["web"], "images": ["one.png"]},
            {"id": "two", "title": "Two", "year": 2022}
        ]"#,
    )
    .unwrap();

    let items = load_items(&path).unwrap();
    let mut session = GallerySession::new(Catalog::new(items), 12);

    assert_eq!(session.year_bounds(), (2022, 2024));
    assert_eq!(session.filtered_count(), 2);

    // The imageless item still opens; the carousel just has no frames
    assert!(session.open_detail("two"));
    assert!(!session.next_image());
    assert_eq!(session.detail().active_image_index(), 0);
}

// ---------------------------------------------------------------------------
// Empty catalog degrades to a valid displayable state
// ---------------------------------------------------------------------------

#[test]
fn test_empty_catalog_end_to_end() {
    let mut session = GallerySession::new(Catalog::new(Vec::new()), 12);

    assert_eq!(session.year_bounds(), (0, 0));
    assert_eq!(session.total_pages(), 1);
    assert!(session.current_page_items().is_empty());

    // Mutators stay total on the empty catalog
    session.set_search_text("anything");
    session.next_page();
    session.prev_page();
    assert!(!session.open_detail("ghost"));
    assert_eq!(session.current_page(), 1);
}

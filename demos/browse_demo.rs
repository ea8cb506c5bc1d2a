//! Demo showing the interactive gallery browser
//!
//! This example seeds an in-memory portfolio and launches the TUI to
//! demonstrate searching, tag filters, paging, and the detail carousel.

use folio::catalog::Catalog;
use folio::config::FolioConfig;
use folio::gallery::GallerySession;
use folio::{Item, ui};

fn demo_item(
    id: &str,
    title: &str,
    year: i32,
    role: &str,
    tags: &[&str],
    tools: &[&str],
    images: &[&str],
) -> Item {
    let mut item = Item::new(id, title, year);
    item.role = role.to_string();
    item.summary = format!("{title} - a sample portfolio entry for the demo.");
    item.tags = tags.iter().map(ToString::to_string).collect();
    item.tools = tools.iter().map(ToString::to_string).collect();
    item.images = images.iter().map(ToString::to_string).collect();
    item
}

fn main() {
    println!("=== Folio Browse Demo ===\n");

    let items = vec![
        demo_item(
            "atlas",
            "Atlas CMS",
            2025,
            "Lead developer",
            &["web", "backend"],
            &["Rust", "Axum", "PostgreSQL"],
            &["atlas-grid.png", "atlas-editor.png"],
        ),
        demo_item(
            "ledger",
            "Ledger Dashboard",
            2024,
            "Full-stack developer",
            &["web", "dataviz"],
            &["Python", "Flask", "D3.js"],
            &["ledger-overview.png"],
        ),
        demo_item(
            "harbor",
            "Harbor Map",
            2024,
            "Frontend developer",
            &["web"],
            &["Svelte", "MapLibre"],
            &["harbor-zoom.png", "harbor-night.png", "harbor-print.png"],
        ),
        demo_item(
            "drift",
            "Drift EP",
            2023,
            "Sound design",
            &["audio"],
            &["Ableton Live"],
            &["drift-cover.png"],
        ),
        demo_item(
            "mural",
            "Mural Generator",
            2023,
            "Creative coder",
            &["art", "cli"],
            &["Rust"],
            &["mural-01.png", "mural-02.png"],
        ),
        demo_item(
            "beacon",
            "Beacon",
            2022,
            "Hardware engineer",
            &["embedded"],
            &["C", "KiCad"],
            &[],
        ),
    ];

    let catalog = Catalog::new(items);
    println!(
        "Seeded {} items with {} unique tags\n",
        catalog.len(),
        catalog.all_tags().len()
    );

    println!("Available tags:");
    for (tag, count) in catalog.tag_census() {
        println!("  - {tag} ({count} items)");
    }

    println!("\n=== Starting Interactive Browse Mode ===");
    println!("Instructions:");
    println!("  - Type to search; TAB to switch to the tag list");
    println!("  - Enter opens an item (or toggles the highlighted tag)");
    println!("  - Left/Right arrows page through results and carousel images");
    println!("  - Ctrl+S cycles sorting, Ctrl+R resets filters");
    println!("  - F1 shows help, ESC exits\n");

    let config = FolioConfig {
        brand_name: "Demo Portfolio".to_string(),
        ..Default::default()
    };

    let mut session = GallerySession::new(catalog, config.page_size);

    if let Err(e) = ui::run(&mut session, &config) {
        eprintln!("\nError during browse: {e}");
        std::process::exit(1);
    }

    println!("Thanks for browsing!");
}

//! Folio CLI application entry point
//!
//! This is the main executable for the folio portfolio gallery. It provides
//! a command-line interface for browsing, listing, and inspecting portfolio
//! items loaded from a JSON data file.
//!
//! # Features
//!
//! - **Browse Mode**: Interactive gallery with search, tag filters, year
//!   window, sorting, pagination, and a detail view with an image carousel
//! - **List**: Print matching items with the same filter semantics
//! - **Tags**: Print the tag census
//! - **Quiet Mode**: Suppress decoration for scripting
//!
//! # Usage
//!
//! ```bash
//! # Browse the gallery interactively (default command)
//! folio
//! folio browse
//!
//! # List items, filtered and sorted
//! folio list -t web -t backend
//! folio list --query flask --sort oldest
//! folio list --from 2023 --until 2024 --page 2
//!
//! # Print the tag census
//! folio tags
//!
//! # Show one item
//! folio show atlas
//!
//! # Quiet mode (only output results)
//! folio -q list -t web
//! ```
//!
//! # Configuration
//!
//! On first run, folio will prompt for initial setup. Configuration is
//! stored in the user's config directory (`~/.config/folio/config.toml`
//! on Linux).

use folio::{
    FolioError,
    catalog::{Catalog, load_items},
    cli::{Cli, Commands, ListArgs},
    config::FolioConfig,
    gallery::GallerySession,
    output, ui,
};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, FolioError>;

/// Pick the data file: CLI flag wins over the configured path
fn resolve_data_file(cli_file: Option<PathBuf>, config: &FolioConfig) -> Result<PathBuf> {
    cli_file
        .or_else(|| config.data_file.clone())
        .ok_or_else(|| {
            FolioError::InvalidInput(
                "No data file configured. Pass --file <PATH> or set data_file in the config."
                    .into(),
            )
        })
}

fn handle_list(catalog: Catalog, args: ListArgs, page_size: usize, quiet: bool) -> Result<()> {
    let mut session = GallerySession::new(catalog, args.page_size.unwrap_or(page_size));

    session.set_sort_key(args.sort.into());
    if let Some(query) = args.query {
        session.set_search_text(query);
    }
    for tag in &args.tags {
        session.toggle_tag(tag);
    }

    let (default_lo, default_hi) = session.query().year_range;
    let lo = args.from.unwrap_or(default_lo);
    let hi = args.until.unwrap_or(default_hi);
    if !session.set_year_range(lo, hi) {
        return Err(FolioError::InvalidInput(format!(
            "--from {lo} must not exceed --until {hi}"
        )));
    }

    session.set_page(args.page);

    let view = session.page_view();
    let items = session.current_page_items();

    if !quiet {
        println!("{}", output::page_header(&view, session.filtered_count()));
    }
    if items.is_empty() {
        if !quiet {
            println!("  (no items match)");
        }
        return Ok(());
    }
    for item in items {
        println!("{}", output::item_line(item, quiet));
    }
    Ok(())
}

fn handle_tags(catalog: &Catalog, quiet: bool) {
    if !quiet {
        println!("{} tag(s):", catalog.tag_census().len());
    }
    for (tag, count) in catalog.tag_census() {
        println!("{}", output::tag_with_count(tag, *count, quiet));
    }
}

fn handle_show(catalog: &Catalog, id: &str, quiet: bool) -> Result<()> {
    let item = catalog
        .get(id)
        .ok_or_else(|| FolioError::InvalidInput(format!("No item with id '{id}'")))?;
    println!("{}", output::item_detail(item, quiet));
    Ok(())
}

fn main() -> Result<()> {
    let config = FolioConfig::load_or_setup()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    let command = cli.get_command();

    let data_file = resolve_data_file(cli.data_file.clone(), &config)?;
    let items = load_items(&data_file)?;
    let catalog = Catalog::new(items);

    match command {
        Commands::Browse => {
            let mut session = GallerySession::new(catalog, config.page_size);
            ui::run(&mut session, &config)?;
        }
        Commands::List(args) => handle_list(catalog, args, config.page_size, quiet)?,
        Commands::Tags => handle_tags(&catalog, quiet),
        Commands::Show { id } => handle_show(&catalog, &id, quiet)?,
    }

    Ok(())
}

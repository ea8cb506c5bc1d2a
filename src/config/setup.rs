//! Interactive setup wizard for first-time configuration
//!
//! Handles the interactive prompts for creating an initial configuration
//! when folio is run for the first time.

use super::{DEFAULT_PAGE_SIZE, FolioConfig};
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup - prompts for branding and the data file
///
/// Guides the user through creating their configuration:
/// 1. Prompts for a gallery name shown in the header (default: "folio")
/// 2. Prompts for the portfolio data file location
/// 3. Creates and saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<FolioConfig, ConfigError> {
    println!("Welcome to folio! Let's set up your gallery.\n");

    let brand_name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Gallery name")
        .default("folio".to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let data_file_str: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Portfolio data file (JSON)")
        .default("portfolio.json".to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = FolioConfig {
        brand_name,
        page_size: DEFAULT_PAGE_SIZE,
        data_file: Some(PathBuf::from(data_file_str)),
        quiet: false,
    };

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}

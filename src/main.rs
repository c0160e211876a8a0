// ContactDeck - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Built-in catalog loading and validation
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use contactdeck::app;
pub use contactdeck::core;
pub use contactdeck::ui;
pub use contactdeck::util;

use clap::Parser;
use std::path::PathBuf;

/// ContactDeck - Read-only contact list browser.
///
/// Point ContactDeck at a contacts workbook to browse, filter, and export
/// the lists it contains.
#[derive(Parser, Debug)]
#[command(name = "ContactDeck", version, about)]
struct Cli {
    /// Workbook to open (defaults to contacts.xlsx in the working directory).
    workbook: Option<PathBuf>,

    /// Dataset id to select at startup (sheet name, e.g. Top_200_X).
    #[arg(short = 's', long = "dataset")]
    dataset: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "ContactDeck starting"
    );

    // Load the built-in dataset catalog. The content is embedded in the
    // binary, so a failure here is a packaging bug and fatal.
    let catalog = match core::catalog::load_builtin_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "Built-in catalog is invalid");
            eprintln!("Error: built-in catalog is invalid: {e}");
            std::process::exit(1);
        }
    };

    let workbook_path = cli
        .workbook
        .unwrap_or_else(|| PathBuf::from(util::constants::DEFAULT_WORKBOOK_FILE));

    // Create application state. Workbook problems are not fatal here: the
    // GUI launches and shows the error so the user can pick another file.
    let state = app::state::AppState::new(catalog, workbook_path, cli.dataset, cli.debug);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::ContactDeckApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch ContactDeck GUI: {e}");
        std::process::exit(1);
    }
}

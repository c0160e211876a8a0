// ContactDeck - app/state.rs
//
// Application state management. Holds the catalog, the sheet store, the
// active dataset's normalized table, filter state, and derived results.
// Owned by the eframe::App implementation.
//
// Every user interaction triggers a full synchronous recomputation of
// filter + presenter from the cached sheet (refilter); the normalizer
// reruns when the dataset selection changes (select_dataset). Both are
// cheap: sheets are small and in memory.

use crate::app::store::SheetStore;
use crate::core::catalog::{Catalog, DatasetConfig};
use crate::core::export::{display_columns, extract_emails};
use crate::core::filter::{apply_filters, FilterState};
use crate::core::model::Sheet;
use crate::core::normalize::normalize;
use crate::util::constants;
use std::path::PathBuf;

/// Top-level application state.
pub struct AppState {
    /// Validated dataset catalog.
    pub catalog: Catalog,

    /// Path of the source workbook (for display and error messages).
    pub workbook_path: PathBuf,

    /// Workbook handle + sheet cache. None when opening failed at startup.
    pub store: Option<SheetStore>,

    /// Startup workbook error (missing file, unreadable file), re-shown
    /// whenever a dataset is selected while the store is unavailable.
    workbook_error: Option<String>,

    /// Id of the currently selected dataset.
    pub selected_dataset: String,

    /// Normalized table of the selected dataset. None while a load error
    /// is showing.
    pub table: Option<Sheet>,

    /// Current filter configuration for the selected dataset.
    pub filter_state: FilterState,

    /// Indices of table rows matching the current filter (into `table`).
    pub filtered_indices: Vec<usize>,

    /// Offered categorical filters: (column, sorted distinct values).
    /// Columns without any non-missing value are not offered.
    pub filter_options: Vec<(String, Vec<String>)>,

    /// (min, max) of the dataset's range column over the normalized table,
    /// missing values counted as zero. None when the dataset has no range
    /// column or the column is absent.
    pub range_bounds: Option<(f64, f64)>,

    /// Display projection for the selected dataset.
    pub display_cols: Vec<String>,

    /// Distinct emails extracted from the filtered rows.
    pub emails: Vec<String>,

    /// Error message for the current dataset (missing file / missing sheet).
    pub load_error: Option<String>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Editable draft messages shown in the outreach panel.
    pub message_en: String,
    pub message_sv: String,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state: open the workbook and select the first
    /// dataset (or the requested one).
    pub fn new(
        catalog: Catalog,
        workbook_path: PathBuf,
        initial_dataset: Option<String>,
        debug_mode: bool,
    ) -> Self {
        let (store, workbook_error) = match SheetStore::open(&workbook_path) {
            Ok(store) => (Some(store), None),
            Err(e) => {
                tracing::error!(error = %e, "Cannot open workbook");
                (None, Some(e.to_string()))
            }
        };

        Self::with_store(catalog, workbook_path, store, workbook_error, initial_dataset, debug_mode)
    }

    /// Create state around an already-constructed store (or the startup
    /// error that prevented one). `new` is the production path; tests
    /// substitute an in-memory workbook source here.
    pub fn with_store(
        catalog: Catalog,
        workbook_path: PathBuf,
        store: Option<SheetStore>,
        workbook_error: Option<String>,
        initial_dataset: Option<String>,
        debug_mode: bool,
    ) -> Self {
        let selected = initial_dataset
            .filter(|id| catalog.get(id).is_some())
            .or_else(|| catalog.first_id().map(String::from))
            .unwrap_or_default();

        let load_error = workbook_error.clone();

        let mut state = Self {
            catalog,
            workbook_path,
            store,
            workbook_error,
            selected_dataset: String::new(),
            table: None,
            filter_state: FilterState::default(),
            filtered_indices: Vec::new(),
            filter_options: Vec::new(),
            range_bounds: None,
            display_cols: Vec::new(),
            emails: Vec::new(),
            load_error,
            status_message: "Ready.".to_string(),
            message_en: constants::MESSAGE_TEMPLATE_EN.to_string(),
            message_sv: constants::MESSAGE_TEMPLATE_SV.to_string(),
            show_about: false,
            debug_mode,
        };

        if state.load_error.is_none() && !selected.is_empty() {
            state.select_dataset(&selected);
        } else {
            state.selected_dataset = selected;
        }

        state
    }

    /// Configuration of the currently selected dataset.
    pub fn active_config(&self) -> Option<&DatasetConfig> {
        self.catalog.get(&self.selected_dataset)
    }

    /// Replace the workbook (File -> Open Workbook) and reload the current
    /// dataset from it. The previous cache is discarded with the old store.
    pub fn open_workbook(&mut self, path: PathBuf) {
        match SheetStore::open(&path) {
            Ok(store) => {
                tracing::info!(path = %path.display(), "Switched workbook");
                self.workbook_path = path;
                self.store = Some(store);
                self.workbook_error = None;
                let id = if self.selected_dataset.is_empty() {
                    self.catalog.first_id().map(String::from).unwrap_or_default()
                } else {
                    self.selected_dataset.clone()
                };
                if !id.is_empty() {
                    self.select_dataset(&id);
                }
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Cannot open workbook");
                self.workbook_path = path;
                self.store = None;
                self.table = None;
                self.workbook_error = Some(e.to_string());
                self.load_error = Some(e.to_string());
            }
        }
    }

    /// Switch to a dataset: load its sheet from the cache, normalize it,
    /// rebuild filter options, and reset the filter state.
    pub fn select_dataset(&mut self, id: &str) {
        self.selected_dataset = id.to_string();
        self.table = None;
        self.filter_state = FilterState::default();
        self.filter_options.clear();
        self.range_bounds = None;
        self.display_cols.clear();
        self.load_error = None;

        let Some(config) = self.catalog.get(id).cloned() else {
            self.load_error = Some(format!("Unknown dataset '{id}'."));
            return;
        };

        let Some(store) = self.store.as_mut() else {
            // Opening failed at startup; keep showing that error.
            self.load_error = self.workbook_error.clone();
            return;
        };

        let raw = match store.sheet(id) {
            Ok(sheet) => sheet.clone(),
            Err(e) => {
                tracing::error!(dataset = id, error = %e, "Failed to load sheet");
                self.load_error = Some(e.to_string());
                return;
            }
        };

        let table = normalize(&config, raw);

        self.filter_options = config
            .filter_cols
            .iter()
            .filter_map(|col| {
                let values = table.unique_filter_values(col);
                if values.is_empty() {
                    None
                } else {
                    Some((col.clone(), values))
                }
            })
            .collect();

        self.range_bounds = config.range_col.as_deref().and_then(|col| {
            let idx = table.column_index(col)?;
            if table.is_empty() {
                return Some((0.0, 0.0));
            }
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for row in &table.rows {
                let v = row[idx].as_f64_or_zero();
                min = min.min(v);
                max = max.max(v);
            }
            Some((min, max))
        });
        // The slider starts at the full span, so no rows are excluded until
        // the user narrows it.
        self.filter_state.range = self.range_bounds;

        self.display_cols = display_columns(&table, &config.display_cols);
        self.status_message = format!("{}: {} rows.", config.display_name, table.len());
        self.table = Some(table);

        self.refilter();
    }

    /// Recompute filtered indices and derived emails after any filter
    /// change. Row order always follows the source sheet.
    pub fn refilter(&mut self) {
        let Some(table) = &self.table else {
            self.filtered_indices.clear();
            self.emails.clear();
            return;
        };
        let config = self.catalog.get(&self.selected_dataset);

        let range_col = config.and_then(|c| c.range_col.as_deref());
        self.filtered_indices = apply_filters(table, &self.filter_state, range_col);

        let email_cols: &[String] = config.map(|c| c.email_cols.as_slice()).unwrap_or(&[]);
        self.emails = extract_emails(table, &self.filtered_indices, email_cols);
    }

    /// Newline-joined email list for the clipboard, bounded by the
    /// clipboard cap.
    pub fn emails_clipboard_text(&self) -> String {
        self.emails
            .iter()
            .take(constants::MAX_CLIPBOARD_EMAILS)
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ContactDeck - app/store.rs
//
// Workbook access and the process-wide sheet cache.
//
// The cache is an explicit object constructed once at startup and owned by
// AppState: populated lazily, written at most once per sheet name, never
// invalidated during a run (the workbook is assumed static while the
// process is live).

use crate::core::model::Sheet;
use crate::util::error::WorkbookError;
use calamine::{open_workbook, Reader, Xlsx};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// WorkbookSource
// ---------------------------------------------------------------------------

/// A source of named sheets. The seam between sheet consumers and the
/// on-disk workbook; tests substitute an in-memory implementation.
pub trait WorkbookSource {
    /// Names of all sheets in the workbook, in file order.
    fn sheet_names(&self) -> &[String];

    /// Read one sheet. Fails with `SheetNotFound` for unknown names.
    fn read_sheet(&mut self, name: &str) -> Result<Sheet, WorkbookError>;
}

// ---------------------------------------------------------------------------
// XlsxWorkbook
// ---------------------------------------------------------------------------

/// Calamine-backed workbook source. The file is opened once and the handle
/// reused for every sheet read.
pub struct XlsxWorkbook {
    path: PathBuf,
    workbook: Xlsx<BufReader<File>>,
    sheet_names: Vec<String>,
}

impl XlsxWorkbook {
    /// Open a workbook file.
    ///
    /// Fails with `FileNotFound` when the path does not exist and `Open`
    /// when calamine rejects the file.
    pub fn open(path: &Path) -> Result<Self, WorkbookError> {
        if !path.exists() {
            return Err(WorkbookError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let workbook: Xlsx<_> = open_workbook(path).map_err(|e| WorkbookError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        let sheet_names = workbook.sheet_names().to_vec();

        tracing::info!(
            path = %path.display(),
            sheets = sheet_names.len(),
            "Workbook opened"
        );

        Ok(Self {
            path: path.to_path_buf(),
            workbook,
            sheet_names,
        })
    }
}

impl WorkbookSource for XlsxWorkbook {
    fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    fn read_sheet(&mut self, name: &str) -> Result<Sheet, WorkbookError> {
        if !self.sheet_names.iter().any(|n| n == name) {
            return Err(WorkbookError::SheetNotFound {
                name: name.to_string(),
            });
        }

        let range = self
            .workbook
            .worksheet_range(name)
            .map_err(|e| WorkbookError::Open {
                path: self.path.clone(),
                source: e,
            })?;

        Ok(Sheet::from_range(name, &range))
    }
}

// ---------------------------------------------------------------------------
// SheetStore
// ---------------------------------------------------------------------------

/// Read-through sheet cache over a workbook source.
///
/// Loading the same sheet name twice returns row-for-row identical content;
/// the source is consulted at most once per name.
pub struct SheetStore {
    source: Box<dyn WorkbookSource>,
    cache: HashMap<String, Sheet>,
}

impl SheetStore {
    /// Wrap an already-opened source.
    pub fn new(source: Box<dyn WorkbookSource>) -> Self {
        Self {
            source,
            cache: HashMap::new(),
        }
    }

    /// Open an xlsx workbook and wrap it in a store.
    pub fn open(path: &Path) -> Result<Self, WorkbookError> {
        Ok(Self::new(Box::new(XlsxWorkbook::open(path)?)))
    }

    /// Names of all sheets in the underlying workbook.
    pub fn sheet_names(&self) -> &[String] {
        self.source.sheet_names()
    }

    /// Fetch a sheet, loading it from the source on first access.
    pub fn sheet(&mut self, name: &str) -> Result<&Sheet, WorkbookError> {
        if !self.cache.contains_key(name) {
            let sheet = self.source.read_sheet(name)?;
            tracing::info!(sheet = name, rows = sheet.len(), "Sheet loaded into cache");
            self.cache.insert(name.to_string(), sheet);
        }
        Ok(&self.cache[name])
    }
}

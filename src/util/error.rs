// ContactDeck - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal
// chain for diagnostic logging.
//
// Per-cell anomalies (unparseable numbers, error cells) are NOT errors:
// they are absorbed into missing-value markers by the model and the
// normalizer and never surface here.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all ContactDeck operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum ContactDeckError {
    /// Dataset catalog parsing or validation failed.
    Catalog(CatalogError),

    /// Workbook opening or sheet loading failed.
    Workbook(WorkbookError),

    /// Export operation failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for ContactDeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(e) => write!(f, "Catalog error: {e}"),
            Self::Workbook(e) => write!(f, "Workbook error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ContactDeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(e) => Some(e),
            Self::Workbook(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog errors
// ---------------------------------------------------------------------------

/// Errors related to dataset catalog parsing and validation.
///
/// The built-in catalog is embedded in the binary, so any of these at
/// startup indicates a packaging mistake rather than a user error.
#[derive(Debug)]
pub enum CatalogError {
    /// TOML content could not be parsed.
    TomlParse { source: toml::de::Error },

    /// A required field is missing or empty in a dataset definition.
    MissingField {
        dataset_id: String,
        field: &'static str,
    },

    /// Two datasets share the same id.
    DuplicateId { id: String },

    /// The URL pattern for a social dataset is invalid.
    InvalidRegex {
        dataset_id: String,
        pattern: String,
        source: regex::Error,
    },

    /// The URL pattern exceeds the maximum allowed length.
    RegexTooLong {
        dataset_id: String,
        length: usize,
        max_length: usize,
    },

    /// Maximum number of datasets exceeded.
    TooManyDatasets { count: usize, max: usize },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { source } => {
                write!(f, "Failed to parse catalog TOML: {source}")
            }
            Self::MissingField { dataset_id, field } => {
                write!(f, "Dataset '{dataset_id}': missing required field '{field}'")
            }
            Self::DuplicateId { id } => {
                write!(f, "Duplicate dataset id '{id}' in catalog")
            }
            Self::InvalidRegex {
                dataset_id,
                pattern,
                source,
            } => write!(
                f,
                "Dataset '{dataset_id}': invalid url_pattern '{pattern}': {source}"
            ),
            Self::RegexTooLong {
                dataset_id,
                length,
                max_length,
            } => write!(
                f,
                "Dataset '{dataset_id}': url_pattern is {length} chars, \
                 exceeds maximum of {max_length}"
            ),
            Self::TooManyDatasets { count, max } => {
                write!(f, "Catalog defines {count} datasets, maximum is {max}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source } => Some(source),
            Self::InvalidRegex { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<CatalogError> for ContactDeckError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

// ---------------------------------------------------------------------------
// Workbook errors
// ---------------------------------------------------------------------------

/// Errors related to opening the workbook and loading sheets.
///
/// Both variants are unrecoverable for the current request: the workbook is
/// a static local file, so retrying cannot help. They are surfaced to the
/// user verbatim.
#[derive(Debug)]
pub enum WorkbookError {
    /// The workbook file does not exist.
    FileNotFound { path: PathBuf },

    /// The workbook file exists but could not be opened or read.
    Open {
        path: PathBuf,
        source: calamine::XlsxError,
    },

    /// The requested sheet name is absent from the workbook.
    SheetNotFound { name: String },
}

impl fmt::Display for WorkbookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound { path } => {
                write!(
                    f,
                    "Cannot find workbook at '{}'. Place the Excel file next to the app \
                     or pass its path on the command line.",
                    path.display()
                )
            }
            Self::Open { path, source } => {
                write!(f, "Cannot open workbook '{}': {source}", path.display())
            }
            Self::SheetNotFound { name } => {
                write!(f, "Sheet '{name}' not found in workbook")
            }
        }
    }
}

impl std::error::Error for WorkbookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<WorkbookError> for ContactDeckError {
    fn from(e: WorkbookError) -> Self {
        Self::Workbook(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for ContactDeckError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

/// Convenience type alias for ContactDeck results.
pub type Result<T> = std::result::Result<T, ContactDeckError>;

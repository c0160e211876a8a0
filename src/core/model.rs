// ContactDeck - core/model.rs
//
// Core tabular model. Pure data definitions plus the conversion from a
// calamine cell range into a Sheet.
//
// These types are the shared vocabulary across all layers.

use calamine::{Data, Range};

// =============================================================================
// CellValue (one cell of a sheet)
// =============================================================================

/// A dynamically-typed cell value, normalised across the source formats
/// calamine can produce.
///
/// `Empty` doubles as the missing-value marker: error cells and values that
/// fail numeric parsing become `Empty` rather than surfacing an error.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// String form used for display, filtering, keyword search, and export.
    ///
    /// Numbers with no fractional part render without a decimal point so a
    /// follower count parsed from "1,234" round-trips as "1234".
    pub fn as_str(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{n:.0}")
                } else {
                    n.to_string()
                }
            }
            CellValue::Bool(b) => b.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Numeric view used by the range filter. `Empty` counts as zero.
    pub fn as_f64_or_zero(&self) -> f64 {
        match self {
            CellValue::Number(n) => *n,
            _ => 0.0,
        }
    }

    /// Whether this cell holds no usable value.
    ///
    /// Besides `Empty`, whitespace-only text and the literal string "nan"
    /// (the stringified missing marker of common exporters) count as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => {
                let t = s.trim();
                t.is_empty() || t == "nan"
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_str())
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            // Malformed cells become the missing marker, never an error.
            Data::Error(_) => CellValue::Empty,
            Data::DateTime(dt) => CellValue::Text(dt.to_string()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }
}

// =============================================================================
// Sheet (one named table of the workbook)
// =============================================================================

/// A named table: ordered columns, rows in source order.
///
/// Rows are padded to the column count, so indexing a row by a valid column
/// index never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Sheet name as it appears in the workbook.
    pub name: String,

    /// Ordered column names from the header row.
    pub columns: Vec<String>,

    /// Cell rows, each exactly `columns.len()` wide.
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Build a sheet from a calamine cell range.
    ///
    /// The first row is the header; empty header cells are named
    /// `Column_<i>`. Data rows are padded or truncated to the header width.
    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let mut rows_iter = range.rows();

        let columns: Vec<String> = match rows_iter.next() {
            Some(header) => header
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let label = CellValue::from(cell).as_str().trim().to_string();
                    if label.is_empty() {
                        format!("Column_{i}")
                    } else {
                        label
                    }
                })
                .collect(),
            None => Vec::new(),
        };

        let width = columns.len();
        let rows: Vec<Vec<CellValue>> = rows_iter
            .map(|raw| {
                let mut row: Vec<CellValue> = raw.iter().take(width).map(CellValue::from).collect();
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();

        Sheet {
            name: name.to_string(),
            columns,
            rows,
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the sheet has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Sorted distinct trimmed non-empty string values of a column.
    ///
    /// This is the option list for a categorical filter; an empty result
    /// means the column offers no filter.
    pub fn unique_filter_values(&self, column: &str) -> Vec<String> {
        let Some(idx) = self.column_index(column) else {
            return Vec::new();
        };

        let mut values: Vec<String> = self
            .rows
            .iter()
            .map(|row| row[idx].as_str().trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();
        values.sort();
        values.dedup();
        values
    }

    /// Append a column filled with `Empty` cells. No-op if it already exists.
    pub fn add_empty_column(&mut self, column: &str) {
        if self.column_index(column).is_some() {
            return;
        }
        self.columns.push(column.to_string());
        for row in &mut self.rows {
            row.push(CellValue::Empty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display_drops_zero_fraction() {
        assert_eq!(CellValue::Number(1234.0).as_str(), "1234");
        assert_eq!(CellValue::Number(3.14).as_str(), "3.14");
        assert_eq!(CellValue::Empty.as_str(), "");
    }

    #[test]
    fn test_blank_detection() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::Text("   ".to_string()).is_blank());
        assert!(CellValue::Text("nan".to_string()).is_blank());
        assert!(!CellValue::Text("@alice".to_string()).is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_error_cells_become_empty() {
        let cell = Data::Error(calamine::CellErrorType::Div0);
        assert_eq!(CellValue::from(&cell), CellValue::Empty);
    }

    #[test]
    fn test_from_range_headers_and_padding() {
        let mut range: Range<Data> = Range::new((0, 0), (2, 2));
        range.set_value((0, 0), Data::String("Name".to_string()));
        range.set_value((0, 2), Data::String("Party".to_string()));
        range.set_value((1, 0), Data::String("Anna".to_string()));
        range.set_value((1, 1), Data::Float(42.0));
        range.set_value((2, 0), Data::String("Bo".to_string()));

        let sheet = Sheet::from_range("Riksdag_SeatHolders_349", &range);

        assert_eq!(sheet.columns, vec!["Name", "Column_1", "Party"]);
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.rows[0][1], CellValue::Number(42.0));
        // Short rows are padded with Empty up to the header width.
        assert_eq!(sheet.rows[1][2], CellValue::Empty);
    }

    #[test]
    fn test_unique_filter_values_sorted_and_trimmed() {
        let sheet = Sheet {
            name: "s".to_string(),
            columns: vec!["Party".to_string()],
            rows: vec![
                vec![CellValue::Text(" S ".to_string())],
                vec![CellValue::Text("M".to_string())],
                vec![CellValue::Text("S".to_string())],
                vec![CellValue::Empty],
            ],
        };
        assert_eq!(sheet.unique_filter_values("Party"), vec!["M", "S"]);
        assert!(sheet.unique_filter_values("Missing").is_empty());
    }
}

// ContactDeck - core/filter.rs
//
// Filter engine for the active dataset.
// All active criteria are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::Sheet;
use std::collections::BTreeMap;

/// Complete filter state. All fields are AND-combined when applied.
///
/// Conceptual order: categorical filters, keyword search, numeric range,
/// row cap.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Chosen value per categorical column. An absent key is the "All"
    /// sentinel (no constraint for that column).
    pub selections: BTreeMap<String, String>,

    /// Case-insensitive substring searched in every column. Empty = no filter.
    pub keyword: String,

    /// Inclusive (min, max) bounds for the dataset's range column.
    /// None = no range filter.
    pub range: Option<(f64, f64)>,

    /// Keep at most this many rows. 0 = unlimited.
    pub row_cap: usize,
}

impl FilterState {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
            && self.keyword.is_empty()
            && self.range.is_none()
            && self.row_cap == 0
    }
}

/// Apply filters to a sheet, returning indices of matching rows in source
/// order.
///
/// Returns a Vec of indices into `sheet.rows`. This avoids copying rows and
/// enables virtual scrolling on the filtered view.
///
/// `range_col` is the dataset's configured numeric column; the range filter
/// is skipped when it is absent from the sheet.
pub fn apply_filters(sheet: &Sheet, filter: &FilterState, range_col: Option<&str>) -> Vec<usize> {
    if filter.is_empty() {
        return (0..sheet.len()).collect();
    }

    let keyword_lower = filter.keyword.to_lowercase();

    // Resolve column names once, outside the row loop.
    let selections: Vec<(usize, &str)> = filter
        .selections
        .iter()
        .filter_map(|(col, chosen)| {
            sheet
                .column_index(col)
                .map(|idx| (idx, chosen.as_str()))
        })
        .collect();

    let range = match (filter.range, range_col.and_then(|c| sheet.column_index(c))) {
        (Some(bounds), Some(idx)) => Some((bounds, idx)),
        _ => None,
    };

    let mut indices: Vec<usize> = sheet
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            // Categorical: trimmed exact match per selected column.
            for &(idx, chosen) in &selections {
                if row[idx].as_str().trim() != chosen {
                    return false;
                }
            }

            // Keyword: any column's string form contains the needle.
            if !keyword_lower.is_empty()
                && !row
                    .iter()
                    .any(|cell| cell.as_str().to_lowercase().contains(&keyword_lower))
            {
                return false;
            }

            // Numeric range: inclusive bounds, missing values count as zero.
            if let Some(((min, max), idx)) = range {
                let v = row[idx].as_f64_or_zero();
                if v < min || v > max {
                    return false;
                }
            }

            true
        })
        .map(|(idx, _)| idx)
        .collect();

    if filter.row_cap > 0 && indices.len() > filter.row_cap {
        indices.truncate(filter.row_cap);
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::CellValue;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn embassy_sheet() -> Sheet {
        Sheet {
            name: "Sweden_Embassies_All".to_string(),
            columns: vec![
                "Country/Area".to_string(),
                "Location".to_string(),
                "Email".to_string(),
            ],
            rows: vec![
                vec![text("Sweden"), text("Stockholm"), text("a@gov.se")],
                vec![text("Norway"), text("Oslo"), text("b@gov.se")],
                vec![
                    text("Embassy of Sweden"),
                    text("Berlin"),
                    CellValue::Empty,
                ],
            ],
        }
    }

    #[test]
    fn test_empty_filter_returns_all() {
        let sheet = embassy_sheet();
        let result = apply_filters(&sheet, &FilterState::default(), None);
        assert_eq!(result, vec![0, 1, 2]);
    }

    #[test]
    fn test_keyword_matches_any_column_case_insensitive() {
        let sheet = embassy_sheet();
        let filter = FilterState {
            keyword: "sweden".to_string(),
            ..Default::default()
        };
        let result = apply_filters(&sheet, &filter, None);
        assert_eq!(result, vec![0, 2]);
    }

    #[test]
    fn test_keyword_without_match_returns_empty() {
        let sheet = embassy_sheet();
        let filter = FilterState {
            keyword: "zanzibar".to_string(),
            ..Default::default()
        };
        assert!(apply_filters(&sheet, &filter, None).is_empty());
    }

    #[test]
    fn test_categorical_value_absent_from_data_returns_empty() {
        let sheet = embassy_sheet();
        let mut filter = FilterState::default();
        filter
            .selections
            .insert("Location".to_string(), "Atlantis".to_string());
        assert!(apply_filters(&sheet, &filter, None).is_empty());
    }

    #[test]
    fn test_categorical_matches_trimmed_value() {
        let mut sheet = embassy_sheet();
        sheet.rows[0][1] = text("  Stockholm ");
        let mut filter = FilterState::default();
        filter
            .selections
            .insert("Location".to_string(), "Stockholm".to_string());
        assert_eq!(apply_filters(&sheet, &filter, None), vec![0]);
    }

    #[test]
    fn test_row_cap_truncates_in_source_order() {
        let sheet = Sheet {
            name: "big".to_string(),
            columns: vec!["N".to_string()],
            rows: (0..50).map(|i| vec![CellValue::Number(i as f64)]).collect(),
        };

        let capped = FilterState {
            row_cap: 10,
            ..Default::default()
        };
        let result = apply_filters(&sheet, &capped, None);
        assert_eq!(result, (0..10).collect::<Vec<_>>());

        let uncapped = FilterState {
            row_cap: 0,
            ..Default::default()
        };
        assert_eq!(apply_filters(&sheet, &uncapped, None).len(), 50);
    }

    #[test]
    fn test_range_filter_treats_missing_as_zero() {
        let sheet = Sheet {
            name: "Top_200_X".to_string(),
            columns: vec!["Name".to_string(), "Followers".to_string()],
            rows: vec![
                vec![text("A"), CellValue::Number(500.0)],
                vec![text("B"), CellValue::Empty],
                vec![text("C"), CellValue::Number(5_000.0)],
            ],
        };

        let filter = FilterState {
            range: Some((0.0, 1_000.0)),
            ..Default::default()
        };
        let result = apply_filters(&sheet, &filter, Some("Followers"));
        // The missing value counts as zero and passes the lower bound.
        assert_eq!(result, vec![0, 1]);
    }

    #[test]
    fn test_combined_filters() {
        let sheet = embassy_sheet();
        let mut filter = FilterState {
            keyword: "sweden".to_string(),
            row_cap: 1,
            ..Default::default()
        };
        filter
            .selections
            .insert("Location".to_string(), "Berlin".to_string());
        let result = apply_filters(&sheet, &filter, None);
        assert_eq!(result, vec![2]);
    }
}

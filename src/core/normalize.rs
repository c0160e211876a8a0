// ContactDeck - core/normalize.rs
//
// Per-dataset normalization rules, driven entirely by the catalog entry.
// Core layer: pure logic, no I/O or UI dependencies.
//
// All rules are idempotent and deterministic: running them on already
// normalized data is a no-op. Unparseable values become the missing
// marker, never an error.

use crate::core::catalog::{DatasetConfig, SocialColumns};
use crate::core::model::{CellValue, Sheet};

/// Apply the dataset's normalization rules to a freshly loaded sheet.
///
/// Rule order: de-duplication runs on the raw rows, column cleanups are
/// independent of each other, and derivations run last (handle-from-URL
/// before URL-from-handle, so a derived handle can seed a derived URL).
pub fn normalize(config: &DatasetConfig, mut sheet: Sheet) -> Sheet {
    if !config.dedupe_cols.is_empty() {
        dedupe_rows(&mut sheet, &config.dedupe_cols);
    }

    for col in &config.numeric_cols {
        clean_numeric_column(&mut sheet, col);
    }

    if let Some(social) = &config.social {
        apply_social_rules(&mut sheet, social);
    }

    sheet
}

// ---------------------------------------------------------------------------
// De-duplication
// ---------------------------------------------------------------------------

/// Drop rows sharing the same values in the key columns, keeping the first
/// occurrence in source order. Configured columns absent from this sheet
/// are ignored; if none are present the sheet is left untouched.
fn dedupe_rows(sheet: &mut Sheet, key_cols: &[String]) {
    let key_indices: Vec<usize> = key_cols
        .iter()
        .filter_map(|c| sheet.column_index(c))
        .collect();
    if key_indices.is_empty() {
        return;
    }

    let mut seen: std::collections::HashSet<Vec<String>> = std::collections::HashSet::new();
    sheet.rows.retain(|row| {
        let key: Vec<String> = key_indices
            .iter()
            .map(|&i| row[i].as_str().trim().to_string())
            .collect();
        seen.insert(key)
    });
}

// ---------------------------------------------------------------------------
// Numeric-as-text cleanup
// ---------------------------------------------------------------------------

/// Strip thousands separators and spaces from the string form of each cell
/// and parse the result as a number. Unparseable or non-finite values
/// become the missing marker.
fn clean_numeric_column(sheet: &mut Sheet, column: &str) {
    let Some(idx) = sheet.column_index(column) else {
        return;
    };

    for row in &mut sheet.rows {
        let cleaned: String = row[idx]
            .as_str()
            .chars()
            .filter(|c| *c != ',' && *c != ' ')
            .collect();

        row[idx] = match cleaned.parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Number(n),
            _ => CellValue::Empty,
        };
    }
}

// ---------------------------------------------------------------------------
// Handle / URL rules
// ---------------------------------------------------------------------------

fn apply_social_rules(sheet: &mut Sheet, social: &SocialColumns) {
    // The URL column is part of the output contract even when the source
    // sheet lacks it.
    sheet.add_empty_column(&social.url_col);

    let Some(handle_idx) = sheet.column_index(&social.handle_col) else {
        return;
    };
    let Some(url_idx) = sheet.column_index(&social.url_col) else {
        return;
    };

    for row in &mut sheet.rows {
        // Handle cleanup: trim, strip a single leading "@".
        row[handle_idx] = clean_handle(&row[handle_idx]);

        // URL cleanup: trim; blank or "nan" means missing.
        row[url_idx] = clean_url(&row[url_idx]);

        // Handle derivation: extract from a recognised profile URL.
        if row[handle_idx].is_blank() {
            if let (Some(pattern), CellValue::Text(url)) = (&social.url_pattern, &row[url_idx]) {
                if let Some(handle) = pattern.captures(url).and_then(|c| c.get(1)) {
                    row[handle_idx] = CellValue::Text(handle.as_str().to_string());
                }
            }
        }

        // URL derivation: template + handle. An empty handle degenerates to
        // the bare template, which is accepted.
        if row[url_idx].is_blank() {
            let handle = match &row[handle_idx] {
                CellValue::Text(h) => h.as_str(),
                _ => "",
            };
            row[url_idx] = CellValue::Text(format!("{}{handle}", social.url_template));
        }
    }
}

fn clean_handle(cell: &CellValue) -> CellValue {
    if cell.is_blank() {
        return CellValue::Empty;
    }
    let trimmed = cell.as_str().trim().to_string();
    let stripped = trimmed.strip_prefix('@').unwrap_or(&trimmed).to_string();
    if stripped.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(stripped)
    }
}

fn clean_url(cell: &CellValue) -> CellValue {
    if cell.is_blank() {
        return CellValue::Empty;
    }
    CellValue::Text(cell.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{load_builtin_catalog, Catalog};

    fn catalog() -> Catalog {
        load_builtin_catalog().unwrap()
    }

    fn sheet(columns: &[&str], rows: Vec<Vec<CellValue>>) -> Sheet {
        Sheet {
            name: "test".to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_x_handle_derived_from_url() {
        let catalog = catalog();
        let config = catalog.get("Top_200_X").unwrap();
        let input = sheet(
            &["Name", "X_Handle", "X_URL"],
            vec![vec![
                text("Alice"),
                CellValue::Empty,
                text("https://x.com/alice"),
            ]],
        );

        let result = normalize(config, input);
        assert_eq!(result.rows[0][1], text("alice"));
    }

    #[test]
    fn test_x_url_derived_from_handle() {
        let catalog = catalog();
        let config = catalog.get("Top_200_X").unwrap();
        let input = sheet(
            &["Name", "X_Handle", "X_URL"],
            vec![vec![text("Bob"), text("bob"), CellValue::Empty]],
        );

        let result = normalize(config, input);
        assert_eq!(result.rows[0][2], text("https://x.com/bob"));
    }

    #[test]
    fn test_x_unrecognised_url_leaves_handle_blank() {
        let catalog = catalog();
        let config = catalog.get("Top_200_X").unwrap();
        let input = sheet(
            &["Name", "X_Handle", "X_URL"],
            vec![vec![
                text("Carol"),
                CellValue::Empty,
                text("https://example.com/carol"),
            ]],
        );

        let result = normalize(config, input);
        assert_eq!(result.rows[0][1], CellValue::Empty);
    }

    #[test]
    fn test_tiktok_handle_stripped_and_url_synthesized() {
        let catalog = catalog();
        let config = catalog.get("Top_100_TikTok").unwrap();
        let input = sheet(
            &["Name", "TikTok_Handle"],
            vec![vec![text("Carol"), text("@carol")]],
        );

        let result = normalize(config, input);
        let handle_idx = result.column_index("TikTok_Handle").unwrap();
        let url_idx = result.column_index("TikTok_URL").unwrap();
        assert_eq!(result.rows[0][handle_idx], text("carol"));
        assert_eq!(result.rows[0][url_idx], text("https://www.tiktok.com/@carol"));
    }

    #[test]
    fn test_missing_handle_and_url_degenerates_to_bare_template() {
        let catalog = catalog();
        let config = catalog.get("Top_100_TikTok").unwrap();
        let input = sheet(
            &["Name", "TikTok_Handle"],
            vec![vec![text("Nobody"), CellValue::Empty]],
        );

        let result = normalize(config, input);
        let url_idx = result.column_index("TikTok_URL").unwrap();
        assert_eq!(result.rows[0][url_idx], text("https://www.tiktok.com/@"));
    }

    #[test]
    fn test_numeric_cleanup_accepts_separators() {
        let catalog = catalog();
        let config = catalog.get("Influencers_IG_Top1000").unwrap();
        let input = sheet(
            &["Name", "IG_Handle", "Followers"],
            vec![
                vec![text("A"), text("a"), text("1,234,567")],
                vec![text("B"), text("b"), text("12 345")],
                vec![text("C"), text("c"), text("n/a")],
                vec![text("D"), text("d"), CellValue::Number(99.0)],
            ],
        );

        let result = normalize(config, input);
        let idx = result.column_index("Followers").unwrap();
        assert_eq!(result.rows[0][idx], CellValue::Number(1_234_567.0));
        assert_eq!(result.rows[1][idx], CellValue::Number(12_345.0));
        assert_eq!(result.rows[2][idx], CellValue::Empty);
        assert_eq!(result.rows[3][idx], CellValue::Number(99.0));
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let catalog = catalog();
        let config = catalog.get("Influencers_IG_Top1000").unwrap();
        let input = sheet(
            &["Name", "IG_Handle", "Followers"],
            vec![
                vec![text("First"), text("shared"), text("100")],
                vec![text("Second"), text("shared"), text("200")],
                vec![text("Other"), text("unique"), text("300")],
            ],
        );

        let result = normalize(config, input);
        assert_eq!(result.len(), 2);
        assert_eq!(result.rows[0][0], text("First"));
        assert_eq!(result.rows[1][0], text("Other"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let catalog = catalog();
        let config = catalog.get("Top_200_X").unwrap();
        let input = sheet(
            &["Name", "X_Handle", "X_URL", "Followers"],
            vec![
                vec![text("Alice"), text("@alice"), CellValue::Empty, text("1,000")],
                vec![
                    text("Bob"),
                    CellValue::Empty,
                    text("https://x.com/bob"),
                    text("nan"),
                ],
            ],
        );

        let once = normalize(config, input);
        let twice = normalize(config, once.clone());
        assert_eq!(once, twice);
    }
}

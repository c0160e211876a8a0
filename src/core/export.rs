// ContactDeck - core/export.rs
//
// Presenter: display-column projection, CSV export of the filtered view,
// and email extraction.
// Core layer: writes to any Write trait object.

use crate::core::model::Sheet;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Resolve the display projection for a sheet.
///
/// Configured columns absent from this particular sheet are silently
/// dropped (a deliberate leniency policy, not an error); an empty
/// configuration means all columns, in sheet order.
pub fn display_columns(sheet: &Sheet, configured: &[String]) -> Vec<String> {
    if configured.is_empty() {
        return sheet.columns.clone();
    }
    configured
        .iter()
        .filter(|c| sheet.column_index(c).is_some())
        .cloned()
        .collect()
}

/// Export the filtered rows to CSV: header row plus one record per row,
/// restricted to `columns` (resolved via [`display_columns`]).
///
/// `export_path` is used for error messages only. Returns the number of
/// data rows written.
pub fn export_csv<W: Write>(
    sheet: &Sheet,
    indices: &[usize],
    columns: &[String],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let col_indices: Vec<usize> = columns
        .iter()
        .filter_map(|c| sheet.column_index(c))
        .collect();

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(columns)
        .map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    let mut count = 0;
    for &row_idx in indices {
        let Some(row) = sheet.rows.get(row_idx) else {
            continue;
        };
        let record: Vec<String> = col_indices.iter().map(|&i| row[i].as_str()).collect();
        csv_writer
            .write_record(&record)
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Collect distinct, non-empty, trimmed email values from the configured
/// columns of the filtered rows.
///
/// Values are gathered column-major (all of the first configured column,
/// then the next), and order follows first appearance. Configured columns
/// absent from the sheet are skipped.
pub fn extract_emails(sheet: &Sheet, indices: &[usize], email_cols: &[String]) -> Vec<String> {
    let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();
    let mut emails: Vec<String> = Vec::new();

    for col in email_cols {
        let Some(col_idx) = sheet.column_index(col) else {
            continue;
        };
        for &row_idx in indices {
            let Some(row) = sheet.rows.get(row_idx) else {
                continue;
            };
            let value = row[col_idx].as_str().trim().to_string();
            if !value.is_empty() && seen.insert(value.clone()) {
                emails.push(value);
            }
        }
    }

    emails
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::CellValue;
    use std::path::PathBuf;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn sheet(columns: &[&str], rows: Vec<Vec<CellValue>>) -> Sheet {
        Sheet {
            name: "test".to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    #[test]
    fn test_display_columns_drops_absent_and_keeps_order() {
        let sheet = sheet(&["Name", "Party", "Email"], vec![]);
        let configured = vec![
            "Party".to_string(),
            "Profile_URL".to_string(),
            "Name".to_string(),
        ];
        assert_eq!(display_columns(&sheet, &configured), vec!["Party", "Name"]);
        assert_eq!(
            display_columns(&sheet, &[]),
            vec!["Name", "Party", "Email"]
        );
    }

    #[test]
    fn test_csv_export_round_trip() {
        let sheet = sheet(
            &["Name", "Location", "Followers"],
            vec![
                vec![text("Embassy, Berlin"), text("Berlin"), CellValue::Number(1_234.0)],
                vec![text("Consulate \"North\""), text("Oslo"), CellValue::Empty],
            ],
        );
        let columns = display_columns(&sheet, &[]);
        let indices = vec![0, 1];

        let mut buf = Vec::new();
        let count = export_csv(
            &sheet,
            &indices,
            &columns,
            &mut buf,
            &PathBuf::from("contacts.csv"),
        )
        .unwrap();
        assert_eq!(count, 2);

        // Parsing the output back yields the same columns and cell values.
        let mut reader = csv::Reader::from_reader(buf.as_slice());
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, columns);

        let records: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        assert_eq!(
            records,
            vec![
                vec!["Embassy, Berlin", "Berlin", "1234"],
                vec!["Consulate \"North\"", "Oslo", ""],
            ]
        );
    }

    #[test]
    fn test_csv_export_respects_filtered_indices() {
        let sheet = sheet(
            &["Name"],
            vec![vec![text("A")], vec![text("B")], vec![text("C")]],
        );
        let columns = display_columns(&sheet, &[]);

        let mut buf = Vec::new();
        let count = export_csv(
            &sheet,
            &[2, 0],
            &columns,
            &mut buf,
            &PathBuf::from("contacts.csv"),
        )
        .unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output, "Name\nC\nA\n");
    }

    #[test]
    fn test_extract_emails_dedupes_and_drops_blanks() {
        let sheet = sheet(
            &["Email"],
            vec![
                vec![text("a@x.com")],
                vec![text("")],
                vec![text("a@x.com")],
            ],
        );
        let emails = extract_emails(&sheet, &[0, 1, 2], &["Email".to_string()]);
        assert_eq!(emails, vec!["a@x.com"]);
    }

    #[test]
    fn test_extract_emails_column_major_first_appearance() {
        let sheet = sheet(
            &["Email", "Backup Email"],
            vec![
                vec![text(" a@x.com "), text("c@x.com")],
                vec![CellValue::Empty, text("b@x.com")],
            ],
        );
        let emails = extract_emails(
            &sheet,
            &[0, 1],
            &["Email".to_string(), "Backup Email".to_string()],
        );
        assert_eq!(emails, vec!["a@x.com", "c@x.com", "b@x.com"]);
    }

    #[test]
    fn test_extract_emails_missing_column_skipped() {
        let sheet = sheet(&["Name"], vec![vec![text("A")]]);
        let emails = extract_emails(&sheet, &[0], &["Email".to_string()]);
        assert!(emails.is_empty());
    }
}

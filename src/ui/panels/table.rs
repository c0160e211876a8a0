// ContactDeck - ui/panels/table.rs
//
// Virtual-scrolling table of the filtered view.
//
// Uses egui's `ScrollArea::show_rows` which renders only the rows currently
// visible in the viewport, giving O(1) rendering cost regardless of row
// count. URL columns render as "Open profile" hyperlinks instead of the
// raw address.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the filtered table (central area).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    if let Some(config) = state.active_config() {
        ui.heading(&config.display_name);
        if !config.description.is_empty() {
            ui.label(
                egui::RichText::new(&config.description)
                    .small()
                    .color(theme::MUTED_TEXT),
            );
        }
        ui.separator();
    }

    if let Some(error) = &state.load_error {
        ui.colored_label(theme::ERROR_TEXT, error);
        return;
    }

    let Some(table) = &state.table else {
        ui.centered_and_justified(|ui| {
            ui.label("No dataset loaded.");
        });
        return;
    };

    if state.filtered_indices.is_empty() {
        ui.centered_and_justified(|ui| {
            if table.is_empty() {
                ui.label("This sheet has no rows.");
            } else {
                ui.label("No rows match the current filters.");
            }
        });
        return;
    }

    let columns = &state.display_cols;
    let col_indices: Vec<usize> = columns
        .iter()
        .filter_map(|c| table.column_index(c))
        .collect();
    let col_width =
        (ui.available_width() / columns.len().max(1) as f32).max(60.0) - 8.0;
    let row_height = theme::ROW_HEIGHT;

    // Header row.
    ui.horizontal(|ui| {
        for name in columns {
            ui.add_sized(
                [col_width, row_height],
                egui::Label::new(egui::RichText::new(name).strong()).truncate(),
            );
        }
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show_rows(ui, row_height, state.filtered_indices.len(), |ui, row_range| {
            for display_idx in row_range {
                let Some(&row_idx) = state.filtered_indices.get(display_idx) else {
                    continue;
                };
                let Some(row) = table.rows.get(row_idx) else {
                    continue;
                };

                ui.horizontal(|ui| {
                    for (&cell_idx, name) in col_indices.iter().zip(columns) {
                        let cell = &row[cell_idx];
                        let is_link =
                            constants::LINK_COLUMNS.contains(&name.as_str()) && !cell.is_blank();
                        if is_link {
                            ui.add_sized(
                                [col_width, row_height],
                                egui::Hyperlink::from_label_and_url(
                                    constants::LINK_LABEL,
                                    cell.as_str(),
                                ),
                            );
                        } else {
                            ui.add_sized(
                                [col_width, row_height],
                                egui::Label::new(cell.as_str()).truncate(),
                            );
                        }
                    }
                });
            }
        });
}

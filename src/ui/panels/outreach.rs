// ContactDeck - ui/panels/outreach.rs
//
// Outreach pane: extracted email list, CSV export of the filtered view,
// and the two editable draft messages.

use crate::app::state::AppState;
use crate::core::export;
use crate::ui::theme;

/// Render the outreach pane (bottom panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // ---- CSV export ----
        let has_rows = state.table.is_some() && !state.filtered_indices.is_empty();
        ui.add_enabled_ui(has_rows, |ui| {
            if ui.button("Download table (.csv)").clicked() {
                export_dialog(state);
            }
        });

        ui.separator();

        // ---- Emails ----
        let n = state.emails.len();
        ui.label(format!("Emails: {n}"));
        ui.add_enabled_ui(n > 0, |ui| {
            if ui.button(format!("Copy emails ({n})")).clicked() {
                ui.ctx().copy_text(state.emails_clipboard_text());
                state.status_message = format!("Copied {n} email(s) to clipboard.");
            }
        });
    });

    ui.separator();

    // ---- Draft messages ----
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::CollapsingHeader::new("Draft message (English, editable)")
                .default_open(false)
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut state.message_en)
                            .desired_rows(theme::MESSAGE_EDIT_ROWS)
                            .desired_width(f32::INFINITY),
                    );
                });
            egui::CollapsingHeader::new("Meddelande (svenska, redigerbar)")
                .default_open(false)
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut state.message_sv)
                            .desired_rows(theme::MESSAGE_EDIT_ROWS)
                            .desired_width(f32::INFINITY),
                    );
                });
        });
}

/// Ask for a destination and write the filtered view as CSV.
fn export_dialog(state: &mut AppState) {
    let Some(dest) = rfd::FileDialog::new()
        .add_filter("CSV", &["csv"])
        .set_file_name(crate::util::constants::EXPORT_FILE_NAME)
        .save_file()
    else {
        return;
    };

    let Some(table) = &state.table else {
        return;
    };

    let result = std::fs::File::create(&dest)
        .map_err(|e| format!("Cannot create file: {e}"))
        .and_then(|file| {
            export::export_csv(table, &state.filtered_indices, &state.display_cols, file, &dest)
                .map_err(|e| format!("CSV export failed: {e}"))
        });

    state.status_message = match result {
        Ok(count) => {
            tracing::info!(rows = count, dest = %dest.display(), "Exported CSV");
            format!("Exported {count} rows to {}.", dest.display())
        }
        Err(message) => {
            tracing::error!(error = %message, "CSV export failed");
            message
        }
    };
}

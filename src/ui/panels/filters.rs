// ContactDeck - ui/panels/filters.rs
//
// Filter controls sidebar: categorical selects, keyword search, follower
// range, and row cap. Any change triggers a full synchronous refilter.

use crate::app::state::AppState;
use crate::util::constants;

/// Render the filter controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Filters");

    if let Some(config) = state.active_config() {
        let email_cols = if config.email_cols.is_empty() {
            "None".to_string()
        } else {
            config.email_cols.join(", ")
        };
        let rows = state.table.as_ref().map(|t| t.len()).unwrap_or(0);
        ui.label(
            egui::RichText::new(format!("Rows: {rows} | Email columns: {email_cols}"))
                .small()
                .weak(),
        );
    }
    ui.separator();

    let mut changed = false;

    // Categorical selects: one ComboBox per offered column, with an "All"
    // sentinel that clears the constraint.
    let options = state.filter_options.clone();
    for (column, values) in &options {
        let current = state
            .filter_state
            .selections
            .get(column)
            .cloned()
            .unwrap_or_else(|| constants::FILTER_ALL.to_string());

        egui::ComboBox::from_label(column)
            .selected_text(&current)
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(current == constants::FILTER_ALL, constants::FILTER_ALL)
                    .clicked()
                {
                    state.filter_state.selections.remove(column);
                    changed = true;
                }
                for value in values {
                    if ui.selectable_label(current == *value, value).clicked() {
                        state
                            .filter_state
                            .selections
                            .insert(column.clone(), value.clone());
                        changed = true;
                    }
                }
            });
    }

    // Keyword search across every column.
    ui.label("Search (matches any column, case-insensitive):");
    if ui
        .text_edit_singleline(&mut state.filter_state.keyword)
        .changed()
    {
        changed = true;
    }

    // Follower range, only for datasets with a configured numeric column.
    if let Some((_, col_max)) = state.range_bounds {
        let span_max = col_max.max(1.0);
        let (mut lo, mut hi) = state.filter_state.range.unwrap_or((0.0, span_max));

        ui.add_space(4.0);
        ui.label("Followers range:");
        if ui
            .add(egui::Slider::new(&mut lo, 0.0..=span_max).text("min"))
            .changed()
        {
            changed = true;
        }
        if ui
            .add(egui::Slider::new(&mut hi, 0.0..=span_max).text("max"))
            .changed()
        {
            changed = true;
        }
        if changed {
            // Keep the bounds ordered; dragging min past max narrows to a
            // single point rather than inverting.
            if lo > hi {
                hi = lo;
            }
            state.filter_state.range = Some((lo, hi));
        }
    }

    // Row cap.
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Limit rows (0 = no limit):");
        let mut cap = state.filter_state.row_cap as u64;
        if ui
            .add(egui::DragValue::new(&mut cap).speed(10))
            .changed()
        {
            state.filter_state.row_cap = cap as usize;
            changed = true;
        }
    });

    if changed {
        state.refilter();
    }
}

// ContactDeck - ui/panels/sidebar.rs
//
// Dataset selector: one button per dataset, grouped under category labels,
// in catalog order.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the dataset selector.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Lists");
    ui.separator();

    // Snapshot the grouping so the click handler below can borrow state
    // mutably.
    let groups: Vec<(String, Vec<(String, String)>)> = state
        .catalog
        .grouped()
        .into_iter()
        .map(|(category, datasets)| {
            (
                category.to_string(),
                datasets
                    .iter()
                    .map(|d| (d.id.clone(), d.display_name.clone()))
                    .collect(),
            )
        })
        .collect();

    let mut clicked: Option<String> = None;

    for (category, datasets) in &groups {
        ui.label(
            egui::RichText::new(category.to_uppercase())
                .small()
                .strong()
                .color(theme::MUTED_TEXT),
        );
        for (id, display_name) in datasets {
            let selected = state.selected_dataset == *id;
            let text = if selected {
                egui::RichText::new(display_name).color(theme::ACCENT)
            } else {
                egui::RichText::new(display_name)
            };
            if ui.selectable_label(selected, text).clicked() && !selected {
                clicked = Some(id.clone());
            }
        }
        ui.add_space(6.0);
    }

    if let Some(id) = clicked {
        state.select_dataset(&id);
    }

    ui.separator();
    ui.label(
        egui::RichText::new("Choose a list by category; filters and exports are on the right.")
            .small()
            .weak(),
    );
    ui.label(
        egui::RichText::new("Made with \u{2764} for the people of Iran.")
            .small()
            .weak(),
    );
}

// ContactDeck - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the sidebar, filter, table, and outreach panels.

use crate::app::state::AppState;
use crate::ui;

/// The ContactDeck application.
pub struct ContactDeckApp {
    pub state: AppState,
}

impl ContactDeckApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ContactDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Workbook\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Excel workbook", &["xlsx"])
                            .pick_file()
                        {
                            self.state.open_workbook(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });

                ui.separator();
                ui.label(
                    egui::RichText::new(self.state.workbook_path.display().to_string())
                        .small()
                        .weak(),
                );
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(table) = &self.state.table {
                        ui.label(format!(
                            "{}/{} rows",
                            self.state.filtered_indices.len(),
                            table.len()
                        ));
                    }
                });
            });
        });

        // Outreach pane (bottom): emails, export, draft messages.
        egui::TopBottomPanel::bottom("outreach_pane")
            .resizable(true)
            .default_height(ui::theme::OUTREACH_PANE_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::outreach::render(ui, &mut self.state);
            });

        // Left sidebar: two independent scroll areas so the dataset list
        // and filter controls each get proportional room.
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                let available = ui.available_height();
                egui::ScrollArea::vertical()
                    .id_salt("sidebar_datasets")
                    .max_height(available * 0.55)
                    .show(ui, |ui| {
                        ui::panels::sidebar::render(ui, &mut self.state);
                    });

                ui.separator();

                egui::ScrollArea::vertical()
                    .id_salt("sidebar_filters")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui::panels::filters::render(ui, &mut self.state);
                    });
            });

        // Central panel (filtered table)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::table::render(ui, &self.state);
        });

        // About dialog (modal-ish)
        ui::panels::about::render(ctx, &mut self.state);
    }
}

// ContactDeck - ui/panels/about.rs
//
// About dialog: shown when the user picks Help -> About.
// Rendered as a centred, non-resizable, non-collapsible modal window.

use crate::app::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new("About ContactDeck")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("\u{1f4c7}  ContactDeck")
                        .size(28.0)
                        .strong(),
                );
                ui.add_space(4.0);
                ui.label(egui::RichText::new(format!("v{VERSION}")).size(14.0).weak());
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label("A read-only browser for contact lists:");
                ui.label("parliaments, ministries, embassies, and influencers.");
            });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("MIT License \u{00b7} Built with Rust & egui")
                        .small()
                        .weak(),
                );
            });

            ui.add_space(8.0);
        });

    if !open {
        state.show_about = false;
    }
}

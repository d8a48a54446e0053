use eframe::egui;

use crate::ui::state::AppState;

pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.heading("Node status");
    ui.separator();

    let mut healthy = true;
    for (resource, error) in state.failing_resources() {
        healthy = false;
        ui.horizontal_wrapped(|ui| {
            ui.colored_label(egui::Color32::RED, "●");
            ui.label(format!("{resource}: {error}"));
        });
    }
    if healthy {
        ui.horizontal(|ui| {
            ui.colored_label(egui::Color32::GREEN, "●");
            ui.label("All resources up to date");
        });
    }

    ui.separator();
    ui.label("Recent activity:");
    egui::ScrollArea::vertical()
        .id_salt("activity_log")
        .max_height(200.0)
        .show(ui, |ui| {
            for entry in state.activity.iter().rev().take(20) {
                let time_str = entry.timestamp.format("%H:%M:%S");
                let color = if entry.is_error {
                    egui::Color32::RED
                } else {
                    egui::Color32::GREEN
                };

                ui.horizontal_wrapped(|ui| {
                    ui.colored_label(color, format!("[{}]", time_str));
                    ui.label(&entry.message);
                });
            }
        });
}

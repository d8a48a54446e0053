use eframe::egui;

use crate::ui::state::AppState;

pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.heading("Peerster");
        ui.separator();
        match &state.identity {
            Some(identity) => {
                ui.label(format!(
                    "Address : {}    Name : {}",
                    identity.address, identity.name
                ));
            }
            None => {
                ui.label(egui::RichText::new("Waiting for node identity...").weak());
            }
        }
    });
}

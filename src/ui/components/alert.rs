use eframe::egui;

use crate::ui::state::AppState;

/// Modal notice; returns true on the frame it is dismissed.
pub fn render(ctx: &egui::Context, state: &AppState) -> bool {
    let Some(alert) = state.alert() else {
        return false;
    };

    let mut dismissed = false;
    egui::Window::new("Peerster")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(&alert.message);
            ui.add_space(8.0);
            let ok = ui.button("OK");
            ok.request_focus();
            if ok.clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                dismissed = true;
            }
        });
    dismissed
}

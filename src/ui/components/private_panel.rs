use eframe::egui;

use crate::common::Name;
use crate::ui::selection::PeerSelector;
use crate::ui::state::AppState;

/// Combo box listing the known names; the placeholder is shown but never offered.
pub fn peer_selector(
    ui: &mut egui::Ui,
    id: &str,
    selector: &PeerSelector,
) -> (egui::Response, Option<Name>) {
    let mut chosen = None;
    let response = egui::ComboBox::from_id_salt(id)
        .selected_text(selector.selected_text())
        .width(200.0)
        .show_ui(ui, |ui| {
            for name in selector.options() {
                let checked = selector.selected() == Some(name);
                if ui.selectable_label(checked, name.as_str()).clicked() {
                    chosen = Some(name.clone());
                }
            }
        })
        .response;
    (response, chosen)
}

/// Returns the peer chosen in selector 1 this frame, if any.
pub fn render(ui: &mut egui::Ui, state: &AppState) -> Option<Name> {
    let chosen = ui
        .horizontal(|ui| {
            ui.label(egui::RichText::new("Private messages").strong());
            peer_selector(ui, "conversation_selector", &state.selection.conversation).1
        })
        .inner;

    let transcript = state.conversation.transcript();
    egui::ScrollArea::vertical()
        .id_salt("private_messages")
        .max_height(180.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut transcript.as_str())
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            );
        });

    chosen
}

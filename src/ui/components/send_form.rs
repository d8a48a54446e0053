use eframe::egui;

use crate::common::Name;
use crate::ui::forms::{Field, SendMode};
use crate::ui::state::AppState;

use super::private_panel::peer_selector;

#[derive(Default)]
pub struct SendFormActions {
    pub submit: bool,
    /// Peer chosen in selector 2 this frame.
    pub chosen_peer: Option<Name>,
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> SendFormActions {
    let mut actions = SendFormActions::default();

    ui.horizontal(|ui| {
        ui.radio_value(&mut state.send_form.mode, SendMode::Public, "Public");
        ui.radio_value(&mut state.send_form.mode, SendMode::Private, "Private");
        ui.radio_value(
            &mut state.send_form.mode,
            SendMode::FileRequest,
            "File request",
        );
    });

    ui.horizontal(|ui| {
        ui.label("Peer:");
        let (selector, chosen) =
            peer_selector(ui, "destination_selector", &state.selection.destination);
        if state.take_focus(Field::Destination) {
            selector.request_focus();
        }
        actions.chosen_peer = chosen;
    });

    if state.send_form.mode == SendMode::FileRequest {
        ui.horizontal(|ui| {
            ui.label("File name:");
            let file_name = ui.text_edit_singleline(&mut state.send_form.file_name);
            if state.take_focus(Field::FileName) {
                file_name.request_focus();
            }
        });
        ui.horizontal(|ui| {
            ui.label("Metahash:");
            let hash = ui.add(
                egui::TextEdit::singleline(&mut state.send_form.hash)
                    .hint_text("64 hexadecimal characters")
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace),
            );
            if state.take_focus(Field::Hash) {
                hash.request_focus();
            }
        });
    }

    ui.horizontal(|ui| {
        let width = (ui.available_width() - 60.0).max(120.0);
        let text = ui.add(
            egui::TextEdit::singleline(&mut state.send_form.text)
                .hint_text("Write a message")
                .desired_width(width),
        );
        if state.take_focus(Field::MessageText) {
            text.request_focus();
        }
        let entered = text.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Send").clicked() || entered {
            actions.submit = true;
        }
    });

    actions
}

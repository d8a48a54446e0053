use eframe::egui;

use crate::common::types::split_endpoint;
use crate::ui::forms::Field;
use crate::ui::state::AppState;

#[derive(Default)]
pub struct PeersActions {
    pub add_peer: bool,
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> PeersActions {
    let mut actions = PeersActions::default();

    ui.heading("Peers");
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("peer_addresses")
        .max_height(200.0)
        .show(ui, |ui| {
            egui::Grid::new("peer_addresses_grid")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("IP address").strong());
                    ui.label(egui::RichText::new("Port").strong());
                    ui.end_row();
                    for entry in &state.peers {
                        let (ip, port) = split_endpoint(entry);
                        ui.label(ip);
                        ui.label(port);
                        ui.end_row();
                    }
                });
        });

    ui.separator();
    ui.label("Add a peer:");
    ui.horizontal(|ui| {
        let ip = ui.add(
            egui::TextEdit::singleline(&mut state.peer_form.ip)
                .hint_text("127.0.0.1")
                .desired_width(110.0),
        );
        if state.take_focus(Field::PeerIp) {
            ip.request_focus();
        }
        let port = ui.add(
            egui::TextEdit::singleline(&mut state.peer_form.port)
                .hint_text("5001")
                .desired_width(50.0),
        );
        if state.take_focus(Field::PeerPort) {
            port.request_focus();
        }
        let entered = (ip.lost_focus() || port.lost_focus())
            && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Add").clicked() || entered {
            actions.add_peer = true;
        }
    });

    ui.separator();
    egui::ScrollArea::vertical()
        .id_salt("peer_names")
        .show(ui, |ui| {
            egui::Grid::new("peer_names_grid")
                .num_columns(1)
                .striped(true)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Name").strong());
                    ui.end_row();
                    if state.names.is_empty() {
                        ui.label(egui::RichText::new("No peer names known yet").weak());
                        ui.end_row();
                    }
                    for name in &state.names {
                        ui.label(name);
                        ui.end_row();
                    }
                });
        });

    actions
}

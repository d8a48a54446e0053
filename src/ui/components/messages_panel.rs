use eframe::egui;

use crate::common::RumorMessage;
use crate::ui::state::rumor_transcript;

pub fn render(ui: &mut egui::Ui, rumors: &[RumorMessage]) {
    ui.label(egui::RichText::new("Public messages").strong());
    let transcript = rumor_transcript(rumors);
    egui::ScrollArea::vertical()
        .id_salt("public_messages")
        .max_height(220.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut transcript.as_str())
                    .desired_rows(10)
                    .desired_width(f32::INFINITY),
            );
        });
}

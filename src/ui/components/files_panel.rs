use eframe::egui;

use crate::ui::forms::Field;
use crate::ui::state::AppState;

#[derive(Default)]
pub struct FilesActions {
    pub index_file: bool,
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> FilesActions {
    let mut actions = FilesActions::default();

    ui.heading("Indexed files");
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("indexed_files")
        .max_height(220.0)
        .show(ui, |ui| {
            egui::Grid::new("indexed_files_grid")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Metahash").strong());
                    ui.label(egui::RichText::new("File name").strong());
                    ui.end_row();
                    for file in &state.files {
                        ui.label(egui::RichText::new(&file.meta_hash).monospace().small());
                        ui.label(&file.file_name);
                        ui.end_row();
                    }
                });
        });

    ui.separator();
    ui.label("Index a shared file:");
    ui.horizontal(|ui| {
        let file_name = ui.add(
            egui::TextEdit::singleline(&mut state.index_form.file_name)
                .hint_text("file in the node's shared folder"),
        );
        if state.take_focus(Field::IndexFileName) {
            file_name.request_focus();
        }
        let entered = file_name.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Index").clicked() || entered {
            actions.index_file = true;
        }
    });

    actions
}

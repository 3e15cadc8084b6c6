use egui::{Button, Color32, RichText, TextEdit, Ui};
use egui_phosphor::regular;

use crate::board::{EditSession, SoundBoard};

/// What the user asked the edit screen to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Save,
    /// Delete was pressed; the caller confirms before deleting
    Delete,
    Cancel,
}

/// Form for one tile's name, file and loop flag
pub struct EditView;

impl EditView {
    pub fn show(ui: &mut Ui, session: &mut EditSession, board: &SoundBoard) -> Option<EditAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            if ui
                .add(Button::new(RichText::new(regular::ARROW_LEFT).size(18.0)).frame(false))
                .on_hover_text("Back without saving")
                .clicked()
            {
                action = Some(EditAction::Cancel);
            }
            ui.heading(format!("Edit sound {}", session.target()));
        });
        ui.separator();
        ui.add_space(12.0);

        egui::Grid::new("edit_sound_grid")
            .num_columns(2)
            .spacing([16.0, 10.0])
            .show(ui, |ui| {
                ui.label("Name");
                ui.add(TextEdit::singleline(&mut session.sound_name).desired_width(320.0));
                ui.end_row();

                ui.label("File");
                ui.vertical(|ui| {
                    ui.add(
                        TextEdit::singleline(&mut session.file_name)
                            .desired_width(320.0)
                            .hint_text("file name inside the sounds folder"),
                    );
                    if !session.file_exists(board) {
                        ui.label(
                            RichText::new(format!(
                                "{} no audio file by that name in {}",
                                regular::WARNING,
                                board.store().dir().display()
                            ))
                            .color(Color32::YELLOW),
                        );
                    }
                });
                ui.end_row();

                ui.label("Loop");
                ui.checkbox(&mut session.looping, "Restart when finished");
                ui.end_row();
            });

        ui.add_space(20.0);
        ui.horizontal(|ui| {
            if ui
                .button(format!("{} Save", regular::FLOPPY_DISK))
                .clicked()
            {
                action = Some(EditAction::Save);
            }
            if ui.button("Cancel").clicked() {
                action = Some(EditAction::Cancel);
            }
            ui.add_space(24.0);
            let delete = Button::new(
                RichText::new(format!("{} Delete", regular::TRASH))
                    .color(Color32::from_rgb(255, 100, 100)),
            );
            if ui.add(delete).clicked() {
                action = Some(EditAction::Delete);
            }
        });

        action
    }
}

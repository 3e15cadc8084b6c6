use egui::Context;
use egui_phosphor::regular;
use std::path::PathBuf;

use crate::board::SUPPORTED_EXTENSIONS;

/// Menu commands the app has to carry out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Import(Vec<PathBuf>),
    SaveNow,
    StopAll,
    ToggleTheme,
    Quit,
}

/// Top menu panel component
pub struct TopPanel;

impl TopPanel {
    /// Display the menu bar; `about_open` toggles the About window
    pub fn show(ctx: &Context, about_open: &mut bool, tile_count: usize) -> Option<MenuAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui
                        .button(format!("{} Import sounds...", regular::FOLDER_OPEN))
                        .clicked()
                    {
                        if let Some(paths) = rfd::FileDialog::new()
                            .set_title("Select Audio Files")
                            .add_filter("Audio Files", &SUPPORTED_EXTENSIONS)
                            .pick_files()
                        {
                            action = Some(MenuAction::Import(paths));
                        }
                    }
                    if ui
                        .button(format!("{} Save now", regular::FLOPPY_DISK))
                        .clicked()
                    {
                        action = Some(MenuAction::SaveNow);
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        action = Some(MenuAction::Quit);
                    }
                });

                ui.menu_button("Playback", |ui| {
                    if ui.button(format!("{} Stop all", regular::STOP)).clicked() {
                        action = Some(MenuAction::StopAll);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Toggle dark mode").clicked() {
                        action = Some(MenuAction::ToggleTheme);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        *about_open = true;
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(format!("{tile_count} sound(s)")).weak());
                });
            });
        });

        egui::Window::new("About Tilepad")
            .open(about_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Tilepad\n\nDrop audio files on the window to add them to the board.");
                ui.label("Drag tiles to arrange them. Changes are saved on exit.");
            });

        action
    }
}

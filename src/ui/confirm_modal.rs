use egui::{Button, Color32, Context, RichText, Window};

/// Yes/no dialog; the caller polls `take_confirmed` after `show`
pub struct ConfirmModal {
    pub open: bool,
    pub title: String,
    pub message: String,
    pub confirmed: bool,
}

impl Default for ConfirmModal {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmModal {
    pub fn new() -> Self {
        Self {
            open: false,
            title: "Confirm".to_owned(),
            message: String::new(),
            confirmed: false,
        }
    }

    /// Open the confirm dialog
    pub fn open(&mut self, title: &str, message: &str) {
        self.title = title.to_owned();
        self.message = message.to_owned();
        self.open = true;
        self.confirmed = false;
    }

    /// Take the confirmation, resetting it so it fires once
    pub fn take_confirmed(&mut self) -> bool {
        std::mem::take(&mut self.confirmed)
    }

    /// Show the confirm dialog
    pub fn show(&mut self, ctx: &Context) {
        if !self.open {
            return;
        }

        Window::new(&self.title)
            .min_width(300.0)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.label(&self.message);
                    ui.add_space(20.0);

                    ui.horizontal(|ui| {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            // Confirm button - red warning color
                            if ui
                                .add(
                                    Button::new(RichText::new("Delete").color(Color32::WHITE))
                                        .fill(Color32::from_rgb(220, 50, 50)),
                                )
                                .clicked()
                            {
                                self.confirmed = true;
                                self.open = false;
                            }

                            ui.add_space(10.0);

                            if ui.button("Cancel").clicked() {
                                self.open = false;
                            }
                        });
                    });
                });
            });
    }
}

use egui::{
    Align, Button, Color32, CornerRadius, Layout, Rect, RichText, Sense, Slider, Stroke,
    StrokeKind, Ui, UiBuilder, Vec2,
};
use egui_phosphor::regular;

use crate::audio::PlaybackError;
use crate::board::Tile;

/// Size of one tile on the board
pub const TILE_SIZE: Vec2 = Vec2::new(190.0, 104.0);

/// What the user did with a tile this frame
#[derive(Debug, Default)]
pub struct TileResponse {
    pub edit_clicked: bool,
    /// A drag began on the tile body; the board brings it to the front
    pub drag_started: bool,
    pub error: Option<PlaybackError>,
}

/// Draggable tile with play/stop/edit buttons and a volume slider
pub struct TileWidget;

impl TileWidget {
    /// Draw `tile` with its top-left corner at `origin + (x, y)`
    pub fn show(ui: &mut Ui, tile: &mut Tile, origin: egui::Pos2) -> TileResponse {
        let mut response = TileResponse::default();
        let rect = Rect::from_min_size(origin + egui::vec2(tile.x, tile.y), TILE_SIZE);

        // Body first so the buttons drawn on top of it win the hit test.
        let body = ui.interact(rect, ui.id().with(("tile", tile.id())), Sense::drag());
        if body.drag_started() {
            response.drag_started = true;
        }
        if body.dragged() {
            let delta = body.drag_delta();
            tile.move_by(delta.x, delta.y);
        }

        let visuals = ui.visuals();
        let stroke = if tile.is_playing() {
            Stroke::new(2.0, visuals.selection.stroke.color)
        } else if body.hovered() {
            Stroke::new(1.0, visuals.widgets.hovered.bg_stroke.color)
        } else {
            Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color)
        };
        ui.painter().rect(
            rect,
            CornerRadius::same(6),
            visuals.faint_bg_color,
            stroke,
            StrokeKind::Inside,
        );

        let builder = UiBuilder::new()
            .max_rect(rect.shrink(8.0))
            .layout(Layout::top_down(Align::Min));
        ui.scope_builder(builder, |ui| {
            ui.horizontal(|ui| {
                if !tile.is_loaded() {
                    ui.label(RichText::new(regular::WARNING).color(Color32::YELLOW))
                        .on_hover_text(format!("{} could not be loaded", tile.file_name));
                }
                ui.add(egui::Label::new(RichText::new(tile.label()).strong()).truncate())
                    .on_hover_text(&tile.file_name);
            });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let icon_button =
                    |text: &str| Button::new(RichText::new(text).size(18.0)).frame(false);

                let play = ui.add_enabled(tile.is_loaded(), icon_button(regular::PLAY));
                if play.on_hover_text("Play from the start").clicked() {
                    if let Err(e) = tile.play() {
                        response.error = Some(e);
                    }
                }
                let stop = ui.add_enabled(tile.is_loaded(), icon_button(regular::STOP));
                if stop.on_hover_text("Stop").clicked() {
                    tile.stop();
                }
                if tile.looping {
                    ui.label(RichText::new(regular::REPEAT).weak()).on_hover_text("Looping");
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .add(icon_button(regular::PENCIL_SIMPLE))
                        .on_hover_text("Edit")
                        .clicked()
                    {
                        response.edit_clicked = true;
                    }
                });
            });

            ui.horizontal(|ui| {
                ui.label(RichText::new(regular::SPEAKER_HIGH).weak());
                let mut volume = tile.volume();
                let slider_width = ui.available_width() - 8.0;
                ui.spacing_mut().slider_width = slider_width;
                let slider = ui.add(Slider::new(&mut volume, 0.0..=1.0).show_value(false));
                if slider.changed() {
                    tile.set_volume(volume);
                }
            });
        });

        if tile.is_playing() {
            // Repaint so the playing outline clears when the sound ends.
            ui.ctx().request_repaint_after(std::time::Duration::from_millis(200));
        }

        response
    }
}

use egui::{Align2, Color32, Context, FontId, Id, LayerId, Order, RichText, ScrollArea, Sense, Ui};
use egui_phosphor::regular;
use std::path::PathBuf;

use super::tile_widget::{TILE_SIZE, TileWidget};
use super::toast_message::Toasts;
use crate::board::{SoundBoard, TileId};

/// The board of tiles
pub struct HomeView;

impl HomeView {
    /// Draw every tile. Returns the tile whose edit button was pressed, if any.
    pub fn show(ui: &mut Ui, board: &mut SoundBoard, toasts: &mut Toasts) -> Option<TileId> {
        if board.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{}\nDrop audio files here to add sounds",
                        regular::FILE_AUDIO
                    ))
                    .size(20.0)
                    .weak(),
                );
            });
            return None;
        }

        let mut edit = None;
        let mut raise = None;

        ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
            // Reserve enough room for the tile furthest out so the scroll area can reach it.
            let extent = board
                .tiles()
                .iter()
                .fold(ui.available_size(), |acc, tile| {
                    acc.max(egui::vec2(tile.x, tile.y) + TILE_SIZE)
                });
            let (canvas, _) = ui.allocate_exact_size(extent, Sense::hover());

            for tile in board.tiles_mut() {
                let id = tile.id();
                let response = TileWidget::show(ui, tile, canvas.min);
                if response.edit_clicked {
                    edit = Some(id);
                }
                if response.drag_started {
                    raise = Some(id);
                }
                if let Some(e) = response.error {
                    toasts.error(format!("{}: {e}", tile.sound_name));
                }
            }
        });

        if let Some(id) = raise {
            board.bring_to_front(id);
        }
        edit
    }

    /// Import files dropped on the window this frame, reporting each failure
    pub fn handle_dropped_files(ctx: &Context, board: &mut SoundBoard, toasts: &mut Toasts) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            Self::import(board, toasts, &dropped);
        }
    }

    /// Import `paths` and toast the outcome
    pub fn import(board: &mut SoundBoard, toasts: &mut Toasts, paths: &[PathBuf]) {
        let mut added = 0usize;
        for (path, result) in board.import_files(paths) {
            match result {
                Ok(id) => {
                    added += 1;
                    if board.tile(id).is_some_and(|t| !t.is_loaded()) {
                        toasts.warn(format!("Added {} but it can't be played", path.display()));
                    }
                }
                Err(e) => toasts.error(format!("Could not import {}: {e}", path.display())),
            }
        }
        if added > 0 {
            toasts.info(format!("Added {added} sound(s)"));
        }
    }

    /// Dim the window while files are dragged over it
    pub fn preview_hovered_files(ctx: &Context) {
        let count = ctx.input(|i| i.raw.hovered_files.len());
        if count == 0 {
            return;
        }

        let painter =
            ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            format!("{} Drop to add {count} sound(s)", regular::DOWNLOAD_SIMPLE),
            FontId::proportional(28.0),
            Color32::WHITE,
        );
    }
}

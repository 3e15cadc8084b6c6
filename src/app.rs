use std::time::Duration;

use crate::audio::KiraLoader;
use crate::board::{EditSession, SoundBoard};
use crate::config::AppConfig;
use crate::store::SoundStore;
use crate::ui::{ConfirmModal, EditAction, EditView, HomeView, MenuAction, Toasts, TopPanel};

/// Which screen fills the central panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    Edit(EditSession),
}

pub struct TilepadApp {
    config: AppConfig,
    board: SoundBoard,
    screen: Screen,
    toasts: Toasts,
    confirm_delete: ConfirmModal,
    about_open: bool,
    /// Set when the table on disk failed to load, so autosave doesn't clobber it
    persist_blocked: bool,
}

impl TilepadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::restore(cc.storage);
        Self::install_fonts(&cc.egui_ctx);

        let loader = KiraLoader::new();
        let audio_available = loader.is_available();
        let store = SoundStore::new(&config.sounds_dir);
        let board = SoundBoard::new(store, Box::new(loader));
        let mut app = Self::with_board(config, board);
        if !audio_available {
            app.toasts.warn("No audio output device found, sounds will not play");
        }
        app.apply_theme(&cc.egui_ctx);
        app
    }

    /// Build the app around an existing board and fill it from disk
    pub fn with_board(config: AppConfig, mut board: SoundBoard) -> Self {
        let mut toasts = Toasts::default();
        let persist_blocked = match board.reload() {
            Ok(count) => {
                log::info!("Board ready with {count} sound(s)");
                let missing = board.missing_audio();
                if missing > 0 {
                    toasts.warn(format!("{missing} sound(s) have no playable audio file"));
                }
                false
            }
            Err(e) => {
                toasts.error(format!(
                    "Could not read {}: {e}. Autosave is off until you use File > Save now.",
                    board.store().table_path().display()
                ));
                true
            }
        };

        Self {
            config,
            board,
            screen: Screen::Home,
            toasts,
            confirm_delete: ConfirmModal::new(),
            about_open: false,
            persist_blocked,
        }
    }

    fn install_fonts(ctx: &egui::Context) {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        ctx.set_fonts(fonts);
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        if self.config.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    pub fn board(&self) -> &SoundBoard {
        &self.board
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Write the board to disk, reporting failures as a toast
    fn persist(&mut self) -> bool {
        match self.board.persist_all() {
            Ok(()) => true,
            Err(e) => {
                self.toasts.error(format!("Failed to save sounds: {e}"));
                false
            }
        }
    }

    fn handle_menu(&mut self, ctx: &egui::Context, action: MenuAction) {
        match action {
            MenuAction::Import(paths) => {
                HomeView::import(&mut self.board, &mut self.toasts, &paths);
            }
            MenuAction::SaveNow => {
                if self.persist() {
                    self.persist_blocked = false;
                    self.toasts.info("Saved");
                }
            }
            MenuAction::StopAll => self.board.stop_all(),
            MenuAction::ToggleTheme => {
                self.config.dark_mode = !self.config.dark_mode;
                self.apply_theme(ctx);
            }
            MenuAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    /// Apply an edit-screen action to the board and move between screens
    pub fn handle_edit(&mut self, action: EditAction) {
        let Screen::Edit(session) = &self.screen else {
            return;
        };

        match action {
            EditAction::Save => match session.save(&mut self.board) {
                Ok(decode_error) => {
                    if let Some(e) = decode_error {
                        self.toasts.warn(format!("Saved, but the sound can't be played: {e}"));
                    }
                    self.screen = Screen::Home;
                }
                Err(e) => self.toasts.error(format!("Could not save: {e}")),
            },
            EditAction::Delete => {
                let message = format!(
                    "Delete \"{}\" and remove {} from disk?",
                    session.sound_name, session.file_name
                );
                self.confirm_delete.open("Delete sound", &message);
            }
            EditAction::Cancel => self.screen = Screen::Home,
        }
    }

    /// Run a confirmed delete for the session currently being edited
    pub fn delete_edited(&mut self) {
        let Screen::Edit(session) = &self.screen else {
            return;
        };
        match session.delete(&mut self.board) {
            Ok(()) => {
                self.toasts.info(format!("Deleted {}", session.sound_name));
                self.screen = Screen::Home;
            }
            Err(e) => self.toasts.error(format!("Could not delete: {e}")),
        }
    }
}

impl eframe::App for TilepadApp {
    /// Called by the framework on shutdown and on every autosave tick.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if self.persist_blocked {
            log::warn!("Skipping save: the sound table failed to load at startup");
        } else {
            self.persist();
        }
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = TopPanel::show(ctx, &mut self.about_open, self.board.len()) {
            self.handle_menu(ctx, action);
        }

        HomeView::handle_dropped_files(ctx, &mut self.board, &mut self.toasts);

        let mut edit_request = None;
        let mut edit_action = None;
        egui::CentralPanel::default().show(ctx, |ui| match &mut self.screen {
            Screen::Home => {
                edit_request = HomeView::show(ui, &mut self.board, &mut self.toasts);
            }
            Screen::Edit(session) => {
                edit_action = EditView::show(ui, session, &self.board);
            }
        });
        if let Some(id) = edit_request {
            match self.board.tile(id) {
                Some(tile) => self.screen = Screen::Edit(EditSession::load(tile)),
                None => self.toasts.error(format!("Sound {id} no longer exists")),
            }
        }
        if let Some(action) = edit_action {
            self.handle_edit(action);
        }

        self.confirm_delete.show(ctx);
        if self.confirm_delete.take_confirmed() {
            self.delete_edited();
        }

        HomeView::preview_hovered_files(ctx);
        self.toasts.show(ctx);
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use super::{BoardError, SoundBoard, Tile, TileId, is_supported_audio};
use crate::audio::PlaybackError;

/// Editable copy of one tile's metadata, bound to the tile by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    target: TileId,
    pub file_name: String,
    pub sound_name: String,
    pub looping: bool,
}

impl EditSession {
    /// Start editing `tile` with its current values
    pub fn load(tile: &Tile) -> Self {
        Self {
            target: tile.id(),
            file_name: tile.file_name.clone(),
            sound_name: tile.sound_name.clone(),
            looping: tile.looping,
        }
    }

    pub fn target(&self) -> TileId {
        self.target
    }

    /// Path the edited file name resolves to inside the sounds directory
    pub fn file_path(&self, board: &SoundBoard) -> PathBuf {
        board.store().sound_path(self.file_name.trim())
    }

    /// Whether the edited file name points at an existing audio file
    pub fn file_exists(&self, board: &SoundBoard) -> bool {
        let name = self.file_name.trim();
        is_bare_file_name(name)
            && is_supported_audio(Path::new(name))
            && self.file_path(board).is_file()
    }

    /// Write the edited name, file and loop flag back to the target tile.
    ///
    /// Audio is re-decoded when the file changed. If the new file can't be
    /// decoded the edit still applies and the decode error is returned.
    ///
    /// # Errors
    /// Returns [`BoardError::UnsupportedFormat`] if the edited file name isn't
    /// an audio file, [`BoardError::FileNotFound`] if it doesn't exist in the
    /// sounds directory, and [`BoardError::TileNotFound`] if the tile was
    /// removed meanwhile. Nothing is changed in any of these cases.
    pub fn save(&self, board: &mut SoundBoard) -> Result<Option<PlaybackError>, BoardError> {
        let file_name = self.file_name.trim();
        if is_bare_file_name(file_name) && !is_supported_audio(Path::new(file_name)) {
            return Err(BoardError::UnsupportedFormat(file_name.to_owned()));
        }
        if !self.file_exists(board) {
            return Err(BoardError::FileNotFound(self.file_path(board)));
        }

        let tile = board
            .tile_mut(self.target)
            .ok_or(BoardError::TileNotFound(self.target))?;
        let file_changed = tile.file_name != file_name;
        tile.sound_name.clone_from(&self.sound_name);
        tile.file_name = file_name.to_owned();
        tile.looping = self.looping;

        let decode_error = if file_changed {
            board.reload_tile(self.target)?
        } else {
            None
        };
        if let Some(tile) = board.tile_mut(self.target) {
            tile.update_display();
        }

        log::info!("Updated sound {} ({})", self.target, self.sound_name);
        Ok(decode_error)
    }

    /// Remove the target tile and delete its audio file.
    ///
    /// The file stays on disk while another tile still uses it, and whenever
    /// it isn't an audio file.
    ///
    /// # Errors
    /// Returns [`BoardError::FileNotFound`] if the tile's file is already gone,
    /// [`BoardError::TileNotFound`] if the tile was removed meanwhile, and
    /// [`BoardError::Io`] if deleting fails. The tile stays on the board in
    /// every error case.
    pub fn delete(&self, board: &mut SoundBoard) -> Result<(), BoardError> {
        let tile = board
            .tile(self.target)
            .ok_or(BoardError::TileNotFound(self.target))?;
        let path = board.store().sound_path(&tile.file_name);
        if !path.is_file() {
            return Err(BoardError::FileNotFound(path));
        }

        if !is_supported_audio(&path) {
            log::warn!("Keeping {}, it is not an audio file", path.display());
        } else if board.other_references(&tile.file_name, self.target) == 0 {
            fs::remove_file(&path)?;
        } else {
            log::info!("Keeping {}, other sounds still use it", path.display());
        }
        board.remove_tile(self.target);

        log::info!("Deleted sound {}", self.target);
        Ok(())
    }
}

/// A plain file name with no directory components
fn is_bare_file_name(name: &str) -> bool {
    !name.is_empty()
        && Path::new(name)
            .file_name()
            .is_some_and(|n| n == std::ffi::OsStr::new(name))
}

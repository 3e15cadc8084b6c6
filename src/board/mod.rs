//! Application state shared by the home and edit screens
//!
//! [`SoundBoard`] owns every tile, the store they persist to and the loader
//! that gives them playback handles. Views hold it by reference and address
//! tiles by [`TileId`], never by their position on screen.

mod edit;
mod error;
mod tile;


use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::{PlaybackError, SoundLoader};
use crate::store::{SoundRecord, SoundStore};

pub use edit::EditSession;
pub use error::BoardError;
pub use tile::{Tile, TileId};

/// File extensions accepted on import (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["wav", "mp3", "ogg", "flac"];

/// Whether `path` names a file type the playback backend can decode
pub fn is_supported_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

pub struct SoundBoard {
    store: SoundStore,
    loader: Box<dyn SoundLoader>,
    /// Display order; the last tile is drawn on top
    tiles: Vec<Tile>,
    next_id: u64,
}

impl SoundBoard {
    /// Create an empty board. Nothing is read until [`Self::reload`].
    pub fn new(store: SoundStore, loader: Box<dyn SoundLoader>) -> Self {
        Self {
            store,
            loader,
            tiles: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a board and fill it from the store.
    ///
    /// # Errors
    /// Fails if the sound table can't be read or parsed.
    pub fn open(store: SoundStore, loader: Box<dyn SoundLoader>) -> Result<Self, BoardError> {
        let mut board = Self::new(store, loader);
        board.reload()?;
        Ok(board)
    }

    /// Drop every tile and load the table again. Returns the number of tiles.
    ///
    /// # Errors
    /// Fails if the sound table can't be read or parsed; the board is left empty.
    pub fn reload(&mut self) -> Result<usize, BoardError> {
        self.stop_all();
        self.tiles.clear();
        let records = self.store.load()?;
        self.load_all(records);
        Ok(self.tiles.len())
    }

    /// Append one tile per record, in order, and preload each sound.
    ///
    /// A tile whose audio can't be loaded stays on the board without playback.
    pub fn load_all(&mut self, records: Vec<SoundRecord>) {
        for record in records {
            self.push_record(record);
        }
        let missing = self.missing_audio();
        if missing > 0 {
            log::warn!("{missing} sound(s) have no playable audio file");
        }
    }

    /// Copy a dropped file into the sounds directory and add a default tile for it.
    ///
    /// # Errors
    /// Returns [`BoardError::InvalidSource`] if `path` isn't a regular file,
    /// [`BoardError::UnsupportedFormat`] for an unknown extension, and
    /// [`BoardError::Io`] if the copy fails.
    pub fn import_file(&mut self, path: &Path) -> Result<TileId, BoardError> {
        if !path.is_file() {
            return Err(BoardError::InvalidSource(path.to_path_buf()));
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return Err(BoardError::InvalidSource(path.to_path_buf()));
        };
        if !is_supported_audio(path) {
            return Err(BoardError::UnsupportedFormat(file_name.to_owned()));
        }

        fs::create_dir_all(self.store.dir())?;
        let dest = self.store.sound_path(file_name);
        if is_same_file(path, &dest) {
            log::debug!("{} is already in the sounds directory", dest.display());
        } else {
            fs::copy(path, &dest)?;
        }

        let id = self.push_record(SoundRecord::imported(file_name));
        log::info!("Imported {} as {id}", path.display());
        Ok(id)
    }

    /// Import several dropped files, one result per path.
    pub fn import_files(
        &mut self,
        paths: &[PathBuf],
    ) -> Vec<(PathBuf, Result<TileId, BoardError>)> {
        paths
            .iter()
            .map(|path| (path.clone(), self.import_file(path)))
            .collect()
    }

    /// Write every tile back to the sound table, in display order.
    ///
    /// # Errors
    /// Fails if the table can't be written; the previous table stays intact.
    pub fn persist_all(&self) -> Result<(), BoardError> {
        self.store.save(&self.records())?;
        Ok(())
    }

    pub fn records(&self) -> Vec<SoundRecord> {
        self.tiles.iter().map(Tile::to_record).collect()
    }

    pub fn store(&self) -> &SoundStore {
        &self.store
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id() == id)
    }

    pub fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.iter_mut().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tiles that could not be given a playback handle
    pub fn missing_audio(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_loaded()).count()
    }

    pub fn stop_all(&mut self) {
        for tile in &mut self.tiles {
            tile.stop();
        }
    }

    /// Move a tile to the end of the display order so it is drawn over the others
    pub fn bring_to_front(&mut self, id: TileId) {
        if let Some(index) = self.index_of(id) {
            let tile = self.tiles.remove(index);
            self.tiles.push(tile);
        }
    }

    /// Re-decode a tile's audio, e.g. after its file name changed.
    ///
    /// A decode failure leaves the tile without playback and is handed back
    /// as `Ok(Some(_))`.
    ///
    /// # Errors
    /// Returns [`BoardError::TileNotFound`] if the tile is gone.
    pub fn reload_tile(&mut self, id: TileId) -> Result<Option<PlaybackError>, BoardError> {
        let Self {
            tiles,
            loader,
            store,
            ..
        } = self;
        let tile = tiles
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(BoardError::TileNotFound(id))?;
        match tile.load(loader.as_mut(), store) {
            Ok(()) => Ok(None),
            Err(e) => {
                log::warn!("Sound {id} ({}) has no playable audio: {e}", tile.file_name);
                Ok(Some(e))
            }
        }
    }

    /// Remove a tile from the board, stopping it first
    pub fn remove_tile(&mut self, id: TileId) -> Option<Tile> {
        let index = self.index_of(id)?;
        let mut tile = self.tiles.remove(index);
        tile.stop();
        Some(tile)
    }

    /// How many tiles other than `except` point at `file_name`
    pub fn other_references(&self, file_name: &str, except: TileId) -> usize {
        self.tiles
            .iter()
            .filter(|t| t.id() != except && t.file_name == file_name)
            .count()
    }

    fn index_of(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|t| t.id() == id)
    }

    fn push_record(&mut self, record: SoundRecord) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;

        let mut tile = Tile::from_record(id, record);
        if let Err(e) = tile.load(self.loader.as_mut(), &self.store) {
            log::warn!("Sound {id} ({}) has no playable audio: {e}", tile.file_name);
        }
        self.tiles.push(tile);
        id
    }
}

impl std::fmt::Debug for SoundBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundBoard")
            .field("store", &self.store)
            .field("tiles", &self.tiles)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

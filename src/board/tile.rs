use std::fmt;

use crate::audio::{PlaybackError, SoundLoader, SoundPlayer};
use crate::store::{SoundRecord, SoundStore};

/// Stable identity of a tile for the lifetime of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub(crate) u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One sound on the board: its metadata plus an optional playback handle
#[derive(Debug)]
pub struct Tile {
    id: TileId,
    pub file_name: String,
    pub sound_name: String,
    pub looping: bool,
    pub x: f32,
    pub y: f32,
    volume: f32,
    /// What the tile header currently shows; refreshed by `update_display`
    label: String,
    player: Option<Box<dyn SoundPlayer>>,
}

impl Tile {
    /// Build an unloaded tile from a persisted record
    pub fn from_record(id: TileId, record: SoundRecord) -> Self {
        let label = record.sound_name.clone();
        Self {
            id,
            file_name: record.file_name,
            sound_name: record.sound_name,
            looping: record.looping,
            x: record.x.max(0.0),
            y: record.y.max(0.0),
            volume: record.volume.clamp(0.0, 1.0),
            label,
            player: None,
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Whether the audio file was decoded and can be played
    pub fn is_loaded(&self) -> bool {
        self.player.is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.player.as_ref().is_some_and(|p| p.is_playing())
    }

    /// Decode the backing file and push volume and loop flag onto the new handle.
    ///
    /// Any previous handle is stopped and released first, so on failure the
    /// tile is left without playback.
    pub fn load(
        &mut self,
        loader: &mut dyn SoundLoader,
        store: &SoundStore,
    ) -> Result<(), PlaybackError> {
        if let Some(mut old) = self.player.take() {
            old.stop();
        }

        let mut player = loader.load(&store.sound_path(&self.file_name))?;
        player.set_volume(self.volume);
        player.set_looping(self.looping);
        self.player = Some(player);
        Ok(())
    }

    /// Restart the sound from the beginning. Never resumes.
    pub fn play(&mut self) -> Result<(), PlaybackError> {
        match &mut self.player {
            Some(player) => {
                log::debug!("Playing {} ({})", self.sound_name, self.id);
                player.play()
            }
            None => Ok(()),
        }
    }

    pub fn stop(&mut self) {
        if let Some(player) = &mut self.player {
            player.stop();
        }
    }

    /// Clamp to 0.0 - 1.0 and apply to both the model and the live handle
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(player) = &mut self.player {
            player.set_volume(self.volume);
        }
    }

    /// Volume as the live handle sees it, if there is one
    pub fn player_volume(&self) -> Option<f32> {
        self.player.as_ref().map(|p| p.volume())
    }

    /// Loop flag as the live handle sees it, if there is one
    pub fn player_looping(&self) -> Option<bool> {
        self.player.as_ref().map(|p| p.looping())
    }

    /// Copy model state into the visual state and the playback handle.
    ///
    /// Must be called after any mutation made from outside the tile.
    pub fn update_display(&mut self) {
        self.label.clone_from(&self.sound_name);
        if let Some(player) = &mut self.player {
            player.set_looping(self.looping);
            player.set_volume(self.volume);
        }
    }

    /// Drag by a delta, keeping the tile inside the positive quadrant
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.x = (self.x + dx).max(0.0);
        self.y = (self.y + dy).max(0.0);
    }

    pub fn to_record(&self) -> SoundRecord {
        SoundRecord {
            file_name: self.file_name.clone(),
            sound_name: self.sound_name.clone(),
            looping: self.looping,
            x: self.x,
            y: self.y,
            volume: self.volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::fake::FakeLoader;

    fn unique_temp_dir(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        let nonce = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        p.push(format!("tilepad_tile_test_{}_{}", name, nonce));
        std::fs::create_dir_all(&p).unwrap();
        p
    }

    fn record(file_name: &str) -> SoundRecord {
        SoundRecord {
            file_name: file_name.to_string(),
            sound_name: "Bell".to_string(),
            looping: true,
            x: 5.0,
            y: 6.0,
            volume: 0.4,
        }
    }

    #[test]
    fn load_applies_volume_and_loop_to_handle() {
        let dir = unique_temp_dir("load");
        std::fs::write(dir.join("bell.wav"), b"RIFF").unwrap();
        let store = SoundStore::new(&dir);
        let mut loader = FakeLoader::new();

        let mut tile = Tile::from_record(TileId(1), record("bell.wav"));
        tile.load(&mut loader, &store).unwrap();

        let log = loader.log_for(&dir.join("bell.wav")).unwrap();
        assert!(tile.is_loaded());
        assert_eq!(log.borrow().volume, 0.4);
        assert!(log.borrow().looping);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_leaves_tile_without_playback() {
        let dir = unique_temp_dir("missing");
        let store = SoundStore::new(&dir);
        let mut loader = FakeLoader::new();

        let mut tile = Tile::from_record(TileId(1), record("gone.wav"));
        assert!(tile.load(&mut loader, &store).is_err());
        assert!(!tile.is_loaded());

        // Playing and stopping an unloaded tile are no-ops.
        tile.play().unwrap();
        tile.stop();
        assert!(!tile.is_playing());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn play_always_restarts() {
        let dir = unique_temp_dir("restart");
        std::fs::write(dir.join("bell.wav"), b"RIFF").unwrap();
        let store = SoundStore::new(&dir);
        let mut loader = FakeLoader::new();
        let mut tile = Tile::from_record(TileId(1), record("bell.wav"));
        tile.load(&mut loader, &store).unwrap();
        let log = loader.log_for(&dir.join("bell.wav")).unwrap();

        tile.play().unwrap();
        tile.play().unwrap();
        assert_eq!(log.borrow().plays, 2);
        assert_eq!(log.borrow().stops, 1);

        tile.stop();
        assert!(!tile.is_playing());
        assert_eq!(log.borrow().stops, 2);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn volume_boundaries_reach_model_and_handle() {
        let dir = unique_temp_dir("volume");
        std::fs::write(dir.join("bell.wav"), b"RIFF").unwrap();
        let store = SoundStore::new(&dir);
        let mut loader = FakeLoader::new();
        let mut tile = Tile::from_record(TileId(1), record("bell.wav"));
        tile.load(&mut loader, &store).unwrap();

        for v in [0.0, 1.0] {
            tile.set_volume(v);
            assert_eq!(tile.volume(), v);
            assert_eq!(tile.player_volume(), Some(v));
        }

        tile.set_volume(1.7);
        assert_eq!(tile.volume(), 1.0);
        assert_eq!(tile.player_volume(), Some(1.0));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn update_display_syncs_label_and_loop() {
        let mut tile = Tile::from_record(TileId(3), record("bell.wav"));
        tile.sound_name = "Door bell".to_string();
        assert_eq!(tile.label(), "Bell");

        tile.update_display();
        assert_eq!(tile.label(), "Door bell");
    }

    #[test]
    fn drag_stays_in_positive_quadrant() {
        let mut tile = Tile::from_record(TileId(1), record("bell.wav"));
        tile.move_by(10.0, -100.0);
        assert_eq!((tile.x, tile.y), (15.0, 0.0));
        assert_eq!(tile.to_record().x, 15.0);
    }
}

use std::path::Path;
use std::sync::{Arc, Mutex};

use kira::{
    AudioManager, AudioManagerSettings, Decibels, DefaultBackend, Tween,
    sound::{
        PlaybackState, Region,
        static_sound::{StaticSoundData, StaticSoundHandle},
    },
};

use super::{PlaybackError, SoundLoader, SoundPlayer, volume_to_decibels};

type SharedManager = Arc<Mutex<AudioManager<DefaultBackend>>>;

/// Loader backed by a single kira audio manager shared by every tile
pub struct KiraLoader {
    /// `None` when no output device could be opened
    manager: Option<SharedManager>,
}

impl KiraLoader {
    /// Open the default output device.
    ///
    /// A missing device is not fatal: the loader is still returned and every
    /// `load` reports [`PlaybackError::BackendUnavailable`].
    pub fn new() -> Self {
        match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(manager) => {
                log::info!("Audio backend initialized successfully");
                Self {
                    manager: Some(Arc::new(Mutex::new(manager))),
                }
            }
            Err(e) => {
                log::error!("Failed to initialize audio manager: {e}");
                Self { manager: None }
            }
        }
    }

    /// Whether an output device was opened
    pub fn is_available(&self) -> bool {
        self.manager.is_some()
    }
}

impl Default for KiraLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundLoader for KiraLoader {
    fn load(&mut self, path: &Path) -> Result<Box<dyn SoundPlayer>, PlaybackError> {
        let manager = self
            .manager
            .clone()
            .ok_or(PlaybackError::BackendUnavailable)?;

        let data = StaticSoundData::from_file(path).map_err(|e| PlaybackError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        log::debug!(
            "Decoded {} ({:.2}s)",
            path.display(),
            data.duration().as_secs_f64()
        );

        Ok(Box::new(KiraPlayer {
            manager,
            data,
            handle: None,
            volume: 1.0,
            looping: false,
        }))
    }
}

impl std::fmt::Debug for KiraLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KiraLoader")
            .field("manager", &self.manager.as_ref().map(|_| "<audio manager>"))
            .finish()
    }
}

/// One decoded sound and the handle of its current playback, if any
pub struct KiraPlayer {
    manager: SharedManager,
    data: StaticSoundData,
    handle: Option<StaticSoundHandle>,
    volume: f32,
    looping: bool,
}

fn loop_region(looping: bool) -> Option<Region> {
    looping.then(|| Region::from(..))
}

impl SoundPlayer for KiraPlayer {
    fn play(&mut self) -> Result<(), PlaybackError> {
        self.stop();

        let data = self
            .data
            .clone()
            .volume(Decibels(volume_to_decibels(self.volume)))
            .loop_region(loop_region(self.looping));

        let mut manager = self
            .manager
            .lock()
            .map_err(|e| PlaybackError::Init(e.to_string()))?;
        let handle = manager
            .play(data)
            .map_err(|e| PlaybackError::Play(e.to_string()))?;

        self.handle = Some(handle);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.stop(Tween::default());
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(handle) = &mut self.handle {
            handle.set_volume(Decibels(volume_to_decibels(self.volume)), Tween::default());
        }
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
        if let Some(handle) = &mut self.handle {
            handle.set_loop_region(loop_region(looping));
        }
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn looping(&self) -> bool {
        self.looping
    }

    fn is_playing(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !matches!(handle.state(), PlaybackState::Stopped))
    }
}

impl Drop for KiraPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for KiraPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KiraPlayer")
            .field("volume", &self.volume)
            .field("looping", &self.looping)
            .field("sound_handle", &self.handle.as_ref().map(|_| "<sound handle>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_without_device_refuses_to_load() {
        let mut loader = KiraLoader { manager: None };

        assert!(!loader.is_available());
        assert!(matches!(
            loader.load(Path::new("a.wav")),
            Err(PlaybackError::BackendUnavailable)
        ));
    }
}

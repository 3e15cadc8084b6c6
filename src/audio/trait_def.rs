use std::path::Path;

use super::PlaybackError;

/// Opens audio files and hands back an independent player for each
pub trait SoundLoader {
    /// Decode `path` into a ready-to-play sound.
    fn load(&mut self, path: &Path) -> Result<Box<dyn SoundPlayer>, PlaybackError>;
}

/// Playback handle owned by exactly one tile
pub trait SoundPlayer: std::fmt::Debug {
    /// Stop whatever is playing and start again from the beginning
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Halt playback; does nothing when idle
    fn stop(&mut self);

    /// Set the volume (0.0 - 1.0), applied to the live sound if any
    fn set_volume(&mut self, volume: f32);

    /// Toggle whole-file looping, applied to the live sound if any
    fn set_looping(&mut self, looping: bool);

    fn volume(&self) -> f32;

    fn looping(&self) -> bool;

    /// Whether a sound started by `play` is still audible
    fn is_playing(&self) -> bool;
}

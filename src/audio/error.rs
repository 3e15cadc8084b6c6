use std::fmt;
use std::path::PathBuf;

/// Errors raised by the playback backend
#[derive(Debug)]
pub enum PlaybackError {
    /// No audio device could be opened at startup
    BackendUnavailable,
    /// The audio manager failed to start or its lock was poisoned
    Init(String),
    /// The file could not be read or decoded
    Load { path: PathBuf, reason: String },
    /// The manager refused to start a sound
    Play(String),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::BackendUnavailable => write!(f, "No audio output device available"),
            PlaybackError::Init(reason) => write!(f, "Audio backend error: {reason}"),
            PlaybackError::Load { path, reason } => {
                write!(f, "Failed to load {}: {reason}", path.display())
            }
            PlaybackError::Play(reason) => write!(f, "Failed to start playback: {reason}"),
        }
    }
}

impl std::error::Error for PlaybackError {}

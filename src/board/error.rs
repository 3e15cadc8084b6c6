use std::fmt;
use std::path::PathBuf;

use super::TileId;
use crate::store::StoreError;

/// Errors raised by board operations, surfaced to the user as toasts
#[derive(Debug)]
pub enum BoardError {
    /// Reading or writing the sound table failed
    Store(StoreError),
    /// Copying or deleting an audio file failed
    Io(std::io::Error),
    /// The tile was removed before the operation ran
    TileNotFound(TileId),
    /// The referenced audio file is not in the sounds directory
    FileNotFound(PathBuf),
    /// A dropped path is not a regular file
    InvalidSource(PathBuf),
    /// A dropped file has an extension we don't decode
    UnsupportedFormat(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Store(err) => write!(f, "{err}"),
            BoardError::Io(err) => write!(f, "IO error: {err}"),
            BoardError::TileNotFound(id) => write!(f, "Sound {id} no longer exists"),
            BoardError::FileNotFound(path) => {
                write!(f, "Audio file not found: {}", path.display())
            }
            BoardError::InvalidSource(path) => {
                write!(f, "Not a file: {}", path.display())
            }
            BoardError::UnsupportedFormat(name) => {
                write!(f, "Unsupported audio format: {name}")
            }
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::Store(err) => Some(err),
            BoardError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for BoardError {
    fn from(err: StoreError) -> Self {
        BoardError::Store(err)
    }
}

impl From<std::io::Error> for BoardError {
    fn from(err: std::io::Error) -> Self {
        BoardError::Io(err)
    }
}

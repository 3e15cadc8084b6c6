//! Sound table persistence
//!
//! The board's metadata is a flat CSV table (`sounds.csv`) that sits in the
//! same directory as the audio files it references.

pub mod csv_store;
pub mod error;
pub mod record;

#[cfg(test)]
mod tests;

pub use csv_store::{SoundStore, TABLE_FILE_NAME};
pub use error::StoreError;
pub use record::{HEADER, SoundRecord, parse_loop_flag};

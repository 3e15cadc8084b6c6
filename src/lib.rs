//! Tilepad: a drag-and-drop desktop soundboard.
//!
//! Sounds live as tiles on a free-form board. Their metadata is kept in a CSV
//! table next to the audio files, see [`store`].
#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod audio;
pub mod board;
pub mod config;
pub mod store;
mod ui;

pub use app::{Screen, TilepadApp};
pub use config::AppConfig;

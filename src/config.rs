use std::path::PathBuf;

/// Directory used when no configuration has been stored yet
pub const DEFAULT_SOUNDS_DIR: &str = "Sounds";

/// User settings restored by eframe between sessions
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct AppConfig {
    /// Holds `sounds.csv` and every imported audio file
    pub sounds_dir: PathBuf,
    pub dark_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sounds_dir: PathBuf::from(DEFAULT_SOUNDS_DIR),
            dark_mode: true,
        }
    }
}

impl AppConfig {
    /// Load the stored configuration, falling back to defaults
    pub fn restore(storage: Option<&dyn eframe::Storage>) -> Self {
        storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default()
    }
}

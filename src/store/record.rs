use serde::{Deserialize, Serialize, Serializer};

/// Column order of the metadata table
pub const HEADER: [&str; 6] = ["file_name", "sound_name", "loop", "x", "y", "volume"];

/// One persisted row of the metadata table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundRecord {
    /// Bare file name inside the sounds directory
    pub file_name: String,
    /// Label shown on the tile
    pub sound_name: String,
    /// Restart automatically when playback reaches the end
    #[serde(rename = "loop", serialize_with = "write_loop_flag")]
    pub looping: bool,
    pub x: f32,
    pub y: f32,
    /// Linear amplitude, 0.0 - 1.0
    pub volume: f32,
}

impl SoundRecord {
    /// Record for a freshly imported file: not looping, full volume, top-left corner.
    pub fn imported(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_owned(),
            sound_name: file_name.to_owned(),
            looping: false,
            x: 0.0,
            y: 0.0,
            volume: 1.0,
        }
    }
}

/// Strict boolean parser for the `loop` column.
///
/// Existing tables store Python-style `True`/`False`; lowercase and numeric
/// spellings are accepted too. Anything else yields `None`.
pub fn parse_loop_flag(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn write_loop_flag<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *value { "True" } else { "False" })
}

/// A row as it sits in the table, before the `loop` column is validated
#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    file_name: String,
    sound_name: String,
    #[serde(rename = "loop")]
    looping: String,
    x: f32,
    y: f32,
    volume: f32,
}

impl RawRecord {
    /// Validate the loop flag and numbers, returning the offending column and value on failure.
    pub(crate) fn validate(self) -> Result<SoundRecord, (&'static str, String)> {
        let Some(looping) = parse_loop_flag(&self.looping) else {
            return Err(("loop", self.looping));
        };
        for (field, value) in [("x", self.x), ("y", self.y), ("volume", self.volume)] {
            if !value.is_finite() {
                return Err((field, value.to_string()));
            }
        }
        Ok(SoundRecord {
            file_name: self.file_name,
            sound_name: self.sound_name,
            looping,
            x: self.x,
            y: self.y,
            volume: self.volume,
        })
    }
}

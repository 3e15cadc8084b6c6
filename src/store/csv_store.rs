use std::fs;
use std::path::{Path, PathBuf};

use super::error::StoreError;
use super::record::{HEADER, RawRecord, SoundRecord};

/// Name of the metadata table inside the sounds directory
pub const TABLE_FILE_NAME: &str = "sounds.csv";

/// Metadata table plus the audio assets it references, all in one directory
#[derive(Debug, Clone)]
pub struct SoundStore {
    dir: PathBuf,
}

impl SoundStore {
    /// Create a store rooted at `dir`. Nothing is touched on disk until `load`/`save`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The managed sounds directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the metadata table
    pub fn table_path(&self) -> PathBuf {
        self.dir.join(TABLE_FILE_NAME)
    }

    /// Path of an audio asset referenced by bare file name
    pub fn sound_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Read every record of the table.
    ///
    /// A missing directory or table is created empty and yields no records, as
    /// does an existing file with no rows.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the directory or table can't be created or
    /// read, and [`StoreError::Csv`] / [`StoreError::InvalidField`] for a
    /// malformed row.
    pub fn load(&self) -> Result<Vec<SoundRecord>, StoreError> {
        self.ensure_dir()?;

        let path = self.table_path();
        if !path.exists() {
            log::warn!("No sound table at {}, creating an empty one", path.display());
            fs::File::create(&path)?;
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_path(&path)?;
        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let raw = row
                .deserialize::<RawRecord>(Some(&headers))
                .map_err(|err| invalid_field(err, &headers, &row))?;
            let record = raw.validate().map_err(|(field, value)| StoreError::InvalidField {
                line: line_of(&row),
                field: field.to_owned(),
                value,
            })?;
            records.push(record);
        }

        log::info!("Loaded {} sounds from {}", records.len(), path.display());
        Ok(records)
    }

    /// Rewrite the whole table from `records`.
    ///
    /// The header is always written, so an empty slice leaves a header-only
    /// table. Data goes to a sibling temp file first and is renamed over the
    /// table once complete.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] or [`StoreError::Csv`] if writing fails; the
    /// previous table is left untouched in that case.
    pub fn save(&self, records: &[SoundRecord]) -> Result<(), StoreError> {
        self.ensure_dir()?;

        let path = self.table_path();
        let tmp_path = path.with_extension("csv.tmp");
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_path(&tmp_path)?;
            writer.write_record(HEADER)?;
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp_path, &path)?;

        log::info!("Saved {} sounds to {}", records.len(), path.display());
        Ok(())
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        if !self.dir.is_dir() {
            log::warn!("Creating sounds directory {}", self.dir.display());
            fs::create_dir_all(&self.dir)?;
        }
        Ok(())
    }
}

/// Turn a per-field deserialize failure into [`StoreError::InvalidField`];
/// anything else stays a plain CSV error.
fn invalid_field(
    err: csv::Error,
    headers: &csv::StringRecord,
    row: &csv::StringRecord,
) -> StoreError {
    let index = match err.kind() {
        csv::ErrorKind::Deserialize { err: de, .. } => de.field(),
        _ => None,
    };
    let Some(index) = index.and_then(|i| usize::try_from(i).ok()) else {
        return StoreError::Csv(err);
    };

    StoreError::InvalidField {
        line: line_of(row),
        field: headers.get(index).unwrap_or("?").to_owned(),
        value: row.get(index).unwrap_or_default().to_owned(),
    }
}

fn line_of(row: &csv::StringRecord) -> u64 {
    row.position().map_or(0, csv::Position::line)
}

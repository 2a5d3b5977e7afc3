use std::fs::{self, File};
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Custom error type for reading and writing the CSV data files
#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Csv(csv::Error),
    InvalidRecord(String),
}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::Io(error)
    }
}

impl From<csv::Error> for StorageError {
    fn from(error: csv::Error) -> Self {
        StorageError::Csv(error)
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "IO error: {}", e),
            StorageError::Csv(e) => write!(f, "CSV error: {}", e),
            StorageError::InvalidRecord(msg) => write!(f, "Invalid record: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Csv(e) => Some(e),
            StorageError::InvalidRecord(_) => None,
        }
    }
}

/// Read every header-less row of `path` into `T`.
///
/// A missing file reads as no rows, so a fresh data directory starts empty.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StorageError::Io(e)),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.deserialize::<T>() {
        records.push(result?);
    }
    Ok(records)
}

/// Replace the contents of `path` with `records`.
///
/// Rows go to a sibling temp file first which is then renamed over the target.
pub fn write_records<T, I>(path: &Path, records: I) -> Result<(), StorageError>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut temp_path = path.as_os_str().to_owned();
    temp_path.push(".tmp");

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&temp_path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }

    fs::rename(&temp_path, path)?;
    Ok(())
}

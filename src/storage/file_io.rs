//! File I/O utilities with atomic writes
//!
//! A collection file is either fully rewritten or left untouched; readers
//! never observe a half-written document.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TrackifyError;

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> TrackifyError {
    TrackifyError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Read JSON from a file, returning a default value if the file doesn't exist
///
/// A file that exists but does not parse is an error: corrupt data is never
/// silently replaced by an empty collection.
pub fn read_json<T, P>(path: P) -> Result<T, TrackifyError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no data file yet, using defaults");
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| storage_error("open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TrackifyError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| storage_error("create", &temp_path, e))?;

    let written = write_and_sync(file, data)
        .map_err(|(action, e)| storage_error(action, &temp_path, e))
        .and_then(|()| fs::rename(&temp_path, path).map_err(|e| storage_error("replace", path, e)));

    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    tracing::trace!(path = %path.display(), "wrote data file");
    Ok(())
}

fn write_and_sync<T>(file: File, data: &T) -> Result<(), (&'static str, String)>
where
    T: Serialize + ?Sized,
{
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, data).map_err(|e| ("serialize", e.to_string()))?;
    writer.flush().map_err(|e| ("flush", e.to_string()))?;
    writer.get_ref().sync_all().map_err(|e| ("sync", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Row {
        label: String,
        cents: i64,
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let rows: Vec<Row> = read_json(temp_dir.path().join("missing.json")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.json");
        let rows = vec![Row { label: "a".into(), cents: 1 }, Row { label: "b".into(), cents: 2 }];

        write_json_atomic(&path, &rows).unwrap();
        let loaded: Vec<Row> = read_json(&path).unwrap();
        assert_eq!(loaded, rows);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.json");

        write_json_atomic(&path, &Vec::<Row>::new()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("rows.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("rows.json");

        write_json_atomic(&path, &Row::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json::<Vec<Row>, _>(&path).unwrap_err();
        assert!(matches!(err, TrackifyError::Storage(_)));
        assert!(err.to_string().contains("rows.json"));
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot serialize"))
        }
    }

    #[test]
    fn test_failed_write_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.json");
        fs::write(&path, "[]").unwrap();

        let err = write_json_atomic(&path, &Unserializable).unwrap_err();

        assert!(matches!(err, TrackifyError::Storage(_)));
        assert!(err.to_string().contains("serialize"));
        assert!(!temp_dir.path().join("rows.json.tmp").exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}

//! JSON file repository
//!
//! Stores one collection as a JSON array in its own file.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use super::file_io::{read_json, write_json_atomic};
use super::Repository;
use crate::error::TrackifyError;

/// Repository persisting a collection to a single JSON file
pub struct JsonRepository<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonRepository<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> Repository<T> for JsonRepository<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Vec<T>, TrackifyError> {
        let items: Vec<T> = read_json(&self.path)?;
        tracing::debug!(path = %self.path.display(), count = items.len(), "loaded collection");
        Ok(items)
    }

    fn save(&self, items: &[T]) -> Result<(), TrackifyError> {
        write_json_atomic(&self.path, items)?;
        tracing::debug!(path = %self.path.display(), count = items.len(), "saved collection");
        Ok(())
    }
}

//! JSON persistence for the patient collection.
//!
//! - [`adapted`]: per-record conversion with field validation
//! - [`document`]: whole-collection `encode`/`decode`
//! - [`JsonClinicStorage`]: the data file on disk

mod adapted;
mod document;

pub use adapted::*;
pub use document::*;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::collection::{CollectionError, PatientCollection};
use crate::models::{FieldKind, ValidationError};

/// Storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Patient's {0} field is missing!")]
    MissingField(FieldKind),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Stored patients are inconsistent: {0}")]
    Collection(#[from] CollectionError),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// The data file holding the whole collection.
#[derive(Debug, Clone)]
pub struct JsonClinicStorage {
    path: PathBuf,
}

impl JsonClinicStorage {
    /// Create storage for the data file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the data file.
    ///
    /// Returns `Ok(None)` when the file does not exist yet. A file that exists
    /// but cannot be read or validated is an error and is left untouched.
    pub fn load(&self) -> StorageResult<Option<PatientCollection>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "data file not found");
                return Ok(None);
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let document = ClinicDocument::from_json_str(&json)?;
        let patients = decode(&document)?;
        tracing::info!(
            path = %self.path.display(),
            count = patients.len(),
            "loaded patients"
        );
        Ok(Some(patients))
    }

    /// Like [`load`](Self::load), starting empty when there is no file yet.
    pub fn load_or_empty(&self) -> StorageResult<PatientCollection> {
        Ok(self.load()?.unwrap_or_default())
    }

    /// Write the collection, replacing the data file all at once.
    ///
    /// The document is written to a temporary file next to the destination
    /// and renamed over it, so a failure never leaves a half-written file.
    pub fn save(&self, patients: &PatientCollection) -> StorageResult<()> {
        let json = encode(patients)?.to_json_string()?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| self.io_error(e))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;

        tracing::debug!(
            path = %self.path.display(),
            count = patients.len(),
            "saved patients"
        );
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

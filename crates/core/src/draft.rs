//! Enrollment draft persistence. The flow saves the partially filled form
//! between steps so an interrupted session can resume where it left off.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::enrollment::EnrollmentFormData;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentDraft {
    pub form: EnrollmentFormData,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("could not read draft: {0}")]
    Read(std::io::Error),
    #[error("could not write draft: {0}")]
    Write(std::io::Error),
    #[error("draft serialization failed: {0}")]
    Codec(#[from] serde_json::Error),
}

pub trait DraftStore {
    fn load(&self) -> Result<Option<EnrollmentDraft>, DraftError>;
    fn save(&self, form: &EnrollmentFormData) -> Result<(), DraftError>;
    fn clear(&self) -> Result<(), DraftError>;
}

/// JSON-file-backed draft store. A missing file means no draft.
#[derive(Clone, Debug)]
pub struct JsonFileDraftStore {
    path: PathBuf,
}

impl JsonFileDraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DraftStore for JsonFileDraftStore {
    fn load(&self) -> Result<Option<EnrollmentDraft>, DraftError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(DraftError::Read(error)),
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, form: &EnrollmentFormData) -> Result<(), DraftError> {
        let draft = EnrollmentDraft { form: form.clone(), saved_at: Utc::now() };
        let encoded = serde_json::to_string_pretty(&draft)?;
        fs::write(&self.path, encoded).map_err(DraftError::Write)
    }

    fn clear(&self) -> Result<(), DraftError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(DraftError::Write(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::{DraftStore, JsonFileDraftStore};
    use crate::domain::enrollment::EnrollmentFormData;

    #[test]
    fn round_trips_a_draft() {
        let dir = TempDir::new().expect("temp dir");
        let store = JsonFileDraftStore::new(dir.path().join("enrollment.json"));

        let mut form = EnrollmentFormData::default();
        form.name = "Moussa".to_string();
        form.phone_number = "+22796000000".to_string();

        store.save(&form).expect("save draft");
        let restored = store.load().expect("load draft").expect("draft present");

        assert_eq!(restored.form, form);
    }

    #[test]
    fn missing_file_is_no_draft() {
        let dir = TempDir::new().expect("temp dir");
        let store = JsonFileDraftStore::new(dir.path().join("enrollment.json"));

        assert!(store.load().expect("load draft").is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = TempDir::new().expect("temp dir");
        let store = JsonFileDraftStore::new(dir.path().join("enrollment.json"));

        store.save(&EnrollmentFormData::default()).expect("save draft");
        store.clear().expect("clear existing draft");
        store.clear().expect("clear missing draft");

        assert!(store.load().expect("load draft").is_none());
    }
}

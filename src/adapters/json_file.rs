use crate::domain::model::LiaisonsDocument;
use crate::domain::ports::LiaisonSource;
use crate::utils::error::{NotifierError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the liaisons document from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileLiaisonSource {
    path: PathBuf,
}

impl JsonFileLiaisonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LiaisonSource for JsonFileLiaisonSource {
    fn load(&self) -> Result<LiaisonsDocument> {
        let data = fs::read(&self.path).map_err(|source| NotifierError::LiaisonsFileRead {
            path: self.path.clone(),
            source,
        })?;
        let document: LiaisonsDocument =
            serde_json::from_slice(&data).map_err(|source| NotifierError::LiaisonsFileParse {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(
            "Read {} liaison entries from {}",
            document.liaisons.len(),
            self.path().display()
        );
        Ok(document)
    }
}

//! JSON file backed credential store.
//!
//! The whole credential list is stored as one JSON array. Every operation
//! reads the file, edits the list and writes it back.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::credential::Credential;
use crate::edit;
use crate::error::{CredentialError, Result};
use crate::traits::CredentialProvider;

/// A [`CredentialProvider`] backed by a JSON file.
///
/// A missing file is an empty store; it is created on the first write.
#[derive(Clone, Debug)]
pub struct FileSystemCredentialStore {
    path: PathBuf,
}

impl FileSystemCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Credential>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no credentials file");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&data).map_err(|e| CredentialError::Serialization(e.to_string()))
    }

    fn save(&self, credentials: &[Credential]) -> Result<()> {
        let data = serde_json::to_vec_pretty(credentials)
            .map_err(|e| CredentialError::Serialization(e.to_string()))?;
        fs::write(&self.path, data)?;
        debug!(path = %self.path.display(), count = credentials.len(), "credentials saved");
        Ok(())
    }
}

impl CredentialProvider for FileSystemCredentialStore {
    fn fetch_credentials(&self) -> Result<Vec<Credential>> {
        self.load()
    }

    fn add_or_update(&self, old: Option<&Credential>, cred: Credential) -> Result<()> {
        let mut credentials = self.load()?;
        if edit::add_or_update(&mut credentials, old, cred)? {
            self.save(&credentials)?;
        }
        Ok(())
    }

    fn remove(&self, offsets: &[usize]) -> Result<()> {
        let mut credentials = self.load()?;
        edit::remove_offsets(&mut credentials, offsets);
        self.save(&credentials)
    }
}

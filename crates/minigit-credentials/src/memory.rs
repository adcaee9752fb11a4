//! In-memory credential store for testing and ephemeral use.

use std::sync::RwLock;

use crate::credential::Credential;
use crate::edit;
use crate::error::{CredentialError, Result};
use crate::traits::CredentialProvider;

/// An in-memory implementation of [`CredentialProvider`].
///
/// Data is lost when the store is dropped.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    credentials: RwLock<Vec<Credential>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(e: impl std::fmt::Display) -> CredentialError {
    CredentialError::Serialization(format!("lock poisoned: {e}"))
}

impl CredentialProvider for InMemoryCredentialStore {
    fn fetch_credentials(&self) -> Result<Vec<Credential>> {
        let credentials = self.credentials.read().map_err(poisoned)?;
        Ok(credentials.clone())
    }

    fn add_or_update(&self, old: Option<&Credential>, cred: Credential) -> Result<()> {
        let mut credentials = self.credentials.write().map_err(poisoned)?;
        edit::add_or_update(&mut *credentials, old, cred)?;
        Ok(())
    }

    fn remove(&self, offsets: &[usize]) -> Result<()> {
        let mut credentials = self.credentials.write().map_err(poisoned)?;
        edit::remove_offsets(&mut *credentials, offsets);
        Ok(())
    }
}

//! Cached view of a credential provider for UI layers.

use tracing::warn;

use crate::credential::Credential;
use crate::error::Result;
use crate::traits::CredentialProvider;

/// Holds a provider and the credentials it returned on the last refresh.
pub struct CredentialsManager<P: CredentialProvider> {
    provider: P,
    credentials: Vec<Credential>,
}

impl<P: CredentialProvider> CredentialsManager<P> {
    /// Load the current credentials from `provider`.
    ///
    /// A provider that cannot be read is logged and shows as empty.
    pub fn new(provider: P) -> Self {
        let mut manager = Self {
            provider,
            credentials: Vec::new(),
        };
        manager.refresh();
        manager
    }

    /// Reload the cached credentials.
    pub fn refresh(&mut self) {
        self.credentials = self.provider.fetch_credentials().unwrap_or_else(|e| {
            warn!(error = %e, "failed to load credentials");
            Vec::new()
        });
    }

    pub fn all_credentials(&self) -> &[Credential] {
        &self.credentials
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn add_or_update(&mut self, old: Option<&Credential>, cred: Credential) -> Result<()> {
        self.provider.add_or_update(old, cred)?;
        self.refresh();
        Ok(())
    }

    /// Remove by position in [`all_credentials`](Self::all_credentials).
    pub fn remove(&mut self, offsets: &[usize]) -> Result<()> {
        self.provider.remove(offsets)?;
        self.refresh();
        Ok(())
    }

    pub fn credential_for_url(&self, url: &str) -> Option<&Credential> {
        crate::edit::for_url(&self.credentials, url)
    }
}

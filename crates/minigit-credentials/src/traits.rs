//! The [`CredentialProvider`] trait defining the credential storage interface.

use crate::credential::Credential;
use crate::error::Result;

/// Storage backend for remote credentials.
///
/// Credentials keep their insertion order; lookups return the first match.
pub trait CredentialProvider: Send + Sync {
    /// All stored credentials, in order.
    fn fetch_credentials(&self) -> Result<Vec<Credential>>;

    /// Replace `old` with `cred`, or add `cred` when `old` is `None`.
    ///
    /// Adding fails with [`CredentialError::EmptyId`](crate::CredentialError::EmptyId)
    /// or [`CredentialError::AlreadyExists`](crate::CredentialError::AlreadyExists).
    fn add_or_update(&self, old: Option<&Credential>, cred: Credential) -> Result<()>;

    /// Remove the credentials at the given positions of
    /// [`fetch_credentials`](Self::fetch_credentials).
    fn remove(&self, offsets: &[usize]) -> Result<()>;

    /// The first credential whose target URL is a prefix of `url`.
    fn credential_for_url(&self, url: &str) -> Result<Option<Credential>> {
        let credentials = self.fetch_credentials()?;
        Ok(crate::edit::for_url(&credentials, url).cloned())
    }
}

//! Credential storage for MiniGit remotes.
//!
//! Network commands (clone, fetch, push) look up the credential whose target
//! URL is a prefix of the remote URL. Credentials are kept by a
//! [`CredentialProvider`]; the file-backed provider stores them as a JSON
//! array.
//!
//! # Key Types
//!
//! - [`Credential`] / [`CredentialKind`] -- Password or SSH credential for a URL prefix
//! - [`CredentialProvider`] -- Storage interface
//! - [`FileSystemCredentialStore`] -- JSON file backend
//! - [`InMemoryCredentialStore`] -- Ephemeral backend
//! - [`CredentialsManager`] -- Cached view over a provider

pub mod credential;
pub mod error;
pub mod fs;
pub mod manager;
pub mod memory;
pub mod traits;

mod edit;

pub use credential::{Credential, CredentialKind};
pub use error::{CredentialError, Result};
pub use fs::FileSystemCredentialStore;
pub use manager::CredentialsManager;
pub use memory::InMemoryCredentialStore;
pub use traits::CredentialProvider;

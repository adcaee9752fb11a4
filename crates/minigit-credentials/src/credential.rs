use std::fmt;

use serde::{Deserialize, Serialize};

/// Authentication method of a credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialKind {
    Ssh,
    Password,
}

impl CredentialKind {
    pub const ALL: [CredentialKind; 2] = [Self::Ssh, Self::Password];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ssh => "ssh",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User name libgit2 expects for SSH transports when none is configured.
const SSH_USER: &str = "git";

/// A credential for every remote whose URL starts with `target_url`.
///
/// Secrets are never printed by `Debug`. The JSON field names match the
/// credentials files written by earlier MiniGit releases.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub id: String,
    pub kind: CredentialKind,
    #[serde(rename = "targetURL")]
    pub target_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, rename = "_password", skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(default, rename = "_privateKey", skip_serializing_if = "Option::is_none")]
    private_key: Option<String>,
}

impl Credential {
    /// User name / password (or personal access token) credential.
    pub fn password(
        id: impl Into<String>,
        target_url: impl Into<String>,
        user_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: CredentialKind::Password,
            target_url: target_url.into(),
            user_name: Some(user_name.into()),
            password: Some(password.into()),
            public_key: None,
            private_key: None,
        }
    }

    /// SSH key pair credential.
    pub fn ssh(
        id: impl Into<String>,
        target_url: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: CredentialKind::Ssh,
            target_url: target_url.into(),
            user_name: None,
            password: None,
            public_key: Some(public_key.into()),
            private_key: Some(private_key.into()),
        }
    }

    pub fn is_password_auth(&self) -> bool {
        self.kind == CredentialKind::Password
    }

    pub fn is_ssh_auth(&self) -> bool {
        self.kind == CredentialKind::Ssh
    }

    /// Whether this credential covers `url`.
    pub fn applies_to(&self, url: &str) -> bool {
        url.starts_with(&self.target_url)
    }

    /// Configured user name; SSH credentials fall back to `git`.
    pub fn user_name(&self) -> Option<&str> {
        match (&self.user_name, self.kind) {
            (Some(name), _) => Some(name),
            (None, CredentialKind::Ssh) => Some(SSH_USER),
            (None, CredentialKind::Password) => None,
        }
    }

    /// Password or token, empty when unset.
    pub fn secret_password(&self) -> &str {
        self.password.as_deref().unwrap_or("")
    }

    pub fn ssh_public(&self) -> &str {
        self.public_key.as_deref().unwrap_or("")
    }

    pub fn ssh_private(&self) -> &str {
        self.private_key.as_deref().unwrap_or("")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("target_url", &self.target_url)
            .field("user_name", &self.user_name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("public_key", &self.public_key)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

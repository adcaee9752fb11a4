//! List edits shared by every provider.

use std::collections::BTreeSet;

use tracing::warn;

use crate::credential::Credential;
use crate::error::{CredentialError, Result};

/// Replace `old` in place with `cred`, or append `cred` when `old` is `None`.
///
/// A new credential needs a non-empty id that is not already used. Updating a
/// credential that is no longer in the list is logged and leaves the list
/// unchanged; the return value tells whether the list changed.
pub(crate) fn add_or_update(
    credentials: &mut Vec<Credential>,
    old: Option<&Credential>,
    cred: Credential,
) -> Result<bool> {
    match old {
        Some(old) => match credentials.iter().position(|c| c.id == old.id) {
            Some(index) => {
                credentials[index] = cred;
                Ok(true)
            }
            None => {
                warn!(id = %old.id, "credential to update is not stored; ignoring");
                Ok(false)
            }
        },
        None => {
            if cred.id.is_empty() {
                return Err(CredentialError::EmptyId);
            }
            if credentials.iter().any(|c| c.id == cred.id) {
                return Err(CredentialError::AlreadyExists { id: cred.id });
            }
            credentials.push(cred);
            Ok(true)
        }
    }
}

/// Drop the credentials at the given positions. Out-of-range offsets are ignored.
pub(crate) fn remove_offsets(credentials: &mut Vec<Credential>, offsets: &[usize]) {
    let offsets: BTreeSet<usize> = offsets.iter().copied().collect();
    let mut index = 0;
    credentials.retain(|_| {
        let keep = !offsets.contains(&index);
        index += 1;
        keep
    });
}

/// First credential whose target URL prefixes `url`.
pub(crate) fn for_url<'a>(credentials: &'a [Credential], url: &str) -> Option<&'a Credential> {
    credentials.iter().find(|c| c.applies_to(url))
}

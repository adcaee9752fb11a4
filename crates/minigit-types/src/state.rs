use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Operation a repository is in the middle of.
///
/// Mirrors libgit2's `git_repository_state_t`; the discriminants are the raw
/// codes the library reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepositoryState {
    #[default]
    None = 0,
    Merge = 1,
    Revert = 2,
    RevertSequence = 3,
    CherryPick = 4,
    CherryPickSequence = 5,
    Bisect = 6,
    Rebase = 7,
    RebaseInteractive = 8,
    RebaseMerge = 9,
    ApplyMailbox = 10,
    ApplyMailboxOrRebase = 11,
}

impl RepositoryState {
    /// Map a raw state code.
    pub fn from_code(code: i32) -> Result<Self, TypeError> {
        let state = match code {
            0 => Self::None,
            1 => Self::Merge,
            2 => Self::Revert,
            3 => Self::RevertSequence,
            4 => Self::CherryPick,
            5 => Self::CherryPickSequence,
            6 => Self::Bisect,
            7 => Self::Rebase,
            8 => Self::RebaseInteractive,
            9 => Self::RebaseMerge,
            10 => Self::ApplyMailbox,
            11 => Self::ApplyMailboxOrRebase,
            other => return Err(TypeError::UnknownRepositoryState(other)),
        };
        Ok(state)
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Returns `true` while a merge, rebase, bisect, etc. is underway.
    pub fn is_in_progress(&self) -> bool {
        *self != Self::None
    }
}

impl fmt::Display for RepositoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "None",
            Self::Merge => "Merge",
            Self::Revert => "Revert",
            Self::RevertSequence => "Revert Sequence",
            Self::CherryPick => "Cherrypick",
            Self::CherryPickSequence => "Cherrypick Sequence",
            Self::Bisect => "Bisect",
            Self::Rebase => "Rebase",
            Self::RebaseInteractive => "Interactive Rebase",
            Self::RebaseMerge => "Merge Rebase",
            Self::ApplyMailbox => "Apply Mailbox",
            Self::ApplyMailboxOrRebase => "Apply Mailbox or Rebase",
        };
        f.write_str(s)
    }
}

//! Change classification of a delta.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DeltaError, DeltaResult};

/// How a file changed between the old and new side of a comparison.
///
/// Mirrors libgit2's `git_delta_t`; the discriminants are the raw codes the
/// engine reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeltaKind {
    /// No change.
    Unmodified = 0,
    /// The file did not exist on the old side.
    Added = 1,
    /// The file does not exist on the new side.
    Deleted = 2,
    /// The file content changed.
    Modified = 3,
    /// The file moved to a new path, possibly with edits.
    Renamed = 4,
    /// The file was duplicated from another path.
    Copied = 5,
    /// The file is ignored by git.
    Ignored = 6,
    /// The file exists in the working directory but is not tracked.
    Untracked = 7,
    /// The entry changed between blob, symlink, submodule or directory.
    TypeChanged = 8,
    /// The file exists but could not be read.
    Unreadable = 9,
    /// The file is conflicted in the working directory.
    Conflicted = 10,
}

/// What a delta kind requires of one file side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SideRule {
    Absent,
    Present,
    Unconstrained,
}

impl SideRule {
    /// Whether a side with the given presence satisfies this rule.
    pub fn admits(&self, present: bool) -> bool {
        match self {
            Self::Absent => !present,
            Self::Present => present,
            Self::Unconstrained => true,
        }
    }
}

impl fmt::Display for SideRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("absent"),
            Self::Present => f.write_str("present"),
            Self::Unconstrained => f.write_str("unconstrained"),
        }
    }
}

impl DeltaKind {
    /// Every kind, in code order.
    pub const ALL: [DeltaKind; 11] = [
        Self::Unmodified,
        Self::Added,
        Self::Deleted,
        Self::Modified,
        Self::Renamed,
        Self::Copied,
        Self::Ignored,
        Self::Untracked,
        Self::TypeChanged,
        Self::Unreadable,
        Self::Conflicted,
    ];

    /// Map a raw classification code.
    pub fn from_code(code: u32) -> DeltaResult<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(DeltaError::UnknownKind(code))
    }

    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// One-letter status as printed by `git diff --name-status`.
    pub fn status_char(&self) -> char {
        match self {
            Self::Unmodified => ' ',
            Self::Added => 'A',
            Self::Deleted => 'D',
            Self::Modified => 'M',
            Self::Renamed => 'R',
            Self::Copied => 'C',
            Self::Ignored => 'I',
            Self::Untracked => '?',
            Self::TypeChanged => 'T',
            Self::Unreadable => 'X',
            Self::Conflicted => 'U',
        }
    }

    /// Requirement on the old file side.
    pub fn old_side(&self) -> SideRule {
        match self {
            Self::Added => SideRule::Absent,
            Self::Deleted | Self::Modified | Self::Renamed | Self::Copied => SideRule::Present,
            Self::TypeChanged | Self::Conflicted => SideRule::Present,
            Self::Unmodified | Self::Ignored | Self::Untracked | Self::Unreadable => {
                SideRule::Unconstrained
            }
        }
    }

    /// Requirement on the new file side.
    pub fn new_side(&self) -> SideRule {
        match self {
            Self::Deleted => SideRule::Absent,
            Self::Added | Self::Modified | Self::Renamed | Self::Copied => SideRule::Present,
            Self::TypeChanged | Self::Conflicted => SideRule::Present,
            Self::Unmodified | Self::Ignored | Self::Untracked | Self::Unreadable => {
                SideRule::Unconstrained
            }
        }
    }

    /// Kinds that represent no content change and therefore carry no hunks.
    pub fn forbids_hunks(&self) -> bool {
        matches!(
            self,
            Self::Unmodified | Self::Ignored | Self::Untracked | Self::Unreadable
        )
    }
}

impl fmt::Display for DeltaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unmodified => "unmodified",
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::Modified => "modified",
            Self::Renamed => "renamed",
            Self::Copied => "copied",
            Self::Ignored => "ignored",
            Self::Untracked => "untracked",
            Self::TypeChanged => "type-changed",
            Self::Unreadable => "unreadable",
            Self::Conflicted => "conflicted",
        };
        f.write_str(s)
    }
}

impl TryFrom<u32> for DeltaKind {
    type Error = DeltaError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

//! Repository status snapshots.
//!
//! A [`StatusSnapshot`] is the outcome of a `git status`-style query: the
//! current branch, the staged and unstaged comparisons, and whatever
//! operation the repository is in the middle of.

use minigit_types::RepositoryState;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::diff_set::DiffSet;
use crate::kind::DeltaKind;

/// Point-in-time status of a repository.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub current_branch: String,
    /// Index against `HEAD`.
    pub staged: DiffSet,
    /// Working directory against the index.
    pub unstaged: DiffSet,
    pub state: RepositoryState,
}

impl StatusSnapshot {
    /// No staged or unstaged changes and no operation in progress.
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty() && !self.state.is_in_progress()
    }

    pub fn has_staged_changes(&self) -> bool {
        !self.staged.is_empty()
    }

    pub fn has_conflicts(&self) -> bool {
        self.staged
            .iter()
            .chain(self.unstaged.iter())
            .any(|d| d.kind() == DeltaKind::Conflicted)
    }

    pub fn total_entries(&self) -> usize {
        self.staged.len() + self.unstaged.len()
    }
}

/// Collects status pieces as the engine reports them.
#[derive(Debug, Default)]
pub struct StatusBuilder {
    snapshot: StatusSnapshot,
}

impl StatusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current_branch(&mut self, name: impl Into<String>) -> &mut Self {
        self.snapshot.current_branch = name.into();
        self
    }

    pub fn set_staged_changes(&mut self, changes: DiffSet) -> &mut Self {
        self.snapshot.staged = changes;
        self
    }

    pub fn set_unstaged_changes(&mut self, changes: DiffSet) -> &mut Self {
        self.snapshot.unstaged = changes;
        self
    }

    /// Record the raw repository state code.
    ///
    /// An unknown code is logged and leaves the previous state in place.
    pub fn set_state_code(&mut self, code: i32) -> &mut Self {
        match RepositoryState::from_code(code) {
            Ok(state) => self.snapshot.state = state,
            Err(e) => warn!(code, error = %e, "ignoring repository state"),
        }
        self
    }

    pub fn finish(self) -> StatusSnapshot {
        self.snapshot
    }
}

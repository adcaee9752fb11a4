//! Hunks and the ordering check applied to a delta's hunk sequence.

use serde::{Deserialize, Serialize};

use crate::error::{DeltaError, DeltaResult};

/// A contiguous block of changed lines within a file comparison.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hunk {
    /// First line of the hunk on the old side.
    pub old_start: u32,
    /// Number of old-side lines covered by the hunk.
    pub old_count: u32,
    /// First line of the hunk on the new side.
    pub new_start: u32,
    /// Number of new-side lines covered by the hunk.
    pub new_count: u32,
    /// Header text as reported by the engine (usually the `@@` line).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

impl Hunk {
    /// Create a hunk without header text.
    pub fn new(old_start: u32, old_count: u32, new_start: u32, new_count: u32) -> Self {
        Self {
            old_start,
            old_count,
            new_start,
            new_count,
            header: None,
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Line just past the hunk on the old side.
    pub fn old_end(&self) -> u64 {
        u64::from(self.old_start) + u64::from(self.old_count)
    }

    /// Line just past the hunk on the new side.
    pub fn new_end(&self) -> u64 {
        u64::from(self.new_start) + u64::from(self.new_count)
    }
}

/// Verify that hunks are ordered by old-side start and do not overlap.
///
/// Adjacent hunks may touch (`prev.old_end() == next.old_start`). The error
/// carries the index of the second hunk of the first offending pair.
pub fn check_hunk_order(hunks: &[Hunk]) -> DeltaResult<()> {
    match hunks
        .windows(2)
        .position(|pair| pair[0].old_end() > u64::from(pair[1].old_start))
    {
        Some(i) => Err(DeltaError::HunkOverlapOrDisorder { index: i + 1 }),
        None => Ok(()),
    }
}

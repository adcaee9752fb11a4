//! Records as handed over by the diff engine.
//!
//! These mirror libgit2's `git_diff_delta`, `git_diff_file` and
//! `git_diff_hunk`. Nothing here is validated; [`RawDelta::into_record`] is
//! the single path from raw engine output to a [`DeltaRecord`].

use minigit_types::{FileMode, Oid};
use serde::{Deserialize, Serialize};

use crate::delta::DeltaRecord;
use crate::error::DeltaResult;
use crate::file::FileRef;
use crate::hunk::Hunk;
use crate::kind::DeltaKind;

/// Mode the engine reports for a side that does not exist
/// (`GIT_FILEMODE_UNREADABLE`).
pub const ABSENT_MODE: u32 = 0;

/// One side of a raw delta.
///
/// The engine always reports both sides. A side that does not exist has mode
/// 0 (`GIT_FILEMODE_UNREADABLE`), regardless of its path or id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFile {
    pub path: String,
    #[serde(default)]
    pub oid: Oid,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub mode: u32,
}

impl RawFile {
    /// Mapped side, or `None` when the engine reports no file.
    pub fn into_file_ref(self) -> DeltaResult<Option<FileRef>> {
        if self.mode == ABSENT_MODE {
            return Ok(None);
        }
        let mode = FileMode::from_bits(self.mode)?;
        Ok(Some(
            FileRef::new(self.path, self.oid)
                .with_size(self.size)
                .with_mode(mode),
        ))
    }
}

/// Raw hunk boundaries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHunk {
    pub old_start: u32,
    pub old_lines: u32,
    pub new_start: u32,
    pub new_lines: u32,
    #[serde(default)]
    pub header: Option<String>,
}

impl From<RawHunk> for Hunk {
    fn from(raw: RawHunk) -> Self {
        Self {
            old_start: raw.old_start,
            old_count: raw.old_lines,
            new_start: raw.new_start,
            new_count: raw.new_lines,
            header: raw.header,
        }
    }
}

/// One change record from the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDelta {
    /// Raw `git_delta_t` code.
    pub status: u32,
    pub old_file: RawFile,
    pub new_file: RawFile,
    #[serde(default)]
    pub hunks: Vec<RawHunk>,
}

impl RawDelta {
    /// Map and validate into a [`DeltaRecord`].
    pub fn into_record(self) -> DeltaResult<DeltaRecord> {
        let kind = DeltaKind::from_code(self.status)?;
        let old_file = self.old_file.into_file_ref()?;
        let new_file = self.new_file.into_file_ref()?;
        let hunks = self.hunks.into_iter().map(Hunk::from).collect();
        DeltaRecord::build(old_file, new_file, kind, hunks)
    }
}

impl TryFrom<RawDelta> for DeltaRecord {
    type Error = crate::error::DeltaError;

    fn try_from(raw: RawDelta) -> Result<Self, Self::Error> {
        raw.into_record()
    }
}

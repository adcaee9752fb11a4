//! Diff delta model for MiniGit.
//!
//! Turns the raw change records produced by a diff engine into validated,
//! immutable values that UI and CLI layers can query without re-checking
//! anything. Computing diffs is the engine's job; this crate only models and
//! validates what the engine reports.
//!
//! # Key Types
//!
//! - [`DeltaRecord`] -- One file-pair change: old side, new side, kind, hunks
//! - [`DeltaKind`] -- How a file changed (added, renamed, conflicted, ...)
//! - [`FileRef`] / [`Hunk`] -- A side of the comparison and a changed line range
//! - [`RawDelta`] -- Record as handed over by the diff engine
//! - [`DiffSet`] -- Ordered deltas of one full comparison
//! - [`StatusSnapshot`] -- Branch, staged and unstaged changes, repository state

pub mod config;
pub mod delta;
pub mod diff_set;
pub mod error;
pub mod file;
pub mod hunk;
pub mod kind;
pub mod raw;
pub mod status;

pub use config::{IngestConfig, InvalidDeltaPolicy};
pub use delta::{AffectedPaths, DeltaParts, DeltaRecord};
pub use diff_set::{DiffSet, DiffStats, Ingested, Rejection};
pub use error::{DeltaError, DeltaResult, Side};
pub use file::FileRef;
pub use hunk::{check_hunk_order, Hunk};
pub use kind::{DeltaKind, SideRule};
pub use raw::{RawDelta, RawFile, RawHunk, ABSENT_MODE};
pub use status::{StatusBuilder, StatusSnapshot};

//! Error types for the diff crate.

use std::fmt;

use minigit_types::TypeError;

use crate::kind::{DeltaKind, SideRule};

/// One side of a file comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Old => f.write_str("old"),
            Self::New => f.write_str("new"),
        }
    }
}

/// Errors that can occur while building or ingesting deltas.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeltaError {
    /// A file side is present or absent inconsistently with the delta kind.
    #[error("{kind} delta requires the {side} file to be {expected}")]
    InvalidSideForKind {
        kind: DeltaKind,
        side: Side,
        expected: SideRule,
    },

    /// Hunks were supplied for a kind that represents no content change.
    #[error("{kind} delta must not carry hunks, got {count}")]
    EmptyHunksExpectedButPresent { kind: DeltaKind, count: usize },

    /// The hunk at `index` starts before the previous hunk ends.
    #[error("hunk {index} overlaps or precedes the hunk before it")]
    HunkOverlapOrDisorder { index: usize },

    /// The raw classification code is not a known delta kind.
    #[error("unknown delta kind code {0}")]
    UnknownKind(u32),

    /// A rename whose old and new paths are the same.
    #[error("rename from {path:?} to itself")]
    DegenerateRename { path: String },

    /// A raw file descriptor could not be mapped.
    #[error("invalid file descriptor: {0}")]
    InvalidFile(#[from] TypeError),

    /// Ingestion aborted at the raw record with the given position.
    #[error("delta {index} rejected: {source}")]
    Rejected {
        index: usize,
        #[source]
        source: Box<DeltaError>,
    },

    /// Raw engine output could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience alias for diff results.
pub type DeltaResult<T> = Result<T, DeltaError>;

//! Ordered collection of deltas for one full comparison.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{IngestConfig, InvalidDeltaPolicy};
use crate::delta::DeltaRecord;
use crate::error::{DeltaError, DeltaResult};
use crate::kind::DeltaKind;
use crate::raw::RawDelta;

/// The deltas of one comparison between two trees, commits or working
/// states, in the order the engine reported them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiffSet {
    deltas: Vec<DeltaRecord>,
}

/// A raw record that ingestion skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    /// Position of the record in the raw input.
    pub index: usize,
    pub error: DeltaError,
}

/// Result of [`DiffSet::ingest`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ingested {
    pub set: DiffSet,
    /// Empty unless the policy is [`InvalidDeltaPolicy::Skip`].
    pub rejected: Vec<Rejection>,
}

/// Summary counts over a [`DiffSet`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub files_changed: usize,
    pub lines_changed: u64,
    pub by_kind: BTreeMap<DeltaKind, usize>,
}

impl DiffStats {
    pub fn count(&self, kind: DeltaKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}

impl DiffSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap records that are already validated.
    pub fn from_records(deltas: Vec<DeltaRecord>) -> Self {
        Self { deltas }
    }

    /// Map and validate raw engine records.
    ///
    /// Records whose kind is excluded by `config` are validated and then
    /// dropped. Invalid records either abort ingestion with
    /// [`DeltaError::Rejected`] or are skipped, depending on
    /// [`IngestConfig::on_invalid`].
    pub fn ingest<I>(raw: I, config: &IngestConfig) -> DeltaResult<Ingested>
    where
        I: IntoIterator<Item = RawDelta>,
    {
        let mut deltas = Vec::new();
        let mut rejected = Vec::new();
        let mut filtered = 0usize;

        for (index, record) in raw.into_iter().enumerate() {
            match record.into_record() {
                Ok(delta) if config.includes(delta.kind()) => deltas.push(delta),
                Ok(_) => filtered += 1,
                Err(error) => match config.on_invalid {
                    InvalidDeltaPolicy::Abort => {
                        return Err(DeltaError::Rejected {
                            index,
                            source: Box::new(error),
                        });
                    }
                    InvalidDeltaPolicy::Skip => {
                        warn!(index, error = %error, "skipping invalid delta");
                        rejected.push(Rejection { index, error });
                    }
                },
            }
        }

        debug!(
            kept = deltas.len(),
            filtered,
            rejected = rejected.len(),
            "ingested diff"
        );

        Ok(Ingested {
            set: Self { deltas },
            rejected,
        })
    }

    /// Decode a JSON array of raw records and [`ingest`](Self::ingest) it.
    pub fn ingest_json(json: &str, config: &IngestConfig) -> DeltaResult<Ingested> {
        let raw: Vec<RawDelta> =
            serde_json::from_str(json).map_err(|e| DeltaError::Decode(e.to_string()))?;
        Self::ingest(raw, config)
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeltaRecord> {
        self.deltas.iter()
    }

    pub fn get(&self, index: usize) -> Option<&DeltaRecord> {
        self.deltas.get(index)
    }

    pub fn as_slice(&self) -> &[DeltaRecord] {
        &self.deltas
    }

    /// First delta touching `path` on either side.
    pub fn find(&self, path: &str) -> Option<&DeltaRecord> {
        self.deltas.iter().find(|d| {
            let paths = d.affected_paths();
            paths.old_path == Some(path) || paths.new_path == Some(path)
        })
    }

    /// Deltas of one kind, in order.
    pub fn of_kind(&self, kind: DeltaKind) -> impl Iterator<Item = &DeltaRecord> + '_ {
        self.deltas.iter().filter(move |d| d.kind() == kind)
    }

    pub fn total_lines_changed(&self) -> u64 {
        self.deltas.iter().map(DeltaRecord::total_lines_changed).sum()
    }

    pub fn stats(&self) -> DiffStats {
        let mut by_kind = BTreeMap::new();
        for delta in &self.deltas {
            *by_kind.entry(delta.kind()).or_insert(0) += 1;
        }
        DiffStats {
            files_changed: self.deltas.len() - by_kind.get(&DeltaKind::Unmodified).unwrap_or(&0),
            lines_changed: self.total_lines_changed(),
            by_kind,
        }
    }
}

impl<'a> IntoIterator for &'a DiffSet {
    type Item = &'a DeltaRecord;
    type IntoIter = std::slice::Iter<'a, DeltaRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.deltas.iter()
    }
}

impl IntoIterator for DiffSet {
    type Item = DeltaRecord;
    type IntoIter = std::vec::IntoIter<DeltaRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.deltas.into_iter()
    }
}

impl FromIterator<DeltaRecord> for DiffSet {
    fn from_iter<T: IntoIterator<Item = DeltaRecord>>(iter: T) -> Self {
        Self {
            deltas: iter.into_iter().collect(),
        }
    }
}

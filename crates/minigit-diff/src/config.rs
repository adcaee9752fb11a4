use serde::{Deserialize, Serialize};

use crate::error::{DeltaError, DeltaResult};
use crate::kind::DeltaKind;

/// What ingestion does with a raw record that fails validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidDeltaPolicy {
    /// Fail the whole ingestion on the first invalid record.
    #[default]
    Abort,
    /// Log the record, remember the rejection and carry on.
    Skip,
}

/// Configuration for turning raw engine output into a [`DiffSet`](crate::DiffSet).
///
/// The `include_*` switches mirror libgit2's `GIT_DIFF_INCLUDE_UNMODIFIED`,
/// `GIT_DIFF_INCLUDE_IGNORED` and `GIT_DIFF_INCLUDE_UNTRACKED` options:
/// records of those kinds are validated and then dropped unless enabled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub on_invalid: InvalidDeltaPolicy,
    pub include_unmodified: bool,
    pub include_ignored: bool,
    pub include_untracked: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            on_invalid: InvalidDeltaPolicy::Abort,
            include_unmodified: false,
            include_ignored: false,
            include_untracked: true,
        }
    }
}

impl IngestConfig {
    /// Abort on the first invalid record.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Skip invalid records and keep every kind.
    pub fn lenient() -> Self {
        Self {
            on_invalid: InvalidDeltaPolicy::Skip,
            include_unmodified: true,
            include_ignored: true,
            include_untracked: true,
        }
    }

    /// Parse from TOML. Missing keys take their default values.
    pub fn from_toml_str(s: &str) -> DeltaResult<Self> {
        toml::from_str(s).map_err(|e| DeltaError::Config(e.to_string()))
    }

    /// Whether deltas of `kind` are kept in the resulting set.
    pub fn includes(&self, kind: DeltaKind) -> bool {
        match kind {
            DeltaKind::Unmodified => self.include_unmodified,
            DeltaKind::Ignored => self.include_ignored,
            DeltaKind::Untracked => self.include_untracked,
            _ => true,
        }
    }
}

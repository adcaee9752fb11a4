use minigit_types::{FileMode, Oid};
use serde::{Deserialize, Serialize};

/// One side (old or new) of a file comparison.
///
/// A side that does not exist is modelled as `Option::<FileRef>::None` by
/// the owning [`DeltaRecord`](crate::DeltaRecord); a `FileRef` with size 0 is
/// a present, empty file.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileRef {
    path: String,
    oid: Oid,
    size: u64,
    mode: FileMode,
}

impl FileRef {
    /// A regular, empty file at `path` with the given content id.
    pub fn new(path: impl Into<String>, oid: Oid) -> Self {
        Self {
            path: path.into(),
            oid,
            size: 0,
            mode: FileMode::Blob,
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    pub fn with_mode(mut self, mode: FileMode) -> Self {
        self.mode = mode;
        self
    }

    /// Path relative to the repository root.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn oid(&self) -> &Oid {
        &self.oid
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }

    pub fn is_executable(&self) -> bool {
        self.mode.is_executable()
    }

    /// Returns `true` if both sides carry the same content.
    pub fn same_content(&self, other: &FileRef) -> bool {
        self.oid == other.oid
    }
}

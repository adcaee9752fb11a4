use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Mode of one side of a file comparison.
///
/// Mirrors the file modes of libgit2's `git_filemode_t`. libgit2 also uses
/// mode 0 (`GIT_FILEMODE_UNREADABLE`) for a side that does not exist; that
/// value is not a file mode and [`FileMode::from_bits`] rejects it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileMode {
    /// Subtree / directory (0o040000).
    Tree,
    /// Normal file (0o100644).
    #[default]
    Blob,
    /// Executable file (0o100755).
    BlobExecutable,
    /// Symbolic link (0o120000).
    Link,
    /// Submodule commit (0o160000).
    Commit,
}

impl FileMode {
    /// Octal mode value.
    pub const fn bits(&self) -> u32 {
        match self {
            Self::Tree => 0o040000,
            Self::Blob => 0o100644,
            Self::BlobExecutable => 0o100755,
            Self::Link => 0o120000,
            Self::Commit => 0o160000,
        }
    }

    /// Parse from an octal mode value.
    pub fn from_bits(bits: u32) -> Result<Self, TypeError> {
        match bits {
            0o040000 => Ok(Self::Tree),
            0o100644 => Ok(Self::Blob),
            0o100755 => Ok(Self::BlobExecutable),
            0o120000 => Ok(Self::Link),
            0o160000 => Ok(Self::Commit),
            other => Err(TypeError::UnknownFileMode(other)),
        }
    }

    pub fn is_executable(&self) -> bool {
        matches!(self, Self::BlobExecutable)
    }

    /// Regular or executable file content.
    pub fn is_blob(&self) -> bool {
        matches!(self, Self::Blob | Self::BlobExecutable)
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06o}", self.bits())
    }
}

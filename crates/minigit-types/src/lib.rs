//! Foundation types for MiniGit.
//!
//! Plain value types mirrored from libgit2 that every other MiniGit crate
//! builds on. None of them perform I/O.
//!
//! # Key Types
//!
//! - [`Oid`] -- 20-byte git object identifier
//! - [`FileMode`] -- Mode of one side of a file comparison (`git_filemode_t`)
//! - [`RepositoryState`] -- In-progress operation of a repository (`git_repository_state_t`)

pub mod error;
pub mod mode;
pub mod oid;
pub mod state;

pub use error::TypeError;
pub use mode::FileMode;
pub use oid::Oid;
pub use state::RepositoryState;

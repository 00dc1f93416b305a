//! An in-memory model of a version-control repository: a named, singly linked
//! log of commits ordered from most recent to oldest.
//!
//! A [`CommitLog`] supports recording commits, inspecting and rendering
//! history, unlinking individual commits, and merging two logs into one chain
//! ordered by descending timestamp via [`CommitLog::synchronize`].
//!
//! Commit ids are minted from a process-wide sequence, so ids stay unique
//! across every log in the process.
//!
//! ```
//! use commitlog::CommitLog;
//!
//! let mut log = CommitLog::new("repo")?;
//! let first = log.commit("init");
//! let second = log.commit("add feature");
//!
//! assert_eq!(log.head(), Some(&second));
//! assert_eq!(log.len(), 2);
//! assert!(log.contains(first.as_ref()));
//! # Ok::<(), commitlog::CommitLogError>(())
//! ```

pub mod artifacts;
pub mod errors;

pub use artifacts::commit::Commit;
pub use artifacts::commit_id::CommitId;
pub use artifacts::commit_log::CommitLog;
pub use artifacts::rev_walk::RevWalk;
pub use errors::{CommitLogError, Result};

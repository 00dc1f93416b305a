//! Commit identifiers and the process-wide id sequence
//!
//! Ids are the decimal rendering of a monotonically increasing counter shared
//! by every log in the process, so no two commits ever receive the same id,
//! even across independent logs.

use std::sync::atomic::{AtomicU64, Ordering};

static COMMIT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Unique identifier of a commit
///
/// Assigned from the process-wide sequence when the commit is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Mint the next id from the process-wide sequence
    pub(crate) fn next() -> Self {
        CommitId(COMMIT_SEQUENCE.fetch_add(1, Ordering::Relaxed).to_string())
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reset the id sequence so the next commit receives id `0`
///
/// Intended for deterministic test setups only. Not safe while other threads
/// are creating commits: ids minted concurrently with a reset may repeat.
pub fn reset_sequence() {
    COMMIT_SEQUENCE.store(0, Ordering::Relaxed);
}

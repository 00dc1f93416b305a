//! A named, in-memory log of commits
//!
//! The log owns a singly linked chain of commits ordered from most recent
//! (the head) to oldest. Commits enter the chain only by being prepended via
//! [`CommitLog::commit`], so each chain is always sorted by descending
//! timestamp. That ordering is what lets [`CommitLog::synchronize`] merge two
//! logs with a single stable two-list splice instead of a re-sort.
//!
//! ## Debug Logging
//!
//! The synchronize walk logs each splice when the `debug_merge` feature flag
//! is enabled (`cargo test --features debug_merge`).

use crate::artifacts::commit::Commit;
use crate::artifacts::commit_id::CommitId;
use crate::artifacts::rev_walk::RevWalk;
use crate::errors::{CommitLogError, Result};
use std::fmt;

/// Macro for debug logging that is enabled with the debug_merge feature flag
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_merge")]
        {
            eprintln!($($arg)*);
        }
    };
}

/// A mutable, append-only history of commits
///
/// `size` always equals the number of commits reachable from `head`; every
/// operation that links or unlinks a commit keeps the two in step.
#[derive(Debug)]
pub struct CommitLog {
    name: String,
    head: Option<Box<Commit>>,
    size: usize,
}

impl CommitLog {
    /// Create an empty log with the given name
    ///
    /// # Errors
    ///
    /// Returns [`CommitLogError::InvalidArgument`] if the name is empty.
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(CommitLogError::InvalidArgument(
                "log name must not be empty".to_string(),
            ));
        }

        Ok(CommitLog {
            name: name.to_string(),
            head: None,
            size: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the most recent commit, or `None` when the log is empty
    pub fn head(&self) -> Option<&CommitId> {
        self.head.as_deref().map(Commit::id)
    }

    /// Number of commits currently reachable from the head
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Walk the chain from the head toward the oldest commit
    pub fn iter(&self) -> RevWalk<'_> {
        RevWalk::new(self.head.as_deref())
    }

    /// Whether a commit with the given id is reachable from the head
    pub fn contains(&self, target_id: &str) -> bool {
        self.iter().any(|commit| commit.id().as_ref() == target_id)
    }

    /// Render up to `n` of the most recent commits, one per line, newest first
    ///
    /// An empty log renders as the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`CommitLogError::InvalidArgument`] if `n` is zero.
    pub fn history(&self, n: usize) -> Result<String> {
        if n == 0 {
            return Err(CommitLogError::InvalidArgument(
                "history length must be positive".to_string(),
            ));
        }

        Ok(self
            .iter()
            .take(n)
            .map(|commit| format!("{commit}\n"))
            .collect())
    }

    /// Record a new commit with the given message and return its id
    ///
    /// The commit receives the next id from the process-wide sequence and the
    /// current wall-clock timestamp, and becomes the new head.
    pub fn commit(&mut self, message: &str) -> CommitId {
        let commit = Box::new(Commit::new(message, self.head.take()));
        let id = commit.id().clone();
        self.head = Some(commit);
        self.size += 1;

        id
    }

    /// Unlink the commit with the given id, splicing its predecessor to its
    /// successor
    ///
    /// Returns `false` and leaves the chain untouched when no commit matches.
    /// Ids are unique by construction, so at most one commit is removed.
    pub fn drop_commit(&mut self, target_id: &str) -> bool {
        // The head has no predecessor to splice, so it swaps out directly
        if self
            .head
            .as_ref()
            .is_some_and(|commit| commit.id().as_ref() == target_id)
        {
            let mut removed = self.head.take();
            self.head = removed.as_mut().and_then(|commit| commit.previous.take());
            self.size -= 1;
            return true;
        }

        let mut current = self.head.as_deref_mut();
        while let Some(commit) = current {
            let next_matches = commit
                .previous
                .as_ref()
                .is_some_and(|older| older.id().as_ref() == target_id);

            if next_matches {
                let mut removed = commit.previous.take();
                commit.previous = removed.as_mut().and_then(|older| older.previous.take());
                self.size -= 1;
                return true;
            }

            current = commit.previous.as_deref_mut();
        }

        false
    }

    /// Merge `other`'s entire chain into this log and leave `other` empty
    ///
    /// Both chains are individually sorted by descending timestamp, so this is
    /// a stable two-list merge: the result interleaves both chains newest
    /// first while preserving each chain's relative order. The comparison is
    /// strict, so commits with equal timestamps keep this log's commit ahead
    /// of `other`'s.
    pub fn synchronize(&mut self, other: &mut CommitLog) {
        debug_log!(
            "synchronize: merging '{}' ({} commits) into '{}' ({} commits)",
            other.name,
            other.size,
            self.name,
            self.size
        );

        self.size += other.size;
        other.size = 0;

        let mut ours = self.head.take();
        let mut theirs = other.head.take();

        let mut merged: Option<Box<Commit>> = None;
        let mut cursor = &mut merged;

        loop {
            match (ours.take(), theirs.take()) {
                (Some(ours_next), Some(mut theirs_next))
                    if ours_next.timestamp_millis() < theirs_next.timestamp_millis() =>
                {
                    debug_log!(
                        "synchronize: splicing {} in front of {}",
                        theirs_next.id(),
                        ours_next.id()
                    );
                    ours = Some(ours_next);
                    theirs = theirs_next.previous.take();
                    cursor = &mut cursor.insert(theirs_next).previous;
                }
                (Some(mut ours_next), remaining) => {
                    theirs = remaining;
                    ours = ours_next.previous.take();
                    cursor = &mut cursor.insert(ours_next).previous;
                }
                (None, remainder) => {
                    // Whichever chain is left is already in order; it attaches
                    // at the tail wholesale
                    *cursor = remainder;
                    break;
                }
            }
        }

        self.head = merged;
    }
}

impl fmt::Display for CommitLog {
    /// `"{name} - No commits"` when empty, else
    /// `"{name} - Current head: {commit}"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.head.as_deref() {
            None => write!(f, "{} - No commits", self.name),
            Some(head) => write!(f, "{} - Current head: {}", self.name, head),
        }
    }
}

impl<'l> IntoIterator for &'l CommitLog {
    type Item = &'l Commit;
    type IntoIter = RevWalk<'l>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Drop for CommitLog {
    // Unlink iteratively so dropping a long chain cannot overflow the stack
    // with one nested Box drop per commit
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut commit) = current {
            current = commit.previous.take();
        }
    }
}

//! A single commit in a log
//!
//! A commit records a message, a unique id, and the wall-clock time it was
//! created at, and owns the link to the commit made immediately before it.
//! Timestamps are kept at millisecond precision; commits created within the
//! same millisecond compare equal during [`synchronize`].
//!
//! [`synchronize`]: crate::CommitLog::synchronize

use crate::artifacts::commit_id::CommitId;
use chrono::{DateTime, Utc};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d at %H:%M:%S %Z";

/// An immutable commit record linked to its predecessor
///
/// The `previous` link owns the rest of the chain: every commit is reachable
/// from exactly one head or one newer commit, so splicing during drop and
/// synchronize is a plain ownership move.
#[derive(Debug)]
pub struct Commit {
    id: CommitId,
    timestamp_millis: i64,
    message: String,
    pub(crate) previous: Option<Box<Commit>>,
}

impl Commit {
    /// Create a commit with a freshly minted id and the current wall-clock time
    pub(crate) fn new(message: &str, previous: Option<Box<Commit>>) -> Self {
        Commit {
            id: CommitId::next(),
            timestamp_millis: Utc::now().timestamp_millis(),
            message: message.to_string(),
            previous,
        }
    }

    /// Create a commit at an explicit timestamp, for merge ordering tests
    #[cfg(test)]
    pub(crate) fn at(message: &str, timestamp_millis: i64, previous: Option<Box<Commit>>) -> Self {
        Commit {
            id: CommitId::next(),
            timestamp_millis,
            message: message.to_string(),
            previous,
        }
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Creation time in milliseconds since the Unix epoch
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }

    /// The next older commit in the chain, if any
    pub fn previous(&self) -> Option<&Commit> {
        self.previous.as_deref()
    }
}

impl std::fmt::Display for Commit {
    /// Renders as `"{id} at {yyyy-MM-dd at HH:mm:ss tz}: {message}"`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let when = DateTime::<Utc>::from_timestamp_millis(self.timestamp_millis)
            .unwrap_or(DateTime::UNIX_EPOCH);

        write!(
            f,
            "{} at {}: {}",
            self.id,
            when.format(TIMESTAMP_FORMAT),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_id_timestamp_and_message() {
        let commit = Commit::at("init", 0, None);

        pretty_assertions::assert_eq!(
            commit.to_string(),
            format!("{} at 1970-01-01 at 00:00:00 UTC: init", commit.id())
        );
    }

    #[test]
    fn minted_ids_are_unique() {
        let first = Commit::new("a", None);
        let second = Commit::new("b", None);

        assert_ne!(first.id(), second.id());
    }
}

//! Chain traversal from the head toward the oldest commit
//!
//! The walk borrows the log and yields commits newest-first; `contains`,
//! `history`, and the log's `Display` rendering are all built on it.

use crate::artifacts::commit::Commit;

#[derive(Clone)]
pub struct RevWalk<'l> {
    current: Option<&'l Commit>,
}

impl<'l> RevWalk<'l> {
    pub(crate) fn new(head: Option<&'l Commit>) -> Self {
        RevWalk { current: head }
    }
}

impl<'l> Iterator for RevWalk<'l> {
    type Item = &'l Commit;

    fn next(&mut self) -> Option<Self::Item> {
        let commit = self.current?;
        // Move to the previous commit for the next iteration
        self.current = commit.previous();
        Some(commit)
    }
}

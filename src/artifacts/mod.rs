//! Commit log data structures and algorithms
//!
//! - `commit`: the commit record and its rendering
//! - `commit_id`: commit identifiers and the process-wide id sequence
//! - `commit_log`: the log itself (commit, drop, history, synchronize)
//! - `rev_walk`: newest-first traversal of a commit chain

pub mod commit;
pub mod commit_id;
pub mod commit_log;
pub mod rev_walk;

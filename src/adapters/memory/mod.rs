//! In-memory adapters for tests and embedders without a database.
//!
//! Identities are handed out from a per-repository counter starting at 1 and
//! are never reused, mirroring a database sequence. Records are kept in
//! ordered maps so list queries return ascending identifiers.

mod developer;
mod project;
mod task;

pub use developer::InMemoryDeveloperRepository;
pub use project::InMemoryProjectRepository;
pub use task::InMemoryTaskRepository;

use crate::ports::RepositoryError;

/// Monotonic identity source.
#[derive(Debug, Default)]
struct IdSequence {
    last: i64,
}

impl IdSequence {
    /// Returns the next identity value.
    const fn next_value(&mut self) -> i64 {
        self.last += 1;
        self.last
    }
}

/// Maps a poisoned lock into a persistence error.
fn lock_poisoned(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Converts a collection length into a repository count.
fn count_of(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}

//! Git commit as seen by the history walk
//!
//! Commits are read from `git log` rather than from the object database, so
//! only the fields the rollback needs are kept:
//! - The commit's own object ID
//! - Parent commit ID(s), in order (first parent is the mainline)
//! - The raw commit message
//!
//! ## Format
//!
//! Each history record is produced with `--format=%H %P%n%B`:
//! ```text
//! <commit-sha> [<parent-sha> ...]
//! <commit message>
//! ```

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;

/// Git commit
///
/// Holds the identity, ancestry and message of a single commit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// The commit's object ID
    oid: ObjectId,
    /// Parent commit IDs (empty for a root commit, multiple for merge commits)
    parents: Vec<ObjectId>,
    /// Raw commit message, subject and body
    message: String,
}

impl Commit {
    /// Create a new commit
    ///
    /// # Arguments
    ///
    /// * `oid` - The commit's object ID
    /// * `parents` - Parent commit IDs, mainline first
    /// * `message` - Raw commit message
    pub fn new(oid: ObjectId, parents: Vec<ObjectId>, message: String) -> Self {
        Commit {
            oid,
            parents,
            message,
        }
    }

    /// Parse a single `git log` record
    ///
    /// The first line carries the commit ID followed by its parent IDs separated
    /// by spaces; everything after the first newline is the message.
    pub fn parse_log_record(record: &str) -> anyhow::Result<Self> {
        let (header, message) = record.split_once('\n').unwrap_or((record, ""));

        let mut ids = header.split_whitespace();
        let oid = ids
            .next()
            .context("Invalid log record: missing commit id")?;
        let oid = ObjectId::try_from(oid).context("Invalid log record: invalid commit id")?;

        let parents = ids
            .map(ObjectId::try_from)
            .collect::<anyhow::Result<Vec<_>>>()
            .with_context(|| format!("Invalid log record: invalid parent of {}", oid))?;

        Ok(Self::new(oid, parents, message.to_string()))
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    /// Abbreviated commit ID used in progress output
    pub fn short_oid(&self) -> String {
        self.oid.to_short_oid()
    }

    /// Get the full commit message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// First parent: the branch the commit was made on
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}

//! Revert commit detection
//!
//! `git revert` writes a recognisable message:
//!
//! ```text
//! Revert "<original subject>"
//!
//! This reverts commit <sha>.
//! ```
//!
//! and, for a merge reverted with `-m`:
//!
//! ```text
//! Revert "<original subject>"
//!
//! This reverts commit <sha>, reversing
//! changes made to <sha>.
//! ```
//!
//! Classification only looks at that shape; the rest of the message is
//! ignored.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::revert::{MERGE_REVERT_REGEX, REVERT_REGEX};
use regex::Regex;

/// What a revert commit undid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevertTarget {
    /// Revert of a regular commit
    Commit(ObjectId),
    /// Revert of a merge commit, relative to the mainline it was merged into
    Merge {
        reverted: ObjectId,
        changes_made_to: ObjectId,
    },
}

impl RevertTarget {
    /// The commit whose changes were undone
    pub fn reverted(&self) -> &ObjectId {
        match self {
            RevertTarget::Commit(reverted) => reverted,
            RevertTarget::Merge { reverted, .. } => reverted,
        }
    }
}

/// Matches commit messages against the two revert message shapes
///
/// The merge form is tried first so that its second digest is captured too.
#[derive(Debug, Clone)]
pub struct RevertClassifier {
    merge_revert: Regex,
    revert: Regex,
}

impl RevertClassifier {
    pub fn new() -> anyhow::Result<Self> {
        Ok(RevertClassifier {
            merge_revert: Regex::new(MERGE_REVERT_REGEX)?,
            revert: Regex::new(REVERT_REGEX)?,
        })
    }

    /// Returns the reverted commit if `message` is a revert message
    pub fn classify(&self, message: &str) -> Option<RevertTarget> {
        if let Some(caps) = self.merge_revert.captures(message) {
            let reverted = ObjectId::try_from(&caps[1]).ok()?;
            let changes_made_to = ObjectId::try_from(&caps[2]).ok()?;
            return Some(RevertTarget::Merge {
                reverted,
                changes_made_to,
            });
        }

        let caps = self.revert.captures(message)?;
        ObjectId::try_from(&caps[1]).ok().map(RevertTarget::Commit)
    }
}

//! Revert walk
//!
//! - `classifier`: recognises commits that are themselves reverts
//! - `walker`: per-commit decisions and the walk down to the stop commit

pub mod classifier;
pub mod walker;

/// `git revert` message of a merge reverted relative to its first parent
pub const MERGE_REVERT_REGEX: &str = r#"^Revert ".*"\s*This reverts commit ([0-9a-f]{40}), reversing\s*changes made to ([0-9a-f]{40})."#;
/// `git revert` message of a regular commit
pub const REVERT_REGEX: &str = r#"^Revert ".*"\s*This reverts commit ([0-9a-f]{40})."#;

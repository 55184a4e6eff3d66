//! Reverts the commits of a git branch from its head down to a tag.
//!
//! Commits that are themselves reverts, and the commits they undid, are
//! skipped. Merges are reverted relative to their first parent, which also
//! undoes the commits they brought in.

pub mod areas;
pub mod artifacts;
pub mod commands;

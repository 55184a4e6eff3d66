//! Git data structures and algorithms
//!
//! - `log`: Commit history traversal
//! - `objects`: Object IDs and commits
//! - `revert`: Revert detection and the revert walk

pub mod log;
pub mod objects;
pub mod revert;

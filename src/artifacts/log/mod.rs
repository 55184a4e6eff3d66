//! Commit history traversal
//!
//! History is streamed from `git log` newest first and parsed lazily, so the
//! walk never reads further back than the tag it stops at.

pub mod rev_list;

//! Core repository components
//!
//! - `git`: access to the repository through the `git` executable
//! - `repository`: the repository being rolled back and its progress output

pub mod git;
pub mod repository;

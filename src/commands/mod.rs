//! Command implementations
//!
//! - `porcelain`: User-facing commands built on top of the `git` executable

pub mod porcelain;

//! Git object types used by the rollback walk
//!
//! Only commits are needed: the walk reads their id, parents and message and
//! never touches trees or blobs.
//!
//! - **ObjectId**: validated 40-character SHA-1 hex string
//! - **Commit**: id, ordered parent ids and raw message

pub mod commit;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated hash shown in progress output
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;

//! Data models for the forum backend.
//!
//! Read models tolerate partial documents; the comment request is the only
//! write model and is validated before it reaches the store.

mod comment;
mod date;
mod seed;
mod subject;
mod topic;

pub use comment::*;
pub use date::*;
pub use seed::*;
pub use subject::*;
pub use topic::*;

//! Domain types for toolsite
//!
//! - ToolRecord: display metadata for one tool
//! - BuildManifest: the ordered records of one collection pass
//! - CommitEntry: one entry of git history for the colophon

pub mod commit;
pub mod manifest;
pub mod tool_record;

pub use commit::CommitEntry;
pub use manifest::BuildManifest;
pub use tool_record::{DescriptionSource, FALLBACK_DESCRIPTION, ToolRecord};

//! Foundation types shared by every layer of the crate:
//! - [`FileId`] - Lightweight document identifiers
//! - [`TextRange`], [`TextSize`] - Source positions
//!
//! This module has NO dependencies on other importfix modules.

mod file_id;

pub use file_id::FileId;
pub use text_size::{TextRange, TextSize};

// Re-export text-size for hosts that construct ranges themselves
pub use text_size;

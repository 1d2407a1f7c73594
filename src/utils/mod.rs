//! Utility functions and data structures.
//!
//! ## Modules
//!
//! - [`app_data`] - Application config in the per-user data directory
//! - [`progress`] - Progress bar for indexing runs
//! - [`text`] - Line extraction, binary sniffing, lossy decoding
//! - [`walker`] - Recursive file enumeration under an indexing root

pub mod app_data;
pub mod progress;
pub mod text;
pub mod walker;

pub use app_data::*;
pub use progress::*;
pub use text::*;
pub use walker::*;

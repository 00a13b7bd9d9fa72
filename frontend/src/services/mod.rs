//! Browser and backend services.
//!
//! # Services
//!
//! - [`classify`] - Multipart upload to the classification endpoint, health probe
//! - [`file`] - Reading picked files into [`neuroscan::SelectedFile`]

pub mod classify;
pub mod file;

pub use classify::*;
pub use file::*;

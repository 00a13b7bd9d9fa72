//! UI Components for the NeuroScan application.
//!
//! # Layout Components
//! - [`Header`] - Title and service status badge
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadCard`] - File picker, preview and submit button
//! - [`ResultsPanel`] - Busy indicator, error and prediction display

mod header;
mod hero;
mod upload;
mod results;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use results::*;
pub use footer::*;

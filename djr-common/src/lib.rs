//! # DJR Common Library
//!
//! Shared code for the DJR song request relay:
//! - Error taxonomy for the search/submit pipeline
//! - Configuration resolution (destination form URL)
//! - Normalized track and requester models
//! - Destination form field mapping
//! - Playlist document entry formatting
//! - Stale search suppression utility

pub mod config;
pub mod doc_entry;
pub mod error;
pub mod fields;
pub mod latest;
pub mod model;

pub use error::{Error, Result};
pub use fields::FormField;

//! confsplit - Split an `isw.conf` configuration file into one file per
//! bracketed section.
//!
//! The input is scanned once, line by line. Every line starting with
//! `[` starts a new section; the section's header line and body lines
//! are written verbatim to `<section>.conf` in the working directory.
//!
//! # Example
//!
//! ```
//! use confsplit::config::section_file_name;
//!
//! assert_eq!(section_file_name("db"), "db.conf");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: fixed input filename and output naming
//! - [`error`]: error types and Result alias
//! - [`splitter`]: the linear scan that routes lines to section files
//! - [`cli`]: the zero-argument run entry point

pub mod cli;
pub mod config;
pub mod error;
pub mod splitter;

// Re-export the main operation and commonly used items
pub use error::{Result, SplitError};
pub use splitter::{split, SplitReport};

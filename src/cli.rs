//! Zero-argument entry point used by the binary.
//!
//! There is deliberately no argument parsing: the input filename is
//! fixed and output files land next to it in the current working
//! directory.

use std::path::Path;

use crate::config::INPUT_FILE;
use crate::error::Result;
use crate::splitter::split;

/// Run the splitter on `isw.conf` in the current working directory.
pub fn run() -> Result<()> {
    let report = split(Path::new(INPUT_FILE), Path::new("."))?;
    tracing::info!(sections = report.outputs.len(), "split complete");
    Ok(())
}

//! Section splitter: routes each bracketed section of a config file to
//! its own output file.
//!
//! The input is scanned linearly, line by line. A line starting with
//! `[` opens a new output file named after the header text; every
//! following line is appended to that file until the next header or end
//! of input. Lines are handled as raw bytes so each output file holds
//! the exact byte sequence of its section.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::config::section_file_name;
use crate::error::{Result, SplitError};

/// Paths written during a split, in the order their sections were opened.
///
/// A duplicated section name appears once per header occurrence; the
/// later occurrence truncates the file the earlier one wrote.
#[derive(Debug, Default)]
pub struct SplitReport {
    pub outputs: Vec<PathBuf>,
}

/// Split `input` into per-section files inside `out_dir`.
///
/// Each line beginning with `[` closes the current output file (if any)
/// and opens `<out_dir>/<section>.conf`, truncating it if it already
/// exists. The header line itself and all lines up to the next header
/// are written to that file unmodified. Lines before the first header
/// are discarded.
///
/// # Errors
/// Fails on the first I/O error encountered; output files written
/// before the failure are left on disk.
pub fn split(input: &Path, out_dir: &Path) -> Result<SplitReport> {
    let file = File::open(input).map_err(|source| SplitError::InputOpen {
        path: input.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    // The single piece of mutable state: the currently open output
    // file, with its path kept for error context.
    let mut current: Option<(PathBuf, File)> = None;
    let mut report = SplitReport::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| SplitError::InputRead {
                path: input.to_path_buf(),
                source,
            })?;
        if n == 0 {
            break;
        }

        if line.first() == Some(&b'[') {
            let name = derive_section_name(&line);
            let path = out_dir.join(section_file_name(&name));
            tracing::debug!(section = %name, path = %path.display(), "opening section output");

            let out = File::create(&path).map_err(|source| SplitError::OutputCreate {
                path: path.clone(),
                source,
            })?;
            report.outputs.push(path.clone());

            // Replacing the slot drops the previous handle, closing it.
            current = Some((path, out));
        }

        if let Some((path, out)) = current.as_mut() {
            out.write_all(&line)
                .map_err(|source| SplitError::OutputWrite {
                    path: path.clone(),
                    source,
                })?;
        }
        // No section open yet: the line is discarded.
    }

    // The last output file, if any, is closed when `current` goes out
    // of scope here.
    Ok(report)
}

/// Derive a section name from a header line.
///
/// Strips the trailing newline (`\n` or `\r\n`), then all leading and
/// trailing `[` and `]` characters. A header without a closing bracket
/// still yields a name; an empty pair of brackets yields an empty name.
/// Invalid UTF-8 is replaced rather than rejected.
fn derive_section_name(line: &[u8]) -> String {
    let text = String::from_utf8_lossy(line);
    text.trim_end_matches(['\n', '\r'])
        .trim_matches(['[', ']'])
        .to_string()
}

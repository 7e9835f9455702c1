//! Configuration constants for the splitter.

/// Fixed name of the input file, looked up in the current working directory.
pub const INPUT_FILE: &str = "isw.conf";

/// Extension given to every per-section output file.
pub const OUTPUT_EXTENSION: &str = "conf";

/// Build the output filename for a section.
///
/// # Examples
/// ```
/// use confsplit::config::section_file_name;
///
/// assert_eq!(section_file_name("db"), "db.conf");
/// assert_eq!(section_file_name(""), ".conf");
/// ```
#[must_use]
pub fn section_file_name(section: &str) -> String {
    format!("{section}.{OUTPUT_EXTENSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_file_name() {
        assert_eq!(section_file_name("CoolerBoost"), "CoolerBoost.conf");
    }

    #[test]
    fn test_section_file_name_empty_section() {
        // An empty section name still produces a (hidden, on Unix) filename.
        assert_eq!(section_file_name(""), ".conf");
    }
}

//! Column-keyed line sorting
//!
//! Sorts lines by a delimited column under one of four comparison modes
//! (lexicographic, numeric, month name, human-readable sizes), with optional
//! reverse order, trailing-space trimming and duplicate removal. A verify
//! mode reports whether input is already ordered instead of sorting it.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;
pub mod config;

pub mod key;
pub mod compare;
pub mod dedup;
pub mod engine;
pub mod check;
pub mod line_io;

// Re-export commonly used types
pub use check::{first_disorder, is_sorted};
pub use config::{ModeFlags, SortConfig, SortConfigBuilder, SortMode, SortOrder};
pub use engine::{sort_lines, LineSorter};
pub use error::{SortError, SortResult};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Result of running the core on a batch of lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Lines in their new order
    Sorted(Vec<String>),
    /// Verify mode: whether the input was already ordered
    Checked(bool),
}

/// Sort `lines`, or only verify their order when `config.check` is set
pub fn run(lines: Vec<String>, config: &SortConfig) -> Outcome {
    if config.check {
        Outcome::Checked(is_sorted(&lines, config))
    } else {
        Outcome::Sorted(sort_lines(lines, config))
    }
}

/// Read, process and write according to `config`, returning the exit code
pub fn sort(config: &SortConfig) -> SortResult<i32> {
    let input = config.input_file.as_deref().map(std::path::Path::new);
    let lines = line_io::read_lines(input)?;
    log::debug!("read {} lines", lines.len());

    match run(lines, config) {
        Outcome::Sorted(sorted) => {
            let output = config.output_file.as_deref().map(std::path::Path::new);
            line_io::write_lines(&sorted, output)?;
            Ok(EXIT_SUCCESS)
        }
        Outcome::Checked(true) => {
            println!("Data is already sorted.");
            Ok(EXIT_SUCCESS)
        }
        Outcome::Checked(false) => {
            println!("Data is not sorted.");
            Ok(EXIT_FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_dispatches_on_check() {
        let lines = owned(&["b", "a"]);
        let config = SortConfig::default();
        assert_eq!(run(lines.clone(), &config), Outcome::Sorted(owned(&["a", "b"])));
        assert_eq!(run(lines, &config.with_check(true)), Outcome::Checked(false));
    }

    #[test]
    fn test_check_ignores_unique() {
        let config = SortConfig::new().with_check(true).with_unique(true);
        assert_eq!(run(owned(&["a", "a", "b"]), &config), Outcome::Checked(true));
    }

    #[test]
    fn test_sort_files_end_to_end() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let input_file = temp_dir.path().join("input.txt");
        let output_file = temp_dir.path().join("output.txt");

        fs::write(&input_file, "3\n1\n2\n1\n")?;

        let config = SortConfigBuilder::new()
            .mode(SortMode::Numeric)
            .unique()
            .reverse()
            .input_file(input_file.to_string_lossy().to_string())
            .output_file(output_file.to_string_lossy().to_string())
            .build()?;

        assert_eq!(sort(&config)?, EXIT_SUCCESS);
        assert_eq!(fs::read_to_string(&output_file)?, "3\n2\n1\n");
        Ok(())
    }

    #[test]
    fn test_check_files_end_to_end() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let input_file = temp_dir.path().join("input.txt");
        fs::write(&input_file, "b\na\n")?;

        let config = SortConfigBuilder::new()
            .check()
            .input_file(input_file.to_string_lossy().to_string())
            .build()?;
        assert_eq!(sort(&config)?, EXIT_FAILURE);

        let reversed = config.with_reverse(true);
        assert_eq!(sort(&reversed)?, EXIT_SUCCESS);
        Ok(())
    }
}

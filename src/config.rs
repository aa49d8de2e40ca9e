//! Configuration management for sort operations

use crate::error::{SortError, SortResult};
use std::str::FromStr;

/// Default column separator
pub const DEFAULT_DELIMITER: &str = " ";

/// Main configuration structure for sort operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// Column to compare on (0-based). Out of range, including negative,
    /// means the whole line is the key.
    pub column: isize,
    /// Resolved comparison mode
    pub mode: SortMode,
    /// Sort in descending order
    pub reverse: bool,
    /// Drop exact duplicate lines
    pub unique: bool,
    /// Strip trailing spaces from every line before anything else
    pub ignore_trailing_space: bool,
    /// Literal column separator
    pub delimiter: String,
    /// Only verify the input order
    pub check: bool,
    /// Input file (stdin when absent)
    pub input_file: Option<String>,
    /// Output file (stdout when absent)
    pub output_file: Option<String>,
    /// Debug logging
    pub debug: bool,
}

/// Sort mode enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Byte-wise string order
    #[default]
    Lexicographic,
    /// Floating point order, lexicographic when either key fails to parse
    Numeric,
    /// Three-letter month abbreviations, unknown names first
    Month,
    /// Numbers with an optional K/M/G/T suffix
    HumanNumeric,
}

/// Sort order enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Independent mode switches as a user may give them.
///
/// Several can be on at once; [`ModeFlags::resolve`] picks the one that wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeFlags {
    pub month: bool,
    pub numeric: bool,
    pub human_numeric: bool,
}

impl ModeFlags {
    /// Month beats numeric, numeric beats human-numeric, and lexicographic
    /// is the fallback.
    pub fn resolve(self) -> SortMode {
        if self.month {
            SortMode::Month
        } else if self.numeric {
            SortMode::Numeric
        } else if self.human_numeric {
            SortMode::HumanNumeric
        } else {
            SortMode::Lexicographic
        }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            column: 0,
            mode: SortMode::Lexicographic,
            reverse: false,
            unique: false,
            ignore_trailing_space: false,
            delimiter: DEFAULT_DELIMITER.to_string(),
            check: false,
            input_file: None,
            output_file: None,
            debug: false,
        }
    }
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: SortMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_column(mut self, column: isize) -> Self {
        self.column = column;
        self
    }

    pub fn with_delimiter(mut self, delimiter: &str) -> Self {
        self.delimiter = delimiter.to_string();
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn with_ignore_trailing_space(mut self, ignore: bool) -> Self {
        self.ignore_trailing_space = ignore;
        self
    }

    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if self.check {
            if let Some(output) = &self.output_file {
                return Err(SortError::conflicting_options(&format!(
                    "--check writes no output, but --output {output} was given"
                )));
            }
        }

        Ok(())
    }

    /// Get the effective sort order
    pub fn sort_order(&self) -> SortOrder {
        if self.reverse {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    /// Check if reading from stdin
    pub fn reading_from_stdin(&self) -> bool {
        matches!(self.input_file.as_deref(), None | Some("-"))
    }

    /// Check if writing to stdout
    pub fn writing_to_stdout(&self) -> bool {
        self.output_file.is_none()
    }
}

impl FromStr for SortMode {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lexicographic" | "text" | "default" => Ok(SortMode::Lexicographic),
            "numeric" | "n" => Ok(SortMode::Numeric),
            "month" | "m" => Ok(SortMode::Month),
            "human-numeric" | "h" => Ok(SortMode::HumanNumeric),
            _ => Err(SortError::parse_error(&format!("unknown sort mode: {s}"))),
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortMode::Lexicographic => "lexicographic",
            SortMode::Numeric => "numeric",
            SortMode::Month => "month",
            SortMode::HumanNumeric => "human-numeric",
        };
        write!(f, "{name}")
    }
}

/// Builder pattern for creating configurations
pub struct SortConfigBuilder {
    config: SortConfig,
}

impl SortConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
        }
    }

    /// Set the 0-based column
    pub fn column(mut self, column: isize) -> Self {
        self.config.column = column;
        self
    }

    /// Set the column the way users count it, starting at 1.
    /// Zero or negative input lands out of range and selects the whole line.
    pub fn column_from_one(mut self, column: isize) -> Self {
        self.config.column = column.saturating_sub(1);
        self
    }

    /// Set sort mode
    pub fn mode(mut self, mode: SortMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Resolve individual mode switches into a single mode
    pub fn mode_flags(mut self, flags: ModeFlags) -> Self {
        self.config.mode = flags.resolve();
        self
    }

    pub fn reverse(mut self) -> Self {
        self.config.reverse = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.config.unique = true;
        self
    }

    pub fn ignore_trailing_space(mut self) -> Self {
        self.config.ignore_trailing_space = true;
        self
    }

    pub fn check(mut self) -> Self {
        self.config.check = true;
        self
    }

    pub fn debug(mut self) -> Self {
        self.config.debug = true;
        self
    }

    pub fn delimiter(mut self, delimiter: &str) -> Self {
        self.config.delimiter = delimiter.to_string();
        self
    }

    pub fn input_file(mut self, file: String) -> Self {
        self.config.input_file = Some(file);
        self
    }

    pub fn output_file(mut self, file: String) -> Self {
        self.config.output_file = Some(file);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SortResult<SortConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

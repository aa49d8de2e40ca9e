//! Column extraction for sort keys

use crate::config::SortConfig;

/// Return the column of `line` selected by `config.column`, splitting on the
/// literal `config.delimiter`.
///
/// A column index outside the split (negative, or past the last column) falls
/// back to the whole line. An empty delimiter makes every character a column.
pub fn extract_key<'a>(line: &'a str, config: &SortConfig) -> &'a str {
    extract_column(line, &config.delimiter, config.column)
}

/// Same as [`extract_key`] with the pieces passed separately.
pub fn extract_column<'a>(line: &'a str, delimiter: &str, column: isize) -> &'a str {
    let Ok(index) = usize::try_from(column) else {
        return line;
    };

    let selected = if delimiter.is_empty() {
        line.char_indices()
            .nth(index)
            .map(|(start, ch)| &line[start..start + ch.len_utf8()])
    } else {
        line.split(delimiter).nth(index)
    };

    selected.unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_column() {
        assert_eq!(extract_column("a b c", " ", 0), "a");
        assert_eq!(extract_column("a b c", " ", 2), "c");
        assert_eq!(extract_column("x,y", ",", 1), "y");
    }

    #[test]
    fn test_out_of_range_returns_whole_line() {
        let config = SortConfig::new().with_column(5).with_delimiter(",");
        assert_eq!(extract_key("x,y", &config), "x,y");
        assert_eq!(extract_column("x,y", ",", -1), "x,y");
    }

    #[test]
    fn test_adjacent_delimiters_yield_empty_columns() {
        assert_eq!(extract_column("a  b", " ", 1), "");
        assert_eq!(extract_column("a  b", " ", 2), "b");
        assert_eq!(extract_column("", " ", 0), "");
    }

    #[test]
    fn test_multi_character_delimiter() {
        assert_eq!(extract_column("one::two::three", "::", 1), "two");
        assert_eq!(extract_column("one:two", "::", 0), "one:two");
    }

    #[test]
    fn test_empty_delimiter_splits_characters() {
        assert_eq!(extract_column("héllo", "", 1), "é");
        assert_eq!(extract_column("ab", "", 2), "ab");
    }
}

//! Exact-duplicate removal

use itertools::Itertools;

/// Drop every line already seen, keeping first occurrences in input order.
///
/// Lines are compared as whole strings, not by sort key.
pub fn unique_lines(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().unique().collect()
}

//! Order verification without reordering
//!
//! The checker compares extracted keys as plain strings whatever the
//! configured mode is. Only the column, the delimiter and the direction
//! take part.

use crate::config::SortConfig;
use crate::key::extract_key;
use log::debug;

/// 1-based line number of the first line out of order, if any.
pub fn first_disorder<S: AsRef<str>>(lines: &[S], config: &SortConfig) -> Option<usize> {
    let disorder = lines
        .windows(2)
        .position(|pair| {
            let prev = extract_key(pair[0].as_ref(), config);
            let curr = extract_key(pair[1].as_ref(), config);
            if config.reverse {
                prev < curr
            } else {
                prev > curr
            }
        })
        .map(|index| index + 2);

    if let Some(line) = disorder {
        debug!("disorder at line {line}");
    }
    disorder
}

/// Whether `lines` are already in order. Empty and single-line input is sorted.
pub fn is_sorted<S: AsRef<str>>(lines: &[S], config: &SortConfig) -> bool {
    first_disorder(lines, config).is_none()
}

//! Key comparison strategies
//!
//! Every comparator is a strict less-than over extracted keys and is total
//! over arbitrary strings. Malformed keys never fail: numeric keys fall back
//! to lexicographic order, suffixed keys and unknown months collapse to zero.

use crate::config::SortMode;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::OnceLock;

static MONTH_TABLE: OnceLock<HashMap<&'static str, u8>> = OnceLock::new();
static SUFFIX_TABLE: OnceLock<HashMap<u8, f64>> = OnceLock::new();

fn month_table() -> &'static HashMap<&'static str, u8> {
    MONTH_TABLE.get_or_init(|| {
        [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ]
        .into_iter()
        .zip(1u8..)
        .collect()
    })
}

fn suffix_table() -> &'static HashMap<u8, f64> {
    SUFFIX_TABLE.get_or_init(|| {
        HashMap::from([(b'K', 1e3), (b'M', 1e6), (b'G', 1e9), (b'T', 1e12)])
    })
}

/// Comparison strategy selected from a [`SortMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Lexicographic,
    Numeric,
    Month,
    HumanNumeric,
}

impl From<SortMode> for Comparator {
    fn from(mode: SortMode) -> Self {
        match mode {
            SortMode::Lexicographic => Comparator::Lexicographic,
            SortMode::Numeric => Comparator::Numeric,
            SortMode::Month => Comparator::Month,
            SortMode::HumanNumeric => Comparator::HumanNumeric,
        }
    }
}

impl Comparator {
    /// Strict less-than between two keys
    #[inline]
    pub fn less(self, a: &str, b: &str) -> bool {
        match self {
            Comparator::Lexicographic => a < b,
            Comparator::Numeric => less_numeric(a, b),
            Comparator::Month => month_rank(a) < month_rank(b),
            Comparator::HumanNumeric => parse_human_numeric(a) < parse_human_numeric(b),
        }
    }

    /// Three-way comparison built from [`Comparator::less`]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Parse a float the strict way: the whole key must be a number, NaN is
/// rejected, and a finite literal that overflows to infinity is rejected.
pub fn parse_float(s: &str) -> Option<f64> {
    let value = s.parse::<f64>().ok()?;
    if value.is_nan() {
        return None;
    }
    if value.is_infinite() && !is_infinity_literal(s) {
        return None;
    }
    Some(value)
}

fn is_infinity_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Numeric less-than. If either key is not a number both are compared as
/// plain strings.
pub fn less_numeric(a: &str, b: &str) -> bool {
    match (parse_float(a), parse_float(b)) {
        (Some(a_num), Some(b_num)) => a_num < b_num,
        _ => a < b,
    }
}

/// Rank of a month abbreviation, 1 for `Jan` through 12 for `Dec`.
/// Matching is exact and case-sensitive; anything else ranks 0.
pub fn month_rank(key: &str) -> u8 {
    month_table().get(key).copied().unwrap_or(0)
}

/// Value of a number with an optional trailing `K`, `M`, `G` or `T`.
/// Empty or unparsable keys are worth 0.
pub fn parse_human_numeric(key: &str) -> f64 {
    let Some(&last) = key.as_bytes().last() else {
        return 0.0;
    };

    match suffix_table().get(&last) {
        Some(multiplier) => parse_float(&key[..key.len() - 1])
            .map(|value| value * multiplier)
            .unwrap_or(0.0),
        None => parse_float(key).unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic() {
        let cmp = Comparator::Lexicographic;
        assert!(cmp.less("apple", "banana"));
        assert!(cmp.less("10", "9"));
        assert!(!cmp.less("a", "a"));
        assert_eq!(cmp.compare("b", "a"), Ordering::Greater);
    }

    #[test]
    fn test_numeric_compares_values() {
        assert!(!less_numeric("10", "9"));
        assert!(less_numeric("9", "10"));
        assert!(less_numeric("-1.5", "0"));
        assert!(less_numeric("1e2", "101"));
        assert_eq!(Comparator::Numeric.compare("2.0", "2"), Ordering::Equal);
    }

    #[test]
    fn test_numeric_falls_back_when_either_side_fails() {
        // 'a' sorts after '9' in ASCII
        assert!(!less_numeric("abc", "9"));
        assert!(less_numeric("9", "abc"));
        // only one side malformed is enough to switch to string order
        assert!(less_numeric("10", "9x"));
        assert!(less_numeric("", "5"));
    }

    #[test]
    fn test_parse_float_rejects_nan_and_overflow() {
        assert_eq!(parse_float("NaN"), None);
        assert_eq!(parse_float("1e400"), None);
        assert_eq!(parse_float("-inf"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float(" 1"), None);
        assert_eq!(parse_float("+3"), Some(3.0));
    }

    #[test]
    fn test_month_rank() {
        assert_eq!(month_rank("Jan"), 1);
        assert_eq!(month_rank("Dec"), 12);
        assert_eq!(month_rank("jan"), 0);
        assert_eq!(month_rank("January"), 0);
        assert_eq!(month_rank(""), 0);
        assert!(Comparator::Month.less("Zzz", "Jan"));
        assert!(!Comparator::Month.less("Foo", "Bar"));
    }

    #[test]
    fn test_human_numeric() {
        assert_eq!(parse_human_numeric("2K"), 2000.0);
        assert_eq!(parse_human_numeric("1.5M"), 1_500_000.0);
        assert_eq!(parse_human_numeric("3G"), 3e9);
        assert_eq!(parse_human_numeric("1T"), 1e12);
        assert_eq!(parse_human_numeric("42"), 42.0);
        assert_eq!(parse_human_numeric(""), 0.0);
    }

    #[test]
    fn test_human_numeric_malformed_is_zero() {
        assert_eq!(parse_human_numeric("xK"), 0.0);
        assert_eq!(parse_human_numeric("K"), 0.0);
        assert_eq!(parse_human_numeric("2k"), 0.0);
        assert_eq!(parse_human_numeric("abc"), 0.0);
        assert!(Comparator::HumanNumeric.less("abc", "1"));
        assert_eq!(Comparator::HumanNumeric.compare("xK", "0"), Ordering::Equal);
    }

    #[test]
    fn test_comparator_from_mode() {
        assert_eq!(Comparator::from(SortMode::Month), Comparator::Month);
        assert_eq!(
            Comparator::from(SortMode::HumanNumeric),
            Comparator::HumanNumeric
        );
    }
}

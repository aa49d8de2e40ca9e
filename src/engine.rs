//! Sort pipeline: trailing-space trim, dedup, then a stable keyed sort

use crate::compare::Comparator;
use crate::config::SortConfig;
use crate::dedup::unique_lines;
use crate::key::extract_key;
use log::{debug, trace};

/// Length of the runs insertion-sorted before merging starts
const INSERTION_RUN: usize = 20;

/// Sorts owned lines according to a [`SortConfig`]
pub struct LineSorter {
    config: SortConfig,
    comparator: Comparator,
}

impl LineSorter {
    pub fn new(config: SortConfig) -> Self {
        let comparator = Comparator::from(config.mode);
        Self { config, comparator }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Run the whole pipeline and return the ordered lines
    pub fn sort(&self, mut lines: Vec<String>) -> Vec<String> {
        debug!(
            "sorting {} lines: mode={} column={} delimiter={:?} reverse={}",
            lines.len(),
            self.config.mode,
            self.config.column,
            self.config.delimiter,
            self.config.reverse
        );

        if self.config.ignore_trailing_space {
            trim_trailing_spaces(&mut lines);
        }

        if self.config.unique {
            let before = lines.len();
            lines = unique_lines(lines);
            debug!("unique: {} -> {} lines", before, lines.len());
        }

        let order = {
            let keys: Vec<&str> = lines
                .iter()
                .map(|line| extract_key(line, &self.config))
                .collect();
            self.sorted_order(&keys)
        };

        trace!("sorted order: {:?}", order);
        apply_order(lines, &order)
    }

    /// Indices of `keys` in sorted order. Equal keys keep their input order
    /// in both directions.
    fn sorted_order(&self, keys: &[&str]) -> Vec<usize> {
        let comparator = self.comparator;
        if self.config.reverse {
            stable_order_by(keys.len(), |a, b| comparator.less(keys[b], keys[a]))
        } else {
            stable_order_by(keys.len(), |a, b| comparator.less(keys[a], keys[b]))
        }
    }
}

/// Sort `lines` with a one-off [`LineSorter`]
pub fn sort_lines(lines: Vec<String>, config: &SortConfig) -> Vec<String> {
    LineSorter::new(config.clone()).sort(lines)
}

/// Strip trailing ASCII spaces in place. Tabs and other whitespace stay.
pub fn trim_trailing_spaces(lines: &mut [String]) {
    for line in lines.iter_mut() {
        let kept = line.trim_end_matches(' ').len();
        line.truncate(kept);
    }
}

/// Stable merge sort of the indices `0..len` under a strict less-than.
///
/// Only `less` is consulted, so an inconsistent predicate yields some
/// permutation instead of a panic.
pub fn stable_order_by<F>(len: usize, less: F) -> Vec<usize>
where
    F: Fn(usize, usize) -> bool,
{
    let mut order: Vec<usize> = (0..len).collect();

    for run in order.chunks_mut(INSERTION_RUN) {
        insertion_sort(run, &less);
    }

    let mut buffer = vec![0usize; len];
    let mut width = INSERTION_RUN;
    while width < len {
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(&order[start..mid], &order[mid..end], &mut buffer[start..end], &less);
        }
        std::mem::swap(&mut order, &mut buffer);
        width *= 2;
    }

    order
}

fn insertion_sort<F>(run: &mut [usize], less: &F)
where
    F: Fn(usize, usize) -> bool,
{
    for i in 1..run.len() {
        let current = run[i];
        let mut j = i;

        while j > 0 && less(current, run[j - 1]) {
            run[j] = run[j - 1];
            j -= 1;
        }

        run[j] = current;
    }
}

/// Merge two sorted runs into `output`, preferring `left` on ties
fn merge<F>(left: &[usize], right: &[usize], output: &mut [usize], less: &F)
where
    F: Fn(usize, usize) -> bool,
{
    let mut i = 0;
    let mut j = 0;
    let mut k = 0;

    while i < left.len() && j < right.len() {
        if less(right[j], left[i]) {
            output[k] = right[j];
            j += 1;
        } else {
            output[k] = left[i];
            i += 1;
        }
        k += 1;
    }

    let rest_left = &left[i..];
    output[k..k + rest_left.len()].copy_from_slice(rest_left);
    k += rest_left.len();
    output[k..].copy_from_slice(&right[j..]);
}

/// Move lines into the positions given by `order` without cloning them
fn apply_order(lines: Vec<String>, order: &[usize]) -> Vec<String> {
    let mut slots: Vec<Option<String>> = lines.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&index| slots.get_mut(index).and_then(Option::take))
        .collect()
}

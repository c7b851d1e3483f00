//! Free functions over ordered sequences.
//!
//! Every function takes its input by shared slice and returns a freshly
//! allocated result: inputs are never mutated. Anomalous inputs (out-of-range
//! index, zero chunk size, ...) degrade to a documented safe result instead of
//! failing; see each function for the exact contract.
//!
//! Arithmetic helpers restricted to numeric element types live in [`num`].

use std::fmt::Display;
use std::hash::Hash;

use hashbrown::HashSet;
use itertools::Itertools;

pub mod num;

/// Returns an independent shallow copy of the sequence.
pub fn copy<T: Clone>(s: &[T]) -> Vec<T> {
    s.to_vec()
}

/// Returns the sequence with every occurrence of `value` removed, preserving
/// the relative order of the remaining elements.
pub fn remove_value<T: PartialEq + Clone>(s: &[T], value: &T) -> Vec<T> {
    s.iter().filter(|v| *v != value).cloned().collect()
}

/// Returns the sequence with the element at `index` removed.
///
/// An out-of-bounds index returns the input unchanged.
pub fn remove_idx<T: Clone>(s: &[T], index: usize) -> Vec<T> {
    if index >= s.len() {
        return s.to_vec();
    }
    let mut result = s.to_vec();
    result.remove(index);
    result
}

/// Returns the position of the first element equal to `value`, if any.
pub fn index_of<T: PartialEq>(s: &[T], value: &T) -> Option<usize> {
    s.iter().position(|v| v == value)
}

pub fn has_value<T: PartialEq>(s: &[T], value: &T) -> bool {
    index_of(s, value).is_some()
}

/// Returns the elements of `s` not present in any of `others`, keeping the
/// order and duplicates of `s`.
///
/// With no `others`, `s` is returned verbatim.
pub fn diff<T: Eq + Hash + Clone>(s: &[T], others: &[&[T]]) -> Vec<T> {
    if others.is_empty() {
        return s.to_vec();
    }
    let excluded: HashSet<&T> = others.iter().flat_map(|o| o.iter()).collect();
    s.iter().filter(|v| !excluded.contains(v)).cloned().collect()
}

/// Returns the elements of `s` present in every one of `others`, keeping the
/// order and duplicates of `s`.
///
/// With no `others`, the result is empty: intersecting with nothing yields
/// nothing, unlike [`diff`]. Any empty member of `others` also forces an empty
/// result.
pub fn intersect<T: Eq + Hash + Clone>(s: &[T], others: &[&[T]]) -> Vec<T> {
    if others.is_empty() {
        return Vec::new();
    }
    let mut result = s.to_vec();
    // Smallest other first: the result only ever shrinks, so the scan can
    // stop as soon as it is empty.
    for other in others.iter().copied().sorted_by_key(|o| o.len()) {
        let index: HashSet<&T> = other.iter().collect();
        result.retain(|v| index.contains(v));
        if result.is_empty() {
            break;
        }
    }
    result
}

/// Returns a copy of the half-open range `[from, to)`, with `to` clamped to
/// the sequence length.
///
/// `from` is not clamped: `from > min(to, len)` is a contract violation on the
/// caller's side and panics like any out-of-range slice index.
pub fn safe_slice<T: Clone>(s: &[T], from: usize, to: usize) -> Vec<T> {
    s[from..to.min(s.len())].to_vec()
}

/// Splits the sequence into consecutive chunks of at most `part_size`
/// elements, the last chunk possibly shorter.
///
/// A zero `part_size` or an empty input yields no chunks at all.
pub fn split<T: Clone>(s: &[T], part_size: usize) -> Vec<Vec<T>> {
    if part_size == 0 || s.is_empty() {
        return Vec::new();
    }
    s.chunks(part_size).map(<[T]>::to_vec).collect()
}

/// Returns `s` followed by every element of `others` not already produced,
/// in production order.
///
/// The first occurrence of an element wins its position; later occurrences
/// are dropped, whichever sequence they come from. Duplicates already inside
/// `s` itself are kept verbatim.
///
/// # Example
/// ```
/// use kit_seq::merge;
/// assert_eq!(merge(&[1], &[&[2, 3], &[1, 3]]), vec![1, 2, 3]);
/// ```
pub fn merge<T: Eq + Hash + Clone>(s: &[T], others: &[&[T]]) -> Vec<T> {
    let mut seen: HashSet<&T> = s.iter().collect();
    let mut result = s.to_vec();
    for other in others {
        for v in other.iter() {
            if seen.insert(v) {
                result.push(v.clone());
            }
        }
    }
    result
}

/// Returns the first occurrence of each distinct value, in original order.
pub fn unique<T: Eq + Hash + Clone>(s: &[T]) -> Vec<T> {
    s.iter().unique().cloned().collect()
}

/// Returns `count` repetitions of `value`.
pub fn fill<T: Clone>(value: T, count: usize) -> Vec<T> {
    vec![value; count]
}

/// Returns the elements for which the predicate is true, preserving order.
pub fn filter<T: Clone>(s: &[T], predicate: impl Fn(&T) -> bool) -> Vec<T> {
    s.iter().filter(|v| predicate(v)).cloned().collect()
}

/// Returns the element-wise image of the sequence, preserving length and
/// order.
pub fn map<T: Clone>(s: &[T], transform: impl Fn(&T) -> T) -> Vec<T> {
    s.iter().map(transform).collect()
}

/// Returns the sequence in reverse order.
pub fn reverse<T: Clone>(s: &[T]) -> Vec<T> {
    s.iter().rev().cloned().collect()
}

/// Renders each element through the formatting template.
///
/// # Example
/// ```
/// use kit_seq::format;
/// let rendered = format(&[0.000001, 0.02], |v| format!("{v:.2}"));
/// assert_eq!(rendered, vec!["0.00", "0.02"]);
/// ```
pub fn format<T>(s: &[T], template: impl Fn(&T) -> String) -> Vec<String> {
    s.iter().map(template).collect()
}

/// Returns the textual representation of each element.
pub fn stringify<T: Display>(s: &[T]) -> Vec<String> {
    s.iter().map(|v| v.to_string()).collect()
}

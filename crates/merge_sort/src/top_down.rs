use crate::TieBreak;
use crate::merge::merge;

/// Recursive top-down merge sort.
///
/// Both halves are copied out of `data` before recursing, so no level ever
/// aliases or mutates its caller's buffer.
pub fn sort<T: PartialOrd + Clone>(data: &[T], tie_break: TieBreak) -> Vec<T> {
    let len = data.len();
    if len < 2 {
        return data.to_vec();
    }

    let mid = len >> 1;
    let left = data[..mid].to_vec();
    let right = data[mid..].to_vec();

    let left = sort(&left, tie_break);
    let right = sort(&right, tie_break);

    merge(&left, &right, tie_break)
}

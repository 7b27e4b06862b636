use crate::TieBreak;

#[inline]
fn take_left<T: PartialOrd>(left: &T, right: &T, tie_break: TieBreak) -> bool {
    match tie_break {
        TieBreak::PreferRight => left < right,
        TieBreak::PreferLeft => left <= right,
    }
}

/// Merges two ascending slices into a new ascending vector.
///
/// Equal heads are resolved by `tie_break`. Once either side is exhausted the
/// remainder of the other is appended in its existing order.
pub fn merge<T: PartialOrd + Clone>(left: &[T], right: &[T], tie_break: TieBreak) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut i = 0usize;
    let mut j = 0usize;

    while i < left.len() && j < right.len() {
        if take_left(&left[i], &right[j], tie_break) {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }

    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

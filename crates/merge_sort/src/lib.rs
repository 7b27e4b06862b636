mod merge;
mod top_down;

pub use merge::merge;

/// Which side a merge emits first when the two heads compare equal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TieBreak {
    /// Strict `<`: an equal right-hand element goes first. Not stable across
    /// the split.
    #[default]
    PreferRight,
    /// `<=`: an equal left-hand element goes first, which makes the sort stable.
    PreferLeft,
}

pub const ALL_TIE_BREAKS: [TieBreak; 2] = [TieBreak::PreferRight, TieBreak::PreferLeft];

pub fn all_tie_breaks() -> &'static [TieBreak] {
    &ALL_TIE_BREAKS
}

pub fn tie_break_name(tie_break: TieBreak) -> &'static str {
    match tie_break {
        TieBreak::PreferRight => "prefer_right",
        TieBreak::PreferLeft => "prefer_left",
    }
}

/// Returns a sorted copy of `data` using the default [`TieBreak::PreferRight`] merge.
pub fn merge_sort<T: PartialOrd + Clone>(data: &[T]) -> Vec<T> {
    merge_sort_with(data, TieBreak::default())
}

pub fn merge_sort_with<T: PartialOrd + Clone>(data: &[T], tie_break: TieBreak) -> Vec<T> {
    top_down::sort(data, tie_break)
}

#[inline]
pub fn is_sorted_non_decreasing<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

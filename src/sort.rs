//! Recursive merge sort over a [`Sequence`].
//!
//! Only a strict "less than" is needed. Elements that neither precede nor
//! follow each other are ties: the merge keeps both copies, so the sorted
//! output is always a permutation of the input.

use crate::{
    error::SequenceError,
    merge::merge_keep_ties,
    order::{ordering_from_less, Comparator},
    sequence::Sequence,
};

pub fn sort<T>(data: &mut Sequence<T>)
where
    T: PartialOrd + Clone,
{
    sort_by(data, |a, b| a < b)
}

pub fn sort_with<T, C>(data: &mut Sequence<T>, cmp: &C)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    sort_by(data, |a, b| cmp.less(a, b))
}

pub fn sort_by<T, F>(data: &mut Sequence<T>, mut less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if data.len() > 1 {
        merge_sort(data, 0, data.len() - 1, &mut less)
    }
}

/// Sorts the inclusive index range `lo..=hi` in place.
///
/// `lo > hi` is an empty range. Fails if `hi` is past the end.
pub fn sort_range_by<T, F>(
    data: &mut Sequence<T>,
    lo: usize,
    hi: usize,
    mut less: F,
) -> Result<(), SequenceError>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if lo > hi {
        return Ok(());
    }
    data.check_index(hi)?;
    merge_sort(data, lo, hi, &mut less);
    Ok(())
}

fn merge_sort<T, F>(data: &mut Sequence<T>, lo: usize, hi: usize, less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if lo >= hi {
        return;
    }

    if hi - lo == 1 {
        if less(&data[hi], &data[lo]) {
            data.swap(lo, hi);
        }
        return;
    }

    let mid = lo + (hi - lo) / 2;
    merge_sort(data, lo, mid, less);
    merge_sort(data, mid + 1, hi, less);
    merge(data, lo, mid, hi, less);
}

/// Merges the sorted runs `lo..=mid` and `mid+1..=hi`.
fn merge<T, F>(data: &mut Sequence<T>, lo: usize, mid: usize, hi: usize, less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut left = Sequence::with_capacity(mid - lo + 1);
    left.extend(data.as_slice()[lo..=mid].iter().cloned());
    let mut right = Sequence::with_capacity(hi - mid);
    right.extend(data.as_slice()[mid + 1..=hi].iter().cloned());

    let merged = merge_keep_ties(left, right, |a, b| ordering_from_less(less, a, b));
    for (slot, value) in data.as_mut_slice()[lo..=hi].iter_mut().zip(merged) {
        *slot = value;
    }
}

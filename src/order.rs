use std::cmp::Ordering;

/// A total order over `T`, supplied to the tree and the sort separately from
/// the element type.
///
/// `compare` returning [`Ordering::Equal`] is the equality test: the tree
/// rejects an insert that compares equal to a stored value.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_lt()
    }
}

/// The element type's own [`Ord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Wraps a closure as a [`Comparator`].
#[derive(Clone, Copy)]
pub struct FnComparator<F>(pub F);

impl<T, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<T, C> Comparator<T> for &'_ C
where
    C: Comparator<T> + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        C::compare(self, a, b)
    }
}

/// Builds an [`Ordering`] from a strict "less than".
///
/// Neither side preceding the other counts as a tie.
pub fn ordering_from_less<T>(less: &mut impl FnMut(&T, &T) -> bool, a: &T, b: &T) -> Ordering {
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

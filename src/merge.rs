use std::{
    cmp::Ordering,
    iter::{FusedIterator, Peekable},
};

// based on itertools MergeBy but on ties both heads are taken in the same
// step, `a`'s first, so nothing is dropped
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct MergeKeepTies<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    a: Peekable<I>,
    b: Peekable<J>,
    pending: Option<I::Item>,
    fused: Option<Ordering>,
    cmp: F,
}

pub fn merge_keep_ties<I, J, F>(a: I, b: J, cmp: F) -> MergeKeepTies<I::IntoIter, J::IntoIter, F>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    MergeKeepTies {
        a: a.into_iter().peekable(),
        b: b.into_iter().peekable(),
        pending: None,
        fused: None,
        cmp,
    }
}

impl<I, J, F> Clone for MergeKeepTies<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    I::Item: Clone,
    Peekable<I>: Clone,
    Peekable<J>: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            a: self.a.clone(),
            b: self.b.clone(),
            pending: self.pending.clone(),
            fused: self.fused,
            cmp: self.cmp.clone(),
        }
    }
}

impl<I, J, F> Iterator for MergeKeepTies<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        use Ordering::*;
        if let Some(tied) = self.pending.take() {
            return Some(tied);
        }

        let ordering = match self.fused {
            Some(ord) => ord,
            None => match (self.a.peek(), self.b.peek()) {
                (Some(a), Some(b)) => (self.cmp)(a, b),
                (Some(_), None) => {
                    self.fused = Some(Less);
                    Less
                }
                (None, Some(_)) => {
                    self.fused = Some(Greater);
                    Greater
                }
                (None, None) => return None,
            },
        };
        match ordering {
            Equal => {
                self.pending = self.b.next();
                self.a.next()
            }
            Less => self.a.next(),
            Greater => self.b.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let a = self.a.size_hint();
        let b = self.b.size_hint();
        let pending = self.pending.is_some() as usize;
        let min = a.0.saturating_add(b.0).saturating_add(pending);
        let max = match (a.1, b.1) {
            (Some(x), Some(y)) => x.checked_add(y).and_then(|n| n.checked_add(pending)),
            _ => None,
        };

        (min, max)
    }
}

impl<I, J, F> FusedIterator for MergeKeepTies<I, J, F>
where
    I: FusedIterator,
    J: FusedIterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
}

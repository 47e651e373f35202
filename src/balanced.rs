//! Median-first construction of an [`OrderedTree`] from sorted data.
//!
//! Inserting the midpoint of every sub-range before either half bounds the
//! height to `ceil(log2(n + 1))` for strictly sorted, duplicate-free input.
//! Sortedness is not checked. Values equal to one already inserted are
//! rejected by the tree and counted in the [`BuildReport`]; the shape may
//! then be less than perfectly balanced.

use crate::{
    error::SequenceError,
    order::Comparator,
    sequence::Sequence,
    sort::sort_with,
    tree::OrderedTree,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub inserted: usize,
    pub duplicates: usize,
}

impl BuildReport {
    fn record(&mut self, inserted: bool) {
        if inserted {
            self.inserted += 1
        } else {
            self.duplicates += 1
        }
    }
}

pub fn insert_balanced<T, C>(tree: &mut OrderedTree<T, C>, sorted: &[T]) -> BuildReport
where
    T: Clone,
    C: Comparator<T>,
{
    fn build<T, C>(tree: &mut OrderedTree<T, C>, sorted: &[T], report: &mut BuildReport)
    where
        T: Clone,
        C: Comparator<T>,
    {
        if sorted.is_empty() {
            return;
        }
        let mid = (sorted.len() - 1) / 2;
        report.record(tree.insert(sorted[mid].clone()));
        build(tree, &sorted[..mid], report);
        build(tree, &sorted[mid + 1..], report);
    }

    let mut report = BuildReport::default();
    build(tree, sorted, &mut report);
    report
}

/// [`insert_balanced`] over the inclusive index range `lo..=hi`.
pub fn build_balanced_range<T, C>(
    tree: &mut OrderedTree<T, C>,
    sorted: &Sequence<T>,
    lo: usize,
    hi: usize,
) -> Result<BuildReport, SequenceError>
where
    T: Clone,
    C: Comparator<T>,
{
    if lo > hi {
        return Ok(BuildReport::default());
    }
    sorted.check_index(hi)?;
    Ok(insert_balanced(tree, &sorted.as_slice()[lo..=hi]))
}

/// Sorts a copy of `records` and builds a balanced tree from it. `records`
/// itself is left in its original order.
pub fn build_from_unsorted<T, C>(records: &Sequence<T>, cmp: C) -> (OrderedTree<T, C>, BuildReport)
where
    T: Clone,
    C: Comparator<T>,
{
    let mut sorted = records.clone();
    sort_with(&mut sorted, &cmp);
    let mut tree = OrderedTree::with_comparator(cmp);
    let report = insert_balanced(&mut tree, sorted.as_slice());
    (tree, report)
}

impl<T, C> OrderedTree<T, C>
where
    T: Clone,
    C: Comparator<T>,
{
    pub fn from_sorted(sorted: &[T], cmp: C) -> Self {
        let mut tree = Self::with_comparator(cmp);
        insert_balanced(&mut tree, sorted);
        tree
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    use super::{build_balanced_range, build_from_unsorted, insert_balanced, BuildReport};
    use crate::{
        error::SequenceError,
        order::Natural,
        sequence::Sequence,
        tree::OrderedTree,
    };

    fn height_bound(n: usize) -> usize {
        // ceil(log2(n + 1))
        (usize::BITS - n.leading_zeros()) as usize
    }

    #[test]
    fn seven_values_form_a_perfect_tree() {
        let tree = OrderedTree::from_sorted(&[1, 2, 3, 4, 5, 6, 7], Natural);
        let mut pre = vec![];
        tree.pre_order(|v| pre.push(*v));
        assert_eq!(pre, [4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(tree.height(), 3);

        insta::assert_snapshot!(tree.to_dot(), @r###"
        digraph {
          node [shape=circle];
          n0 [label="4"];
          n1 [label="2"];
          n2 [label="1"];
          n3 [label="3"];
          n1 -> n2 [label="L"];
          n1 -> n3 [label="R"];
          n4 [label="6"];
          n5 [label="5"];
          n6 [label="7"];
          n4 -> n5 [label="L"];
          n4 -> n6 [label="R"];
          n0 -> n1 [label="L"];
          n0 -> n4 [label="R"];
        }
        "###);
    }

    #[test]
    fn even_length_takes_lower_median() {
        let tree = OrderedTree::from_sorted(&[10, 20, 30, 40], Natural);
        let mut pre = vec![];
        tree.pre_order(|v| pre.push(*v));
        assert_eq!(pre, [20, 10, 30, 40]);
    }

    #[test]
    fn height_is_logarithmic() {
        for n in 0..=300 {
            let sorted = (0..n as i32).collect_vec();
            let tree = OrderedTree::from_sorted(&sorted, Natural);
            assert_eq!(tree.len(), n);
            assert!(tree.height() <= height_bound(n), "n={n} h={}", tree.height());
            let mut out = vec![];
            tree.in_order(|v| out.push(*v));
            assert_eq!(out, sorted);
        }
    }

    #[test]
    fn inclusive_range_form() {
        let sorted: Sequence<i32> = (0..10).collect();
        let mut tree = OrderedTree::new();
        let report = build_balanced_range(&mut tree, &sorted, 2, 6).unwrap();
        assert_eq!(report, BuildReport { inserted: 5, duplicates: 0 });
        let mut pre = vec![];
        tree.pre_order(|v| pre.push(*v));
        assert_eq!(pre, [4, 2, 3, 5, 6]);

        let report = build_balanced_range(&mut tree, &sorted, 7, 3).unwrap();
        assert_eq!(report, BuildReport::default());

        assert_eq!(
            build_balanced_range(&mut tree, &sorted, 0, 10),
            Err(SequenceError::OutOfBounds { index: 10, len: 10 })
        );
    }

    #[test]
    fn duplicates_are_counted_not_inserted() {
        let mut tree = OrderedTree::new();
        let report = insert_balanced(&mut tree, &[1, 2, 2, 2, 3]);
        assert_eq!(report, BuildReport { inserted: 3, duplicates: 2 });
        let mut out = vec![];
        tree.in_order(|v| out.push(*v));
        assert_eq!(out, [1, 2, 3]);
    }

    #[test]
    fn unsorted_input_is_sorted_first() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut values = (0..500).collect_vec();
        values.shuffle(&mut rng);
        let records: Sequence<i32> = values.iter().copied().collect();

        let (tree, report) = build_from_unsorted(&records, Natural);
        assert_eq!(report, BuildReport { inserted: 500, duplicates: 0 });
        assert!(tree.height() <= height_bound(500));
        assert_eq!(records.as_slice(), &values[..]);

        let mut out = vec![];
        tree.in_order(|v| out.push(*v));
        assert_eq!(out, (0..500).collect_vec());
    }
}

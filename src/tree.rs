use std::{cmp::Ordering, fmt};

use crate::order::{Comparator, Natural};

/// A binary search tree ordered by a [`Comparator`].
///
/// Values that compare equal to one already stored are rejected, so the tree
/// holds a set. Nodes are only ever added; the whole tree is released at once
/// by [`clear`](Self::clear) or drop. Cloning copies every node and keeps the
/// exact shape.
#[derive(Clone)]
pub struct OrderedTree<T, C = Natural> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

impl<T: Ord> OrderedTree<T, Natural> {
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T: Ord> Default for OrderedTree<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> OrderedTree<T, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path. Empty is 0.
    pub fn height(&self) -> usize {
        fn height<T>(link: &Link<T>) -> usize {
            match link {
                None => 0,
                Some(node) => 1 + height(&node.left).max(height(&node.right)),
            }
        }
        height(&self.root)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Visits left subtree, node, right subtree. Values arrive in ascending
    /// order.
    pub fn in_order(&self, mut visit: impl FnMut(&T)) {
        fn walk<T>(link: &Link<T>, visit: &mut impl FnMut(&T)) {
            if let Some(node) = link {
                walk(&node.left, visit);
                visit(&node.value);
                walk(&node.right, visit);
            }
        }
        walk(&self.root, &mut visit)
    }

    pub fn pre_order(&self, mut visit: impl FnMut(&T)) {
        fn walk<T>(link: &Link<T>, visit: &mut impl FnMut(&T)) {
            if let Some(node) = link {
                visit(&node.value);
                walk(&node.left, visit);
                walk(&node.right, visit);
            }
        }
        walk(&self.root, &mut visit)
    }

    pub fn post_order(&self, mut visit: impl FnMut(&T)) {
        fn walk<T>(link: &Link<T>, visit: &mut impl FnMut(&T)) {
            if let Some(node) = link {
                walk(&node.left, visit);
                walk(&node.right, visit);
                visit(&node.value);
            }
        }
        walk(&self.root, &mut visit)
    }

    /// Graphviz rendering of the tree shape. Nodes are numbered in pre-order.
    pub fn to_dot(&self) -> String
    where
        T: fmt::Debug,
    {
        Dot(&self.root).to_string()
    }
}

impl<T, C> OrderedTree<T, C>
where
    C: Comparator<T>,
{
    /// Adds `value` as a new leaf. Returns `false`, leaving the tree as it
    /// was, when an equal value is already stored.
    pub fn insert(&mut self, value: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match self.cmp.compare(&value, &node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    tracing::warn!("duplicates not allowed, value ignored");
                    return false;
                }
            };
        }
        *link = Some(Node::leaf(value));
        self.len += 1;
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match self.cmp.compare(value, &node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_set();
        self.in_order(|value| {
            list.entry(value);
        });
        list.finish()
    }
}

struct Dot<'t, T>(&'t Link<T>);

impl<T: fmt::Debug> fmt::Display for Dot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn node<T: fmt::Debug>(
            f: &mut fmt::Formatter<'_>,
            link: &Link<T>,
            next_id: &mut usize,
        ) -> Result<Option<usize>, fmt::Error> {
            let Some(n) = link else {
                return Ok(None)
            };
            let id = *next_id;
            *next_id += 1;
            writeln!(f, "  n{id} [label=\"{:?}\"];", n.value)?;
            let left = node(f, &n.left, next_id)?;
            let right = node(f, &n.right, next_id)?;
            if let Some(left) = left {
                writeln!(f, "  n{id} -> n{left} [label=\"L\"];")?;
            }
            if let Some(right) = right {
                writeln!(f, "  n{id} -> n{right} [label=\"R\"];")?;
            }
            Ok(Some(id))
        }

        writeln!(f, "digraph {{")?;
        writeln!(f, "  node [shape=circle];")?;
        node(f, self.0, &mut 0)?;
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    use super::OrderedTree;
    use crate::order::FnComparator;

    fn tree_of(values: &[i32]) -> OrderedTree<i32> {
        let mut tree = OrderedTree::new();
        for &v in values {
            tree.insert(v);
        }
        tree
    }

    fn in_order(tree: &OrderedTree<i32>) -> Vec<i32> {
        let mut out = vec![];
        tree.in_order(|v| out.push(*v));
        out
    }

    #[test]
    fn empty_tree() {
        let tree: OrderedTree<i32> = OrderedTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert!(!tree.contains(&1));
        assert_eq!(in_order(&tree), Vec::<i32>::new());
    }

    #[test]
    fn traversal_orders() {
        let tree = tree_of(&[50, 6, 25, 1]);

        let mut pre = vec![];
        tree.pre_order(|v| pre.push(*v));
        let mut post = vec![];
        tree.post_order(|v| post.push(*v));

        assert_eq!(pre, [50, 6, 1, 25]);
        assert_eq!(in_order(&tree), [1, 6, 25, 50]);
        assert_eq!(post, [1, 25, 6, 50]);

        insta::assert_snapshot!(tree.to_dot(), @r###"
        digraph {
          node [shape=circle];
          n0 [label="50"];
          n1 [label="6"];
          n2 [label="1"];
          n3 [label="25"];
          n1 -> n2 [label="L"];
          n1 -> n3 [label="R"];
          n0 -> n1 [label="L"];
        }
        "###);
    }

    #[test]
    fn search() {
        let tree = tree_of(&[50, 6, 25, 1]);
        for v in [1, 6, 25, 50] {
            assert!(tree.contains(&v), "{v}");
        }
        for v in [0, 20, 49, 51] {
            assert!(!tree.contains(&v), "{v}");
        }
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut tree = OrderedTree::new();
        assert!(tree.insert(50));
        assert!(tree.insert(6));
        let before = tree.to_dot();

        assert!(!tree.insert(50));
        assert!(!tree.insert(6));
        assert_eq!(tree.len(), 2);
        assert_eq!(in_order(&tree), [6, 50]);
        assert_eq!(tree.to_dot(), before);
        assert!(tree.contains(&50));
        assert!(tree.contains(&6));
    }

    #[test]
    fn random_insertion_order_yields_sorted() {
        let mut rng = StdRng::seed_from_u64(0x7ee);
        for len in [1, 2, 3, 10, 77, 300] {
            let mut values = (0..len).map(|v| v * 3 - 100).collect_vec();
            values.shuffle(&mut rng);
            let tree = tree_of(&values);
            assert_eq!(tree.len(), values.len());
            let expected = values.iter().copied().sorted().collect_vec();
            assert_eq!(in_order(&tree), expected);
        }
    }

    #[test]
    fn sorted_insertion_degenerates() {
        let tree = tree_of(&(0..64).collect_vec());
        assert_eq!(tree.height(), 64);
    }

    #[test]
    fn clone_is_deep_and_keeps_shape() {
        let original = tree_of(&[8, 3, 10, 1, 6, 14]);
        let mut copy = original.clone();
        assert_eq!(copy.to_dot(), original.to_dot());

        copy.insert(7);
        assert!(copy.contains(&7));
        assert!(!original.contains(&7));
        assert_eq!(in_order(&original), [1, 3, 6, 8, 10, 14]);

        let mut original = original;
        original.clear();
        assert!(original.is_empty());
        assert_eq!(in_order(&copy), [1, 3, 6, 7, 8, 10, 14]);
    }

    #[test]
    fn custom_comparator() {
        let mut tree = OrderedTree::with_comparator(FnComparator(|a: &i32, b: &i32| b.cmp(a)));
        for v in [2, 9, 4] {
            tree.insert(v);
        }
        let mut out = vec![];
        tree.in_order(|v| out.push(*v));
        assert_eq!(out, [9, 4, 2]);
        assert_eq!(format!("{tree:?}"), "{9, 4, 2}");
    }

    #[test]
    fn visitor_accumulates_captured_state() {
        let tree = tree_of(&[5, 2, 8, 1, 9]);
        let mut evens = 0;
        let mut total = 0;
        tree.in_order(|v| {
            total += v;
            if v % 2 == 0 {
                evens += 1;
            }
        });
        assert_eq!((evens, total), (2, 25));
    }
}

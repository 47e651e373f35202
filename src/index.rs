use crate::{
    balanced::{build_from_unsorted, BuildReport},
    record::{AtmosLog, AtmosRecord, RecordOrder},
    tree::OrderedTree,
    year_index::YearIndex,
};

pub type RecordTree = OrderedTree<AtmosRecord, RecordOrder>;

/// The two query structures built from a loaded log: a balanced tree over
/// every distinct record and the records grouped by year.
#[derive(Debug, Clone)]
pub struct AtmosIndex {
    pub tree: RecordTree,
    pub years: YearIndex,
}

impl AtmosIndex {
    /// Groups `log` by year in load order, then sorts a copy and builds the
    /// tree from it. Records equal under [`RecordOrder`] appear once in the
    /// tree; the year groups keep all of them.
    pub fn build(log: &AtmosLog) -> Self {
        let years = YearIndex::from_log(log);
        let (tree, BuildReport { inserted, duplicates }) = build_from_unsorted(log, RecordOrder);
        tracing::info!(
            inserted,
            duplicates,
            height = tree.height(),
            years = years.num_keys(),
            "built record index"
        );
        Self { tree, years }
    }
}

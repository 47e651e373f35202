//! Monthly statistics over atmosphere sensor logs.
//!
//! Records are kept in a growable [`sequence::Sequence`], sorted with a
//! stable merge sort, and indexed both by year and by a balanced
//! [`tree::OrderedTree`] that is walked in order to collect paired samples.

pub mod balanced;
pub mod collect;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod menu;
pub mod merge;
pub mod order;
pub mod record;
pub mod report;
pub mod sequence;
pub mod sort;
pub mod stats;
pub mod tree;
pub mod year_index;

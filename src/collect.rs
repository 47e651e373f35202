//! Filtering records into measurement samples.
//!
//! A [`Collector`] is an explicit accumulator handed to a tree traversal
//! through a closure, so each query starts from a fresh value.

use crate::{
    order::Comparator,
    record::{AtmosLog, AtmosRecord, Month},
    sequence::Sequence,
    tree::OrderedTree,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    Speed,
    Temperature,
    SolarRad,
}

impl Measurement {
    /// The reading, or `None` when it is missing or below the solar threshold.
    pub fn of(self, record: &AtmosRecord) -> Option<f32> {
        match self {
            Measurement::Speed => record.speed(),
            Measurement::Temperature => record.temperature(),
            Measurement::SolarRad => record.solar_rad(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pair {
    SpeedTemp,
    SpeedSolar,
    TempSolar,
}

impl Pair {
    pub fn measurements(self) -> (Measurement, Measurement) {
        use Measurement::*;
        match self {
            Pair::SpeedTemp => (Speed, Temperature),
            Pair::SpeedSolar => (Speed, SolarRad),
            Pair::TempSolar => (Temperature, SolarRad),
        }
    }
}

/// Paired samples from records of one month where both readings are valid.
/// `xs[i]` and `ys[i]` always come from the same record.
#[derive(Debug, Clone)]
pub struct Collector {
    month: Month,
    pair: Pair,
    xs: Sequence<f32>,
    ys: Sequence<f32>,
}

impl Collector {
    pub fn new(month: Month, pair: Pair) -> Self {
        Self {
            month,
            pair,
            xs: Sequence::new(),
            ys: Sequence::new(),
        }
    }

    pub fn visit(&mut self, record: &AtmosRecord) {
        if !self.month.contains(record) {
            return;
        }
        let (x, y) = self.pair.measurements();
        if let (Some(x), Some(y)) = (x.of(record), y.of(record)) {
            self.xs.push(x);
            self.ys.push(y);
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn xs(&self) -> &[f32] {
        self.xs.as_slice()
    }

    pub fn ys(&self) -> &[f32] {
        self.ys.as_slice()
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Walks `tree` in order, collecting `pair` samples for `month` across every
/// year.
pub fn collect_pair<C>(tree: &OrderedTree<AtmosRecord, C>, month: Month, pair: Pair) -> Collector
where
    C: Comparator<AtmosRecord>,
{
    let mut collector = Collector::new(month, pair);
    tree.in_order(|record| collector.visit(record));
    collector
}

/// Valid readings of `measurement` in `month`, in log order.
pub fn gather(log: &AtmosLog, month: Month, measurement: Measurement) -> Sequence<f32> {
    log.iter()
        .filter(|r| month.contains(r))
        .filter_map(|r| measurement.of(r))
        .collect()
}

//! One timestamped sample from an atmosphere log and its total order.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::{order::Comparator, sequence::Sequence};

/// Stored in place of a measurement the log did not provide.
pub const MISSING: f32 = -1.0;

/// Solar radiation below this many W/m² is not counted as a sample.
pub const SOLAR_THRESHOLD: f32 = 100.0;

/// Floats closer than this compare equal when ordering records.
pub const FIELD_TOLERANCE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosRecord {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Wind speed, m/s.
    pub speed: f32,
    /// Air temperature, degrees C.
    pub temperature: f32,
    /// Solar radiation, W/m².
    pub solar_rad: f32,
}

pub type AtmosLog = Sequence<AtmosRecord>;

impl AtmosRecord {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn speed(&self) -> Option<f32> {
        (self.speed != MISSING).then_some(self.speed)
    }

    pub fn temperature(&self) -> Option<f32> {
        (self.temperature != MISSING).then_some(self.temperature)
    }

    pub fn solar_rad(&self) -> Option<f32> {
        (self.solar_rad >= SOLAR_THRESHOLD).then_some(self.solar_rad)
    }
}

/// A calendar month, 1 (January) to 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u32);

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Month {
    pub fn new(number: u32) -> Option<Self> {
        (1..=12).contains(&number).then_some(Self(number))
    }

    pub fn number(self) -> u32 {
        self.0
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.0 as usize - 1]
    }

    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }

    pub fn contains(self, record: &AtmosRecord) -> bool {
        record.month() == self.0
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn tolerance_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < FIELD_TOLERANCE
}

fn cmp_tolerant(a: f32, b: f32) -> Ordering {
    if tolerance_eq(a, b) {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Date, then time, then speed, temperature and solar radiation, each float
/// compared with [`tolerance_eq`]. Two records are equal when no field differs
/// beyond the tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordOrder;

impl Comparator<AtmosRecord> for RecordOrder {
    fn compare(&self, a: &AtmosRecord, b: &AtmosRecord) -> Ordering {
        a.date
            .cmp(&b.date)
            .then_with(|| a.time.cmp(&b.time))
            .then_with(|| cmp_tolerant(a.speed, b.speed))
            .then_with(|| cmp_tolerant(a.temperature, b.temperature))
            .then_with(|| cmp_tolerant(a.solar_rad, b.solar_rad))
    }
}

#[cfg(test)]
pub(crate) fn rec(
    (day, month, year): (u32, u32, i32),
    (hour, minute): (u32, u32),
    speed: f32,
    temperature: f32,
    solar_rad: f32,
) -> AtmosRecord {
    AtmosRecord {
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
        speed,
        temperature,
        solar_rad,
    }
}

//! Console and CSV renderings of the monthly statistics.
//!
//! Wind speeds are stored in m/s and reported in km/h. Solar radiation is
//! sampled every ten minutes in W/m², so the monthly total is reported as
//! kWh/m².

use std::{fmt, fs, path::Path};

use crate::{
    collect::{collect_pair, gather, Measurement, Pair},
    error::{ReportError, StatsError},
    order::Comparator,
    record::{AtmosLog, AtmosRecord, Month},
    stats::{mean, mean_absolute_deviation, pearson, sample_std_dev, total},
    tree::OrderedTree,
    year_index::YearIndex,
};

const KMH_PER_MS: f32 = 3.6;
const SAMPLE_HOURS: f32 = 10.0 / 60.0;
const WATTS_PER_KILOWATT: f32 = 1000.0;

/// One decimal place, or `N/A` when the statistic is undefined.
struct Fixed1(Option<f32>);

impl fmt::Display for Fixed1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:.1}"),
            None => f.write_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Summary {
    mean: f32,
    std_dev: Option<f32>,
    mad: f32,
}

impl Summary {
    fn of(samples: &[f32], scale: f32) -> Option<Self> {
        Some(Self {
            mean: mean(samples)? * scale,
            std_dev: sample_std_dev(samples).map(|sd| sd * scale),
            mad: mean_absolute_deviation(samples)? * scale,
        })
    }
}

/// Average wind speed and its spread for one month of one year.
pub struct WindReport<'a> {
    pub years: &'a YearIndex,
    pub month: Month,
    pub year: i32,
}

impl fmt::Display for WindReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { years, month, year } = *self;
        let speeds = years
            .get(&year)
            .map(|log| gather(log, month, Measurement::Speed))
            .unwrap_or_default();
        match Summary::of(speeds.as_slice(), KMH_PER_MS) {
            Some(s) => {
                writeln!(f, "{month} {year}:")?;
                writeln!(f, "Average Speed: {:.1} km/h", s.mean)?;
                writeln!(f, "Sample stddev: {}", Fixed1(s.std_dev))
            }
            None => writeln!(f, "{month} {year}: No Data"),
        }
    }
}

/// Average air temperature and its spread for each month of one year.
pub struct TemperatureReport<'a> {
    pub years: &'a YearIndex,
    pub year: i32,
}

impl fmt::Display for TemperatureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.year)?;
        let log = self.years.get(&self.year);
        for month in Month::all() {
            let temps = log
                .map(|log| gather(log, month, Measurement::Temperature))
                .unwrap_or_default();
            match Summary::of(temps.as_slice(), 1.0) {
                Some(s) => writeln!(
                    f,
                    "{month}: average: {:.1} degrees C, stddev: {}",
                    s.mean,
                    Fixed1(s.std_dev)
                )?,
                None => writeln!(f, "{month}: No Data")?,
            }
        }
        Ok(())
    }
}

/// Sample Pearson correlation between each pair of measurements for one
/// month across every year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationReport {
    pub month: Month,
    pub speed_temp: f32,
    pub speed_solar: f32,
    pub temp_solar: f32,
}

impl CorrelationReport {
    pub fn new<C>(tree: &OrderedTree<AtmosRecord, C>, month: Month) -> Result<Self, StatsError>
    where
        C: Comparator<AtmosRecord>,
    {
        let coefficient = |pair| {
            let collected = collect_pair(tree, month, pair);
            pearson(collected.xs(), collected.ys())
        };
        Ok(Self {
            month,
            speed_temp: coefficient(Pair::SpeedTemp)?,
            speed_solar: coefficient(Pair::SpeedSolar)?,
            temp_solar: coefficient(Pair::TempSolar)?,
        })
    }
}

impl fmt::Display for CorrelationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sample Pearson Correlation Coefficient for {}", self.month)?;
        writeln!(f, "S_T: {:.2}", self.speed_temp)?;
        writeln!(f, "S_R: {:.2}", self.speed_solar)?;
        writeln!(f, "T_R: {:.2}", self.temp_solar)
    }
}

/// Monthly wind, temperature and solar figures for one year, as CSV.
///
/// Each month with any data becomes
/// `Month,speed(sd, mad),temperature(sd, mad),solar` with empty fields for
/// measurements that month lacks.
pub struct ExportReport<'a> {
    pub years: &'a YearIndex,
    pub year: i32,
}

impl ExportReport<'_> {
    fn month_row(log: &AtmosLog, month: Month) -> Option<String> {
        let speed = gather(log, month, Measurement::Speed);
        let temp = gather(log, month, Measurement::Temperature);
        let solar = gather(log, month, Measurement::SolarRad);
        if speed.is_empty() && temp.is_empty() && solar.is_empty() {
            return None;
        }

        let summary = |samples: &[f32], scale| {
            Summary::of(samples, scale)
                .map(|s| format!("{:.1}({}, {:.1})", s.mean, Fixed1(s.std_dev), s.mad))
                .unwrap_or_default()
        };
        let solar = if solar.is_empty() {
            String::new()
        } else {
            format!(
                "{:.1}",
                total(solar.as_slice()) * SAMPLE_HOURS / WATTS_PER_KILOWATT
            )
        };
        Some(format!(
            "{month},{},{},{solar}",
            summary(speed.as_slice(), KMH_PER_MS),
            summary(temp.as_slice(), 1.0),
        ))
    }

    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        fs::write(path, self.to_string()).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), year = self.year, "exported monthly statistics");
        Ok(())
    }
}

impl fmt::Display for ExportReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.year)?;
        let rows: Vec<String> = match self.years.get(&self.year) {
            Some(log) => Month::all()
                .filter_map(|month| Self::month_row(log, month))
                .collect(),
            None => vec![],
        };
        if rows.is_empty() {
            return writeln!(f, "No Data");
        }
        for row in rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

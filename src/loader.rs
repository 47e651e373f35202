//! Reading atmosphere logs from CSV files.
//!
//! A data directory holds a source list naming one CSV file per line. Each
//! CSV file has a header row; the columns `WAST` (`d/m/yyyy H:MM`), `S`
//! (wind speed), `T` (temperature) and `SR` (solar radiation) may appear in
//! any position among other columns. Empty or `N/A` measurements are stored
//! as [`MISSING`].

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::Path,
};

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::{
    error::LoadError,
    record::{AtmosLog, AtmosRecord, MISSING},
};

/// Positions of the required columns within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub wast: usize,
    pub speed: usize,
    pub temperature: usize,
    pub solar_rad: usize,
}

impl Columns {
    /// Finds the required columns by exact name. `None` if any is absent.
    pub fn from_header(header: &str) -> Option<Self> {
        let (mut wast, mut speed, mut temperature, mut solar_rad) = (None, None, None, None);
        for (i, name) in header.split(',').enumerate() {
            match name {
                "WAST" => wast = Some(i),
                "S" => speed = Some(i),
                "T" => temperature = Some(i),
                "SR" => solar_rad = Some(i),
                _ => {}
            }
        }
        Some(Self {
            wast: wast?,
            speed: speed?,
            temperature: temperature?,
            solar_rad: solar_rad?,
        })
    }
}

/// Parses one data row. Rows without a timestamp yield `Ok(None)`.
pub fn parse_row(row: &str, columns: &Columns, line: usize) -> Result<Option<AtmosRecord>, LoadError> {
    let fields: Vec<&str> = row.split(',').collect();
    let field = |i: usize| fields.get(i).copied().unwrap_or("");

    let wast = field(columns.wast).trim();
    if wast.is_empty() {
        return Ok(None);
    }

    let parse_error = |message: String| LoadError::Parse { line, message };

    let (date, time) = wast
        .split_once(' ')
        .ok_or_else(|| parse_error(format!("timestamp {wast:?} has no time part")))?;
    let date = NaiveDate::parse_from_str(date, "%d/%m/%Y")
        .map_err(|e| parse_error(format!("bad date {date:?}: {e}")))?;
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|e| parse_error(format!("bad time {time:?}: {e}")))?;

    let measurement = |name: &str, i: usize| -> Result<f32, LoadError> {
        let raw = field(i).trim();
        if raw.is_empty() || raw == "N/A" {
            return Ok(MISSING);
        }
        raw.parse()
            .map_err(|e| parse_error(format!("bad {name} value {raw:?}: {e}")))
    };

    Ok(Some(AtmosRecord {
        date,
        time,
        speed: measurement("S", columns.speed)?,
        temperature: measurement("T", columns.temperature)?,
        solar_rad: measurement("SR", columns.solar_rad)?,
    }))
}

/// Appends every record of one CSV stream to `log`, returning how many were
/// added. Rows that fail to parse are skipped with a warning.
pub fn read_records(reader: impl BufRead, path: &Path, log: &mut AtmosLog) -> Result<usize, LoadError> {
    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut lines = reader.lines();
    let header = match lines.next() {
        Some(header) => header.map_err(io_error)?,
        None => String::new(),
    };
    let columns = Columns::from_header(&header).ok_or_else(|| LoadError::MissingColumns {
        path: path.to_path_buf(),
    })?;
    tracing::debug!(path = %path.display(), ?columns, "found columns");

    let mut added = 0;
    for (i, row) in lines.enumerate() {
        let row = row.map_err(io_error)?;
        // header is line 1
        match parse_row(&row, &columns, i + 2) {
            Ok(Some(record)) => {
                log.push(record);
                added += 1;
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(path = %path.display(), "skipping row: {e}"),
        }
    }
    Ok(added)
}

/// Loads every file named in `data_dir/list_name`. Unreadable files and files
/// without the required columns are skipped with a warning; only a missing
/// source list is an error.
pub fn load_from_source_list(data_dir: &Path, list_name: &str) -> Result<AtmosLog, LoadError> {
    let list_path = data_dir.join(list_name);
    let list = File::open(&list_path).map_err(|source| LoadError::SourceList {
        path: list_path.clone(),
        source,
    })?;

    let mut log = AtmosLog::new();
    for name in BufReader::new(list).lines() {
        let name = name.map_err(|source| LoadError::Io {
            path: list_path.clone(),
            source,
        })?;
        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        let path = data_dir.join(name);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(path = %path.display(), "unable to open input file: {e}");
                continue;
            }
        };
        match read_records(BufReader::new(file), &path, &mut log) {
            Ok(added) => tracing::info!(path = %path.display(), added, "loaded log file"),
            Err(e) => tracing::warn!("{e}"),
        }
    }

    tracing::info!(records = log.len(), "finished loading");
    Ok(log)
}

pub fn write_records(mut out: impl Write, records: &AtmosLog) -> io::Result<()> {
    writeln!(out, "Date,Time,Speed,Temperature,Solar Radiation")?;
    for r in records {
        writeln!(
            out,
            "{}/{}/{},{}:{},{},{},{}",
            r.date.day(),
            r.date.month(),
            r.date.year(),
            r.time.hour(),
            r.time.minute(),
            r.speed,
            r.temperature,
            r.solar_rad
        )?;
    }
    Ok(())
}

//! The interactive console loop.
//!
//! Input is read a line at a time. Prompts repeat until they get a usable
//! answer, and end of input at any prompt ends the session cleanly.

use std::io::{self, BufRead, Write};

use crate::{
    config::Config,
    error::MenuError,
    index::AtmosIndex,
    record::Month,
    report::{CorrelationReport, ExportReport, TemperatureReport, WindReport},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Wind,
    Temperature,
    Correlation,
    Export,
    Exit,
}

impl Choice {
    fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(Choice::Wind),
            "2" => Some(Choice::Temperature),
            "3" => Some(Choice::Correlation),
            "4" => Some(Choice::Export),
            "5" => Some(Choice::Exit),
            _ => None,
        }
    }
}

struct Console<R, W> {
    lines: io::Lines<R>,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, MenuError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        Ok(self.lines.next().transpose()?)
    }

    fn month(&mut self) -> Result<Option<Month>, MenuError> {
        while let Some(answer) = self.ask("Enter the month (1-12): ")? {
            if let Some(month) = answer.trim().parse().ok().and_then(Month::new) {
                return Ok(Some(month));
            }
        }
        Ok(None)
    }

    fn year(&mut self) -> Result<Option<i32>, MenuError> {
        while let Some(answer) = self.ask("Enter the year: ")? {
            if let Ok(year) = answer.trim().parse() {
                return Ok(Some(year));
            }
        }
        Ok(None)
    }

    fn show_menu(&mut self, export_file: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "1. Wind Speed Average and Standard Deviation for a Specified Month and Year"
        )?;
        writeln!(
            self.out,
            "2. Air Temperature Average and Standard Deviation for Each Month in a Specified Year"
        )?;
        writeln!(
            self.out,
            "3. Sample Pearson Correlation Coefficients for a Specified Month (Across All Years)"
        )?;
        writeln!(
            self.out,
            "4. Export monthly Wind, Temperature & Solar Radiation stats for a Specified Year to {export_file}"
        )?;
        writeln!(self.out, "5. Exit")
    }
}

/// Runs the menu until the user picks exit or `input` ends.
pub fn run(
    index: &AtmosIndex,
    config: &Config,
    input: impl BufRead,
    output: impl Write,
) -> Result<(), MenuError> {
    let mut console = Console {
        lines: input.lines(),
        out: output,
    };

    loop {
        console.show_menu(&config.export_file)?;
        let Some(answer) = console.ask("Option: ")? else {
            break;
        };
        writeln!(console.out)?;

        let Some(choice) = Choice::parse(&answer) else {
            writeln!(console.out, "Invalid option")?;
            continue;
        };
        tracing::debug!(?choice, "menu option");

        match choice {
            Choice::Exit => break,
            Choice::Wind => {
                let Some(month) = console.month()? else { break };
                let Some(year) = console.year()? else { break };
                let report = WindReport {
                    years: &index.years,
                    month,
                    year,
                };
                write!(console.out, "{report}")?;
            }
            Choice::Temperature => {
                let Some(year) = console.year()? else { break };
                let report = TemperatureReport {
                    years: &index.years,
                    year,
                };
                write!(console.out, "{report}")?;
            }
            Choice::Correlation => {
                let Some(month) = console.month()? else { break };
                write!(console.out, "{}", CorrelationReport::new(&index.tree, month)?)?;
            }
            Choice::Export => {
                let Some(year) = console.year()? else { break };
                let path = config.export_path();
                let report = ExportReport {
                    years: &index.years,
                    year,
                };
                match report.write_to(&path) {
                    Ok(()) => writeln!(console.out, "Wrote {year} to {}", path.display())?,
                    Err(err) => {
                        tracing::error!(%err, "export failed");
                        writeln!(console.out, "Unable to open outfile")?;
                    }
                }
            }
        }
        writeln!(console.out)?;
    }
    console.out.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::{run, Choice};
    use crate::{
        config::Config,
        index::AtmosIndex,
        record::{rec, AtmosLog},
    };

    fn index() -> AtmosIndex {
        let log: AtmosLog = [
            rec((1, 1, 2016), (9, 0), 5.0, 20.0, 600.0),
            rec((1, 1, 2016), (9, 10), 7.0, 24.0, 1200.0),
            rec((1, 2, 2016), (9, 0), 3.0, 25.0, 800.0),
        ]
        .into_iter()
        .collect();
        AtmosIndex::build(&log)
    }

    fn config(dir: &Path) -> Config {
        Config {
            data_dir: dir.to_path_buf(),
            source_list: "data_source.txt".into(),
            export_file: "WindTempSolar.csv".into(),
        }
    }

    fn session(index: &AtmosIndex, config: &Config, script: &str) -> String {
        let mut out = vec![];
        run(index, config, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Output with the menu listing removed.
    fn transcript(output: &str) -> String {
        output
            .lines()
            .filter(|l| !l.starts_with(|c: char| ('1'..='5').contains(&c)))
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn choices() {
        assert_eq!(Choice::parse(" 3 "), Some(Choice::Correlation));
        assert_eq!(Choice::parse("6"), None);
        assert_eq!(Choice::parse("one"), None);
    }

    #[test]
    fn wind_with_month_retry() {
        let dir = tempfile::tempdir().unwrap();
        let index = index();
        let out = session(&index, &config(dir.path()), "1\n0\nx\n1\n2016\n5\n");
        insta::assert_snapshot!(transcript(&out), @r###"
        Option:
        Enter the month (1-12): Enter the month (1-12): Enter the month (1-12): Enter the year: January 2016:
        Average Speed: 21.6 km/h
        Sample stddev: 5.1

        Option:
        "###);
    }

    #[test]
    fn invalid_option_then_eof() {
        let dir = tempfile::tempdir().unwrap();
        let index = index();
        let out = session(&index, &config(dir.path()), "9\nabc\n");
        assert_eq!(out.matches("Invalid option").count(), 2);
        assert_eq!(out.matches("5. Exit").count(), 3);
    }

    #[test]
    fn eof_inside_prompt_ends_session() {
        let dir = tempfile::tempdir().unwrap();
        let index = index();
        let out = session(&index, &config(dir.path()), "2\n");
        assert!(out.ends_with("Enter the year: "));
    }

    #[test]
    fn temperature_and_correlation() {
        let dir = tempfile::tempdir().unwrap();
        let index = index();
        let out = session(&index, &config(dir.path()), "2\n2016\n3\n1\n5\n");
        assert!(out.contains("January: average: 22.0 degrees C, stddev: 2.8\n"));
        assert!(out.contains("February: average: 25.0 degrees C, stddev: N/A\n"));
        assert!(out.contains("Sample Pearson Correlation Coefficient for January\nS_T: 1.00\n"));
    }

    #[test]
    fn export_writes_into_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let index = index();
        let config = config(dir.path());
        let out = session(&index, &config, "4\n2016\n5\n");
        assert!(out.contains("Wrote 2016 to "));
        let written = std::fs::read_to_string(config.export_path()).unwrap();
        assert_eq!(written.lines().next(), Some("2016"));
        assert_eq!(written.lines().count(), 3);
    }

    #[test]
    fn export_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let index = index();
        let mut config = config(dir.path());
        config.export_file = "missing/WindTempSolar.csv".into();
        let out = session(&index, &config, "4\n2016\n5\n");
        assert!(out.contains("Unable to open outfile"));
    }
}

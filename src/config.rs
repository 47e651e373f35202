//! Command line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "atmos-log", about = "Monthly statistics over atmosphere sensor logs")]
pub struct Config {
    /// Directory holding the source list and the CSV logs it names
    #[arg(long, env = "ATMOS_LOG_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// File inside the data directory listing one CSV log per line
    #[arg(long, env = "ATMOS_LOG_SOURCE_LIST", default_value = "data_source.txt")]
    pub source_list: String,

    /// File inside the data directory the export option writes
    #[arg(long, env = "ATMOS_LOG_EXPORT_FILE", default_value = "WindTempSolar.csv")]
    pub export_file: String,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.data_dir.is_dir() {
            return Err(ConfigError::MissingDataDir(self.data_dir.clone()));
        }
        Ok(())
    }

    pub fn export_path(&self) -> PathBuf {
        self.data_dir.join(&self.export_file)
    }
}

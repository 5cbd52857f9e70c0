use crate::core::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "csv-filter")]
#[command(about = "Stream a CSV file through a per-row transform to stdout")]
pub struct CliConfig {
    /// Input CSV file; the first line is the header row
    #[arg(default_value = "data.csv")]
    pub input: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &Path {
        &self.input
    }
}

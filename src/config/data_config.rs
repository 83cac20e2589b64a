//! Snapshot location parsing from environment variables.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "data/etf_data.json";

/// Data source environment configuration
#[derive(Debug, Clone)]
pub struct DataEnvConfig {
    pub data_path: PathBuf,
}

impl Default for DataEnvConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl DataEnvConfig {
    pub fn from_env() -> Self {
        Self {
            data_path: env::var("ETF_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH)),
        }
    }
}

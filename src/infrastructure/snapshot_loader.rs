use crate::domain::errors::SnapshotError;
use crate::domain::market::instrument::{Instrument, Snapshot, TickerEntry};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Accepted top-level shapes of the snapshot file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSnapshot {
    Bare(Vec<Instrument>),
    Wrapped {
        #[serde(default)]
        etfs: Vec<Instrument>,
        #[serde(default, rename = "tickerTape")]
        ticker_tape: Vec<TickerEntry>,
    },
}

impl From<RawSnapshot> for Snapshot {
    fn from(raw: RawSnapshot) -> Self {
        match raw {
            RawSnapshot::Bare(instruments) => Snapshot::new(instruments, Vec::new()),
            RawSnapshot::Wrapped { etfs, ticker_tape } => Snapshot::new(etfs, ticker_tape),
        }
    }
}

/// Reads the static market snapshot produced by the offline data job
pub struct SnapshotLoader;

impl SnapshotLoader {
    pub fn load(path: impl AsRef<Path>) -> Result<Snapshot, SnapshotError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let snapshot = Self::parse(&content)?;
        info!(
            "Loaded snapshot from {:?}: {} instruments, {} ticker entries",
            path,
            snapshot.instruments.len(),
            snapshot.ticker_tape.len()
        );
        Ok(snapshot)
    }

    pub fn parse(content: &str) -> Result<Snapshot, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(content)?;
        Ok(raw.into())
    }
}

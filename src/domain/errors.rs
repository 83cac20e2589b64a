use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the static market snapshot.
///
/// The derived-data core itself never fails; only the loader does.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot JSON: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_formatting() {
        let error = SnapshotError::Io {
            path: PathBuf::from("data/etf_data.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };

        let msg = error.to_string();
        assert!(msg.contains("data/etf_data.json"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: SnapshotError = source.into();
        assert!(error.to_string().starts_with("Invalid snapshot JSON"));
    }
}

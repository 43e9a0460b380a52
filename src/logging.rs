//! Logger setup.
//!
//! The interactive UI owns the terminal, so records go either to a file
//! or nowhere. Non-interactive commands log to stderr.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::{Error, Result};

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Whether any logger should be installed at all.
pub fn enabled(log_file: Option<&Path>, interactive: bool) -> bool {
    !interactive || log_file.is_some()
}

/// Install the global logger.
///
/// An explicit `level` wins over `RUST_LOG`, which wins over
/// [`DEFAULT_FILTER`]. Interactive runs without a log file install
/// nothing, so every record is dropped.
pub fn init(level: Option<&str>, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    if !enabled(log_file, interactive) {
        return Ok(());
    }

    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level {
        builder.parse_filters(level);
    }

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactive_without_file_is_disabled() {
        assert!(!enabled(None, true));
        assert!(init(Some("debug"), None, true).is_ok());
    }

    #[test]
    fn interactive_with_file_is_enabled() {
        assert!(enabled(Some(Path::new("/tmp/interview-prep.log")), true));
    }

    #[test]
    fn non_interactive_always_enabled() {
        assert!(enabled(None, false));
    }

    #[test]
    fn unwritable_log_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("log.txt");
        let err = init(None, Some(&path), true).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}

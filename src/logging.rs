use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

use crate::error::LoggingError;

pub const LOG_FILE: &str = "reflex.log";

/// Where the TUI writes its log; the terminal itself is busy drawing.
/// Platforms without a state dir use the local data dir.
pub fn default_log_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "reflex")?;
    let dir = dirs.state_dir().unwrap_or_else(|| dirs.data_local_dir());
    Some(dir.join(LOG_FILE))
}

/// Send tracing output to `path` (appending). `RUST_LOG` overrides the
/// default `info` filter.
pub fn init_file_logging(path: &Path) -> Result<(), LoggingError> {
    let io = |source: std::io::Error| LoggingError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(LoggingError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn creates_log_file_and_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state").join(LOG_FILE);

        // another test may already own the global subscriber; the file still appears
        let _ = init_file_logging(&path);

        assert!(path.exists());
    }

    #[test]
    fn unusable_path_reports_where_it_failed() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join(LOG_FILE);

        let err = init_file_logging(&path).unwrap_err();

        assert_matches!(&err, LoggingError::Io { path: p, .. } if p == &path);
        assert!(err.to_string().contains("not-a-dir"));
    }

    #[test]
    fn default_log_path_names_the_log_file() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with(Path::new("reflex").join(LOG_FILE)));
        }
    }
}

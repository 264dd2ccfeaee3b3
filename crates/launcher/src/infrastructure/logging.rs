//! Structured logging setup.
//!
//! Two `tracing-subscriber` layers are installed:
//!
//! - a human-readable layer on stderr, filtered by `RUST_LOG` or the
//!   configured log level;
//! - an ERROR-only layer without ANSI colours, appended to `errors.log` in
//!   the config directory.  This is the file the UI's error log view reads
//!   back through the store.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::filter::{LevelFilter, ParseError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter, Layer};

use super::settings::LauncherSettings;
use super::storage::{ensure_dir, StoreError, ERROR_LOG_FILE_NAME};

/// Error type for logging initialisation.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The config directory could not be created.
    #[error(transparent)]
    Dir(#[from] StoreError),

    /// The error log could not be opened for appending.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The log level directive is not a valid filter.
    #[error("invalid log level: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber was already installed.
    #[error("logging already initialised: {0}")]
    Init(#[from] TryInitError),
}

/// Opens `<dir>/errors.log` for appending, creating it if needed.
///
/// # Errors
///
/// Returns [`LoggingError::Open`] if the file cannot be opened.
pub fn open_error_log(dir: &Path) -> Result<File, LoggingError> {
    let path = dir.join(ERROR_LOG_FILE_NAME);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::Open { path, source })
}

/// Layer that writes ERROR events, one per line, to `file`.
pub fn error_file_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_filter(LevelFilter::ERROR)
}

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides `settings.log_level` when set.
///
/// # Errors
///
/// Fails if the config directory or error log cannot be opened, if the
/// level directive does not parse, or if a subscriber is already installed.
pub fn init(settings: &LauncherSettings) -> Result<(), LoggingError> {
    ensure_dir(&settings.config_dir)?;
    let file = open_error_log(&settings.config_dir)?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.log_level)?,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_filter(filter))
        .with(error_file_layer(file))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tracing::{error, info, warn};
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("launcher_logging_{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_open_error_log_appends_to_existing_file() {
        // Arrange
        let dir = temp_dir();
        fs::write(dir.join(ERROR_LOG_FILE_NAME), "old line\n").unwrap();

        // Act
        {
            use std::io::Write;
            let mut file = open_error_log(&dir).expect("open");
            writeln!(file, "new line").unwrap();
        }

        // Assert
        let body = fs::read_to_string(dir.join(ERROR_LOG_FILE_NAME)).unwrap();
        assert_eq!(body, "old line\nnew line\n");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_error_file_layer_only_records_errors() {
        // Arrange
        let dir = temp_dir();
        let file = open_error_log(&dir).expect("open");
        let subscriber = tracing_subscriber::registry().with(error_file_layer(file));

        // Act
        tracing::subscriber::with_default(subscriber, || {
            info!("routine startup");
            warn!("slow disk");
            error!("config write failed");
        });

        // Assert
        let body = fs::read_to_string(dir.join(ERROR_LOG_FILE_NAME)).unwrap();
        assert_eq!(body.lines().count(), 1);
        assert!(body.contains("config write failed"));
        assert!(!body.contains('\u{1b}'), "no ANSI escapes in the file");
        fs::remove_dir_all(&dir).ok();
    }
}

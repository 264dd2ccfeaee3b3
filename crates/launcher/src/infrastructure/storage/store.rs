//! JSON-file persistence for the game registry, plus read access to the
//! diagnostic error log.
//!
//! Both files live in one configuration directory:
//!
//! ```text
//! <config dir>/
//!   config.json   registry document, replaced whole on every write
//!   errors.log    append-only diagnostics, written by the logging layer
//! ```
//!
//! # Lifecycle
//!
//! A [`JsonStore`] starts out [`StoreState::Uninitialized`].  [`Store::load`]
//! creates the directory and a default document if needed and moves the
//! store to [`StoreState::Ready`].  Every other operation returns
//! [`StoreError::NotLoaded`] until then.
//!
//! # Concurrency
//!
//! Writes hold a per-store mutex for the whole serialize + replace sequence,
//! so two writes never interleave.  Reads take no lock.  The new document is
//! written to a sibling temporary file and renamed over `config.json`, so a
//! read racing a write sees either the old or the new document in full.
//! Nothing here coordinates across processes.

use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use launcher_core::Config;
use thiserror::Error;
use tracing::{debug, info};

/// File name of the registry document inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// File name of the diagnostic log inside the config directory.
pub const ERROR_LOG_FILE_NAME: &str = "errors.log";

/// Permission bits for the config directory on unix.
#[cfg(unix)]
pub const DIR_MODE: u32 = 0o755;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An operation other than `load` was called on an uninitialized store.
    #[error("store used before load()")]
    NotLoaded,

    /// The config document or the error log does not exist.
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },

    /// A file system I/O error occurred.
    #[error("I/O error accessing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not valid JSON for the registry schema.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory document could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Observable lifecycle state of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Uninitialized,
    Ready,
}

/// Persistence port consumed by the registry service.
///
/// The production implementation is [`JsonStore`]; unit tests use the
/// generated `MockStore`.
#[cfg_attr(test, mockall::automock)]
pub trait Store: Send + Sync {
    /// Ensures the config directory and document exist.  Called once at
    /// startup, before anything else.
    fn load(&self) -> Result<(), StoreError>;

    /// Reads and parses the full document from disk.  Never cached.
    fn read(&self) -> Result<Config, StoreError>;

    /// Replaces the document on disk with `config`.
    fn write(&self, config: &Config) -> Result<(), StoreError>;

    /// Returns up to `line_count` most recent lines of the error log, oldest
    /// first.
    fn get_errors(&self, line_count: usize) -> Result<Vec<String>, StoreError>;
}

/// Creates `dir` (and any missing parents) with the store's directory mode.
///
/// Succeeds without changes if the directory already exists.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<(), StoreError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(dir).map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// [`Store`] backed by `config.json` and `errors.log` in one directory.
pub struct JsonStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
    loaded: AtomicBool,
}

impl JsonStore {
    /// Creates an uninitialized store rooted at `dir`.  Touches nothing on
    /// disk until [`Store::load`].
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
            loaded: AtomicBool::new(false),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }

    pub fn error_log_path(&self) -> PathBuf {
        self.dir.join(ERROR_LOG_FILE_NAME)
    }

    pub fn state(&self) -> StoreState {
        if self.loaded.load(Ordering::Acquire) {
            StoreState::Ready
        } else {
            StoreState::Uninitialized
        }
    }

    fn ensure_ready(&self) -> Result<(), StoreError> {
        match self.state() {
            StoreState::Ready => Ok(()),
            StoreState::Uninitialized => Err(StoreError::NotLoaded),
        }
    }

    fn write_unchecked(&self, config: &Config) -> Result<(), StoreError> {
        // The guard protects no data, so a poisoned lock is still usable.
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let body = serde_json::to_vec_pretty(config).map_err(StoreError::Serialize)?;

        let path = self.config_path();
        let tmp = path.with_extension("json.tmp");
        if let Err(source) = fs::write(&tmp, &body) {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::Io { path: tmp, source });
        }
        if let Err(source) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::Io { path, source });
        }

        debug!(path = %path.display(), games = config.games.len(), "config written");
        Ok(())
    }
}

impl Store for JsonStore {
    fn load(&self) -> Result<(), StoreError> {
        ensure_dir(&self.dir)?;

        let path = self.config_path();
        let exists = path.try_exists().map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        if !exists {
            info!(path = %path.display(), "no config found, writing default");
            self.write_unchecked(&Config::default())?;
        }

        self.loaded.store(true, Ordering::Release);
        Ok(())
    }

    fn read(&self) -> Result<Config, StoreError> {
        self.ensure_ready()?;

        let path = self.config_path();
        let body = fs::read(&path).map_err(|e| StoreError::io(&path, e))?;
        serde_json::from_slice(&body).map_err(|source| StoreError::Parse { path, source })
    }

    fn write(&self, config: &Config) -> Result<(), StoreError> {
        self.ensure_ready()?;
        self.write_unchecked(config)
    }

    fn get_errors(&self, line_count: usize) -> Result<Vec<String>, StoreError> {
        self.ensure_ready()?;

        let path = self.error_log_path();
        let file = File::open(&path).map_err(|e| StoreError::io(&path, e))?;
        let mut reader = BufReader::new(file);

        // Only the last `line_count` lines are kept; older ones fall off the
        // front as the file is scanned.
        let mut window: VecDeque<String> = VecDeque::with_capacity(line_count.min(1024));
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| StoreError::io(&path, e))?;
            if n == 0 {
                break;
            }
            if line_count == 0 {
                continue;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            // A lone CR before EOF is a line ending too.
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
            if window.len() == line_count {
                window.pop_front();
            }
            window.push_back(String::from_utf8_lossy(&buf).into_owned());
        }

        Ok(window.into())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! UI bridge: exposes the registry service to the launcher's presentation
//! layer.
//!
//! The UI owns one execution context and calls into [`ConfigBridge`]
//! synchronously.  Every operation except [`ConfigBridge::get_error_log`]
//! runs to completion on the caller's thread and only touches local disk.
//!
//! # Operations
//!
//! | UI call                  | Returns          | On failure             |
//! |--------------------------|------------------|------------------------|
//! | `add_game()`             | nothing          | n/a                    |
//! | `upsert_game(body)`      | `bool`           | logged, `false`        |
//! | `delete_game(id)`        | nothing          | logged                 |
//! | `move_game(from, to)`    | `bool`           | logged, `false`        |
//! | `persist_game_model()`   | `bool`           | logged, `false`        |
//! | `get_error_log()`        | task handle      | logged, not published  |
//!
//! Only operations with a boolean contract tell the caller anything went
//! wrong; no structured error detail crosses into the UI.
//!
//! # Observable state
//!
//! The error log text is published on a `tokio::sync::watch` channel.  The
//! UI can poll [`ConfigBridge::error_log`] or hold a receiver from
//! [`ConfigBridge::subscribe_error_log`] and redraw on `changed()`.  Each
//! publish replaces the whole string in one step; overlapping fetches race
//! and the last one to finish wins.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use launcher_core::{Game, UpdateGameRequest};
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::application::manage_games::GameService;

/// Number of error log lines fetched by [`ConfigBridge::get_error_log`].
pub const ERROR_LOG_LINES: usize = 25;

/// Errors raised while decoding UI requests.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The upsert body was not a JSON game object.
    #[error("malformed game payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Decodes the JSON body of an upsert request.
///
/// # Errors
///
/// Returns [`BridgeError::InvalidPayload`] if `body` is not valid JSON or is
/// missing the `id` field.
pub fn parse_update_request(body: &str) -> Result<UpdateGameRequest, BridgeError> {
    Ok(serde_json::from_str(body)?)
}

/// Joins log lines into one block, each line followed by `'\n'`.
pub fn join_log_lines(lines: &[String]) -> String {
    let mut text = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// Decrements the in-flight counter when a fetch ends, even by panic.
struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self(Arc::clone(counter))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Request/response surface the UI binds to.
pub struct ConfigBridge {
    service: Arc<dyn GameService>,
    runtime: Handle,
    error_log: Arc<watch::Sender<String>>,
    fetches_in_flight: Arc<AtomicUsize>,
}

impl ConfigBridge {
    /// Creates a bridge over `service`.  Background fetches are spawned on
    /// `runtime`'s blocking pool.
    pub fn new(service: Arc<dyn GameService>, runtime: Handle) -> Self {
        let (error_log, _) = watch::channel(String::new());
        Self {
            service,
            runtime,
            error_log: Arc::new(error_log),
            fetches_in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Launcher version shown in the UI footer.
    pub fn build_version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// The game list model, in display order.
    pub fn games(&self) -> Vec<Game> {
        self.service.games()
    }

    /// Inserts a blank game into the live model.
    pub fn add_game(&self) {
        let game = self.service.add_game();
        debug!(id = %game.id, "add_game");
    }

    /// Inserts or updates the game described by the JSON `body`.
    ///
    /// Returns `true` only if the body decoded and the change was persisted.
    pub fn upsert_game(&self, body: &str) -> bool {
        let request = match parse_update_request(body) {
            Ok(r) => r,
            Err(e) => {
                error!("upsert_game: {e}");
                return false;
            }
        };

        match self.service.upsert_game(request) {
            Ok(()) => true,
            Err(e) => {
                error!("upsert_game: {e}");
                false
            }
        }
    }

    /// Deletes the game with `id`.  Unknown ids are ignored.
    pub fn delete_game(&self, id: &str) {
        if let Err(e) = self.service.delete_game(id) {
            error!(id, "delete_game: {e}");
        }
    }

    /// Moves a game in the list and persists the new order.
    pub fn move_game(&self, from: usize, to: usize) -> bool {
        if let Err(e) = self.service.move_game(from, to) {
            error!(from, to, "move_game: {e}");
            return false;
        }
        self.persist_game_model()
    }

    /// Flushes the live model to disk.
    pub fn persist_game_model(&self) -> bool {
        match self.service.persist_game_model() {
            Ok(()) => true,
            Err(e) => {
                error!("persist_game_model: {e}");
                false
            }
        }
    }

    /// Starts a background fetch of the last [`ERROR_LOG_LINES`] log lines and
    /// returns immediately.
    ///
    /// On success the joined text replaces the error log slot.  On failure
    /// nothing is published.  The returned handle may be dropped; the fetch
    /// still runs to completion.
    pub fn get_error_log(&self) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let slot = Arc::clone(&self.error_log);
        let guard = InFlight::enter(&self.fetches_in_flight);

        self.runtime.spawn_blocking(move || {
            let _guard = guard;
            match service.error_log(ERROR_LOG_LINES) {
                Ok(lines) => {
                    slot.send_replace(join_log_lines(&lines));
                }
                Err(e) => debug!("error log unavailable: {e}"),
            }
        })
    }

    /// Current contents of the error log slot.
    pub fn error_log(&self) -> String {
        self.error_log.borrow().clone()
    }

    /// Receiver notified each time the error log slot is replaced.
    pub fn subscribe_error_log(&self) -> watch::Receiver<String> {
        self.error_log.subscribe()
    }

    /// `true` while at least one error log fetch is running.
    pub fn errors_loading(&self) -> bool {
        self.fetches_in_flight.load(Ordering::Acquire) > 0
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

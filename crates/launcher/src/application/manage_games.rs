//! ManageGamesUseCase: the registry service behind the launcher's game list.
//!
//! [`GameService`] is the contract the UI bridge talks to.
//! [`GameRegistryService`] implements it on top of a [`Store`]:
//!
//! ```text
//! UI bridge ──► GameService ──► GameModel (memory)
//!                    │
//!                    └────────► Store::write (disk)
//! ```
//!
//! # Persistence rules
//!
//! | Operation            | Model        | Disk                         |
//! |----------------------|--------------|------------------------------|
//! | `add_game`           | append blank | untouched                    |
//! | `upsert_game`        | update/add   | written                      |
//! | `delete_game`        | remove       | written if something removed |
//! | `move_game`          | reorder      | untouched                    |
//! | `persist_game_model` | unchanged    | written                      |
//!
//! The model lock is held across the write so the document on disk always
//! matches a state the model actually passed through.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use launcher_core::{Game, GameModel, UpdateGameRequest};
use thiserror::Error;
use tracing::{debug, info};

use crate::infrastructure::storage::{Store, StoreError};

/// Errors returned by the registry service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was well-formed JSON but semantically unusable.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Reading or writing the registry document failed.
    #[error("persistence failed: {0}")]
    Store(#[from] StoreError),
}

/// Registry service contract consumed by the UI bridge.
#[cfg_attr(test, mockall::automock)]
pub trait GameService: Send + Sync {
    /// Snapshot of the live model in display order.
    fn games(&self) -> Vec<Game>;

    /// Appends a blank game to the model and returns it.  Not persisted.
    fn add_game(&self) -> Game;

    /// Updates the game with `request.id`, or appends it, then persists.
    fn upsert_game(&self, request: UpdateGameRequest) -> Result<(), ServiceError>;

    /// Removes the game with `id` and persists.  Unknown ids succeed.
    fn delete_game(&self, id: &str) -> Result<(), ServiceError>;

    /// Moves a game within the list without persisting.
    fn move_game(&self, from: usize, to: usize) -> Result<(), ServiceError>;

    /// Writes the current model to disk.
    fn persist_game_model(&self) -> Result<(), ServiceError>;

    /// Returns up to `line_count` most recent error log lines.
    fn error_log(&self, line_count: usize) -> Result<Vec<String>, ServiceError>;
}

/// [`GameService`] backed by a [`Store`].
pub struct GameRegistryService {
    store: Arc<dyn Store>,
    model: Mutex<GameModel>,
}

impl GameRegistryService {
    /// Seeds the model from the store's current document.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] if the document cannot be read.  The
    /// store must already be loaded.
    pub fn new(store: Arc<dyn Store>) -> Result<Self, ServiceError> {
        let config = store.read()?;
        info!(games = config.games.len(), "game registry loaded");
        Ok(Self {
            store,
            model: Mutex::new(GameModel::from(config)),
        })
    }

    fn model(&self) -> MutexGuard<'_, GameModel> {
        self.model.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, model: &GameModel) -> Result<(), ServiceError> {
        self.store.write(&model.to_config())?;
        Ok(())
    }
}

impl GameService for GameRegistryService {
    fn games(&self) -> Vec<Game> {
        self.model().games().to_vec()
    }

    fn add_game(&self) -> Game {
        let game = Game::new_blank();
        self.model().push(game.clone());
        debug!(id = %game.id, "blank game added");
        game
    }

    fn upsert_game(&self, request: UpdateGameRequest) -> Result<(), ServiceError> {
        if request.id.trim().is_empty() {
            return Err(ServiceError::Validation("game id must not be empty".into()));
        }
        if request.instances == 0 {
            return Err(ServiceError::Validation(format!(
                "game {} must launch at least one instance",
                request.id
            )));
        }

        let mut model = self.model();
        let updated = model.upsert(&request);
        debug!(id = %request.id, updated, "game upserted");
        self.persist(&model)
    }

    fn delete_game(&self, id: &str) -> Result<(), ServiceError> {
        let mut model = self.model();
        if !model.remove(id) {
            debug!(id, "delete of unknown game ignored");
            return Ok(());
        }
        debug!(id, "game deleted");
        self.persist(&model)
    }

    fn move_game(&self, from: usize, to: usize) -> Result<(), ServiceError> {
        self.model()
            .move_game(from, to)
            .map_err(|e| ServiceError::Validation(e.to_string()))
    }

    fn persist_game_model(&self) -> Result<(), ServiceError> {
        let model = self.model();
        self.persist(&model)
    }

    fn error_log(&self, line_count: usize) -> Result<Vec<String>, ServiceError> {
        Ok(self.store.get_errors(line_count)?)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

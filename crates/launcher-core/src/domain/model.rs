//! GameModel: the ordered, in-memory list that backs the UI game list.
//!
//! The model is the launcher's working copy of the registry.  The UI edits it
//! through the registry service; the service then persists it as a
//! [`Config`] document.
//!
//! # Vec choice
//!
//! Unlike a keyed registry, list order here is user-visible (it is the order
//! games appear in the launcher) and the user can drag entries around, so the
//! model is a `Vec<Game>` and lookups are linear.  Registries hold a handful of
//! entries, so O(n) lookup is irrelevant.

use thiserror::Error;

use super::config::Config;
use super::game::{Game, UpdateGameRequest};

/// Errors raised by model operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A reorder index pointed past the end of the list.
    #[error("index {index} out of range for {len} games")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered list of games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameModel {
    games: Vec<Game>,
}

impl GameModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a game at the end of the list.
    pub fn push(&mut self, game: Game) {
        self.games.push(game);
    }

    /// Updates the entry with `request.id` in place, or appends a new entry.
    ///
    /// Returns `true` when an existing entry was updated.
    pub fn upsert(&mut self, request: &UpdateGameRequest) -> bool {
        match self.games.iter_mut().find(|g| g.id == request.id) {
            Some(existing) => {
                existing.apply(request);
                true
            }
            None => {
                self.games.push(Game::from(request.clone()));
                false
            }
        }
    }

    /// Removes the entry with `id`.  Returns `false` if nothing matched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.games.len();
        self.games.retain(|g| g.id != id);
        self.games.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Returns the games in display order.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Moves the game at `from` so it ends up at index `to`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IndexOutOfRange`] if either index is past the end.
    pub fn move_game(&mut self, from: usize, to: usize) -> Result<(), ModelError> {
        let len = self.games.len();
        for index in [from, to] {
            if index >= len {
                return Err(ModelError::IndexOutOfRange { index, len });
            }
        }
        let game = self.games.remove(from);
        self.games.insert(to, game);
        Ok(())
    }

    /// Snapshot of the model as a persistable document.
    pub fn to_config(&self) -> Config {
        Config::new(self.games.clone())
    }
}

impl From<Config> for GameModel {
    fn from(config: Config) -> Self {
        Self {
            games: config.games,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: &str, location: &str) -> UpdateGameRequest {
        UpdateGameRequest {
            id: id.to_string(),
            location: location.to_string(),
            instances: 1,
            maphack: false,
            override_bh_cfg: false,
            hd: false,
            flags: Vec::new(),
        }
    }

    fn ids(model: &GameModel) -> Vec<String> {
        model.games().iter().map(|g| g.id.clone()).collect()
    }

    #[test]
    fn test_model_starts_empty() {
        let model = GameModel::new();
        assert!(model.is_empty());
        assert_eq!(model.len(), 0);
    }

    #[test]
    fn test_upsert_appends_unknown_id() {
        let mut model = GameModel::new();
        let updated = model.upsert(&request("a", "/a"));
        assert!(!updated);
        assert_eq!(model.get("a").unwrap().location, "/a");
    }

    #[test]
    fn test_upsert_updates_existing_entry_without_reordering() {
        // Arrange
        let mut model = GameModel::new();
        model.upsert(&request("a", "/a"));
        model.upsert(&request("b", "/b"));
        model.upsert(&request("c", "/c"));

        // Act
        let updated = model.upsert(&request("b", "/b2"));

        // Assert
        assert!(updated);
        assert_eq!(ids(&model), ["a", "b", "c"]);
        assert_eq!(model.get("b").unwrap().location, "/b2");
    }

    #[test]
    fn test_remove_existing_returns_true() {
        let mut model = GameModel::new();
        model.upsert(&request("a", "/a"));
        assert!(model.remove("a"));
        assert!(model.get("a").is_none());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut model = GameModel::new();
        model.upsert(&request("a", "/a"));
        assert!(!model.remove("zzz"));
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_move_game_forward_and_back() {
        // Arrange
        let mut model = GameModel::new();
        for id in ["a", "b", "c", "d"] {
            model.upsert(&request(id, ""));
        }

        // Act / Assert
        model.move_game(0, 2).unwrap();
        assert_eq!(ids(&model), ["b", "c", "a", "d"]);
        model.move_game(3, 0).unwrap();
        assert_eq!(ids(&model), ["d", "b", "c", "a"]);
    }

    #[test]
    fn test_move_game_out_of_range_is_rejected() {
        let mut model = GameModel::new();
        model.upsert(&request("a", ""));
        assert_eq!(
            model.move_game(0, 1),
            Err(ModelError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(ids(&model), ["a"]);
    }

    #[test]
    fn test_to_config_and_back_preserves_order() {
        let mut model = GameModel::new();
        model.push(Game::new_blank());
        model.push(Game::new_blank());
        let restored = GameModel::from(model.to_config());
        assert_eq!(restored, model);
    }
}

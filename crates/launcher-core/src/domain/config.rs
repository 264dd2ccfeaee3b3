//! The persisted registry document.
//!
//! [`Config`] is written to `config.json` as a single JSON object:
//!
//! ```json
//! { "games": [ { "id": "...", "location": "...", ... } ] }
//! ```
//!
//! An empty registry is an empty `games` array, never a missing file.  The
//! storage adapter treats the value as opaque and serializes it faithfully.

use serde::{Deserialize, Serialize};

use super::game::Game;

/// Full registry document stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Game entries in display order.
    #[serde(default)]
    pub games: Vec<Game>,
}

impl Config {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }
}

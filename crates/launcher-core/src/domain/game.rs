//! Game installation records.
//!
//! A [`Game`] describes one local installation the launcher can start: where
//! it lives on disk, how many copies to open, and which optional add-ons are
//! enabled.  Every entry carries a string identifier that is unique within
//! the registry.  Uniqueness is enforced by the registry service, not here.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "id": "2f1c7c9e-5a43-4b2e-9d7e-0c4f3b8a1d22",
//!   "location": "C:\\Games\\Diablo II",
//!   "instances": 2,
//!   "maphack": true,
//!   "override_bh_cfg": false,
//!   "hd": false,
//!   "flags": ["-w", "-skiptobnet"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a game entry.
///
/// Kept as a plain string: the UI round-trips it verbatim and older documents
/// may contain identifiers that are not UUIDs.
pub type GameId = String;

fn default_instances() -> u32 {
    1
}

/// One registry entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    /// Unique identifier within the registry.
    pub id: GameId,
    /// Installation directory.
    #[serde(default)]
    pub location: String,
    /// Number of game windows to open on launch.
    #[serde(default = "default_instances")]
    pub instances: u32,
    /// Whether the maphack add-on is installed for this copy.
    #[serde(default)]
    pub maphack: bool,
    /// Whether the launcher's BH config replaces the user's own.
    #[serde(default)]
    pub override_bh_cfg: bool,
    /// Whether the HD mod is enabled.
    #[serde(default)]
    pub hd: bool,
    /// Extra command line flags passed to the game executable.
    #[serde(default)]
    pub flags: Vec<String>,
}

impl Game {
    /// Creates an empty entry with a fresh v4 UUID.
    ///
    /// This is what the UI's "add game" button inserts before the user fills
    /// in a location.
    pub fn new_blank() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            location: String::new(),
            instances: default_instances(),
            maphack: false,
            override_bh_cfg: false,
            hd: false,
            flags: Vec::new(),
        }
    }

    /// Overwrites every editable field with the values from `request`.
    ///
    /// The identifier is left untouched.
    pub fn apply(&mut self, request: &UpdateGameRequest) {
        self.location = request.location.clone();
        self.instances = request.instances;
        self.maphack = request.maphack;
        self.override_bh_cfg = request.override_bh_cfg;
        self.hd = request.hd;
        self.flags = request.flags.clone();
    }
}

/// Payload sent by the UI to insert or update a game.
///
/// Only `id` is required; every other field falls back to the same default a
/// blank game would have.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateGameRequest {
    pub id: GameId,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_instances")]
    pub instances: u32,
    #[serde(default)]
    pub maphack: bool,
    #[serde(default)]
    pub override_bh_cfg: bool,
    #[serde(default)]
    pub hd: bool,
    #[serde(default)]
    pub flags: Vec<String>,
}

impl From<UpdateGameRequest> for Game {
    fn from(r: UpdateGameRequest) -> Self {
        Self {
            id: r.id,
            location: r.location,
            instances: r.instances,
            maphack: r.maphack,
            override_bh_cfg: r.override_bh_cfg,
            hd: r.hd,
            flags: r.flags,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

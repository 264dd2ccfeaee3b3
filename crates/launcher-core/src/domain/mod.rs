//! Domain entities for the game launcher registry.
//!
//! Pure data and ordering rules; no I/O.  Outer layers (storage, bridge,
//! binary) depend on these types, never the other way round.

/// Installation records and the UI update payload.
pub mod game;

/// The persisted registry document.
pub mod config;

/// Ordered in-memory list of games backing the UI.
pub mod model;

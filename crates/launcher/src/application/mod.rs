//! Application layer use cases for the launcher.
//!
//! Use cases in this layer orchestrate domain objects to fulfil a user goal
//! and depend on abstractions (the [`crate::infrastructure::storage::Store`]
//! port) rather than concrete file handling.
//!
//! # Sub-modules
//!
//! - **`manage_games`** – The registry service: keeps the live
//!   [`launcher_core::GameModel`], applies add/upsert/delete/reorder rules and
//!   persists the model through the store.

pub mod manage_games;

//! # launcher-core
//!
//! Shared domain types for the Slash game launcher: the persisted registry
//! document and the ordered in-memory model that backs the UI game list.
//!
//! This crate has zero dependencies on the file system, async runtimes, or UI
//! frameworks.  Persistence lives in the `launcher` crate's storage adapter;
//! everything here can be built and tested in isolation.
//!
//! # Overview
//!
//! - **`domain::game`** – A single installation record ([`Game`]) and the
//!   payload the UI sends to create or update one ([`UpdateGameRequest`]).
//! - **`domain::config`** – The on-disk document ([`Config`]): an ordered list
//!   of games where list order is display order.
//! - **`domain::model`** – [`GameModel`], the live list the UI edits.  It owns
//!   the ordering rules for upsert, delete and drag-to-reorder.

pub mod domain;

pub use domain::config::Config;
pub use domain::game::{Game, GameId, UpdateGameRequest};
pub use domain::model::{GameModel, ModelError};

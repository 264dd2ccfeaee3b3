//! Storage infrastructure: registry persistence and error log access.
//!
//! The `store` sub-module is the only code in the launcher that touches the
//! configuration directory.  It handles:
//!
//! - Creating the directory and a default `config.json` on first run.
//! - Reading and replacing the registry document.
//! - Tail-reading the append-only `errors.log`.

pub mod store;

pub use store::{
    ensure_dir, JsonStore, Store, StoreError, StoreState, CONFIG_FILE_NAME, ERROR_LOG_FILE_NAME,
};

//! Infrastructure layer for the launcher.
//!
//! Contains OS-facing adapters: file-system storage, the UI bridge, logging
//! setup, command line settings, and a headless console front end.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `launcher_core`, but MUST NOT be imported by the `application` or domain
//! layers.  The one exception is the [`storage::store::Store`] port, which the
//! registry service consumes as a trait object.

pub mod console;
pub mod logging;
pub mod settings;
pub mod storage;
pub mod ui_bridge;

//! Slash launcher entry point.
//!
//! Wires the storage adapter, registry service and UI bridge together and
//! hands the bridge to the console front end.
//!
//! # Usage
//!
//! ```text
//! slash-launcher [OPTIONS]
//!
//! Options:
//!   --config-dir <DIR>     Directory holding config.json and errors.log
//!   --log-level  <FILTER>  tracing filter directive [default: info]
//! ```
//!
//! | Variable               | Default              | Description         |
//! |------------------------|----------------------|---------------------|
//! | `LAUNCHER_CONFIG_DIR`  | platform config dir  | Config directory    |
//! | `LAUNCHER_LOG_LEVEL`   | `info`               | Log filter          |
//! | `RUST_LOG`             | unset                | Overrides log level |
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ logging::init()            -- stderr + errors.log layers
//!  └─ JsonStore::load()          -- fatal on failure
//!  └─ GameRegistryService::new() -- seeds the model, fatal on failure
//!  └─ tokio runtime              -- blocking pool for error log fetches
//!  └─ console::run()             -- UI thread, calls the bridge synchronously
//! ```

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use launcher::application::manage_games::GameRegistryService;
use launcher::infrastructure::settings::{LauncherSettings, DEFAULT_LOG_LEVEL};
use launcher::infrastructure::storage::{JsonStore, Store};
use launcher::infrastructure::ui_bridge::ConfigBridge;
use launcher::infrastructure::{console, logging};

/// Slash game launcher.
#[derive(Debug, Parser)]
#[command(
    name = "slash-launcher",
    about = "Manage game installations for the Slash launcher",
    version
)]
struct Cli {
    /// Directory holding `config.json` and `errors.log`.
    ///
    /// Defaults to the platform config directory.
    #[arg(long, env = "LAUNCHER_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// `tracing` filter directive, e.g. `info` or `launcher=debug`.
    #[arg(long, default_value = DEFAULT_LOG_LEVEL, env = "LAUNCHER_LOG_LEVEL")]
    log_level: String,
}

impl Cli {
    fn into_settings(self) -> anyhow::Result<LauncherSettings> {
        Ok(LauncherSettings::resolve(self.config_dir, self.log_level)?)
    }
}

fn main() -> anyhow::Result<()> {
    let settings = Cli::parse().into_settings()?;
    logging::init(&settings).context("failed to initialise logging")?;

    info!(dir = %settings.config_dir.display(), "Slash launcher starting");

    let store = Arc::new(JsonStore::new(&settings.config_dir));
    store.load().context("failed to initialise config store")?;

    let service = GameRegistryService::new(store).context("failed to load game registry")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;

    let bridge = ConfigBridge::new(Arc::new(service), runtime.handle().clone());

    // Print each published error log as it arrives.
    let mut error_log = bridge.subscribe_error_log();
    runtime.spawn(async move {
        while error_log.changed().await.is_ok() {
            let text = error_log.borrow_and_update().clone();
            if text.is_empty() {
                println!("error log is empty");
            } else {
                print!("{text}");
            }
        }
    });

    console::run(&bridge, io::stdin().lock(), io::stdout()).context("console I/O failed")?;

    drop(bridge);
    runtime.shutdown_timeout(Duration::from_secs(1));
    info!("Slash launcher stopped");
    Ok(())
}

//! Property tests for `JsonStore`.
//!
//! Run with: `cargo test --package launcher --test store_properties`

use std::fs;
use std::path::PathBuf;

use launcher::infrastructure::storage::{JsonStore, Store};
use launcher_core::{Config, Game};
use proptest::prelude::*;
use uuid::Uuid;

struct TestDir(PathBuf);

impl TestDir {
    fn new() -> Self {
        Self(std::env::temp_dir().join(format!("launcher_props_{}", Uuid::new_v4())))
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn game() -> impl Strategy<Value = Game> {
    (
        any::<String>(),
        any::<String>(),
        any::<u32>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        proptest::collection::vec(any::<String>(), 0..4),
    )
        .prop_map(
            |(id, location, instances, maphack, override_bh_cfg, hd, flags)| Game {
                id,
                location,
                instances,
                maphack,
                override_bh_cfg,
                hd,
                flags,
            },
        )
}

fn config() -> impl Strategy<Value = Config> {
    proptest::collection::vec(game(), 0..8).prop_map(Config::new)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// Whatever is written comes back unchanged on the next read.
    #[test]
    fn property_write_then_read_returns_same_config(cfg in config()) {
        let dir = TestDir::new();
        let store = JsonStore::new(&dir.0);
        store.load().unwrap();

        store.write(&cfg).unwrap();

        prop_assert_eq!(store.read().unwrap(), cfg);
    }
}
